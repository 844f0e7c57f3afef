//! CLI module for the countdown timer.
//!
//! - `commands`: Argument definitions using clap derive
//! - [`print_config`]: `--print-config` output

pub mod commands;

use std::io::Write;

use anyhow::{Context, Result};

pub use commands::Cli;

use crate::types::TimerConfig;

/// Writes `config` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_config(config: &TimerConfig, out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    writeln!(out, "{}", json).context("failed to write config")?;
    Ok(())
}
