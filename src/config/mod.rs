//! Configuration loading for the countdown timer.
//!
//! The configuration lives in a small line-oriented text file (`config.txt`
//! in the working directory by default). It is read exactly once at startup;
//! Reset does not re-read it.
//!
//! # Format
//!
//! ```text
//! # start time
//! 0     # minutes
//! 10    # seconds
//! # overtime limit
//! 0
//! 10
//! sounds/zero.wav
//! sounds/limit.wav
//! ```
//!
//! # Error Handling
//!
//! Loading never fails. A missing or unreadable file yields
//! [`TimerConfig::default`]; malformed fields fall back individually.

mod error;
mod parser;

use std::path::Path;

use tracing::{debug, warn};

pub use error::ConfigError;
pub use parser::{meaningful_lines, parse_config};

use crate::types::TimerConfig;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read.
pub fn read_config(path: &Path) -> Result<TimerConfig, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Invalid UTF-8 only spoils the line it appears on.
    Ok(parse_config(&String::from_utf8_lossy(&bytes)))
}

/// Loads the config file at `path`, degrading to defaults on any error.
#[must_use]
pub fn load_config(path: &Path) -> TimerConfig {
    match read_config(path) {
        Ok(config) => {
            debug!("Loaded config from {}: {:?}", path.display(), config);
            config
        }
        Err(e) if e.is_missing() => {
            debug!("{}, using defaults", e);
            TimerConfig::default()
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            TimerConfig::default()
        }
    }
}
