//! Command-line arguments for the countdown timer.
//!
//! Uses clap derive macro for argument parsing. With no arguments the
//! timer reads `config.txt` from the working directory and opens the window.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_FILE;

// ============================================================================
// CLI Structure
// ============================================================================

/// Negative Countdown Timer - counts down, then into overtime
#[derive(Parser, Debug)]
#[command(
    name = "negative-countdown",
    version,
    about = "Countdown timer that keeps counting past zero",
    long_about = "Counts down from the configured start time, plays a sound at zero, \
                  keeps counting into negative time and stops with a second sound at \
                  the configured limit.\n\nPress Alt+Enter to toggle fullscreen."
)]
pub struct Cli {
    /// Path to the line-oriented config file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Mute both sound cues (including the fallback beep)
    #[arg(long)]
    pub no_sound: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// Tests
// ============================================================================
