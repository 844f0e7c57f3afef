//! Negative Countdown Timer Library
//!
//! This library provides the core functionality of the countdown timer.
//! It includes:
//! - Line-oriented config file loading with per-field defaults
//! - Drift-free timer engine with zero-crossing and limit events
//! - Sound cue playback with beep fallback
//! - View controller and eframe window with dynamic font sizing
//! - CLI argument definitions

pub mod cli;
pub mod config;
pub mod sound;
pub mod timer;
pub mod types;
pub mod view;

// Re-export commonly used types for convenience
pub use types::{TimerConfig, TimerPhase, TimerSnapshot};

// Re-export config loading
pub use config::{load_config, parse_config, read_config, ConfigError, DEFAULT_CONFIG_FILE};

// Re-export timer types
pub use timer::{Clock, ManualClock, SystemClock, TimerEngine, TimerEvent, TICK_INTERVAL};

// Re-export sound types
pub use sound::{create_player, MockSoundPlayer, SoundError, SoundPlayer, SoundSource};

// Re-export view types
pub use view::{
    font_point_size, format_time, CountdownApp, DisplayColor, DisplayState, StartPauseButton,
    ViewShell, WindowCommand,
};
