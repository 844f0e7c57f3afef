//! The timer window.
//!
//! This module handles:
//! - Formatting and colouring the remaining time
//! - Scaling the digits to the window size
//! - Mapping phases to button state and Alt+Enter to fullscreen
//! - Hosting the engine and sound cues ([`ViewShell`])
//! - Drawing it all with eframe ([`CountdownApp`])
//!
//! Everything except `app` is free of window-system calls and fully
//! testable.

mod app;
pub mod controls;
pub mod display;
pub mod font;
mod shell;

pub use app::{run_gui, CountdownApp};
pub use controls::{is_fullscreen_chord, StartPauseButton, WindowCommand};
pub use display::{format_time, DisplayColor, DisplayState};
pub use font::{font_point_size, MIN_FONT_POINTS};
pub use shell::ViewShell;

/// Window title.
pub const WINDOW_TITLE: &str = "Negative Countdown Timer";

/// Initial window size in points (width, height).
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
