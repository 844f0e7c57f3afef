//! Button and keyboard mapping for the timer window.
//!
//! The mapping from timer phase to button state and from key presses to
//! window commands is platform-independent and fully testable. Actual
//! widget drawing happens in the eframe app.

use std::fmt;

use eframe::egui::{Key, Modifiers};

use crate::types::TimerPhase;

// ============================================================================
// StartPauseButton
// ============================================================================

/// Label shown when Start would begin or resume the countdown.
pub const START_LABEL: &str = "Start";

/// Label shown while the countdown runs.
pub const PAUSE_LABEL: &str = "Pause";

/// Label of the reset button.
pub const RESET_LABEL: &str = "Reset";

/// Minimum height of both buttons.
pub const BUTTON_MIN_HEIGHT: f32 = 40.0;

/// Visible state of the Start/Pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPauseButton {
    /// Current label
    pub label: &'static str,
    /// False once the timer has ended
    pub visible: bool,
}

impl StartPauseButton {
    /// Returns the button state for `phase`.
    pub fn for_phase(phase: TimerPhase) -> Self {
        match phase {
            TimerPhase::Idle | TimerPhase::Paused => Self {
                label: START_LABEL,
                visible: true,
            },
            TimerPhase::Running => Self {
                label: PAUSE_LABEL,
                visible: true,
            },
            TimerPhase::Ended => Self {
                label: START_LABEL,
                visible: false,
            },
        }
    }
}

// ============================================================================
// WindowCommand
// ============================================================================

/// Window state changes requested by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    /// Enter (`true`) or leave (`false`) fullscreen
    SetFullscreen(bool),
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowCommand::SetFullscreen(true) => write!(f, "enter fullscreen"),
            WindowCommand::SetFullscreen(false) => write!(f, "leave fullscreen"),
        }
    }
}

/// Returns true for Alt+Enter.
///
/// egui reports both the main Return key and the keypad Enter as
/// [`Key::Enter`].
pub fn is_fullscreen_chord(key: Key, modifiers: Modifiers) -> bool {
    key == Key::Enter && modifiers.alt
}
