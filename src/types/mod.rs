//! Core data types for the countdown timer.
//!
//! This module defines the data structures shared by the engine and the view:
//! - Timer configuration loaded from `config.txt`
//! - Timer phase of the engine's state machine
//! - Snapshot of the engine state used for rendering

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Reset and waiting for Start
    #[default]
    Idle,
    /// Counting down (or into overtime)
    Running,
    /// Frozen at the last computed value
    Paused,
    /// Negative limit reached; only Reset leaves this phase
    Ended,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Ended => "ended",
        }
    }

    /// Returns true if the engine should be ticked.
    pub fn is_running(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }

    /// Returns true if Start would begin (or resume) the countdown.
    pub fn can_start(&self) -> bool {
        matches!(self, TimerPhase::Idle | TimerPhase::Paused)
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Default start duration when no config file is present (0:10).
pub const DEFAULT_START_SECONDS: u64 = 10;

/// Default overtime limit when no config file is present (0:10).
pub const DEFAULT_LIMIT_SECONDS: u64 = 10;

/// Configuration for the countdown timer.
///
/// Immutable once loaded; Reset reuses the same values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Initial positive duration in seconds
    pub start_seconds: u64,
    /// Magnitude of the negative overtime floor in seconds
    pub limit_seconds: u64,
    /// Clip played at the zero crossing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_zero_path: Option<PathBuf>,
    /// Clip played when the limit is reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_limit_path: Option<PathBuf>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            start_seconds: DEFAULT_START_SECONDS,
            limit_seconds: DEFAULT_LIMIT_SECONDS,
            sound_zero_path: None,
            sound_limit_path: None,
        }
    }
}

impl TimerConfig {
    /// Creates a configuration from minute/second pairs without sounds.
    pub fn from_parts(start_min: u32, start_sec: u32, limit_min: u32, limit_sec: u32) -> Self {
        Self {
            start_seconds: to_seconds(start_min, start_sec),
            limit_seconds: to_seconds(limit_min, limit_sec),
            sound_zero_path: None,
            sound_limit_path: None,
        }
    }

    /// Sets the clip played at the zero crossing.
    pub fn with_zero_sound(mut self, path: impl Into<PathBuf>) -> Self {
        self.sound_zero_path = Some(path.into());
        self
    }

    /// Sets the clip played when the limit is reached.
    pub fn with_limit_sound(mut self, path: impl Into<PathBuf>) -> Self {
        self.sound_limit_path = Some(path.into());
        self
    }

    /// Initial remaining time in milliseconds.
    pub fn start_ms(&self) -> i64 {
        seconds_to_ms(self.start_seconds)
    }

    /// Negative floor in milliseconds; never positive.
    pub fn limit_ms(&self) -> i64 {
        -seconds_to_ms(self.limit_seconds)
    }
}

fn to_seconds(minutes: u32, seconds: u32) -> u64 {
    u64::from(minutes) * 60 + u64::from(seconds)
}

fn seconds_to_ms(seconds: u64) -> i64 {
    i64::try_from(seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000)
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// Point-in-time view of the engine used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    /// Displayed remaining time in milliseconds (negative in overtime)
    pub current_ms: i64,
    /// Current phase
    pub phase: TimerPhase,
}

// ============================================================================
// Tests
// ============================================================================
