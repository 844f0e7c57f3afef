//! Timer engine for the countdown timer.
//!
//! This module provides the core timer functionality:
//! - State transitions (Idle → Running ⇄ Paused, Running → Ended)
//! - Drift-free countdown anchored to the wall clock
//! - Edge-triggered events at the zero crossing and at the limit
//!
//! The engine never schedules anything itself. The host calls [`TimerEngine::tick`]
//! roughly every [`TICK_INTERVAL`] while the phase is Running; the remaining
//! time is recomputed from `target_end_epoch_ms − now` on each call, so late
//! or skipped ticks cannot accumulate error.

use std::time::Duration;

use crossbeam_channel::Sender;
use tracing::{debug, trace};

use super::clock::{Clock, SystemClock};
use crate::types::{TimerConfig, TimerPhase, TimerSnapshot};

/// Cadence at which the host should call `tick` while Running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// TimerEvent
// ============================================================================

/// Events emitted by the engine for the view and sound player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The displayed value changed (or must be redrawn after a reset)
    DisplayChanged {
        /// New remaining time in milliseconds
        current_ms: i64,
    },
    /// First tick of this reset cycle at or below zero
    ZeroCrossed,
    /// The negative limit was reached; the engine is now Ended
    LimitReached,
    /// The phase changed
    PhaseChanged {
        /// The new phase
        phase: TimerPhase,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Countdown state machine with an overtime floor.
pub struct TimerEngine<C: Clock = SystemClock> {
    /// Configuration captured at construction
    config: TimerConfig,
    /// Wall-clock source
    clock: C,
    /// Current phase
    phase: TimerPhase,
    /// Displayed remaining time
    current_ms: i64,
    /// Negative floor, always ≤ 0
    limit_ms: i64,
    /// Instant at which `current_ms` reaches zero; set only while Running
    target_end_epoch_ms: Option<i64>,
    /// Latch for the zero crossing, cleared on reset
    zero_sound_fired: bool,
    /// Event sender channel
    event_tx: Sender<TimerEvent>,
}

impl<C: Clock> TimerEngine<C> {
    /// Creates an engine in the Idle phase.
    ///
    /// Emits the initial `DisplayChanged` event.
    pub fn new(config: TimerConfig, clock: C, event_tx: Sender<TimerEvent>) -> Self {
        let mut engine = Self {
            current_ms: config.start_ms(),
            limit_ms: config.limit_ms(),
            config,
            clock,
            phase: TimerPhase::Idle,
            target_end_epoch_ms: None,
            zero_sound_fired: false,
            event_tx,
        };
        engine.reset();
        engine
    }

    /// Returns to Idle with the configured start time.
    ///
    /// Valid from every phase; the only way out of Ended.
    pub fn reset(&mut self) {
        self.target_end_epoch_ms = None;
        self.zero_sound_fired = false;
        self.current_ms = self.config.start_ms();
        self.limit_ms = self.config.limit_ms();
        self.set_phase(TimerPhase::Idle);

        debug!(
            "Timer reset: current_ms={} limit_ms={}",
            self.current_ms, self.limit_ms
        );
        self.emit(TimerEvent::DisplayChanged {
            current_ms: self.current_ms,
        });
    }

    /// Toggles between Running and Idle/Paused. No-op once Ended.
    pub fn start_or_pause(&mut self) {
        match self.phase {
            TimerPhase::Idle | TimerPhase::Paused => {
                self.start();
            }
            TimerPhase::Running => {
                self.pause();
            }
            TimerPhase::Ended => {
                debug!("Timer ended, ignoring start/pause");
            }
        }
    }

    /// Starts or resumes the countdown.
    ///
    /// Returns false (and does nothing) unless the phase is Idle or Paused.
    pub fn start(&mut self) -> bool {
        if !self.phase.can_start() {
            return false;
        }

        let target = self.clock.now_epoch_ms().saturating_add(self.current_ms);
        self.target_end_epoch_ms = Some(target);
        self.set_phase(TimerPhase::Running);

        debug!(
            "Timer started: current_ms={} target_end={}",
            self.current_ms, target
        );
        true
    }

    /// Pauses the countdown, keeping the last ticked value.
    ///
    /// Returns false (and does nothing) unless the phase is Running.
    pub fn pause(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        self.target_end_epoch_ms = None;
        self.set_phase(TimerPhase::Paused);

        debug!("Timer paused at current_ms={}", self.current_ms);
        true
    }

    /// Recomputes the remaining time and evaluates the zero and limit edges.
    ///
    /// Ignored unless Running, so a late tick after pause, reset or the end
    /// cannot change the display.
    pub fn tick(&mut self) {
        let Some(target) = self.target_end_epoch_ms.filter(|_| self.phase.is_running()) else {
            return;
        };

        self.current_ms = target.saturating_sub(self.clock.now_epoch_ms());
        trace!("Tick: current_ms={}", self.current_ms);
        self.emit(TimerEvent::DisplayChanged {
            current_ms: self.current_ms,
        });

        if self.current_ms <= 0 && !self.zero_sound_fired {
            self.zero_sound_fired = true;
            debug!("Zero crossed at current_ms={}", self.current_ms);
            self.emit(TimerEvent::ZeroCrossed);
        }

        if self.current_ms <= self.limit_ms {
            self.current_ms = self.limit_ms;
            self.target_end_epoch_ms = None;
            self.emit(TimerEvent::DisplayChanged {
                current_ms: self.current_ms,
            });
            debug!("Limit reached at {} ms", self.limit_ms);
            self.emit(TimerEvent::LimitReached);
            self.set_phase(TimerPhase::Ended);
        }
    }

    /// Returns the value and phase to render.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            current_ms: self.current_ms,
            phase: self.phase,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Returns the displayed remaining time in milliseconds.
    pub fn current_ms(&self) -> i64 {
        self.current_ms
    }

    /// Returns the negative floor in milliseconds.
    pub fn limit_ms(&self) -> i64 {
        self.limit_ms
    }

    /// Returns true once the zero crossing has fired in this reset cycle.
    pub fn zero_sound_fired(&self) -> bool {
        self.zero_sound_fired
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    fn set_phase(&mut self, phase: TimerPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(TimerEvent::PhaseChanged { phase });
        }
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            trace!("Event receiver dropped, discarding {:?}", event);
        }
    }
}

impl<C: Clock> std::fmt::Debug for TimerEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("phase", &self.phase)
            .field("current_ms", &self.current_ms)
            .field("limit_ms", &self.limit_ms)
            .field("target_end_epoch_ms", &self.target_end_epoch_ms)
            .field("zero_sound_fired", &self.zero_sound_fired)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
