//! Wall-clock sources for the timer engine.
//!
//! The engine only ever asks "what is the epoch time in milliseconds now?".
//! `SystemClock` answers from the OS clock; `ManualClock` is moved by hand,
//! which makes every timing property testable without sleeping.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

/// A source of wall-clock time in epoch milliseconds.
pub trait Clock {
    /// Returns the current time as milliseconds since the Unix epoch.
    fn now_epoch_ms(&self) -> i64;
}

/// The operating system's wall clock.
///
/// Manual clock adjustments during a run show up one-for-one in the
/// remaining time; they are not compensated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep a handle while the engine
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock reading `start_ms`.
    #[must_use]
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Moves the clock forward (or backward, for negative `ms`).
    pub fn advance(&self, ms: i64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(1_000);
        clock.advance(250);
        assert_eq!(clock.now_epoch_ms(), 1_250);

        clock.advance(-50);
        assert_eq!(clock.now_epoch_ms(), 1_200);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(0);
        let handle = clock.clone();
        handle.advance(3_000);
        assert_eq!(clock.now_epoch_ms(), 3_000);
    }
}
