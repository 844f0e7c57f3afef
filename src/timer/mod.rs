//! The countdown engine and its clocks.
//!
//! [`TimerEngine`] is a polled state machine: it owns no thread and no
//! timer, and does nothing until the host calls `tick()`. That keeps it
//! testable with a [`ManualClock`] and no running UI.

mod clock;
mod engine;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{TimerEngine, TimerEvent, TICK_INTERVAL};
