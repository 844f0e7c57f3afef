//! Integration tests for the timer engine.
//!
//! These tests exercise the engine through its public API with a manual
//! clock and check the timing properties over whole reset cycles:
//! - Remaining time follows the wall clock while running, and only then
//! - Reset always restores the configured start and limit
//! - Each edge fires at most once per cycle, zero before limit
//! - The end state is frozen until reset

use crossbeam_channel::{unbounded, Receiver};

use negative_countdown::timer::{ManualClock, TimerEngine, TimerEvent};
use negative_countdown::types::{TimerConfig, TimerPhase};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_engine(
    config: TimerConfig,
) -> (TimerEngine<ManualClock>, ManualClock, Receiver<TimerEvent>) {
    let (tx, rx) = unbounded();
    let clock = ManualClock::new(1_700_000_000_000);
    let engine = TimerEngine::new(config, clock.clone(), tx);
    (engine, clock, rx)
}

fn count(rx: &Receiver<TimerEvent>, wanted: TimerEvent) -> usize {
    rx.try_iter().filter(|e| *e == wanted).count()
}

/// Irregular frame gaps, including stalls far longer than the tick interval.
const JITTERY_FRAMES: [i64; 12] = [50, 48, 53, 120, 7, 50, 900, 51, 49, 2, 333, 50];

// ============================================================================
// Drift
// ============================================================================

#[test]
fn remaining_time_tracks_wall_clock_under_jitter() {
    let (mut engine, clock, _rx) = create_engine(TimerConfig::from_parts(5, 0, 5, 0));
    engine.start();

    let start = engine.current_ms();
    let mut elapsed = 0;
    for _ in 0..20 {
        for gap in JITTERY_FRAMES {
            clock.advance(gap);
            elapsed += gap;
            engine.tick();
            assert_eq!(engine.current_ms(), start - elapsed);
        }
    }
}

#[test]
fn remaining_time_is_non_increasing_while_running() {
    let (mut engine, clock, _rx) = create_engine(TimerConfig::from_parts(0, 5, 0, 5));
    engine.start();

    let mut previous = engine.current_ms();
    for gap in JITTERY_FRAMES.iter().cycle().take(200) {
        clock.advance(*gap);
        engine.tick();
        assert!(engine.current_ms() <= previous);
        previous = engine.current_ms();
    }
}

#[test]
fn paused_time_does_not_count() {
    let (mut engine, clock, _rx) = create_engine(TimerConfig::from_parts(1, 0, 0, 30));
    let mut running_ms = 0;

    for (i, gap) in JITTERY_FRAMES.iter().enumerate() {
        engine.start_or_pause();
        clock.advance(*gap);
        engine.tick();
        if engine.phase() == TimerPhase::Running {
            running_ms += gap;
        }
        assert_eq!(engine.current_ms(), 60_000 - running_ms, "after frame {}", i);
    }
}

#[test]
fn many_pause_cycles_accumulate_no_error() {
    let (mut engine, clock, _rx) = create_engine(TimerConfig::from_parts(0, 30, 0, 30));

    for _ in 0..100 {
        engine.start();
        clock.advance(100);
        engine.tick();
        engine.pause();
        clock.advance(1_000);
    }

    assert_eq!(engine.current_ms(), 30_000 - 100 * 100);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn reset_restores_start_and_limit_from_any_phase() {
    let config = TimerConfig::from_parts(0, 4, 0, 3);

    for steps in 0..4 {
        let (mut engine, clock, _rx) = create_engine(config.clone());
        // steps: 0 = idle, 1 = running, 2 = paused, 3 = ended
        if steps >= 1 {
            engine.start();
            clock.advance(1_000);
            engine.tick();
        }
        if steps == 2 {
            engine.pause();
        }
        if steps == 3 {
            clock.advance(10_000);
            engine.tick();
            assert_eq!(engine.phase(), TimerPhase::Ended);
        }

        engine.reset();

        assert_eq!(engine.phase(), TimerPhase::Idle);
        assert_eq!(engine.current_ms(), 4_000);
        assert_eq!(engine.limit_ms(), -3_000);
        assert!(!engine.zero_sound_fired());
    }
}

// ============================================================================
// Edges
// ============================================================================

#[test]
fn each_edge_fires_at_most_once_per_cycle() {
    let (mut engine, clock, rx) = create_engine(TimerConfig::from_parts(0, 1, 0, 2));
    engine.start();

    for gap in JITTERY_FRAMES.iter().cycle().take(100) {
        clock.advance(*gap);
        engine.tick();
        if *gap > 300 {
            engine.pause();
            engine.start();
        }
    }

    let events: Vec<TimerEvent> = rx.try_iter().collect();
    let zero = events.iter().filter(|e| **e == TimerEvent::ZeroCrossed).count();
    let limit = events.iter().filter(|e| **e == TimerEvent::LimitReached).count();
    assert_eq!(zero, 1);
    assert_eq!(limit, 1);

    let zero_at = events.iter().position(|e| *e == TimerEvent::ZeroCrossed);
    let limit_at = events.iter().position(|e| *e == TimerEvent::LimitReached);
    assert!(zero_at < limit_at);
}

#[test]
fn edges_fire_again_after_reset() {
    let (mut engine, clock, rx) = create_engine(TimerConfig::from_parts(0, 1, 0, 1));

    for _ in 0..3 {
        engine.start();
        clock.advance(2_500);
        engine.tick();
        engine.reset();
    }

    let events: Vec<TimerEvent> = rx.try_iter().collect();
    assert_eq!(events.iter().filter(|e| **e == TimerEvent::ZeroCrossed).count(), 3);
    assert_eq!(events.iter().filter(|e| **e == TimerEvent::LimitReached).count(), 3);
}

#[test]
fn zero_limit_fires_zero_then_limit_in_one_tick() {
    let (mut engine, _clock, rx) = create_engine(TimerConfig::from_parts(0, 0, 0, 0));
    rx.try_iter().for_each(drop);

    engine.start_or_pause();
    engine.tick();

    let events: Vec<TimerEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            TimerEvent::PhaseChanged {
                phase: TimerPhase::Running
            },
            TimerEvent::DisplayChanged { current_ms: 0 },
            TimerEvent::ZeroCrossed,
            TimerEvent::DisplayChanged { current_ms: 0 },
            TimerEvent::LimitReached,
            TimerEvent::PhaseChanged {
                phase: TimerPhase::Ended
            },
        ]
    );
}

// ============================================================================
// End state
// ============================================================================

#[test]
fn ended_state_is_frozen_until_reset() {
    let (mut engine, clock, rx) = create_engine(TimerConfig::from_parts(0, 2, 0, 1));
    engine.start();
    clock.advance(3_200);
    engine.tick();
    assert_eq!(engine.phase(), TimerPhase::Ended);
    assert_eq!(engine.current_ms(), -1_000);
    rx.try_iter().for_each(drop);

    for gap in JITTERY_FRAMES {
        clock.advance(gap);
        engine.tick();
        engine.start_or_pause();
        engine.pause();
    }

    assert_eq!(engine.current_ms(), -1_000);
    assert_eq!(engine.phase(), TimerPhase::Ended);
    assert_eq!(count(&rx, TimerEvent::LimitReached), 0);
}
