//! Sound playback for the countdown timer.
//!
//! This module provides the two notification cues (zero crossing and limit
//! reached), including:
//!
//! - File-backed clip playback through rodio
//! - Pre-emption: a new clip silences the previous one
//! - A generated beep when a clip is unconfigured or unusable
//! - A terminal bell when no audio device exists at all
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundPlayer    │ ← Main interface
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   SoundSource    │────▶│  File { path }   │
//! │                  │     ├──────────────────┤
//! │                  │────▶│  Beep (fallback) │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use negative_countdown::sound::{create_player, SoundSource};
//!
//! let player = create_player(false);
//! let source = SoundSource::resolve(Some(Path::new("sounds/zero.wav")));
//! player.play(&source).expect("playback failed");
//! ```

mod beep;
mod error;
mod player;
mod source;

pub use beep::{beep_tone, ring_bell, BEEP_DURATION, BEEP_FREQUENCY_HZ};
pub use error::SoundError;
pub use player::{create_player, RodioSoundPlayer, TerminalBellPlayer};
pub use source::SoundSource;

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays a sound from the given source.
    ///
    /// This method is non-blocking; the sound plays in the background and
    /// pre-empts any clip still sounding.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;

    /// Silences any clip currently sounding.
    fn stop(&self);
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }

    fn stop(&self) {
        RodioSoundPlayer::stop(self)
    }
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Box<P> {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        (**self).play(source)
    }

    fn stop(&self) {
        (**self).stop()
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<SoundSource>>,
    stop_calls: std::sync::atomic::AtomicUsize,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls.lock().unwrap().clone()
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(source.clone());
        Ok(())
    }

    fn stop(&self) {
        self.stop_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}
