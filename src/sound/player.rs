//! Sound player implementations.
//!
//! `RodioSoundPlayer` plays clips through the rodio v0.20 audio library.
//! `TerminalBellPlayer` stands in when no audio output device exists.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use rodio::source::SamplesConverter;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

use super::beep::{beep_tone, ring_bell};
use super::error::SoundError;
use super::source::SoundSource;
use super::SoundPlayer;

// ============================================================================
// Clip
// ============================================================================

/// A decoded sound file, converted to the sink's sample type.
type DecodedFile = SamplesConverter<Decoder<BufReader<File>>, f32>;

/// What a cue will actually play, chosen before any device is touched.
pub(crate) enum Clip {
    /// A sound file that opened and decoded
    File(DecodedFile),
    /// The generated fallback tone
    Beep,
}

impl Clip {
    /// Loads the clip for `source`.
    ///
    /// A file that cannot be opened or decoded becomes the beep.
    pub(crate) fn load(source: &SoundSource) -> Result<Self, SoundError> {
        let path = match source {
            SoundSource::File { path } => path,
            SoundSource::Beep => return Ok(Clip::Beep),
        };

        match decode_file(path) {
            Ok(decoded) => Ok(Clip::File(decoded)),
            Err(e) if e.should_fallback_to_beep() => {
                warn!("Failed to play '{}': {}, falling back to beep", path.display(), e);
                Ok(Clip::Beep)
            }
            Err(e) => Err(e),
        }
    }
}

fn decode_file(path: &Path) -> Result<DecodedFile, SoundError> {
    let file = File::open(path)
        .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    let decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| SoundError::DecodeError(e.to_string()))?;

    Ok(decoder.convert_samples::<f32>())
}

// ============================================================================
// RodioSoundPlayer
// ============================================================================

/// A sound player that uses rodio for audio playback.
///
/// At most one clip sounds at a time: every `play` stops the previous sink
/// before starting a new one. Playback is non-blocking.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// The sink of the clip currently sounding, if any.
    current: Mutex<Option<Sink>>,
    /// Set by `--no-sound`; every `play` is skipped.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player on the default output device.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all sound playback will be silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            current: Mutex::new(None),
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Plays a sound from the given source, pre-empting any current clip.
    ///
    /// A file that cannot be opened or decoded falls back to the beep.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be created.
    pub fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Sound playback disabled, skipping {}", source.name());
            return Ok(());
        }

        match Clip::load(source)? {
            Clip::File(decoded) => {
                debug!("Playing sound file: {}", source.name());
                self.play_source(decoded)
            }
            Clip::Beep => {
                debug!("Playing beep");
                self.play_source(beep_tone())
            }
        }
    }

    /// Replaces the current sink with one playing `source`.
    fn play_source<S>(&self, source: S) -> Result<(), SoundError>
    where
        S: Source<Item = f32> + Send + 'static,
    {
        let mut current = self.lock_current();
        if let Some(previous) = current.take() {
            previous.stop();
        }

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;
        sink.set_volume(1.0);
        sink.append(source);
        *current = Some(sink);

        debug!("Sound playback started");
        Ok(())
    }

    /// Silences the clip currently sounding, if any.
    pub fn stop(&self) {
        if let Some(sink) = self.lock_current().take() {
            sink.stop();
            debug!("Sound playback stopped");
        }
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<Sink>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TerminalBellPlayer
// ============================================================================

/// Fallback player used when no audio device is available.
///
/// Every `play` rings the terminal bell on stdout, whatever the source.
#[derive(Debug, Default)]
pub struct TerminalBellPlayer {
    disabled: AtomicBool,
}

impl TerminalBellPlayer {
    /// Creates a bell player.
    #[must_use]
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled: AtomicBool::new(disabled),
        }
    }
}

impl SoundPlayer for TerminalBellPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            return Ok(());
        }
        debug!("No audio device, ringing bell for {}", source.name());
        ring_bell(&mut std::io::stdout().lock())
            .map_err(|e| SoundError::PlaybackError(e.to_string()))
    }

    fn stop(&self) {}
}

/// Creates the best available player.
///
/// Uses rodio when an output device exists, otherwise logs a warning and
/// falls back to the terminal bell.
#[must_use]
pub fn create_player(disabled: bool) -> Box<dyn SoundPlayer> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("Audio not available, using terminal bell: {}", e);
            Box::new(TerminalBellPlayer::new(disabled))
        }
    }
}
