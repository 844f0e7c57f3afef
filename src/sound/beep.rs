//! The fallback beep.
//!
//! Played when a clip is unconfigured, missing or undecodable. With an audio
//! device it is a short generated tone; without one, the terminal bell.

use std::io::Write;
use std::time::Duration;

use rodio::source::{SineWave, Source};

/// Frequency of the fallback tone.
pub const BEEP_FREQUENCY_HZ: f32 = 880.0;

/// Length of the fallback tone.
pub const BEEP_DURATION: Duration = Duration::from_millis(250);

/// ASCII bell character.
const BELL: &[u8] = b"\x07";

const BEEP_AMPLITUDE: f32 = 0.25;

/// Returns the fallback tone as a rodio source.
pub fn beep_tone() -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(BEEP_FREQUENCY_HZ)
        .take_duration(BEEP_DURATION)
        .amplify(BEEP_AMPLITUDE)
}

/// Writes the terminal bell to `out`.
///
/// # Errors
///
/// Returns the underlying IO error if the write fails.
pub fn ring_bell(out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(BELL)?;
    out.flush()
}
