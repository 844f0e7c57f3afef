//! Sound source resolution.
//!
//! A configured path becomes either a playable file or the beep fallback.
//! Resolution happens once, when the view is built from the config.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk, already made absolute.
    File {
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// The short fallback tone (or terminal bell without a device).
    Beep,
}

impl SoundSource {
    /// Creates a file source without checking the path.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Resolves a configured clip path.
    ///
    /// Returns `Beep` if no path is configured or the path does not name an
    /// existing regular file. Relative paths are resolved against the
    /// working directory; absolute paths are kept as-is.
    #[must_use]
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Beep;
        };

        if !path.is_file() {
            debug!("Sound file {} not found, using beep", path.display());
            return Self::Beep;
        }

        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self::File { path: absolute }
    }

    /// Returns a short human-readable name for logs.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::File { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Beep => "beep".to_string(),
        }
    }

    /// Returns the file path if this is a file source.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path } => Some(path),
            Self::Beep => None,
        }
    }
}
