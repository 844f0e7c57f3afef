//! Configuration error types.
//!
//! The loader never surfaces these to the user: every error degrades to the
//! default configuration. They exist so the fallback can be logged with the
//! real cause.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist or cannot be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path that was tried
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns true if the file simply does not exist.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Read { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
        }
    }
}
