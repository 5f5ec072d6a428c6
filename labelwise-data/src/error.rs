//! Error types raised while reading product and preference files.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading data files.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening a file or directory failed.
    #[error("failed to open {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading an opened file failed.
    #[error("failed to read {path}")]
    Read {
        /// File being read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file did not hold the expected JSON document.
    #[error("failed to decode JSON in {path}")]
    Decode {
        /// File being decoded.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
