//! Error type for the decode-and-write routine.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run. None of these are retried.
#[derive(Debug, Error)]
pub enum DotError {
    /// The data URI has no `,` separating the descriptor from the payload.
    #[error("malformed data URI: no ',' before the payload")]
    MalformedDataUri,

    /// The payload is not valid standard base64.
    #[error("invalid base64 payload")]
    Decode(#[from] base64::DecodeError),

    /// The output directory could not be created, or the path is not a directory.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating, writing, syncing or renaming the output file failed.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The written file could not be read back for its digest.
    #[error("failed to read back {}", path.display())]
    ReadBack {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DotError>;
