//! The decode-and-write routine.

use std::path::PathBuf;

use crate::checksum;
use crate::config::OutputTarget;
use crate::data_uri;
use crate::error::Result;
use crate::storage;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// Path of the written file.
    pub path: PathBuf,
    pub bytes_written: u64,
    /// Whether the output directory had to be created.
    pub dir_created: bool,
    /// Lowercase hex SHA-256 of the file as read back after the rename.
    pub sha256: String,
}

/// Decode `uri`, make sure `target.dir` exists, and write the bytes to
/// `target.file_path()`, replacing any existing file. Single attempt.
pub fn emit(uri: &str, target: &OutputTarget) -> Result<EmitReport> {
    let bytes = data_uri::decode(uri)?;
    tracing::debug!(
        descriptor = data_uri::descriptor(uri).unwrap_or_default(),
        len = bytes.len(),
        "decoded payload"
    );

    let dir_created = storage::ensure_dir(target.dir())?;
    let path = target.file_path();
    let bytes_written = storage::write_file(&path, &bytes)?;
    let sha256 = checksum::sha256_path(&path)?;

    tracing::info!(
        path = %path.display(),
        bytes = bytes_written,
        dir_created,
        sha256 = %sha256,
        "wrote image"
    );

    Ok(EmitReport {
        path,
        bytes_written,
        dir_created,
        sha256,
    })
}
