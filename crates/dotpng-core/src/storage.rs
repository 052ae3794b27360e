//! Output directory and file lifecycle.
//!
//! Bytes go to a `.part` sibling first, are synced, and the temp file is
//! renamed over the final name, so the output either holds all the bytes or
//! is left as it was.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{DotError, Result};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Make sure `dir` exists. Returns `true` if it had to be created.
///
/// Existing directories are left alone; an existing file at `dir` is an error.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| DotError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created output directory");
    Ok(true)
}

/// Path for the temp file: appends `.part` to the final path (e.g. `dot.png` -> `dot.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `bytes` to `final_path`, replacing whatever was there.
/// Returns the number of bytes written.
pub fn write_file(final_path: &Path, bytes: &[u8]) -> Result<u64> {
    let tp = temp_path(final_path);
    match write_then_rename(&tp, final_path, bytes) {
        Ok(()) => Ok(bytes.len() as u64),
        Err(source) => {
            if let Err(e) = fs::remove_file(&tp) {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %tp.display(), error = %e, "failed to remove temp file");
                }
            }
            Err(DotError::Write {
                path: final_path.to_path_buf(),
                source,
            })
        }
    }
}

fn write_then_rename(temp_path: &Path, final_path: &Path, bytes: &[u8]) -> io::Result<()> {
    {
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        // closed here, before the rename
    }
    fs::rename(temp_path, final_path)
}
