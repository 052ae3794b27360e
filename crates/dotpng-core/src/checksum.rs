//! SHA-256 digest of the image as it landed on disk, reported after a run.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DotError, Result};

const BUF_SIZE: usize = 8 * 1024;

/// SHA-256 of a file on disk as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let read_back = |source: std::io::Error| DotError::ReadBack {
        path: path.to_path_buf(),
        source,
    };
    let mut f = File::open(path).map_err(read_back)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).map_err(read_back)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
