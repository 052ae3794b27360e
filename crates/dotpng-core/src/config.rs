//! Fixed values for the pixel writer.
//!
//! There is no config file: the payload and the destination are compiled in.
//! `OutputTarget` exists so the routine can be pointed at a scratch directory.

use std::path::{Path, PathBuf};

/// The embedded image: a 1x1 transparent GIF.
pub const DOT_DATA_URI: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAP7//wAAACH5BAAAAAAALAAAAAABAAEAAAICRAEAOw==";

/// Directory the image is written into, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// File name of the written image.
pub const DEFAULT_FILE_NAME: &str = "dot.png";

/// Where the decoded bytes end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Directory that is created if missing.
    pub dir: PathBuf,
    /// File name inside `dir`; overwritten on every run.
    pub file_name: String,
}

impl OutputTarget {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Same file name as the default, under a different directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, DEFAULT_FILE_NAME)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the output file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_FILE_NAME)
    }
}
