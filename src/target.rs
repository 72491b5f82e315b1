use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatchError {
    pub fn path(&self) -> &Path {
        match self {
            PatchError::Read { path, .. } | PatchError::Write { path, .. } => path,
        }
    }
}

/// Reads the whole target file as UTF-8.
pub fn read(path: &Path) -> Result<String, PatchError> {
    fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the target file's contents.
pub fn overwrite(path: &Path, contents: &str) -> Result<(), PatchError> {
    fs::write(path, contents).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends to the end of the target file without touching existing bytes.
pub fn append(path: &Path, contents: &str) -> Result<(), PatchError> {
    let wrap = |source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new().append(true).open(path).map_err(wrap)?;
    file.write_all(contents.as_bytes()).map_err(wrap)
}
