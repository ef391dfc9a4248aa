// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file input loading.
//!
//! Files are read in one scoped acquisition; the handle is dropped before
//! the contents are returned, on success and on failure alike.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An input file that could not be opened or read.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct SourceError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

impl SourceError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Path of the input that failed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}

/// Read a file as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, SourceError> {
    let mut file = File::open(path).map_err(|e| SourceError::new(path, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| SourceError::new(path, e))?;
    Ok(data)
}

/// Read a file as UTF-8 text.
///
/// Content that is not valid UTF-8 is reported as an `InvalidData` error.
pub fn read_text(path: &Path) -> Result<String, SourceError> {
    let mut file = File::open(path).map_err(|e| SourceError::new(path, e))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| SourceError::new(path, e))?;
    Ok(text)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
