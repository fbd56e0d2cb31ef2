// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Size-gated file reading.
//!
//! Source files are read whole into memory. Anything above
//! [`MAX_FILE_SIZE`] is rejected before any bytes are read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log about large files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The file content as bytes.
    pub bytes: Vec<u8>,

    /// File size in bytes.
    pub size: u64,
}

impl FileContent {
    /// Convert into a `String`, reporting non-UTF-8 content against `path`.
    pub fn into_string(self, path: &Path) -> Result<String> {
        String::from_utf8(self.bytes).map_err(|_| Error::Encoding {
            path: path.to_path_buf(),
        })
    }
}

/// Size-gated file reader.
pub struct FileReader {
    /// Maximum file size to read.
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new file reader with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    #[cfg(test)]
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
        let size = metadata.len();

        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::io(path, e))?;

        Ok(FileContent { bytes, size })
    }

    /// Peek at the first two bytes for a `#!` marker without reading the file.
    pub fn starts_with_shebang(&self, path: &Path) -> Result<bool> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut magic = [0u8; 2];
        match file.read_exact(&mut magic) {
            Ok(()) => Ok(&magic == b"#!"),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Read a file as UTF-8 text.
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read(path)?.into_string(path)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
