// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

use std::path::PathBuf;

/// sigopt-tools error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid, or a required value is missing
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Rewritten content still failed verification; file left untouched.
    #[error("fix did not work for {}", .path.display())]
    Fix { path: PathBuf },

    /// Python source the built-in rules cannot lint.
    #[error("{}:{line}: {message}", .path.display())]
    Lint {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// External linter could not be started.
    #[error("failed to run `{command}`: {source}")]
    Linter {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Shorthand for an I/O error on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Shorthand for a config error without an associated file.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            path: None,
        }
    }
}

/// Result type using the crate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes shared by all entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every file is compliant (or was fixed)
    Success = 0,
    /// At least one file is non-compliant or could not be processed
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) | Error::Linter { .. } => {
                ExitCode::ConfigError
            }
            Error::Io { .. }
            | Error::Encoding { .. }
            | Error::FileTooLarge { .. }
            | Error::Fix { .. }
            | Error::Lint { .. } => ExitCode::CheckFailed,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
