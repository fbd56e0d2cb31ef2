// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Copyright + license disclaimer checking.
//!
//! Each target file is read, matched against the rendered disclaimer for
//! its comment syntax, and (with fix-in-place) rewritten atomically. One
//! file's failure never stops the run; everything lands in a
//! [`DisclaimerReport`].

pub mod filetype;
pub mod header;
pub mod template;
pub mod writer;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use filetype::{CommentStyle, Filetype};
pub use header::{DEFAULT_SCAN_LINES, HeaderStatus};
pub use template::{DisclaimerTemplate, YearPolicy};

use crate::error::{Error, ExitCode, Result};
use crate::reader::FileReader;
use crate::verbose::VerboseLogger;
use crate::walker::{FileWalker, WalkStats, WalkerConfig};

/// Immutable settings for one checker run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub template: DisclaimerTemplate,
    pub fix_in_place: bool,
    /// Files, directories, or glob patterns.
    pub targets: Vec<PathBuf>,
    /// Exclude globs.
    pub exclude: Vec<String>,
    /// Body lines searched for "copyright"/"license".
    pub scan_lines: usize,
    /// Ignore zero-byte files.
    pub skip_empty: bool,
}

impl RunConfig {
    pub fn new(template: DisclaimerTemplate, targets: Vec<PathBuf>) -> Self {
        Self {
            template,
            fix_in_place: false,
            targets,
            exclude: Vec::new(),
            scan_lines: DEFAULT_SCAN_LINES,
            skip_empty: false,
        }
    }
}

/// Result for one checked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub filetype: Filetype,
    /// Status before any fix.
    pub status: HeaderStatus,
    pub fixed: bool,
}

impl FileRecord {
    pub fn is_compliant(&self) -> bool {
        self.fixed || self.status == HeaderStatus::PresentCorrect
    }
}

/// A file that could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate outcome of a run.
#[derive(Debug, Default)]
pub struct DisclaimerReport {
    pub records: Vec<FileRecord>,
    pub errors: Vec<FileError>,
    pub stats: WalkStats,
}

impl DisclaimerReport {
    /// Files left non-compliant.
    pub fn failed(&self) -> impl Iterator<Item = &Path> {
        self.records
            .iter()
            .filter(|r| !r.is_compliant())
            .map(|r| r.path.as_path())
    }

    /// Files rewritten by this run.
    pub fn fixed(&self) -> impl Iterator<Item = &Path> {
        self.records
            .iter()
            .filter(|r| r.fixed)
            .map(|r| r.path.as_path())
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty() && self.failed().next().is_none()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.passed() {
            ExitCode::Success
        } else {
            ExitCode::CheckFailed
        }
    }
}

/// Check (and optionally fix) every target resolved from `config`.
///
/// Relative targets are resolved against `cwd`. Only configuration
/// problems (such as a bad exclude glob) abort the run.
pub fn run(config: &RunConfig, cwd: &Path, verbose: &VerboseLogger) -> Result<DisclaimerReport> {
    let walker = FileWalker::new(WalkerConfig {
        exclude_patterns: config.exclude.clone(),
        ..Default::default()
    })?;
    let resolved = walker.resolve(&config.targets, cwd)?;

    let mut report = DisclaimerReport {
        stats: resolved.stats,
        ..Default::default()
    };

    for path in resolved.missing {
        let err = Error::io(
            &path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        );
        tracing::warn!("{}", err);
        report.errors.push(FileError {
            message: err.to_string(),
            path,
        });
    }

    for err in resolved.errors {
        report.errors.push(FileError {
            path: err.path,
            message: err.message,
        });
    }

    let reader = FileReader::new();
    for path in resolved.files {
        match check_file(&path, cwd, config, &reader, verbose) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("{}", err);
                report.errors.push(FileError {
                    message: err.to_string(),
                    path,
                });
            }
        }
    }

    if report.passed() {
        verbose.log("All files have disclaimer");
    }
    Ok(report)
}

/// Check one file. `Ok(None)` means the file type is unsupported.
fn check_file(
    path: &Path,
    cwd: &Path,
    config: &RunConfig,
    reader: &FileReader,
    verbose: &VerboseLogger,
) -> Result<Option<FileRecord>> {
    let full = cwd.join(path);
    let by_name = Filetype::from_path(path);

    // Extensionless files are only read when they look like scripts.
    if by_name.is_none() && !reader.starts_with_shebang(&full)? {
        tracing::debug!("skipping {} (unsupported type)", path.display());
        return Ok(None);
    }

    let content = reader.read_to_string(&full)?;
    if config.skip_empty && content.is_empty() {
        tracing::debug!("skipping {} (empty)", path.display());
        return Ok(None);
    }

    let (shebang, body) = header::split_shebang(&content);
    let Some(filetype) = by_name.or_else(|| shebang.and_then(Filetype::from_shebang)) else {
        tracing::debug!("skipping {} (unsupported interpreter)", path.display());
        return Ok(None);
    };

    verbose.log(&format!("Checking: {}", path.display()));
    let status = header::classify(body, filetype, &config.template, config.scan_lines).status;
    tracing::debug!(
        path = %path.display(),
        filetype = filetype.name(),
        status = status.as_str(),
        "classified"
    );

    let mut record = FileRecord {
        path: path.to_path_buf(),
        filetype,
        status,
        fixed: false,
    };
    if !config.fix_in_place {
        return Ok(Some(record));
    }
    let Some(fixed) = header::fix(&content, filetype, &config.template, config.scan_lines) else {
        return Ok(Some(record));
    };

    let (_, fixed_body) = header::split_shebang(&fixed);
    let verified = header::classify(fixed_body, filetype, &config.template, config.scan_lines);
    if verified.status != HeaderStatus::PresentCorrect {
        return Err(Error::Fix {
            path: path.to_path_buf(),
        });
    }

    verbose.log(&format!("Fixing {}", path.display()));
    writer::write_atomic(&full, &fixed)?;
    tracing::info!("fixed {}", path.display());
    record.fixed = true;
    Ok(Some(record))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
