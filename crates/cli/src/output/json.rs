// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::disclaimer::{DisclaimerReport, FileError, FileRecord};
use crate::walker::WalkStats;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    passed: bool,
    fixed: Vec<&'a Path>,
    failed: Vec<&'a Path>,
    errors: &'a [FileError],
    files: &'a [FileRecord],
    walk: &'a WalkStats,
}

impl<'a> From<&'a DisclaimerReport> for ReportOutput<'a> {
    fn from(report: &'a DisclaimerReport) -> Self {
        Self {
            passed: report.passed(),
            fixed: report.fixed().collect(),
            failed: report.failed().collect(),
            errors: &report.errors,
            files: &report.records,
            walk: &report.stats,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &DisclaimerReport) -> std::io::Result<()> {
        let output = ReportOutput::from(report);
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
