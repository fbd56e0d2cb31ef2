// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Verbose progress output.
//!
//! Writes `[verbose]` prefixed lines to stderr when `--verbose` is given.
//! Unlike tracing, this is user-facing: which files were checked and fixed.

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Format a verbose line, or `None` when disabled.
    pub fn line(&self, msg: &str) -> Option<String> {
        self.enabled.then(|| format!("[verbose] {msg}"))
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if let Some(line) = self.line(msg) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
