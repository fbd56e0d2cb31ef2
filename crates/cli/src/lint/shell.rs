// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Required-directive check for shell scripts.
//!
//! A directive is satisfied when it, or one of its alternatives, appears
//! as a whole line (surrounding whitespace ignored) anywhere in the file.

use std::path::PathBuf;

use crate::error::{Error, ExitCode};
use crate::reader::FileReader;

/// A line every script must carry, unless it opts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub line: &'static str,
    pub alternatives: &'static [&'static str],
}

pub const REQUIRED_DIRECTIVES: &[Directive] = &[
    Directive {
        line: "set -e",
        alternatives: &["set +e", "# no_set_e"],
    },
    Directive {
        line: "set -o pipefail",
        alternatives: &["set +o pipefail", "# no_pipefail"],
    },
    Directive {
        line: "#!/usr/bin/env bash",
        alternatives: &["#!/usr/bin/env sh"],
    },
];

impl Directive {
    fn is_satisfied_by(&self, line: &str) -> bool {
        line == self.line || self.alternatives.contains(&line)
    }
}

/// Directives `content` is missing, in declaration order.
pub fn missing_directives(content: &str) -> Vec<&'static Directive> {
    REQUIRED_DIRECTIVES
        .iter()
        .filter(|directive| {
            !content
                .lines()
                .any(|line| directive.is_satisfied_by(line.trim()))
        })
        .collect()
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellFinding {
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for ShellFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Lint every file; unreadable files are findings too.
pub fn lint_files(files: &[PathBuf], reader: &FileReader) -> Vec<ShellFinding> {
    let mut findings = Vec::new();
    for path in files {
        match reader.read_to_string(path) {
            Ok(content) => {
                let missing = missing_directives(&content);
                tracing::debug!("{}: {} missing directives", path.display(), missing.len());
                findings.extend(missing.into_iter().map(|d| ShellFinding {
                    path: path.clone(),
                    message: format!("error: Missing `{}` directive.", d.line),
                }));
            }
            Err(err) => {
                tracing::warn!("{}", err);
                let reason = match &err {
                    Error::Io { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                findings.push(ShellFinding {
                    path: path.clone(),
                    message: format!("error: {reason}"),
                });
            }
        }
    }
    findings
}

pub fn exit_code(findings: &[ShellFinding]) -> ExitCode {
    if findings.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
