// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Built-in Python lint rules.
//!
//! Sources are parsed with tree-sitter and every named node is offered to
//! each enabled rule. A `# sigoptlint: disable=<Rule>[,<Rule>...]` comment
//! silences those rules from its own line to the end of the file; there is
//! no matching enable comment.

pub mod external;
pub mod rules;
mod syntax;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

pub use external::ExternalLinter;
pub use rules::{Rule, Unsupported};

use crate::error::{Error, ExitCode, Result};
use crate::reader::FileReader;
use syntax::Preorder;

const DISABLE_MARKER: &str = "sigoptlint: disable=";
const ENABLE_MARKER: &str = "sigoptlint: enable=";

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonFinding {
    pub path: PathBuf,
    /// 1-based.
    pub line: usize,
    /// 0-based byte offset.
    pub column: usize,
    pub rule: Rule,
    pub message: String,
}

impl fmt::Display for PythonFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.path.display(),
            self.line,
            self.column,
            self.message
        )
    }
}

/// Defaults, plus `include`, minus `ignore`.
///
/// An unknown name in `include` is an argument error; in `ignore` it only
/// warns, since removing a rule that does not exist changes nothing.
pub fn enabled_rules(include: &[String], ignore: &[String]) -> Result<BTreeSet<Rule>> {
    let mut enabled: BTreeSet<Rule> = Rule::DEFAULT_ENABLED.iter().copied().collect();
    for name in rule_names(include) {
        enabled.insert(name.parse().map_err(Error::Argument)?);
    }
    for name in rule_names(ignore) {
        match name.parse::<Rule>() {
            Ok(rule) => {
                enabled.remove(&rule);
            }
            Err(message) => tracing::warn!("{}", message),
        }
    }
    Ok(enabled)
}

fn rule_names(names: &[String]) -> impl Iterator<Item = &str> {
    names
        .iter()
        .flat_map(|name| name.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

fn parse(source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(err) = parser.set_language(tree_sitter_python::language()) {
        tracing::warn!("python grammar unavailable: {}", err);
        return None;
    }
    parser.parse(source, None)
}

fn lint_error(path: &Path, line: usize, message: &str) -> Error {
    Error::Lint {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

/// Line each rule is disabled from, keyed by rule name.
///
/// `Err` holds the line of an enable comment.
fn disables(root: Node<'_>, source: &str) -> std::result::Result<HashMap<String, usize>, usize> {
    let mut disables = HashMap::new();
    for comment in Preorder::new(root).filter(|node| node.kind() == "comment") {
        let line = syntax::line(comment);
        let text = syntax::text(comment, source);
        if text.contains(ENABLE_MARKER) {
            return Err(line);
        }
        if let Some(idx) = text.find(DISABLE_MARKER) {
            for name in text[idx + DISABLE_MARKER.len()..].split(',') {
                disables.entry(name.trim().to_string()).or_insert(line);
            }
        }
    }
    Ok(disables)
}

/// Lint one source text; findings come back sorted by position.
pub fn check_source(
    path: &Path,
    source: &str,
    rules: &BTreeSet<Rule>,
) -> Result<Vec<PythonFinding>> {
    let tree = parse(source).ok_or_else(|| lint_error(path, 1, "could not be parsed"))?;
    let root = tree.root_node();
    if root.has_error() {
        let line = Preorder::new(root)
            .find(|node| node.is_error() || node.is_missing())
            .map_or(1, syntax::line);
        return Err(lint_error(path, line, "invalid syntax"));
    }
    let disables = disables(root, source).map_err(|line| {
        lint_error(path, line, "Re-enabling sigoptlint disables is not supported")
    })?;

    let mut findings = Vec::new();
    for node in Preorder::new(root).filter(|node| node.is_named()) {
        let line = syntax::line(node);
        for &rule in rules {
            if disables.get(rule.name()).is_some_and(|&from| from <= line) {
                continue;
            }
            match rule.check(node, source) {
                Ok(Some(message)) => findings.push(PythonFinding {
                    path: path.to_path_buf(),
                    line,
                    column: node.start_position().column,
                    rule,
                    message,
                }),
                Ok(None) => {}
                Err(Unsupported(message)) => return Err(lint_error(path, line, message)),
            }
        }
    }
    findings.sort_by_key(|finding| (finding.line, finding.column));
    Ok(findings)
}

/// Outcome of linting a batch of files.
#[derive(Debug, Default)]
pub struct PythonReport {
    pub findings: Vec<PythonFinding>,
    /// Files that could not be read or linted.
    pub errors: Vec<Error>,
}

impl PythonReport {
    pub fn exit_code(&self) -> ExitCode {
        if self.findings.is_empty() && self.errors.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::CheckFailed
        }
    }
}

/// Lint every file; one file's failure never stops the batch.
pub fn lint_files(
    files: &[PathBuf],
    rules: &BTreeSet<Rule>,
    reader: &FileReader,
) -> PythonReport {
    let mut report = PythonReport::default();
    for path in files {
        match reader
            .read_to_string(path)
            .and_then(|source| check_source(path, &source, rules))
        {
            Ok(findings) => {
                tracing::debug!("{}: {} findings", path.display(), findings.len());
                report.findings.extend(findings);
            }
            Err(err) => {
                tracing::warn!("{}", err);
                report.errors.push(err);
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
