// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! `[python]` section: an optional external linter run after the built-in
//! rules.

/// Python lint configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonConfig {
    /// Linter program and leading arguments; empty runs no external linter.
    pub command: Vec<String>,

    /// Arguments passed after `command` and before the files.
    pub args: Vec<String>,
}

impl PythonConfig {
    pub(super) const KNOWN_KEYS: &'static [&'static str] = &["command", "args"];
}
