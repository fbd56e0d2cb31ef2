// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! File type detection and comment syntax lookup.
//!
//! Detection is a pair of static tables: file extensions first, then the
//! shebang interpreter for extensionless scripts.

use std::path::Path;

use serde::Serialize;

/// Kinds of files that carry a disclaimer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filetype {
    Python,
    Shell,
    Dockerfile,
    Config,
    Javascript,
    Less,
    Markdown,
    #[serde(rename = "c-like")]
    CLike,
}

/// How a rendered disclaimer is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Every line carries `prefix` (e.g. `"# "`).
    Line { prefix: &'static str },
    /// Lines wrapped in `opener`/`closer`, each carrying `line_prefix`.
    Block {
        opener: &'static str,
        line_prefix: &'static str,
        closer: &'static str,
    },
}

/// Comment markers recognized when scanning an existing header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub line: Option<&'static str>,
    /// `(open, close)` pairs, tried in order.
    pub blocks: &'static [(&'static str, &'static str)],
}

const HASH: CommentStyle = CommentStyle::Line { prefix: "# " };
const SLASHES: CommentStyle = CommentStyle::Line { prefix: "// " };
const JSDOC: CommentStyle = CommentStyle::Block {
    opener: "/**",
    line_prefix: " * ",
    closer: " */",
};
const HTML: CommentStyle = CommentStyle::Block {
    opener: "<!--",
    line_prefix: "",
    closer: "-->",
};

const HASH_SYNTAX: CommentSyntax = CommentSyntax {
    line: Some("#"),
    blocks: &[],
};
// A leading module docstring is scanned like a block comment.
const PYTHON_SYNTAX: CommentSyntax = CommentSyntax {
    line: Some("#"),
    blocks: &[("\"\"\"", "\"\"\""), ("'''", "'''")],
};
const C_SYNTAX: CommentSyntax = CommentSyntax {
    line: Some("//"),
    blocks: &[("/*", "*/")],
};
const HTML_SYNTAX: CommentSyntax = CommentSyntax {
    line: None,
    blocks: &[("<!--", "-->")],
};

/// Extension lookup table.
pub const EXTENSIONS: &[(&str, Filetype)] = &[
    ("py", Filetype::Python),
    ("pyi", Filetype::Python),
    ("sh", Filetype::Shell),
    ("bash", Filetype::Shell),
    ("yml", Filetype::Config),
    ("yaml", Filetype::Config),
    ("toml", Filetype::Config),
    ("js", Filetype::Javascript),
    ("jsx", Filetype::Javascript),
    ("ts", Filetype::Javascript),
    ("tsx", Filetype::Javascript),
    ("less", Filetype::Less),
    ("md", Filetype::Markdown),
    ("rs", Filetype::CLike),
    ("go", Filetype::CLike),
    ("c", Filetype::CLike),
    ("h", Filetype::CLike),
    ("cc", Filetype::CLike),
    ("cpp", Filetype::CLike),
    ("java", Filetype::CLike),
];

/// Shebang interpreter lookup table. Version suffixes are ignored.
pub const INTERPRETERS: &[(&str, Filetype)] = &[
    ("bash", Filetype::Shell),
    ("sh", Filetype::Shell),
    ("zsh", Filetype::Shell),
    ("dash", Filetype::Shell),
    ("ksh", Filetype::Shell),
    ("python", Filetype::Python),
    ("node", Filetype::Javascript),
];

/// Basename prefix for Dockerfiles (`Dockerfile`, `Dockerfile.api`, ...).
const DOCKERFILE: &str = "Dockerfile";

impl Filetype {
    /// Detect from the file name alone.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.starts_with(DOCKERFILE) {
            return Some(Filetype::Dockerfile);
        }
        let ext = path.extension()?.to_str()?;
        EXTENSIONS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
            .map(|(_, filetype)| *filetype)
    }

    /// Detect from a shebang line such as `#!/usr/bin/env python3`.
    pub fn from_shebang(shebang: &str) -> Option<Self> {
        let name = interpreter(shebang)?;
        INTERPRETERS
            .iter()
            .find(|(keyword, _)| matches_interpreter(name, keyword))
            .map(|(_, filetype)| *filetype)
    }

    /// Style used when rendering a disclaimer.
    pub fn style(self) -> CommentStyle {
        match self {
            Filetype::Python | Filetype::Shell | Filetype::Dockerfile | Filetype::Config => HASH,
            Filetype::Javascript | Filetype::Less => JSDOC,
            Filetype::Markdown => HTML,
            Filetype::CLike => SLASHES,
        }
    }

    /// Markers recognized when looking for an existing header.
    pub fn syntax(self) -> CommentSyntax {
        match self {
            Filetype::Python => PYTHON_SYNTAX,
            Filetype::Shell | Filetype::Dockerfile | Filetype::Config => HASH_SYNTAX,
            Filetype::Javascript | Filetype::Less | Filetype::CLike => C_SYNTAX,
            Filetype::Markdown => HTML_SYNTAX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Filetype::Python => "python",
            Filetype::Shell => "shell",
            Filetype::Dockerfile => "dockerfile",
            Filetype::Config => "config",
            Filetype::Javascript => "javascript",
            Filetype::Less => "less",
            Filetype::Markdown => "markdown",
            Filetype::CLike => "c-like",
        }
    }
}

/// Extract the interpreter name from a shebang line.
///
/// `#!/bin/bash` gives `bash`; `#!/usr/bin/env -S python3 -u` gives `python3`.
pub fn interpreter(shebang: &str) -> Option<&str> {
    let line = shebang.strip_prefix("#!")?.trim();
    let mut words = line.split_whitespace();
    let program = basename(words.next()?);
    if program != "env" {
        return Some(program);
    }
    words
        .find(|word| !word.starts_with('-') && !word.contains('='))
        .map(basename)
}

fn basename(word: &str) -> &str {
    word.rsplit('/').next().unwrap_or(word)
}

/// `python3.11` matches `python`; `shellcheck` does not match `sh`.
fn matches_interpreter(name: &str, keyword: &str) -> bool {
    name.strip_prefix(keyword)
        .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

#[cfg(test)]
#[path = "filetype_tests.rs"]
mod tests;
