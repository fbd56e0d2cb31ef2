// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Optional external linter, run after the built-in rules.
//!
//! The command line is `<command...> <args...> <files...>`; the linter's
//! exit code is passed through unchanged.

use std::path::PathBuf;
use std::process::Command;

use crate::config::PythonConfig;
use crate::error::{Error, ExitCode, Result};

/// A fully assembled linter command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLinter {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalLinter {
    /// `None` when no command is configured or there is nothing to lint.
    pub fn new(config: &PythonConfig, files: &[PathBuf]) -> Option<Self> {
        let (program, leading) = config.command.split_first()?;
        if files.is_empty() {
            return None;
        }

        let mut args: Vec<String> = leading.to_vec();
        args.extend(config.args.iter().cloned());
        args.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));

        Some(Self {
            program: program.clone(),
            args,
        })
    }

    /// Human-readable command line for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the linter, inheriting stdio, and return its exit code.
    ///
    /// A linter killed by a signal maps to [`ExitCode::InternalError`].
    pub fn run(&self) -> Result<i32> {
        tracing::debug!("running {}", self.command_line());
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| Error::Linter {
                command: self.program.clone(),
                source,
            })?;

        match status.code() {
            Some(code) => Ok(code),
            None => {
                tracing::warn!("{} terminated by signal", self.program);
                Ok(ExitCode::InternalError as i32)
            }
        }
    }
}

#[cfg(test)]
#[path = "external_tests.rs"]
mod tests;
