// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Repository hygiene hooks.
//!
//! - [`disclaimer`]: verify and fix copyright/license disclaimers.
//! - [`lint::shell`]: required directives in shell scripts.
//! - [`lint::python`]: built-in Python lint rules.

pub mod cli;
pub mod color;
pub mod config;
pub mod disclaimer;
pub mod discovery;
pub mod error;
pub mod lint;
pub mod logging;
pub mod output;
pub mod reader;
pub mod verbose;
pub mod walker;

pub use cli::{DisclaimerCli, OutputFormat, PythonLintCli, ShellLintCli};
pub use config::Config;
pub use disclaimer::{DisclaimerReport, DisclaimerTemplate, Filetype, HeaderStatus, RunConfig};
pub use error::{Error, ExitCode, Result};
pub use reader::{FileContent, FileReader};
pub use verbose::VerboseLogger;
pub use walker::{FileWalker, WalkError, WalkStats, WalkerConfig};

#[cfg(test)]
pub mod test_utils;
