// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DisclaimerConfig;
use crate::disclaimer::{DEFAULT_SCAN_LINES, DisclaimerTemplate, RunConfig, YearPolicy};
use crate::error::{Error, Result};

/// Verify, and optionally fix, copyright + license disclaimers
#[derive(Parser)]
#[command(name = "copyright-license-disclaimer")]
#[command(version, about, long_about = None)]
pub struct DisclaimerCli {
    /// Files, directories, or glob patterns to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// License name for the SPDX line (required unless set in config)
    #[arg(long, value_name = "TEXT")]
    pub license: Option<String>,

    /// Copyright owner (required unless set in config)
    #[arg(long, value_name = "TEXT")]
    pub owner: Option<String>,

    /// Rewrite non-compliant files instead of only reporting them
    #[arg(short = 'f', long)]
    pub fix_in_place: bool,

    /// Skip paths matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Require (and write) this copyright year
    #[arg(long, value_name = "YYYY", value_parser = clap::value_parser!(i32).range(1000..=9999))]
    pub year: Option<i32>,

    /// Body lines searched for an existing disclaimer
    #[arg(long, value_name = "N")]
    pub scan_lines: Option<usize>,

    /// Ignore zero-byte files
    #[arg(long)]
    pub skip_empty: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SIGOPTLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl DisclaimerCli {
    /// Merge flags over `[disclaimer]` config values.
    ///
    /// Fails when license or owner is set nowhere.
    pub fn run_config(&self, config: &DisclaimerConfig) -> Result<RunConfig> {
        let license = self
            .license
            .clone()
            .or_else(|| config.license.clone())
            .ok_or_else(|| Error::config("missing license: pass --license or set disclaimer.license"))?;
        let owner = self
            .owner
            .clone()
            .or_else(|| config.owner.clone())
            .ok_or_else(|| Error::config("missing owner: pass --owner or set disclaimer.owner"))?;
        if license.trim().is_empty() || owner.trim().is_empty() {
            return Err(Error::Argument(
                "license and owner must not be empty".to_string(),
            ));
        }

        let year = match self.year.or(config.year) {
            Some(year) => YearPolicy::Fixed(year),
            None => YearPolicy::Any,
        };

        let mut exclude = config.exclude.clone();
        exclude.extend(self.exclude.iter().cloned());

        Ok(RunConfig {
            template: DisclaimerTemplate::new(license, owner).with_year(year),
            fix_in_place: self.fix_in_place,
            targets: self.paths.clone(),
            exclude,
            scan_lines: self
                .scan_lines
                .or(config.scan_lines)
                .unwrap_or(DEFAULT_SCAN_LINES),
            skip_empty: self.skip_empty || config.skip_empty,
        })
    }
}

/// Check shell scripts for required directives
#[derive(Parser)]
#[command(name = "sigoptlint-shell")]
#[command(version, about, long_about = None)]
pub struct ShellLintCli {
    /// Shell scripts to check
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SIGOPTLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Check Python files against the built-in lint rules
#[derive(Parser)]
#[command(name = "sigoptlint-python")]
#[command(version, about, long_about = None)]
pub struct PythonLintCli {
    /// Python files to lint
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Extra rules to enable by name, e.g. AvoidDatetimeNowRule (comma-separated)
    #[arg(long, value_name = "RULES", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Rules to disable by name (comma-separated)
    #[arg(long, value_name = "RULES", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SIGOPTLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
