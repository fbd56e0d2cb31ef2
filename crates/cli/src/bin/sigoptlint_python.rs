// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! `sigoptlint-python` entry point.
//!
//! Runs the built-in rules, then the configured external linter if any.
//! A nonzero external exit code takes precedence.

use clap::Parser;

use sigopt_tools::cli::PythonLintCli;
use sigopt_tools::error::ExitCode;
use sigopt_tools::lint::python::{self, ExternalLinter};
use sigopt_tools::{FileReader, config, discovery, logging};

fn main() {
    logging::init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sigoptlint-python: {}", e);
            match e.downcast_ref::<sigopt_tools::Error>() {
                Some(err) => ExitCode::from(err) as i32,
                None => ExitCode::InternalError as i32,
            }
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = PythonLintCli::parse();
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = config::load_or_default(config_path.as_deref())?;

    let rules = python::enabled_rules(&cli.include, &cli.ignore)?;
    let report = python::lint_files(&cli.files, &rules, &FileReader::new());
    for finding in &report.findings {
        println!("{finding}");
    }
    for err in &report.errors {
        eprintln!("sigoptlint-python: {err}");
    }
    let mut code = report.exit_code() as i32;

    if let Some(linter) = ExternalLinter::new(&config.python, &cli.files) {
        let external = linter.run()?;
        if external != 0 {
            code = external;
        }
    }

    Ok(code)
}
