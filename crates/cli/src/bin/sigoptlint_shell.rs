// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! `sigoptlint-shell` entry point.

use clap::Parser;

use sigopt_tools::cli::ShellLintCli;
use sigopt_tools::error::ExitCode;
use sigopt_tools::lint::shell;
use sigopt_tools::reader::FileReader;
use sigopt_tools::{config, discovery, logging};

fn main() {
    logging::init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sigoptlint-shell: {}", e);
            match e.downcast_ref::<sigopt_tools::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = ShellLintCli::parse();
    let cwd = std::env::current_dir()?;

    // Loaded for validation and unknown-key warnings only.
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    config::load_or_default(config_path.as_deref())?;

    let findings = shell::lint_files(&cli.files, &FileReader::new());
    for finding in &findings {
        println!("{finding}");
    }

    Ok(shell::exit_code(&findings))
}
