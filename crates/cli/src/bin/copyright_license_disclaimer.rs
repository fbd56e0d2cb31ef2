// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! `copyright-license-disclaimer` entry point.

use clap::Parser;

use sigopt_tools::cli::{DisclaimerCli, OutputFormat};
use sigopt_tools::color::color_choice;
use sigopt_tools::error::ExitCode;
use sigopt_tools::output::{JsonFormatter, TextFormatter};
use sigopt_tools::verbose::VerboseLogger;
use sigopt_tools::{config, disclaimer, discovery, logging};

fn main() {
    logging::init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("copyright-license-disclaimer: {}", e);
            match e.downcast_ref::<sigopt_tools::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = DisclaimerCli::parse();
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &config_path {
        tracing::debug!("using config {}", path.display());
    }
    let config = config::load_or_default(config_path.as_deref())?;
    let run_config = cli.run_config(&config.disclaimer)?;

    let verbose = VerboseLogger::new(cli.verbose);
    let report = disclaimer::run(&run_config, &cwd, &verbose)?;

    match cli.output {
        OutputFormat::Text => {
            TextFormatter::stdout(color_choice(cli.color, cli.no_color)).write(&report)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&report)?;
        }
    }

    Ok(report.exit_code())
}
