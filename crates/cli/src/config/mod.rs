// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Configuration parsing and validation.
//!
//! Handles sigoptlint.toml parsing with version validation and unknown key warnings.

mod disclaimer;
mod parse;
mod python;
mod suggest;

use std::path::Path;

use serde::Deserialize;

pub use disclaimer::DisclaimerConfig;
pub use python::PythonConfig;

use crate::error::{Error, Result};
use parse::{parse_disclaimer_config, parse_python_config};
use suggest::warn_unknown_section;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "sigoptlint.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "disclaimer", "python"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    disclaimer: Option<toml::Value>,

    #[serde(default)]
    python: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// `[disclaimer]` section.
    pub disclaimer: DisclaimerConfig,

    /// `[python]` section.
    pub python: PythonConfig,
}

/// Load config from `path`, or defaults when there is none.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_with_warnings(path),
        None => Ok(Config::default()),
    }
}

/// Load and validate config from a file path, warning about unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!("loading config from {}", path.display());
    parse_with_warnings(&content, path)
}

/// Parse config content, warning on stderr about unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_section(path, key);
        }
    }

    let disclaimer =
        parse_disclaimer_config(flexible.disclaimer.as_ref(), path).map_err(config_error)?;
    let python = parse_python_config(flexible.python.as_ref(), path).map_err(config_error)?;

    Ok(Config {
        version,
        disclaimer,
        python,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
