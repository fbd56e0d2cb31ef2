// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Parse helper functions for configuration.
//!
//! Section parsers take the raw `toml::Value` so unknown keys can be
//! warned about instead of rejected. A known key with the wrong type is
//! an error message for the caller to wrap.

use std::path::Path;

use super::{DisclaimerConfig, PythonConfig};

type ParseResult<T> = std::result::Result<T, String>;

/// Parse a TOML array of strings.
fn parse_string_array(value: Option<&toml::Value>, key: &str) -> ParseResult<Option<Vec<String>>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let arr = value
        .as_array()
        .ok_or_else(|| format!("{key} must be an array of strings"))?;
    arr.iter()
        .map(|v| {
            v.as_str()
                .map(String::from)
                .ok_or_else(|| format!("{key} must be an array of strings"))
        })
        .collect::<ParseResult<Vec<_>>>()
        .map(Some)
}

/// Parse a TOML string value as Option<String>.
fn parse_string_option(value: Option<&toml::Value>, key: &str) -> ParseResult<Option<String>> {
    value
        .map(|v| {
            v.as_str()
                .map(String::from)
                .ok_or_else(|| format!("{key} must be a string"))
        })
        .transpose()
}

/// Parse a non-negative TOML integer.
fn parse_integer_option<T: TryFrom<i64>>(
    value: Option<&toml::Value>,
    key: &str,
) -> ParseResult<Option<T>> {
    value
        .map(|v| {
            v.as_integer()
                .and_then(|n| T::try_from(n).ok())
                .ok_or_else(|| format!("{key} must be a non-negative integer"))
        })
        .transpose()
}

fn parse_bool_option(value: Option<&toml::Value>, key: &str) -> ParseResult<Option<bool>> {
    value
        .map(|v| v.as_bool().ok_or_else(|| format!("{key} must be a boolean")))
        .transpose()
}

/// Borrow a section as a table; absent sections are empty.
fn section_table<'a>(
    value: Option<&'a toml::Value>,
    name: &str,
) -> ParseResult<Option<&'a toml::Table>> {
    match value {
        None => Ok(None),
        Some(toml::Value::Table(t)) => Ok(Some(t)),
        Some(_) => Err(format!("[{name}] must be a table")),
    }
}

/// Warn about every key of `table` not in `known`.
fn warn_unknown_keys(path: &Path, section: &str, table: &toml::Table, known: &[&str]) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{section}.{key}"));
        }
    }
}

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "sigoptlint: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Parse the `[disclaimer]` section.
pub(super) fn parse_disclaimer_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> ParseResult<DisclaimerConfig> {
    let Some(t) = section_table(value, "disclaimer")? else {
        return Ok(DisclaimerConfig::default());
    };
    warn_unknown_keys(path, "disclaimer", t, DisclaimerConfig::KNOWN_KEYS);

    let year: Option<i32> = parse_integer_option(t.get("year"), "disclaimer.year")?;
    if let Some(year) = year
        && !(1000..=9999).contains(&year)
    {
        return Err(format!("disclaimer.year must be a four-digit year, got {year}"));
    }

    Ok(DisclaimerConfig {
        license: parse_string_option(t.get("license"), "disclaimer.license")?,
        owner: parse_string_option(t.get("owner"), "disclaimer.owner")?,
        exclude: parse_string_array(t.get("exclude"), "disclaimer.exclude")?.unwrap_or_default(),
        year,
        scan_lines: parse_integer_option(t.get("scan_lines"), "disclaimer.scan_lines")?,
        skip_empty: parse_bool_option(t.get("skip_empty"), "disclaimer.skip_empty")?
            .unwrap_or(false),
    })
}

/// Parse the `[python]` section.
pub(super) fn parse_python_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> ParseResult<PythonConfig> {
    let Some(t) = section_table(value, "python")? else {
        return Ok(PythonConfig::default());
    };
    warn_unknown_keys(path, "python", t, PythonConfig::KNOWN_KEYS);

    Ok(PythonConfig {
        command: parse_string_array(t.get("command"), "python.command")?.unwrap_or_default(),
        args: parse_string_array(t.get("args"), "python.args")?.unwrap_or_default(),
    })
}
