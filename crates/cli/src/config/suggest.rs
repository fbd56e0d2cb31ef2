// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Section name suggestions for config validation.

use std::path::Path;

/// Known section names for suggestions.
const KNOWN_SECTION_NAMES: &[&str] = &["disclaimer", "python"];

/// Suggest a section name for a typo.
pub fn suggest_section_name(unknown: &str) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    // Common typos and variations
    let suggestion = match unknown {
        "disclaimers" | "license" | "copyright" | "header" | "headers" => Some("disclaimer"),
        "py" | "flake8" | "lint" => Some("python"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Try prefix matching (require at least 2 chars to avoid false positives)
    if unknown.len() >= 2 {
        for &name in KNOWN_SECTION_NAMES {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about unknown top-level key with suggestion.
pub fn warn_unknown_section(path: &Path, key: &str) {
    if let Some(suggested) = suggest_section_name(key) {
        eprintln!(
            "sigoptlint: warning: {}: unrecognized field `{}` (ignored). Did you mean `{}`?",
            path.display(),
            key,
            suggested
        );
    } else {
        super::parse::warn_unknown_key(path, key);
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
