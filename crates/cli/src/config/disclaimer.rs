// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! `[disclaimer]` section.

/// Disclaimer checker defaults. Every field can be overridden on the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclaimerConfig {
    /// License name written after `SPDX-License-Identifier:`.
    pub license: Option<String>,

    /// Copyright owner.
    pub owner: Option<String>,

    /// Exclude globs, added to any `--exclude` flags.
    pub exclude: Vec<String>,

    /// Pin the copyright year instead of accepting any year.
    pub year: Option<i32>,

    /// Body lines searched for an existing disclaimer.
    pub scan_lines: Option<usize>,

    /// Ignore zero-byte files.
    pub skip_empty: bool,
}

impl DisclaimerConfig {
    pub(super) const KNOWN_KEYS: &'static [&'static str] = &[
        "license",
        "owner",
        "exclude",
        "year",
        "scan_lines",
        "skip_empty",
    ];
}
