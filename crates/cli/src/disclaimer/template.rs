// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Disclaimer rendering and exact-match comparison.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use super::filetype::CommentStyle;

/// Year inside a rendered copyright line: `2023` or `2019-2023`.
#[allow(clippy::expect_used)]
static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Copyright © (\d{4}(?:-\d{4})?) ").expect("valid regex")
});

/// Which copyright years are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearPolicy {
    /// Any year (or year range) the file already carries.
    #[default]
    Any,
    /// Exactly this year.
    Fixed(i32),
}

/// Copyright + license disclaimer parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclaimerTemplate {
    pub license: String,
    pub owner: String,
    pub year: YearPolicy,
}

impl DisclaimerTemplate {
    pub fn new(license: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            license: license.into(),
            owner: owner.into(),
            year: YearPolicy::Any,
        }
    }

    pub fn with_year(mut self, year: YearPolicy) -> Self {
        self.year = year;
        self
    }

    /// Year written when inserting a disclaimer.
    pub fn fix_year(&self) -> String {
        match self.year {
            YearPolicy::Fixed(year) => year.to_string(),
            YearPolicy::Any => chrono::Local::now().year().to_string(),
        }
    }

    /// Render the disclaimer lines (without line terminators) for `year`.
    pub fn render_lines(&self, style: CommentStyle, year: &str) -> Vec<String> {
        let copyright = format!("Copyright © {year} {}", self.owner);
        let spdx = format!("SPDX-License-Identifier: {}", self.license);
        match style {
            CommentStyle::Line { prefix } => vec![
                format!("{prefix}{copyright}"),
                prefix.trim_end().to_string(),
                format!("{prefix}{spdx}"),
            ],
            CommentStyle::Block {
                opener,
                line_prefix,
                closer,
            } => vec![
                opener.to_string(),
                format!("{line_prefix}{copyright}"),
                line_prefix.trim_end().to_string(),
                format!("{line_prefix}{spdx}"),
                closer.to_string(),
            ],
        }
    }

    /// Render the block written by a fix, newline-terminated.
    pub fn render(&self, style: CommentStyle) -> String {
        let mut text = self.render_lines(style, &self.fix_year()).join("\n");
        text.push('\n');
        text
    }

    /// Number of lines a rendered disclaimer occupies.
    pub fn line_count(style: CommentStyle) -> usize {
        match style {
            CommentStyle::Line { .. } => 3,
            CommentStyle::Block { .. } => 5,
        }
    }

    /// Whether `lines` start with this disclaimer, byte for byte.
    ///
    /// Under [`YearPolicy::Any`] the year is taken from the candidate
    /// copyright line and the template is rendered with it.
    pub fn matches(&self, style: CommentStyle, lines: &[&str]) -> bool {
        let expected_len = Self::line_count(style);
        if lines.len() < expected_len {
            return false;
        }

        let year = match self.year {
            YearPolicy::Fixed(year) => year.to_string(),
            YearPolicy::Any => {
                let copyright_idx = match style {
                    CommentStyle::Line { .. } => 0,
                    CommentStyle::Block { .. } => 1,
                };
                match YEAR_PATTERN
                    .captures(lines[copyright_idx])
                    .and_then(|caps| caps.get(1))
                {
                    Some(m) => m.as_str().to_string(),
                    None => return false,
                }
            }
        };

        self.render_lines(style, &year)
            .iter()
            .zip(lines)
            .all(|(expected, actual)| expected == actual)
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
