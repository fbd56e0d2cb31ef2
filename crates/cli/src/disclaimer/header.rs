// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Header classification and in-memory fixing.
//!
//! Only the leading comment region of the body (after any shebang), or
//! its first line when that is not a comment, is ever inspected or
//! removed. A region counts as a stale disclaimer when
//! one of its lines inside the scan window mentions "copyright" or
//! "license", case-insensitively.
//!
//! A stale block comment (a Python module docstring counts as one) is
//! removed through its closer; code sharing the closer's line is kept.
//! For line comments, removal runs from the top of the region to the end
//! of the paragraph holding the last keyword line, plus any bare marker
//! lines (`#`) after it. An uncommented first line that mentions a keyword
//! is stale too.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use serde::Serialize;

use super::filetype::{CommentSyntax, Filetype};
use super::template::DisclaimerTemplate;

/// Default number of body lines scanned for disclaimer keywords.
pub const DEFAULT_SCAN_LINES: usize = 10;

#[allow(clippy::expect_used)]
static KEYWORDS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["copyright", "license"])
        .expect("valid keyword automaton")
});

/// Header status of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStatus {
    PresentCorrect,
    PresentIncorrect,
    Absent,
}

impl HeaderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderStatus::PresentCorrect => "present-correct",
            HeaderStatus::PresentIncorrect => "present-incorrect",
            HeaderStatus::Absent => "absent",
        }
    }
}

/// Outcome of classifying a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: HeaderStatus,
    /// Byte length of the body prefix a fix removes.
    pub stale_len: usize,
}

/// Split off a leading shebang line (with its newline, if any).
///
/// Rust inner attributes (`#![...]`) are not shebangs.
pub fn split_shebang(content: &str) -> (Option<&str>, &str) {
    if !content.starts_with("#!") || content.starts_with("#![") {
        return (None, content);
    }
    match content.find('\n') {
        Some(idx) => (Some(&content[..=idx]), &content[idx + 1..]),
        None => (Some(content), ""),
    }
}

/// A body line with its byte span (terminator included).
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    end: usize,
}

fn lines(body: &str) -> Vec<Line<'_>> {
    let mut out = Vec::new();
    let mut offset = 0;
    for piece in body.split_inclusive('\n') {
        offset += piece.len();
        out.push(Line {
            text: piece.trim_end_matches(['\n', '\r']),
            end: offset,
        });
    }
    out
}

/// Leading comment region of a body.
#[derive(Debug, Clone, Copy)]
enum Region {
    /// One block comment over `lines` lines, closed at byte `end`.
    Block { lines: usize, end: usize },
    /// Contiguous line comments.
    Lines(usize),
}

fn leading_comment(body: &str, lines: &[Line<'_>], syntax: CommentSyntax) -> Option<Region> {
    let first = lines.first()?.text;
    let trimmed = first.trim_start();

    if let Some(&(open, close)) = syntax
        .blocks
        .iter()
        .find(|(open, _)| trimmed.starts_with(*open))
    {
        let start = first.len() - trimmed.len() + open.len();
        let end = start + body[start..].find(close)? + close.len();
        let count = lines.iter().position(|line| line.end >= end)? + 1;
        return Some(Region::Block { lines: count, end });
    }

    if let Some(marker) = syntax.line
        && trimmed.starts_with(marker)
    {
        let count = lines
            .iter()
            .take_while(|line| line.text.trim_start().starts_with(marker))
            .count();
        return Some(Region::Lines(count));
    }

    None
}

const ABSENT: Classification = Classification {
    status: HeaderStatus::Absent,
    stale_len: 0,
};

fn stale(stale_len: usize) -> Classification {
    Classification {
        status: HeaderStatus::PresentIncorrect,
        stale_len,
    }
}

/// Index past the blank lines starting at `from`.
fn skip_blank(lines: &[Line<'_>], from: usize) -> usize {
    from + lines[from..]
        .iter()
        .take_while(|line| line.text.trim().is_empty())
        .count()
}

/// Byte offset just past the first `count` lines.
fn end_of(lines: &[Line<'_>], count: usize) -> usize {
    lines[..count].last().map_or(0, |line| line.end)
}

/// Classify the header of `body` (content after any shebang).
pub fn classify(
    body: &str,
    filetype: Filetype,
    template: &DisclaimerTemplate,
    scan_lines: usize,
) -> Classification {
    let lines = lines(body);
    let texts: Vec<&str> = lines
        .iter()
        .take(DisclaimerTemplate::line_count(filetype.style()))
        .map(|line| line.text)
        .collect();

    if template.matches(filetype.style(), &texts) {
        return Classification {
            status: HeaderStatus::PresentCorrect,
            stale_len: 0,
        };
    }

    let syntax = filetype.syntax();
    match leading_comment(body, &lines, syntax) {
        Some(Region::Block { lines: count, end }) => {
            let window = count.min(scan_lines);
            if window == 0 || !KEYWORDS.is_match(&body[..end_of(&lines, window).min(end)]) {
                return ABSENT;
            }
            // Code after the closer stays; otherwise drop the closing line too.
            let closing_line_end = lines[count - 1].end;
            if body[end..closing_line_end].trim().is_empty() {
                stale(end_of(&lines, skip_blank(&lines, count)))
            } else {
                let rest = &body[end..];
                stale(end + rest.len() - rest.trim_start_matches([' ', '\t']).len())
            }
        }
        Some(Region::Lines(count)) => {
            let window = count.min(scan_lines);
            let Some(last_keyword) = lines[..window]
                .iter()
                .rposition(|line| KEYWORDS.is_match(line.text))
            else {
                return ABSENT;
            };
            // Finish the paragraph holding the last keyword, then any bare markers.
            let marker = syntax.line.unwrap_or_default();
            let paragraph_end = last_keyword
                + 1
                + lines[last_keyword + 1..count]
                    .iter()
                    .take_while(|line| line.text.trim() != marker)
                    .count();
            let removed = paragraph_end
                + lines[paragraph_end..count]
                    .iter()
                    .take_while(|line| line.text.trim() == marker)
                    .count();
            stale(end_of(&lines, skip_blank(&lines, removed)))
        }
        None => first_line_notice(&lines, scan_lines),
    }
}

/// A keyword on an uncommented first line.
///
/// The line is stale either way, but only a paragraph that opens with a
/// copyright notice is removed; anything else is treated as code.
fn first_line_notice(lines: &[Line<'_>], scan_lines: usize) -> Classification {
    let Some(first) = lines.first() else {
        return ABSENT;
    };
    if scan_lines == 0 || !KEYWORDS.is_match(first.text) {
        return ABSENT;
    }

    let text = first.text.trim_start();
    let is_notice = text
        .get(.."copyright".len())
        .is_some_and(|word| word.eq_ignore_ascii_case("copyright"))
        || text.starts_with('©');
    if !is_notice {
        return stale(0);
    }
    let paragraph = lines
        .iter()
        .take_while(|line| !line.text.trim().is_empty())
        .count();
    stale(end_of(lines, skip_blank(lines, paragraph)))
}

/// Return `content` with a correct disclaimer, or `None` if already correct.
///
/// Layout: shebang, disclaimer, one blank line, remaining content.
pub fn fix(
    content: &str,
    filetype: Filetype,
    template: &DisclaimerTemplate,
    scan_lines: usize,
) -> Option<String> {
    let (shebang, body) = split_shebang(content);
    let classification = classify(body, filetype, template, scan_lines);
    if classification.status == HeaderStatus::PresentCorrect {
        return None;
    }

    let rest = strip_leading_blank_lines(&body[classification.stale_len..]);
    let disclaimer = template.render(filetype.style());

    let mut fixed = String::with_capacity(content.len() + disclaimer.len() + 2);
    if let Some(shebang) = shebang {
        fixed.push_str(shebang);
        if !shebang.ends_with('\n') {
            fixed.push('\n');
        }
    }
    fixed.push_str(&disclaimer);
    if !rest.is_empty() {
        fixed.push('\n');
        fixed.push_str(rest);
    }
    Some(fixed)
}

fn strip_leading_blank_lines(text: &str) -> &str {
    let mut offset = 0;
    for piece in text.split_inclusive('\n') {
        if !piece.trim().is_empty() {
            break;
        }
        offset += piece.len();
    }
    &text[offset..]
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
