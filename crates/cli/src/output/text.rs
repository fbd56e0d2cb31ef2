// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Text output formatter.
//!
//! Format:
//! ```text
//! FIXED <path>
//! ERROR <message>
//! The following files failed the copyright + license check:
//! 	<path>
//! <n> files checked, <m> fixed, <k> failed
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::disclaimer::DisclaimerReport;

/// Heading printed before the list of non-compliant files.
pub const FAILED_HEADING: &str = "The following files failed the copyright + license check:";

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the whole report.
    pub fn write(&mut self, report: &DisclaimerReport) -> std::io::Result<()> {
        for path in report.fixed() {
            self.out.set_color(&scheme::fixed())?;
            write!(self.out, "FIXED")?;
            self.out.reset()?;
            write!(self.out, " ")?;
            self.out.set_color(&scheme::path())?;
            writeln!(self.out, "{}", path.display())?;
            self.out.reset()?;
        }

        for error in &report.errors {
            self.out.set_color(&scheme::error())?;
            write!(self.out, "ERROR")?;
            self.out.reset()?;
            writeln!(self.out, " {}", error.message)?;
        }

        let failed: Vec<_> = report.failed().collect();
        if !failed.is_empty() {
            self.out.set_color(&scheme::title())?;
            writeln!(self.out, "{FAILED_HEADING}")?;
            self.out.reset()?;
            for path in &failed {
                write!(self.out, "\t")?;
                self.out.set_color(&scheme::path())?;
                writeln!(self.out, "{}", path.display())?;
                self.out.reset()?;
            }
        }

        self.write_summary(report)
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, report: &DisclaimerReport) -> std::io::Result<()> {
        let checked = report.records.len();
        let fixed = report.fixed().count();
        let failed = report.failed().count() + report.errors.len();

        if failed == 0 {
            self.out.set_color(&scheme::pass())?;
        } else {
            self.out.set_color(&scheme::fail())?;
        }
        write!(self.out, "{}", if failed == 0 { "PASS" } else { "FAIL" })?;
        self.out.reset()?;
        writeln!(
            self.out,
            ": {} file{} checked, {} fixed, {} failed",
            checked,
            if checked == 1 { "" } else { "s" },
            fixed,
            failed
        )?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
