// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Streaming reporter
//!
//! The [`Reporter`] owns the run counters and writes each classified line as
//! soon as it is processed. [`run`] drives a whole invocation: header, one
//! output per input line, then the summary.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use testglow_format::reporter::run;
//!
//! let input = Cursor::new("=== RUN TestA\n--- PASS: TestA (0.01s)\n");
//! let mut output = Vec::new();
//! let counters = run(input, &mut output, &chrono::Local::now()).unwrap();
//! assert_eq!(counters.passed, 1);
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use chrono::{DateTime, TimeZone};
use tracing::{debug, trace};

use crate::classify::{Category, ClassifiedLine, classify};
use crate::counters::RunCounters;
use crate::error::FormatError;
use crate::header::render_header;
use crate::summary::render_summary;

/// Writes formatted output for one test run
pub struct Reporter<W: Write> {
    out: W,
    counters: RunCounters,
    lines: usize,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            counters: RunCounters::new(),
            lines: 0,
        }
    }

    /// Write the header block
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Io` if the sink rejects the write.
    pub fn write_header<Tz>(&mut self, now: &DateTime<Tz>) -> Result<(), FormatError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.out.write_all(render_header(now).as_bytes())?;
        Ok(())
    }

    /// Count, classify and write one raw line
    ///
    /// Formatted lines are terminated with `\n`; passthrough lines are written
    /// exactly as given. Returns the category of a formatted line.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Io` if the sink rejects the write.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Category>, FormatError> {
        self.lines += 1;
        if let Some(outcome) = self.counters.record_line(line) {
            debug!(?outcome, counters = ?self.counters, "counted result");
        }

        let classified = classify(line);
        match &classified {
            ClassifiedLine::Formatted { category, .. } => {
                trace!(line = self.lines, %category, "classified");
                writeln!(self.out, "{classified}")?;
            }
            ClassifiedLine::Passthrough(raw) => {
                trace!(line = self.lines, "passthrough");
                self.out.write_all(raw.as_bytes())?;
            }
        }
        Ok(classified.category())
    }

    /// Current tally
    #[must_use]
    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    /// Write the summary block, flush, and return the final tally
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Io` if the sink rejects the write or flush.
    pub fn finish(mut self) -> Result<RunCounters, FormatError> {
        self.out.write_all(render_summary(&self.counters).as_bytes())?;
        self.out.flush()?;
        debug!(lines = self.lines, counters = ?self.counters, "run finished");
        Ok(self.counters)
    }
}

/// Format a whole run from `input` to `output`
///
/// Lines are read with their terminators so that unrecognized content is
/// reproduced byte for byte.
///
/// # Errors
///
/// Returns `FormatError::Io` if reading fails (including input that is not
/// valid UTF-8) or if writing fails. The summary is not written in that case.
pub fn run<R, W, Tz>(
    mut input: R,
    output: W,
    now: &DateTime<Tz>,
) -> Result<RunCounters, FormatError>
where
    R: BufRead,
    W: Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut reporter = Reporter::new(output);
    reporter.write_header(now)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        reporter.process_line(&line)?;
    }

    reporter.finish()
}
