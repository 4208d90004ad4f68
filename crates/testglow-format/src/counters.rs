// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Run counters and success-rate banding

use crate::classify::{FAIL_MARKER, PASS_MARKER, SKIP_MARKER};
use crate::color::Color;

/// Counted outcome of a test result line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
    /// Test was skipped
    Skipped,
}

impl Outcome {
    /// Detect a result marker in a raw line
    ///
    /// Detection ignores the display rules: a line is counted whenever it
    /// carries a result marker, even if an earlier display rule claimed it.
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        if line.contains(PASS_MARKER) {
            Some(Outcome::Passed)
        } else if line.contains(FAIL_MARKER) {
            Some(Outcome::Failed)
        } else if line.contains(SKIP_MARKER) {
            Some(Outcome::Skipped)
        } else {
            None
        }
    }
}

/// Tally of one test run
///
/// `total` always equals `passed + failed + skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Results seen
    pub total: usize,
    /// Passed results
    pub passed: usize,
    /// Failed results
    pub failed: usize,
    /// Skipped results
    pub skipped: usize,
}

impl RunCounters {
    /// Create a zeroed tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    /// Count a raw line if it carries a result marker
    pub fn record_line(&mut self, line: &str) -> Option<Outcome> {
        let outcome = Outcome::detect(line)?;
        self.record(outcome);
        Some(outcome)
    }

    /// Percentage of passed results, `None` when nothing was counted
    #[must_use]
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.passed as f64 / self.total as f64 * 100.0)
    }

    /// Check if every counted result passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }
}

/// Success-rate band shown in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every test passed
    Perfect,
    /// At least 80% passed
    Good,
    /// Below 80%
    Poor,
}

impl Verdict {
    /// Band a success rate given in percent
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate == 100.0 {
            Verdict::Perfect
        } else if rate >= 80.0 {
            Verdict::Good
        } else {
            Verdict::Poor
        }
    }

    /// Emoji printed before the success-rate line
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Verdict::Perfect => "🎉",
            Verdict::Good => "👍",
            Verdict::Poor => "⚠️",
        }
    }

    /// Color of the success-rate text
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Verdict::Perfect => Color::Green,
            Verdict::Good => Color::Yellow,
            Verdict::Poor => Color::Red,
        }
    }
}
