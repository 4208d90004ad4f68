// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification for `go test -v` output
//!
//! Each raw line is matched against an ordered table of rules. The first rule
//! whose predicate accepts the line decides how it is rendered; lines no rule
//! accepts are passed through untouched so that piping through the formatter
//! never loses content.
//!
//! # Example
//!
//! ```
//! use testglow_format::classify::{Category, classify};
//!
//! let line = classify("--- PASS: TestFoo (0.05s)\n");
//! assert_eq!(line.category(), Some(Category::Passed));
//! assert_eq!(line.text(), "✅ PASSED: TestFoo (0.05s)");
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, paint};

pub(crate) const RUN_MARKER: &str = "=== RUN";
pub(crate) const PASS_MARKER: &str = "--- PASS:";
pub(crate) const FAIL_MARKER: &str = "--- FAIL:";
pub(crate) const SKIP_MARKER: &str = "--- SKIP:";

/// Duration used when a PASS/FAIL line carries no parenthesized group
pub const DEFAULT_DURATION: &str = "0.00s";

// First parenthesized group anywhere on the line, not just after the name.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("duration pattern is valid"));

/// What kind of line the classifier recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `=== RUN` announcement
    Running,
    /// `--- PASS:` result
    Passed,
    /// `--- FAIL:` result
    Failed,
    /// `--- SKIP:` result
    Skipped,
    /// A line mentioning `error:`
    Error,
    /// A `coverage:` report
    Coverage,
    /// A benchmark result line
    Benchmark,
}

impl Category {
    /// The color a line of this category is painted with
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Category::Running => Color::Blue,
            Category::Passed => Color::Green,
            Category::Failed | Category::Error => Color::Red,
            Category::Skipped => Color::Yellow,
            Category::Coverage => Color::Cyan,
            Category::Benchmark => Color::Magenta,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Running => "running",
            Category::Passed => "passed",
            Category::Failed => "failed",
            Category::Skipped => "skipped",
            Category::Error => "error",
            Category::Coverage => "coverage",
            Category::Benchmark => "benchmark",
        };
        f.write_str(name)
    }
}

/// The display form of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine<'a> {
    /// A recognized line, reformatted
    Formatted {
        /// Which rule matched
        category: Category,
        /// Display text, without color codes or terminator
        text: String,
    },
    /// An unrecognized line, exactly as read (terminator included)
    Passthrough(&'a str),
}

impl ClassifiedLine<'_> {
    /// The matched category, if any
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self {
            ClassifiedLine::Formatted { category, .. } => Some(*category),
            ClassifiedLine::Passthrough(_) => None,
        }
    }

    /// The uncolored display text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ClassifiedLine::Formatted { text, .. } => text,
            ClassifiedLine::Passthrough(raw) => raw,
        }
    }
}

impl fmt::Display for ClassifiedLine<'_> {
    /// Formatted lines are painted in their category color; passthrough lines
    /// are written verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifiedLine::Formatted { category, text } => {
                f.write_str(&paint(text, category.color()))
            }
            ClassifiedLine::Passthrough(raw) => f.write_str(raw),
        }
    }
}

/// One entry of the dispatch table
struct Rule {
    category: Category,
    matches: fn(&str) -> bool,
    format: fn(&str) -> String,
}

/// Classification rules in priority order; the first match wins.
static RULES: [Rule; 7] = [
    Rule {
        category: Category::Running,
        matches: |line| line.contains(RUN_MARKER),
        format: |line| format!("🏃 Running: {}", after_last(line, "RUN").trim()),
    },
    Rule {
        category: Category::Passed,
        matches: |line| line.contains(PASS_MARKER),
        format: |line| {
            format!(
                "✅ PASSED: {} ({})",
                result_name(line, "PASS:"),
                duration(line)
            )
        },
    },
    Rule {
        category: Category::Failed,
        matches: |line| line.contains(FAIL_MARKER),
        format: |line| {
            format!(
                "❌ FAILED: {} ({})",
                result_name(line, "FAIL:"),
                duration(line)
            )
        },
    },
    Rule {
        category: Category::Skipped,
        matches: |line| line.contains(SKIP_MARKER),
        format: |line| format!("⏭️ SKIPPED: {}", after_last(line, "SKIP:").trim()),
    },
    Rule {
        category: Category::Error,
        matches: |line| {
            line.trim().starts_with("Error:") || line.to_lowercase().contains("error:")
        },
        format: |line| format!("⚠️ {}", line.trim()),
    },
    Rule {
        category: Category::Coverage,
        matches: |line| line.contains("coverage:"),
        format: |line| format!("📊 {}", line.trim()),
    },
    Rule {
        category: Category::Benchmark,
        matches: |line| line.contains("Benchmark") && line.contains("ns/op"),
        format: |line| format!("🏎️ {}", line.trim()),
    },
];

/// Classify one raw line
///
/// The line may still carry its terminator; formatted output never does,
/// while passthrough output keeps it.
#[must_use]
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map_or(ClassifiedLine::Passthrough(line), |rule| {
            ClassifiedLine::Formatted {
                category: rule.category,
                text: (rule.format)(line),
            }
        })
}

/// Classify and render one line, colors included
#[must_use]
pub fn format_line(line: &str) -> String {
    classify(line).to_string()
}

/// Text following the last occurrence of `marker`
fn after_last<'a>(line: &'a str, marker: &str) -> &'a str {
    line.rsplit_once(marker).map_or(line, |(_, rest)| rest)
}

/// Test name of a PASS/FAIL line: after the marker, up to the first `(`
fn result_name<'a>(line: &'a str, marker: &str) -> &'a str {
    let rest = after_last(line, marker);
    rest.split('(').next().unwrap_or(rest).trim()
}

/// First parenthesized group on the line, or [`DEFAULT_DURATION`]
fn duration(line: &str) -> &str {
    DURATION_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_DURATION, |m| m.as_str())
}
