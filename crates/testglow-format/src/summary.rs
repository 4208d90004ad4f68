// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Summary block printed after input is exhausted

use crate::color::{Color, paint};
use crate::counters::{RunCounters, Verdict};
use crate::header::rule;

/// Render the success-rate line, `None` when no test was counted
#[must_use]
pub fn render_success_rate(counters: &RunCounters) -> Option<String> {
    let rate = counters.success_rate()?;
    let verdict = Verdict::from_rate(rate);
    Some(format!(
        "{} {}",
        verdict.emoji(),
        paint(&format!("Success Rate: {rate:.1}%"), verdict.color())
    ))
}

/// Render the full summary block
///
/// `Failed` and `Skipped` lines only appear when their counts are non-zero,
/// and the success rate only when at least one test was counted.
#[must_use]
pub fn render_summary(counters: &RunCounters) -> String {
    let rule = rule();
    let mut output = String::new();

    output.push_str(&format!("\n{rule}\n"));
    output.push_str(&format!("{}\n", paint("📊 TEST SUMMARY", Color::Bold)));
    output.push_str(&format!("{rule}\n"));

    output.push_str(&format!(
        "\n{} {}\n",
        paint("Total Tests:", Color::Bold),
        counters.total
    ));
    output.push_str(&format!(
        "{} {}\n",
        paint("✅ Passed:", Color::Green),
        counters.passed
    ));
    if counters.failed > 0 {
        output.push_str(&format!(
            "{} {}\n",
            paint("❌ Failed:", Color::Red),
            counters.failed
        ));
    }
    if counters.skipped > 0 {
        output.push_str(&format!(
            "{} {}\n",
            paint("⏭️ Skipped:", Color::Yellow),
            counters.skipped
        ));
    }

    if let Some(line) = render_success_rate(counters) {
        output.push_str(&format!("\n{line}\n"));
    }

    output.push_str(&format!("\n{rule}\n\n"));
    output
}
