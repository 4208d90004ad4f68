// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for testglow-format
//!
//! These tests use proptest to check that the counters stay consistent and
//! that the classifier never loses unrecognized content, whatever the input.

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use testglow_format::{ClassifiedLine, RunCounters, Reporter, classify, run};

// ============================================================================
// Strategies
// ============================================================================

/// Lines resembling `go test -v` output, plus noise
fn go_test_line() -> impl Strategy<Value = String> {
    let name = "[A-Za-z][A-Za-z0-9_/]{0,20}";
    prop_oneof![
        name.prop_map(|n| format!("=== RUN   {n}\n")),
        (name, 0u32..500).prop_map(|(n, ms)| format!("--- PASS: {n} (0.{ms:03}s)\n")),
        (name, 0u32..500).prop_map(|(n, ms)| format!("    --- FAIL: {n} (0.{ms:03}s)\n")),
        name.prop_map(|n| format!("--- SKIP: {n}\n")),
        Just("coverage: 50.0% of statements\n".to_string()),
        Just("BenchmarkX-8   100   12 ns/op\n".to_string()),
        Just("    x_test.go:3: error: boom\n".to_string()),
        Just("PASS\n".to_string()),
        ".{0,60}".prop_map(|s| format!("{s}\n")),
    ]
}

/// Lines guaranteed to carry none of the recognized markers
fn plain_line() -> impl Strategy<Value = String> {
    "[a-z0-9 \\t.,/]{0,80}(\n|\r\n)?"
}

proptest! {
    #[test]
    fn counters_total_is_sum_after_every_line(lines in prop::collection::vec(go_test_line(), 0..60)) {
        let mut reporter = Reporter::new(std::io::sink());
        for line in &lines {
            reporter.process_line(line).expect("sink accepts writes");
            let c = reporter.counters();
            prop_assert_eq!(c.total, c.passed + c.failed + c.skipped);
        }
    }

    #[test]
    fn plain_lines_pass_through_unchanged(line in plain_line()) {
        prop_assert_eq!(classify(&line), ClassifiedLine::Passthrough(&line));
        prop_assert_eq!(classify(&line).to_string(), line);
    }

    #[test]
    fn classifier_never_panics(line in ".*") {
        let _ = classify(&line).to_string();
    }

    #[test]
    fn run_counts_match_markers(lines in prop::collection::vec(go_test_line(), 0..60)) {
        let input: String = lines.concat();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let counters = run(Cursor::new(input.as_bytes()), std::io::sink(), &now)
            .expect("run should succeed");

        let expected = lines.iter().fold(RunCounters::new(), |mut acc, line| {
            acc.record_line(line);
            acc
        });
        prop_assert_eq!(counters, expected);
        prop_assert_eq!(
            counters.passed,
            lines.iter().filter(|l| l.contains("--- PASS:")).count()
        );
    }

    #[test]
    fn success_rate_is_a_percentage(passed in 0usize..1000, failed in 0usize..1000) {
        let counters = RunCounters { total: passed + failed, passed, failed, skipped: 0 };
        match counters.success_rate() {
            Some(rate) => prop_assert!((0.0..=100.0).contains(&rate)),
            None => prop_assert_eq!(counters.total, 0),
        }
    }
}
