// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the streaming reporter
//!
//! Feeds arbitrary bytes through `run`; invalid UTF-8 must surface as an
//! error, never a panic, and the tally must stay consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testglow_format::run;

fuzz_target!(|data: &[u8]| {
    let now = chrono::Utc::now();
    if let Ok(counters) = run(std::io::Cursor::new(data), std::io::sink(), &now) {
        assert_eq!(
            counters.total,
            counters.passed + counters.failed + counters.skipped
        );
    }
});
