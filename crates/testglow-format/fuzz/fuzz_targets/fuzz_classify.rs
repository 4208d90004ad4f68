// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the line classifier
//!
//! Any line must classify without panicking, and unrecognized lines must
//! render byte for byte.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testglow_format::{ClassifiedLine, classify};

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let classified = classify(line);
        let rendered = classified.to_string();
        if let ClassifiedLine::Passthrough(_) = classified {
            assert_eq!(rendered, line);
        }
    }
});
