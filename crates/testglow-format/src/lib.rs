// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testglow-format: Go test output classification for testglow
//!
//! This library crate turns raw `go test -v` output into colored, emoji-tagged
//! lines and tallies passed, failed and skipped results into a summary.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use testglow_format::reporter::run;
//!
//! let stdin = io::stdin().lock();
//! let stdout = io::stdout().lock();
//! let counters = run(stdin, stdout, &chrono::Local::now()).unwrap();
//! println!("{} tests", counters.total);
//! ```

pub mod classify;
pub mod color;
pub mod counters;
pub mod error;
pub mod header;
pub mod reporter;
pub mod summary;

pub use classify::{Category, ClassifiedLine, classify, format_line};
pub use counters::{Outcome, RunCounters, Verdict};
pub use error::FormatError;
pub use reporter::{Reporter, run};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::classify::{Category, classify};
    pub use crate::counters::RunCounters;
    pub use crate::error::FormatError;
    pub use crate::reporter::{Reporter, run};
}
