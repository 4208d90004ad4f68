// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testglow-format

use thiserror::Error;

/// Errors that can occur while formatting a test run
///
/// Classification itself never fails; only the surrounding streams can.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Error reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
