//! testglow library
//!
//! This module exports the command-line plumbing of testglow for use in
//! integration tests.

pub mod config;
pub mod logging;
