// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the --verbose / -v and --quiet / -q flags
//!
//! These tests verify the logging level configuration behavior,
//! including flag interactions and level determination.

use clap::Parser;
use testglow::config::Config;
use tracing::Level;

// ============================================================================
// --verbose flag tests
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["testglow", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(!config.quiet);
}

#[test]
fn test_verbose_long_flag() {
    let config = Config::try_parse_from(["testglow", "--verbose"]).expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["testglow", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

// ============================================================================
// --quiet flag tests
// ============================================================================

#[test]
fn test_quiet_short_flag_q() {
    let config = Config::try_parse_from(["testglow", "-q"]).expect("parse should succeed");
    assert!(config.quiet);
    assert!(!config.verbose);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["testglow", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

// ============================================================================
// Flag interactions
// ============================================================================

#[test]
fn test_verbose_wins_over_quiet() {
    let config = Config::try_parse_from(["testglow", "-v", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_combined_short_flags() {
    let config = Config::try_parse_from(["testglow", "-vq"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(config.quiet);
}

#[test]
fn test_positional_arguments_rejected() {
    let result = Config::try_parse_from(["testglow", "results.txt"]);
    assert!(result.is_err(), "input is read from stdin only");
}

#[test]
fn test_unknown_flag_rejected() {
    let result = Config::try_parse_from(["testglow", "--no-color"]);
    assert!(result.is_err());
}
