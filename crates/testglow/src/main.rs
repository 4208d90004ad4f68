//! testglow: colorful formatter for `go test -v` output
//!
//! Reads test output from stdin, prints each line classified and colored, and
//! finishes with a pass/fail summary.
//!
//! Example:
//!   go test -v ./... | testglow

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use testglow::config::Config;
use testglow::logging;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.log_level());

    debug!(?config, "starting testglow");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let counters = testglow_format::run(stdin, stdout, &chrono::Local::now())
        .context("failed to format test output")?;

    debug!(
        total = counters.total,
        passed = counters.passed,
        failed = counters.failed,
        skipped = counters.skipped,
        "done"
    );
    Ok(())
}
