//! Configuration for the testglow CLI
//!
//! testglow is meant to be invoked without arguments at the end of a pipe.
//! The only options control diagnostic logging on stderr; none of them change
//! what is written to stdout.

use clap::Parser;

/// testglow - colorful formatter for go test output
///
/// Reads `go test -v` output from stdin and prints it classified and colored,
/// followed by a summary of passed, failed and skipped tests.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testglow")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the formatted output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
