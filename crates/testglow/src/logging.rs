//! Logging setup
//!
//! Logs go to stderr so that stdout carries only the formatted test output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` directives plus the level from the CLI
#[must_use]
pub fn filter(level: Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Install the global tracing subscriber
///
/// Calling this more than once keeps the first subscriber. Returns `false`
/// when a global subscriber was already installed.
pub fn init(level: Level) -> bool {
    match tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "tracing subscriber already installed");
            false
        }
    }
}
