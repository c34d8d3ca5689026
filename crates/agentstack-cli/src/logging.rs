//! Subscriber setup for `tracing` events from every crate.
//!
//! `RUST_LOG` wins over `--log-level`. The browser installs a sink writer so
//! log lines never land on the alternate screen.

use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Discard,
}

pub fn init(level: LogLevel, target: LogTarget) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A second init (tests calling `run` twice) keeps the first subscriber.
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
}
