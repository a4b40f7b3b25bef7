//! Shared plumbing for the dynascope binaries.
//!
//! All three tools are argument-less; their knobs are environment variables
//! read at startup with fixed defaults.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the given level.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Read the log level from the environment.
#[must_use]
pub fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned())
}

/// Read an environment variable, falling back to a fixed default.
#[must_use]
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_fall_back_to_default_value() {
        assert_eq!(env_or("DYNASCOPE_UNSET_TEST_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_should_default_log_level_to_info() {
        if std::env::var("LOG_LEVEL").is_err() {
            assert_eq!(log_level(), "info");
        }
    }
}
