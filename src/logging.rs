//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to the configured log file.
///
/// A valid `RUST_LOG` wins; otherwise the crate logs at `logging.level`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file {}", config.file.display()))?;

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), &config.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    Ok(())
}

/// Filter from the `RUST_LOG` value when it is set and parses, else from the
/// configured level.
fn build_filter(env: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(filter) = env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(format!("maize_yield_predictor={}", level))
        .with_context(|| format!("Invalid log level '{}'", level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn debug_enabled(filter: EnvFilter) -> bool {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || tracing::enabled!(Level::DEBUG))
    }

    #[test]
    fn test_rust_log_overrides_configured_level() {
        let filter = build_filter(Some("maize_yield_predictor=debug"), "info").unwrap();
        assert_eq!(filter.to_string(), "maize_yield_predictor=debug");
        assert!(debug_enabled(filter));
    }

    #[test]
    fn test_configured_level_when_rust_log_unset() {
        let filter = build_filter(None, "info").unwrap();
        assert_eq!(filter.to_string(), "maize_yield_predictor=info");
        assert!(!debug_enabled(filter));

        let filter = build_filter(Some("  "), "debug").unwrap();
        assert!(debug_enabled(filter));
    }

    #[test]
    fn test_unparsable_rust_log_falls_back_to_level() {
        let filter = build_filter(Some("maize_yield_predictor=loud"), "warn").unwrap();
        assert_eq!(filter.to_string(), "maize_yield_predictor=warn");
    }

    #[test]
    fn test_invalid_configured_level_is_an_error() {
        assert!(build_filter(None, "loud").is_err());
    }
}
