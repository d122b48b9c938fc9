//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

use crate::config::{LogFormat, TracingConfig};
use crate::error::ObservabilityError;

/// Install the global fmt subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). Only a filter
/// that fails to parse is reported.
pub fn init_with(config: &TracingConfig) -> Result<(), ObservabilityError> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|source| ObservabilityError::InvalidFilter {
            filter: config.filter.clone(),
            source,
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // Err here only means a global subscriber is already installed.
    let _ = match config.format {
        LogFormat::Json => builder.json().with_timer(SystemTime).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    Ok(())
}

/// Install `config`, retrying with the default filter (same format) when its
/// filter does not parse. Returns the error that forced the retry, if any.
pub fn init_or_fallback(config: &TracingConfig) -> Option<ObservabilityError> {
    match init_with(config) {
        Ok(()) => None,
        Err(err) => {
            let fallback = TracingConfig {
                format: config.format,
                ..TracingConfig::default()
            };
            // The default filter always parses.
            let _ = init_with(&fallback);
            Some(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = TracingConfig {
            filter: "debug".to_string(),
            format: LogFormat::Compact,
        };

        assert!(init_with(&config).is_ok());
        assert!(init_with(&TracingConfig::default()).is_ok());
        crate::init();
    }

    #[test]
    fn unparsable_filter_is_reported() {
        let config = TracingConfig {
            filter: "foo=notalevel[".to_string(),
            format: LogFormat::Json,
        };

        match init_with(&config) {
            Err(ObservabilityError::InvalidFilter { filter, .. }) => {
                assert_eq!(filter, "foo=notalevel[");
            }
            other => panic!("Expected InvalidFilter error, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_filter_falls_back_to_default() {
        let config = TracingConfig {
            filter: "foo=notalevel[".to_string(),
            format: LogFormat::Compact,
        };

        let problem = init_or_fallback(&config);
        assert!(matches!(problem, Some(ObservabilityError::InvalidFilter { .. })));

        let fallback = TracingConfig {
            format: config.format,
            ..TracingConfig::default()
        };
        assert!(init_with(&fallback).is_ok());
        assert!(init_or_fallback(&fallback).is_none());
    }
}
