//! Errors raised while configuring tracing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("unknown log format {0:?} (expected json, pretty or compact)")]
    UnknownLogFormat(String),

    #[error("invalid log filter {filter:?}: {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}
