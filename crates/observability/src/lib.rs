//! Tracing and logging (shared setup).

/// Log configuration read from the environment.
pub mod config;
/// Errors raised while configuring observability.
pub mod error;
/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, TracingConfig};
pub use error::ObservabilityError;

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// A malformed format or filter falls back to its own default (the other
/// setting is kept) and is reported once the subscriber is up.
pub fn init() {
    let (config, format_problem) = TracingConfig::from_env_lenient();
    let filter_problem = tracing::init_or_fallback(&config);

    for err in format_problem.iter().chain(filter_problem.iter()) {
        ::tracing::warn!(error = %err, "invalid log configuration; using defaults");
    }
}
