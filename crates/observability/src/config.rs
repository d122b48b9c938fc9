//! Log configuration (filter directives + output format) read from the environment.

use core::str::FromStr;

use crate::error::ObservabilityError;

/// Environment variable holding the `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(ObservabilityError::UnknownLogFormat(s.to_string())),
        }
    }
}

/// Tracing configuration (filter + format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and `STOREFRONT_LOG_FORMAT` from the process environment.
    pub fn from_env() -> Result<Self, ObservabilityError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TracingConfig::from_env`], but an unknown format falls back to
    /// the default one. The filter is kept either way.
    pub fn from_env_lenient() -> (Self, Option<ObservabilityError>) {
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ObservabilityError> {
        match Self::from_lookup_lenient(lookup) {
            (config, None) => Ok(config),
            (_, Some(err)) => Err(err),
        }
    }

    /// Build a config from a lookup, reporting (rather than failing on) an
    /// unknown format.
    pub fn from_lookup_lenient(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Option<ObservabilityError>) {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = read(FILTER_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let (format, problem) = match read(FORMAT_ENV).map(|raw| raw.parse::<LogFormat>()) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
        };

        (Self { filter, format }, problem)
    }
}
