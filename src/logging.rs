//! Logging setup for the graphgen binary.
//!
//! Diagnostics go to stderr through a `tracing` subscriber so prompts on
//! stdout stay readable. `RUST_LOG` picks the level (default `info`) and
//! `GRAPHGEN_LOG_FORMAT` picks between `human` and `json` lines.

use std::{env, sync::OnceLock};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "GRAPHGEN_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Plain text
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_string(),
            }),
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The format variable was not valid UTF-8.
    #[error("Environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Variable name
        name: &'static str,
        /// Underlying failure
        #[source]
        source: env::VarError,
    },

    /// The format variable named an unknown format.
    #[error("Unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value found in the environment
        provided: String,
    },

    /// Another subscriber already owns the global slot.
    #[error("Failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error from `tracing_subscriber`
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs the global subscriber once. Later calls are no-ops.
///
/// # Errors
///
/// Returns [`LoggingError`] if `GRAPHGEN_LOG_FORMAT` is unreadable or names an
/// unknown format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(log_format_from_env()?) {
        // Someone else configured logging first; keep theirs
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn log_format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer.json().boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
