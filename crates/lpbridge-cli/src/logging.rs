//! Logging setup for the command-line runner.

use std::env;
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output layout of the stderr log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if raw.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(format!(
                "Invalid LPBRIDGE_LOG_FORMAT '{raw}' (expected 'json' or 'pretty')"
            ))
        }
    }
}

/// Build the event filter for `level`; `off` disables logging entirely.
pub fn build_filter(level: &str) -> Result<EnvFilter, String> {
    if level.eq_ignore_ascii_case("off") {
        return Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()));
    }
    EnvFilter::try_new(level).map_err(|err| format!("Invalid log filter: {err}"))
}

/// Install the global subscriber from `LPBRIDGE_TRACE` and `LPBRIDGE_LOG_FORMAT`.
///
/// Returns false when a subscriber was already installed.
pub fn init_logging() -> Result<bool, String> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let level = env::var("LPBRIDGE_TRACE").unwrap_or_else(|_| "off".to_string());
    let filter = build_filter(&level)?;
    let format = LogFormat::parse(
        &env::var("LPBRIDGE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
    )?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .json(),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .try_init(),
    };
    result.map_err(|err| format!("Failed to initialize logging: {err}"))?;

    tracing::debug!(
        component = "cli",
        operation = "init_logging",
        status = "success",
        level = level.as_str(),
        "Logging initialized"
    );
    Ok(true)
}
