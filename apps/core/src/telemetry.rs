//! Telemetry Module
//!
//! Installs the global `tracing` subscriber. All output goes to stderr so that
//! command results on stdout stay clean for piping.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use assist_core::config::LogFormat;
//! use assist_core::telemetry;
//!
//! telemetry::init_tracing(LogFormat::Json, "info")?;
//! ```

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;

/// Name reported in bunyan records
const SERVICE_NAME: &str = "assist";

/// Map a `-v` count to a filter directive, `None` keeps the configured level
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise the given directive
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_tracing(format: LogFormat, default_directive: &str) -> Result<(), AppError> {
    let registry = tracing_subscriber::registry().with(build_filter(default_directive));

    let result = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Bunyan => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.to_string(),
                std::io::stderr,
            ))
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
