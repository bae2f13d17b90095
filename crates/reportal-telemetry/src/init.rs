//! Telemetry initialisation primitives and logging configuration.
//!
//! # Design
//! - Centralises subscriber setup (fmt or JSON) behind a single entry point.
//! - Records the build identifier once so every module reports the same value.
//! - Browsers expose no environment, so the filter comes from configuration only.

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::console::ConsoleWriter;
use crate::error::{Result, TelemetryError};

/// Default log directive when the caller does not override it.
pub const DEFAULT_LOG_LEVEL: &str = "info";

static BUILD_ID: OnceCell<String> = OnceCell::new();

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the level directive is malformed or a subscriber has
/// already been installed for this thread of execution.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    BUILD_ID.set(config.build_id.to_string()).ok().or(Some(()));

    let filter =
        EnvFilter::try_new(config.level).map_err(|source| TelemetryError::InvalidLevel {
            level: config.level.to_string(),
            source,
        })?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .without_time()
                    .with_target(true)
                    .with_writer(ConsoleWriter),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .without_time()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(ConsoleWriter),
            )
            .try_init(),
    };
    installed.map_err(|source| TelemetryError::SubscriberInstall { source })?;

    tracing::debug!(build = build_id(), "logging initialised");
    Ok(())
}

/// Access the build identifier recorded during logging initialisation.
#[must_use]
pub fn build_id() -> &'static str {
    BUILD_ID.get().map_or("dev", String::as_str)
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive (e.g., `info`, `reportal_ui=debug`).
    pub level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
    /// Build identifier recorded alongside startup events.
    pub build_id: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
            build_id: option_env!("REPORTAL_BUILD_ID").unwrap_or("dev"),
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable single-line logs.
    Pretty,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}
