//! Structured Logger
//!
//! Wraps `tracing` with a console layer in the configured style, an optional
//! daily rolling NDJSON file, and environment-based level control.

use anyhow::{Context, Result};
use mimekind_config::{ConsoleStyle, LoggingConfig, DEFAULT_LOG_LEVEL};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Prefix of the rolling log file: `mimekind.YYYY-MM-DD.log`.
const LOG_FILE_PREFIX: &str = "mimekind";

/// Initialize the global structured logger.
///
/// `RUST_LOG` takes precedence over `level`. When `log_dir` is set, events are
/// also written there as NDJSON. Returns `Ok(false)` if a global subscriber
/// was already installed.
pub fn init_logger(log_dir: Option<&Path>, level: &str, style: ConsoleStyle) -> Result<bool> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level or filter: {level}"))?,
    };

    let console_layer = match style {
        ConsoleStyle::Pretty => fmt::layer().pretty().with_target(false).boxed(),
        ConsoleStyle::Compact => fmt::layer().compact().with_target(false).boxed(),
        ConsoleStyle::Json => fmt::layer().json().boxed(),
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .build(dir)
                .with_context(|| format!("Failed to open log directory: {}", dir.display()))?;
            Some(fmt::layer().json().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Initialize the logger from the `logging` config section.
pub fn init_from_config(config: Option<&LoggingConfig>) -> Result<bool> {
    let level = config
        .and_then(|c| c.level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let style = config.and_then(|c| c.console_style).unwrap_or_default();
    let dir = config.and_then(|c| c.dir.as_deref());
    init_logger(dir, level, style)
}
