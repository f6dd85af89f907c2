//! Config validation with user-friendly error messages.
//!
//! Fallback extension keys are checked here so bad entries are reported
//! with their field path before the table is built.

use crate::schema::MimeKindConfig;
use thiserror::Error;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &MimeKindConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_fallback(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_fallback(config: &MimeKindConfig, report: &mut ValidationReport) {
    let Some(fallback) = &config.fallback else { return };
    if fallback.include_builtin == Some(false) && fallback.extensions.is_empty() {
        report.warn(
            "fallback",
            "Built-in entries disabled and no extensions configured; only the platform lookup will be used",
        );
    }
    for (ext, mime) in &fallback.extensions {
        let path = format!("fallback.extensions.{ext}");
        if ext.trim().is_empty() {
            report.error("fallback.extensions", "Extension cannot be empty");
        } else if ext.starts_with('.') {
            report.error(&path, "Extension must be given without the leading dot");
        } else if ext.contains('.') {
            report.error(&path, "Extension must not contain a dot; only the last segment is matched");
        }
        if ext.to_lowercase() != *ext {
            report.error(&path, "Extension must be lowercase");
        }
        if mime.trim().is_empty() {
            report.error(&path, "MIME type cannot be empty");
        }
    }
}

fn validate_logging(config: &MimeKindConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        // Full filter directives (`mimekind=debug,info`) are left to EnvFilter.
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            report.error(
                "logging.level",
                format!("Unknown log level '{level}'; expected one of {}", LOG_LEVELS.join(", ")),
            );
        }
    }
    if let Some(dir) = &logging.dir {
        if dir.exists() && !dir.is_dir() {
            report.error(
                "logging.dir",
                format!("{} exists and is not a directory", dir.display()),
            );
        }
    }
}
