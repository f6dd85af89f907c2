//! `mimekind-config` — configuration for the mimekind classifier.
//!
//! Provides:
//! - Typed config schema (fallback table entries, logging)
//! - YAML read/write
//! - Default value application
//! - Validation with field paths

pub mod defaults;
pub mod io;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use schema::{ConsoleStyle, FallbackConfig, LoggingConfig, MimeKindConfig};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use defaults::{apply_all_defaults, DEFAULT_LOG_LEVEL};
pub use validation::{validate, ValidationReport, ConfigValidationError};

use anyhow::{bail, Result};
use std::path::Path;

/// Load a config file, apply defaults, and validate it.
///
/// This is the main entry point for loading a config at startup.
/// Validation warnings are logged; any validation error fails the load.
pub async fn load_and_prepare(path: &Path) -> Result<MimeKindConfig> {
    let config = apply_all_defaults(load_config(path).await?);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        bail!(
            "{} has {} invalid setting(s); first: {}",
            path.display(),
            report.errors.len(),
            report.errors[0]
        );
    }

    Ok(config)
}
