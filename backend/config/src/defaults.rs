//! Config defaults: applies default values to parsed config.

use crate::schema::{ConsoleStyle, FallbackConfig, LoggingConfig, MimeKindConfig};

/// Default log level when neither config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: MimeKindConfig) -> MimeKindConfig {
    let config = apply_fallback_defaults(config);
    apply_logging_defaults(config)
}

/// Built-in fallback entries are included unless disabled.
fn apply_fallback_defaults(mut config: MimeKindConfig) -> MimeKindConfig {
    let fallback = config.fallback.get_or_insert_with(FallbackConfig::default);
    if fallback.include_builtin.is_none() {
        fallback.include_builtin = Some(true);
    }
    config
}

fn apply_logging_defaults(mut config: MimeKindConfig) -> MimeKindConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.console_style.is_none() {
        logging.console_style = Some(ConsoleStyle::default());
    }
    config
}
