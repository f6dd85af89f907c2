//! Structured logging setup for mimekind.
//!
//! Console output in a configurable style, optional daily rolling NDJSON file,
//! and `RUST_LOG` level control.

pub mod logger;

pub use logger::{init_from_config, init_logger};
