use thiserror::Error;

/// Errors raised while building a [`crate::FallbackTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: &'static str },

    #[error("invalid MIME type '{mime}' for extension '{extension}'")]
    InvalidMimeType { extension: String, mime: String },

    #[error("duplicate extension '{0}'")]
    DuplicateExtension(String),
}
