//! Media classification by MIME type and file extension.
//!
//! [`MimeClassifier`] resolves a file path's extension through a
//! [`PlatformExtensionMap`] and falls back to a small [`FallbackTable`] for
//! formats the platform does not know. The photo / video / 3D predicates
//! work on any MIME string.

pub mod classifier;
pub mod error;
pub mod fallback;
pub mod mime_detect;
pub mod platform;

pub use classifier::MimeClassifier;
pub use error::TableError;
pub use fallback::{FallbackTable, BUILTIN_FALLBACKS};
pub use mime_detect::{
    extract_extension, is_photo, is_three_d, is_video, media_kind, MediaKind, GLTF_BINARY,
};
pub use platform::{MimeGuessMap, PlatformExtensionMap, StaticExtensionMap};
