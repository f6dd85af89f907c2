//! MIME type predicates and extension parsing.
//!
//! None of these depend on a lookup table, so they are exposed as free
//! functions as well as through [`crate::MimeClassifier`].

use serde::{Deserialize, Serialize};

/// MIME type of binary glTF, the only 3D format recognized.
pub const GLTF_BINARY: &str = "model/gltf-binary";

const PHOTO_PREFIX: &str = "image/";
const VIDEO_PREFIX: &str = "video/";

/// Coarse media category of a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Photo,
    Video,
    ThreeD,
}

/// Whether a MIME type is for a photo (`image/*`).
pub fn is_photo(mime: Option<&str>) -> bool {
    mime.is_some_and(|m| m.starts_with(PHOTO_PREFIX))
}

/// Whether a MIME type is for a video (`video/*`).
pub fn is_video(mime: Option<&str>) -> bool {
    mime.is_some_and(|m| m.starts_with(VIDEO_PREFIX))
}

/// Whether a MIME type is for a 3D model. Exact match on [`GLTF_BINARY`].
pub fn is_three_d(mime: Option<&str>) -> bool {
    mime == Some(GLTF_BINARY)
}

pub fn media_kind(mime: Option<&str>) -> Option<MediaKind> {
    if is_photo(mime) {
        Some(MediaKind::Photo)
    } else if is_video(mime) {
        Some(MediaKind::Video)
    } else if is_three_d(mime) {
        Some(MediaKind::ThreeD)
    } else {
        None
    }
}

/// Text after the last `.` of `path`, or `None` if there is no dot or
/// nothing follows it. The path is not split into components.
pub fn extract_extension(path: &str) -> Option<&str> {
    let pos = path.rfind('.')?;
    let ext = &path[pos + 1..];
    if ext.is_empty() { None } else { Some(ext) }
}
