//! Path and MIME type classification over a platform lookup plus a
//! [`FallbackTable`].

#[cfg(feature = "config")]
use mimekind_config::MimeKindConfig;
use tracing::{debug, trace};

#[cfg(feature = "config")]
use crate::error::TableError;
use crate::fallback::FallbackTable;
use crate::mime_detect::{self, MediaKind};
use crate::platform::{MimeGuessMap, PlatformExtensionMap};

/// Classifies media by MIME type and derives MIME types from file paths.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct MimeClassifier<M = MimeGuessMap> {
    platform: M,
    fallback: FallbackTable,
}

impl MimeClassifier<MimeGuessMap> {
    /// `mime_guess` lookup with the built-in fallback table.
    pub fn new() -> Self {
        Self::with_platform(MimeGuessMap, FallbackTable::builtin())
    }
}

impl Default for MimeClassifier<MimeGuessMap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: PlatformExtensionMap> MimeClassifier<M> {
    pub fn with_platform(platform: M, fallback: FallbackTable) -> Self {
        Self { platform, fallback }
    }

    /// Build the fallback table described by `config` and pair it with
    /// `platform`.
    #[cfg(feature = "config")]
    pub fn from_config(platform: M, config: &MimeKindConfig) -> Result<Self, TableError> {
        let fallback_cfg = config.fallback.clone().unwrap_or_default();
        let base = if fallback_cfg.include_builtin.unwrap_or(true) {
            FallbackTable::builtin()
        } else {
            FallbackTable::empty()
        };
        let fallback = base.with_overrides(fallback_cfg.extensions)?;
        debug!(entries = fallback.len(), "Built fallback MIME table");
        Ok(Self::with_platform(platform, fallback))
    }

    pub fn fallback(&self) -> &FallbackTable {
        &self.fallback
    }

    pub fn is_photo(&self, mime: Option<&str>) -> bool {
        mime_detect::is_photo(mime)
    }

    pub fn is_video(&self, mime: Option<&str>) -> bool {
        mime_detect::is_video(mime)
    }

    pub fn is_three_d(&self, mime: Option<&str>) -> bool {
        mime_detect::is_three_d(mime)
    }

    /// Whether `mime` is supported only through the fallback table, i.e. it
    /// is one of the table's values.
    pub fn is_non_native_supported_mime_type(&self, mime: &str) -> bool {
        self.fallback.contains_mime(mime)
    }

    /// MIME type for `path`, from its extension.
    ///
    /// The platform lookup wins over the fallback table. Returns `None` when
    /// the path has no extension or neither source knows it.
    pub fn extract_mime(&self, path: &str) -> Option<String> {
        let extension = mime_detect::extract_extension(path)?.to_lowercase();

        if let Some(mime) = self.platform.lookup(&extension) {
            trace!(%extension, %mime, "Platform MIME lookup hit");
            return Some(mime);
        }

        let mime = self.fallback.get(&extension).map(str::to_string);
        match &mime {
            Some(mime) => debug!(%extension, %mime, "Resolved MIME type from fallback table"),
            None => trace!(%extension, "Unknown extension"),
        }
        mime
    }

    /// Media category of the file at `path`.
    pub fn classify_path(&self, path: &str) -> Option<MediaKind> {
        mime_detect::media_kind(self.extract_mime(path).as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::StaticExtensionMap;

    fn fake_platform() -> StaticExtensionMap {
        [
            ("jpg", "image/jpeg"),
            ("png", "image/png"),
            ("gz", "application/gzip"),
            ("mp4", "video/mp4"),
        ]
        .into_iter()
        .collect()
    }

    fn classifier() -> MimeClassifier<StaticExtensionMap> {
        MimeClassifier::with_platform(fake_platform(), FallbackTable::builtin())
    }

    #[test]
    fn platform_answer_is_used() {
        assert_eq!(classifier().extract_mime("photo.jpg").as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn fallback_fills_platform_gaps() {
        let c = classifier();
        assert_eq!(c.extract_mime("video.mkv").as_deref(), Some("video/x-matroska"));
        assert_eq!(c.extract_mime("model.glb").as_deref(), Some("model/gltf-binary"));
    }

    #[test]
    fn platform_takes_precedence_over_fallback() {
        let platform = fake_platform().insert("mkv", "video/matroska");
        let c = MimeClassifier::with_platform(platform, FallbackTable::builtin());
        assert_eq!(c.extract_mime("clip.mkv").as_deref(), Some("video/matroska"));
    }

    #[test]
    fn no_extension_is_unknown() {
        let c = classifier();
        assert_eq!(c.extract_mime("noextension"), None);
        assert_eq!(c.extract_mime("trailing."), None);
        assert_eq!(c.extract_mime(""), None);
        assert_eq!(c.extract_mime("file.unknownext"), None);
    }

    #[test]
    fn only_last_segment_counts() {
        let c = classifier();
        assert_eq!(c.extract_mime("archive.tar.gz").as_deref(), Some("application/gzip"));
        assert_eq!(c.extract_mime("backup.mkv.tar"), None);
    }

    #[test]
    fn extension_case_is_folded() {
        let c = classifier();
        assert_eq!(c.extract_mime("IMG.MKV"), c.extract_mime("img.mkv"));
        assert_eq!(c.extract_mime("IMG.JPG").as_deref(), Some("image/jpeg"));
        assert_eq!(c.extract_mime("Scene.GlB").as_deref(), Some("model/gltf-binary"));
    }

    #[test]
    fn case_folding_ignores_locale() {
        let platform = StaticExtensionMap::new().insert("gif", "image/gif");
        let c = MimeClassifier::with_platform(platform, FallbackTable::empty());
        // Capital I folds to ASCII i regardless of the host locale.
        assert_eq!(c.extract_mime("ANIM.GIF").as_deref(), Some("image/gif"));
    }

    #[test]
    fn extract_mime_is_idempotent() {
        let c = classifier();
        assert_eq!(c.extract_mime("video.mkv"), c.extract_mime("video.mkv"));
        assert_eq!(c.extract_mime("photo.jpg"), c.extract_mime("photo.jpg"));
    }

    #[test]
    fn non_native_supported_types() {
        let c = classifier();
        assert!(c.is_non_native_supported_mime_type("video/x-matroska"));
        assert!(c.is_non_native_supported_mime_type("model/gltf-binary"));
        assert!(!c.is_non_native_supported_mime_type("image/jpeg"));
        assert!(!c.is_non_native_supported_mime_type("mkv"));
    }

    #[test]
    fn predicates_delegate() {
        let c = classifier();
        assert!(c.is_photo(Some("image/jpeg")));
        assert!(c.is_video(Some("video/mp4")));
        assert!(c.is_three_d(Some("model/gltf-binary")));
        assert!(!c.is_photo(None));
        assert!(!c.is_video(None));
        assert!(!c.is_three_d(None));
    }

    #[test]
    fn classify_path_combines_lookup_and_kind() {
        let c = classifier();
        assert_eq!(c.classify_path("a/b/photo.PNG"), Some(MediaKind::Photo));
        assert_eq!(c.classify_path("clip.mkv"), Some(MediaKind::Video));
        assert_eq!(c.classify_path("scene.glb"), Some(MediaKind::ThreeD));
        assert_eq!(c.classify_path("archive.tar.gz"), None);
        assert_eq!(c.classify_path("README"), None);
    }

    #[cfg(feature = "config")]
    mod config {
        use super::*;
        use mimekind_config::schema::FallbackConfig;
        use std::collections::HashMap;

        #[test]
        fn from_config_extends_builtin_table() {
            let config = MimeKindConfig {
                fallback: Some(FallbackConfig {
                    include_builtin: None,
                    extensions: HashMap::from([("heic".to_string(), "image/heic".to_string())]),
                }),
                ..Default::default()
            };
            let c = MimeClassifier::from_config(fake_platform(), &config).unwrap();
            assert_eq!(c.fallback().len(), 3);
            assert_eq!(c.extract_mime("IMG_0001.HEIC").as_deref(), Some("image/heic"));
            assert!(c.is_non_native_supported_mime_type("image/heic"));
            assert!(c.is_non_native_supported_mime_type("video/x-matroska"));
        }

        #[test]
        fn from_config_can_drop_builtin_table() {
            let config = MimeKindConfig {
                fallback: Some(FallbackConfig {
                    include_builtin: Some(false),
                    extensions: HashMap::new(),
                }),
                ..Default::default()
            };
            let c = MimeClassifier::from_config(fake_platform(), &config).unwrap();
            assert!(c.fallback().is_empty());
            assert_eq!(c.extract_mime("video.mkv"), None);
        }

        #[test]
        fn from_config_rejects_invalid_entries() {
            let config = MimeKindConfig {
                fallback: Some(FallbackConfig {
                    include_builtin: None,
                    extensions: HashMap::from([("HEIC".to_string(), "image/heic".to_string())]),
                }),
                ..Default::default()
            };
            let err = MimeClassifier::from_config(fake_platform(), &config).unwrap_err();
            assert!(matches!(err, TableError::InvalidExtension { .. }));
        }
    }

    #[test]
    fn default_classifier_uses_mime_guess() {
        let c = MimeClassifier::default();
        assert_eq!(c.extract_mime("photo.JPG").as_deref(), Some("image/jpeg"));
        assert_eq!(c.extract_mime("clip.mkv").as_deref(), Some("video/x-matroska"));
        assert_eq!(c.fallback(), &FallbackTable::builtin());
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        let c = std::sync::Arc::new(classifier());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = c.clone();
                std::thread::spawn(move || c.extract_mime("video.mkv"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("video/x-matroska"));
        }
    }
}
