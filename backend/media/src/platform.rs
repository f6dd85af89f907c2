//! Native extension → MIME lookup, consumed by [`crate::MimeClassifier`].

use std::collections::HashMap;

/// Maps a lowercase extension (no leading dot) to a MIME type.
pub trait PlatformExtensionMap: Send + Sync {
    fn lookup(&self, extension: &str) -> Option<String>;
}

/// Lookup backed by the `mime_guess` extension database.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeGuessMap;

impl PlatformExtensionMap for MimeGuessMap {
    fn lookup(&self, extension: &str) -> Option<String> {
        mime_guess::from_ext(extension).first_raw().map(str::to_string)
    }
}

/// Fixed in-memory lookup, for hosts that ship their own extension database.
#[derive(Debug, Clone, Default)]
pub struct StaticExtensionMap {
    entries: HashMap<String, String>,
}

impl StaticExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, extension: impl Into<String>, mime: impl Into<String>) -> Self {
        self.entries.insert(extension.into(), mime.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticExtensionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PlatformExtensionMap for StaticExtensionMap {
    fn lookup(&self, extension: &str) -> Option<String> {
        self.entries.get(extension).cloned()
    }
}
