//! Extension → MIME entries for formats the platform lookup may not know.

use std::collections::{HashMap, HashSet};

use crate::error::TableError;
use crate::mime_detect::GLTF_BINARY;

/// Entries every [`FallbackTable::builtin`] table starts with.
pub const BUILTIN_FALLBACKS: &[(&str, &str)] = &[
    ("mkv", "video/x-matroska"),
    ("glb", GLTF_BINARY),
];

/// Immutable extension → MIME type table.
///
/// Keys are non-empty, lowercase and dot-free; values have the form
/// `type/subtype`. Every constructor enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    entries: HashMap<String, String>,
}

impl FallbackTable {
    /// Table holding only [`BUILTIN_FALLBACKS`].
    pub fn builtin() -> Self {
        let entries = BUILTIN_FALLBACKS
            .iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from scratch. Repeated extensions are rejected.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::empty().with_overrides(entries)
    }

    /// Add entries on top of this table, replacing any existing entry with
    /// the same extension. Repeated extensions within `entries` are rejected.
    pub fn with_overrides<I, K, V>(mut self, entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        for (ext, mime) in entries {
            let (ext, mime) = (ext.into(), mime.into());
            validate_extension(&ext)?;
            if !is_well_formed_mime(&mime) {
                return Err(TableError::InvalidMimeType {
                    extension: ext,
                    mime,
                });
            }
            if !seen.insert(ext.clone()) {
                return Err(TableError::DuplicateExtension(ext));
            }
            self.entries.insert(ext, mime);
        }
        Ok(self)
    }

    /// MIME type registered for a lowercase extension.
    pub fn get(&self, extension: &str) -> Option<&str> {
        self.entries.get(extension).map(String::as_str)
    }

    /// Whether `mime` is one of the table's values.
    pub fn contains_mime(&self, mime: &str) -> bool {
        self.entries.values().any(|m| m == mime)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_extension(ext: &str) -> Result<(), TableError> {
    let reason = if ext.is_empty() {
        "must not be empty"
    } else if ext.contains('.') {
        "must not contain a dot"
    } else if ext.to_lowercase() != ext {
        "must be lowercase"
    } else {
        return Ok(());
    };
    Err(TableError::InvalidExtension {
        extension: ext.to_string(),
        reason,
    })
}

fn is_well_formed_mime(mime: &str) -> bool {
    match mime.split_once('/') {
        Some((ty, subtype)) => {
            !ty.is_empty()
                && !subtype.is_empty()
                && !subtype.contains('/')
                && !mime.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
