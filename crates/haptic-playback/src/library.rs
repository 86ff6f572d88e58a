//! Pattern library: named patterns loaded from authored assets.
//!
//! Assets are YAML or JSON documents with a top-level `patterns` list. Each
//! entry is a [`Pattern`] with its keyframes inline.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use haptic_core::error::HapticError;
use haptic_core::pattern::Pattern;
use serde::Deserialize;

#[derive(Deserialize)]
struct LibraryAsset {
    patterns: Vec<Pattern>,
}

/// Read-only collection of patterns keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    patterns: BTreeMap<String, Arc<Pattern>>,
}

impl PatternLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library from already constructed patterns.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Validation` if a pattern is invalid or a name
    /// appears twice.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Result<Self, HapticError> {
        let mut library = Self::new();
        for pattern in patterns {
            library.insert(pattern)?;
        }
        Ok(library)
    }

    /// Adds a pattern and returns the shared handle to it.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Validation` if the pattern is invalid or its name
    /// is already taken.
    pub fn insert(&mut self, pattern: Pattern) -> Result<Arc<Pattern>, HapticError> {
        pattern.validate()?;
        if self.patterns.contains_key(pattern.name()) {
            return Err(HapticError::Validation(format!(
                "duplicate pattern name `{}`",
                pattern.name()
            )));
        }
        let pattern = Arc::new(pattern);
        self.patterns
            .insert(pattern.name().to_owned(), Arc::clone(&pattern));
        Ok(pattern)
    }

    /// Parses a YAML asset.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Asset` if the document does not parse or holds
    /// an invalid pattern, and `HapticError::Validation` if a name appears
    /// twice.
    pub fn from_yaml_str(source: &str) -> Result<Self, HapticError> {
        let asset: LibraryAsset = serde_yaml::from_str(source)
            .map_err(|e| HapticError::Asset(format!("invalid pattern YAML: {e}")))?;
        Self::from_patterns(asset.patterns)
    }

    /// Parses a JSON asset.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Asset` if the document does not parse or holds
    /// an invalid pattern, and `HapticError::Validation` if a name appears
    /// twice.
    pub fn from_json_str(source: &str) -> Result<Self, HapticError> {
        let asset: LibraryAsset = serde_json::from_str(source)
            .map_err(|e| HapticError::Asset(format!("invalid pattern JSON: {e}")))?;
        Self::from_patterns(asset.patterns)
    }

    /// Loads an asset file, choosing the format from its extension
    /// (`yaml`, `yml` or `json`).
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Asset` if the file cannot be read, has an unknown
    /// extension or does not parse, and `HapticError::Validation` if a name
    /// appears twice.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HapticError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let source = std::fs::read_to_string(path)
            .map_err(|e| HapticError::Asset(format!("cannot read {}: {e}", path.display())))?;

        let library = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => {
                return Err(HapticError::Asset(format!(
                    "unsupported pattern asset format: {}",
                    path.display()
                )));
            }
        };

        tracing::info!(
            path = %path.display(),
            patterns = library.len(),
            "loaded pattern library"
        );
        Ok(library)
    }

    /// Looks up a pattern by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Pattern>> {
        self.patterns.get(name).cloned()
    }

    /// Looks up a pattern by name.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::PatternNotFound` if no pattern has that name.
    pub fn require(&self, name: &str) -> Result<Arc<Pattern>, HapticError> {
        self.get(name)
            .ok_or_else(|| HapticError::PatternNotFound(name.to_owned()))
    }

    /// Pattern names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Patterns in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Pattern>> {
        self.patterns.values()
    }

    /// Number of patterns in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the library holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
