//! User-supplied extension overrides consulted before the built-in table.

use std::path::Path;

use hashbrown::HashMap;
use thiserror::Error;

use super::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionMapError {
    #[error("extension mapping '{from}={to}': '{to}' is not a registered extension")]
    UnknownTarget { from: String, to: String },

    #[error("extension mapping has an empty extension")]
    EmptyExtension,
}

/// Extension lookup with overrides, e.g. `tpl=js` counts `*.tpl` as JavaScript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMap {
    overrides: HashMap<String, Language>,
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

impl ExtensionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `from` onto the language registered for `to`.
    ///
    /// # Errors
    /// Fails when either side is empty or `to` is not a registered extension.
    pub fn insert(&mut self, from: &str, to: &str) -> Result<(), ExtensionMapError> {
        let from = normalize(from);
        let to = normalize(to);
        if from.is_empty() || to.is_empty() {
            return Err(ExtensionMapError::EmptyExtension);
        }
        let language = Language::from_extension(&to)
            .ok_or_else(|| ExtensionMapError::UnknownTarget { from: from.clone(), to })?;
        self.overrides.insert(from, language);
        Ok(())
    }

    /// Builds a map from `(from, to)` pairs.
    ///
    /// # Errors
    /// See [`ExtensionMap::insert`].
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ExtensionMapError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (from, to) in pairs {
            map.insert(from.as_ref(), to.as_ref())?;
        }
        Ok(map)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    #[must_use]
    pub fn lookup_extension(&self, ext: &str) -> Option<Language> {
        let ext = normalize(ext);
        self.overrides
            .get(&ext)
            .copied()
            .or_else(|| Language::from_extension(&ext))
    }

    /// Resolves the language of `path`; `None` means the file is skipped.
    #[must_use]
    pub fn lookup(&self, path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.lookup_extension(e))
    }
}
