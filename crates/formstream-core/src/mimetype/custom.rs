//! Caller-extensible mimetype table.

use std::collections::HashMap;

use super::table::StandardMimetypes;
use super::MimetypeResolver;

/// Override layer checked before [`StandardMimetypes`].
///
/// `add_mapping` only touches the overrides; the base table is never changed.
#[derive(Debug, Clone, Default)]
pub struct CustomMimetypes {
    overrides: HashMap<String, String>,
    base: StandardMimetypes,
}

impl CustomMimetypes {
    /// Creates a resolver seeded with `extension => mimetype` pairs.
    pub fn new<I, K, V>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut this = Self::default();
        for (ext, mime) in mappings {
            this.add_mapping(ext.as_ref(), mime);
        }
        this
    }

    /// Adds or replaces the mapping for `extension`.
    pub fn add_mapping(&mut self, extension: &str, mimetype: impl Into<String>) -> &mut Self {
        self.overrides
            .insert(extension.to_ascii_lowercase(), mimetype.into());
        self
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl MimetypeResolver for CustomMimetypes {
    fn resolve_extension(&self, extension: &str) -> Option<&str> {
        let extension = extension.to_ascii_lowercase();
        match self.overrides.get(&extension) {
            Some(mime) => Some(mime.as_str()),
            None => self.base.resolve_extension(&extension),
        }
    }
}
