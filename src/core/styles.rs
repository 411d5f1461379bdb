use std::collections::HashMap;

use crate::models::StyleEntry;

/// Case-insensitive lookup from any style id, label or value to its entry
#[derive(Debug, Clone, Default)]
pub struct StyleDictionary {
    by_key: HashMap<String, StyleEntry>,
    entries: Vec<StyleEntry>,
}

impl StyleDictionary {
    /// Register each entry under its lowercased id, label and value.
    ///
    /// Colliding keys resolve last-write-wins.
    pub fn build(entries: Vec<StyleEntry>) -> Self {
        let mut by_key = HashMap::with_capacity(entries.len() * 3);

        for entry in &entries {
            for key in [&entry.id, &entry.label, &entry.value] {
                by_key.insert(key.to_lowercase(), entry.clone());
            }
        }

        Self { by_key, entries }
    }

    #[inline]
    pub fn lookup(&self, style: &str) -> Option<&StyleEntry> {
        self.by_key.get(&style.to_lowercase())
    }

    /// Canonical label for a style string, or the string itself when unknown
    pub fn canonical_label(&self, style: &str) -> String {
        match self.lookup(style) {
            Some(entry) => entry.label.clone(),
            None => style.to_string(),
        }
    }

    /// Entries in the order they were loaded
    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Build the style dictionary for a session
pub fn build_style_dictionary(entries: Vec<StyleEntry>) -> StyleDictionary {
    StyleDictionary::build(entries)
}
