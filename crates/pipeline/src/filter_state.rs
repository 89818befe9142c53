//! User-controlled filter inputs.

use std::collections::BTreeSet;

/// Selected tags and the free-text query.
///
/// Derived per page session; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_tags: BTreeSet<String>,
    pub search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to preselect tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Flip a tag's selection. Returns `true` if the tag is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    /// The query with surrounding whitespace removed
    pub fn trimmed_query(&self) -> &str {
        self.search_query.trim()
    }

    /// Whether any filter would narrow the list
    pub fn is_active(&self) -> bool {
        !self.selected_tags.is_empty() || !self.trimmed_query().is_empty()
    }

    pub fn clear(&mut self) {
        self.selected_tags.clear();
        self.search_query.clear();
    }
}
