//! Topic Classifier
//!
//! Maps a raw tag to a [`TopicInfo`] using the dictionary registered for a
//! language. Lookup is total: unmapped tags, unknown language slugs, and
//! languages without a dictionary all resolve to the fallback topic.
//!
//! ## Algorithm
//! 1. Normalize the tag (lowercase, trim, whitespace runs → `-`)
//! 2. Pick the dictionary for the language, if one is registered
//! 3. Return the mapped topic or the fallback

use crate::dictionary::{TopicDictionary, TopicInfo};
use crate::go::go_dictionary;
use catalog::{Language, Question};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Normalize a tag into dictionary-key form.
///
/// `" GoRoutines "` → `"goroutines"`, `"Error  Handling"` → `"error-handling"`.
pub fn normalize_tag(tag: &str) -> String {
    tag.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Classifies tags into topics.
///
/// Cheap to clone: dictionaries are shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    dictionaries: HashMap<Language, Arc<TopicDictionary>>,
    fallback: TopicInfo,
}

impl TopicClassifier {
    /// A classifier with no dictionaries; everything maps to the fallback
    pub fn new() -> Self {
        Self {
            dictionaries: HashMap::new(),
            fallback: TopicInfo::fallback(),
        }
    }

    /// Classifier with the built-in dictionaries (currently Go only)
    pub fn builtin() -> Self {
        Self::new().with_dictionary(Language::Go, go_dictionary())
    }

    /// Register (or replace) the dictionary for a language
    pub fn with_dictionary(mut self, language: Language, dictionary: TopicDictionary) -> Self {
        debug!(
            "Registering {} tag aliases for {}",
            dictionary.len(),
            language
        );
        self.dictionaries.insert(language, Arc::new(dictionary));
        self
    }

    pub fn dictionary(&self, language: Language) -> Option<&TopicDictionary> {
        self.dictionaries.get(&language).map(Arc::as_ref)
    }

    /// Languages with a registered dictionary, sorted
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.dictionaries.keys().copied().collect();
        languages.sort();
        languages
    }

    pub fn fallback(&self) -> &TopicInfo {
        &self.fallback
    }

    /// Classify a tag within a language. Never fails.
    pub fn topic_for_tag(&self, tag: &str, language: Language) -> &TopicInfo {
        let Some(dictionary) = self.dictionaries.get(&language) else {
            return &self.fallback;
        };
        dictionary
            .get(&normalize_tag(tag))
            .unwrap_or(&self.fallback)
    }

    /// Classify a tag given a raw category slug such as `"go"`.
    pub fn topic_for_slug(&self, tag: &str, language_slug: &str) -> &TopicInfo {
        match Language::from_slug(language_slug) {
            Some(language) => self.topic_for_tag(tag, language),
            None => &self.fallback,
        }
    }

    /// Classify a question by its primary tag and its own category
    pub fn classify(&self, question: &Question) -> &TopicInfo {
        self.topic_for_slug(question.primary_tag(), &question.category)
    }
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new()
    }
}
