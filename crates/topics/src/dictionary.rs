//! Tag → topic dictionaries.
//!
//! A dictionary is immutable configuration handed to the classifier. It can
//! be built in code (see [`crate::go`]) or loaded from JSON:
//!
//! ```json
//! [
//!   { "tags": ["goroutines", "goroutine"], "name": "Goroutines",
//!     "category": "Concurrency", "difficulty": "medium", "order": 6 }
//! ]
//! ```

use crate::classifier::normalize_tag;
use crate::error::{Result, TopicError};
use catalog::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the topic every unmapped tag falls into
pub const FALLBACK_TOPIC_NAME: &str = "General";
/// Category of the fallback topic
pub const FALLBACK_TOPIC_CATEGORY: &str = "Other";
/// Order of the fallback topic; sorts after every hand-ordered topic
pub const FALLBACK_TOPIC_ORDER: u32 = 99;

/// Classification metadata for a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Human-readable topic, e.g. "Goroutines"
    pub name: String,
    /// Broader grouping, e.g. "Concurrency"
    pub category: String,
    /// Drives section ordering
    pub difficulty: Difficulty,
    /// Tie-break within a difficulty tier
    pub order: u32,
}

impl TopicInfo {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
        order: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            difficulty,
            order,
        }
    }

    /// The topic unmapped tags resolve to
    pub fn fallback() -> Self {
        Self::new(
            FALLBACK_TOPIC_NAME,
            FALLBACK_TOPIC_CATEGORY,
            Difficulty::Medium,
            FALLBACK_TOPIC_ORDER,
        )
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// One serialized dictionary entry: a topic and every tag that maps to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicEntry {
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub topic: TopicInfo,
}

/// Immutable mapping from normalized tag to topic.
///
/// Topics are stored once and referenced by index so that many aliases can
/// share a single `TopicInfo`.
#[derive(Debug, Clone, Default)]
pub struct TopicDictionary {
    topics: Vec<TopicInfo>,
    index: HashMap<String, usize>,
}

impl TopicDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `tag` to `topic`, returning the topic it was previously mapped to.
    ///
    /// Identical topics share one slot; a tag always resolves to exactly the
    /// `TopicInfo` it was inserted with.
    pub fn insert(&mut self, tag: &str, topic: TopicInfo) -> Option<TopicInfo> {
        let key = normalize_tag(tag);
        let slot = match self.topics.iter().position(|t| *t == topic) {
            Some(slot) => slot,
            None => {
                self.topics.push(topic);
                self.topics.len() - 1
            }
        };
        self.index
            .insert(key, slot)
            .map(|previous| self.topics[previous].clone())
    }

    /// Build a dictionary from entries, rejecting a tag claimed by two
    /// different topics and a topic name defined twice with different
    /// metadata.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = TopicEntry>,
    {
        let mut dictionary = Self::new();
        for entry in entries {
            if let Some(existing) = dictionary
                .topics
                .iter()
                .find(|t| t.name == entry.topic.name && **t != entry.topic)
            {
                return Err(TopicError::ConflictingTopic {
                    name: entry.topic.name.clone(),
                    first: existing.clone(),
                    second: entry.topic.clone(),
                });
            }
            for tag in &entry.tags {
                if normalize_tag(tag).is_empty() {
                    return Err(TopicError::EmptyTag {
                        topic: entry.topic.name.clone(),
                    });
                }
                if let Some(previous) = dictionary.insert(tag, entry.topic.clone()) {
                    if previous.name != entry.topic.name {
                        return Err(TopicError::ConflictingTag {
                            tag: tag.clone(),
                            first: previous.name,
                            second: entry.topic.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(dictionary)
    }

    /// Parse a JSON array of [`TopicEntry`]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<TopicEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read a JSON dictionary file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TopicError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Look up an already-normalized key
    pub fn get(&self, normalized_tag: &str) -> Option<&TopicInfo> {
        self.index
            .get(normalized_tag)
            .map(|&slot| &self.topics[slot])
    }

    /// Number of tag aliases
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Distinct topics sorted by difficulty, order, then name
    pub fn topics(&self) -> Vec<&TopicInfo> {
        let mut topics: Vec<&TopicInfo> = self.topics.iter().collect();
        topics.sort_by(|a, b| {
            a.difficulty
                .cmp(&b.difficulty)
                .then(a.order.cmp(&b.order))
                .then_with(|| a.name.cmp(&b.name))
        });
        topics
    }

    /// All normalized tags mapping to the named topic, sorted
    pub fn tags_for(&self, topic_name: &str) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .index
            .iter()
            .filter(|&(_, &slot)| self.topics[slot].name == topic_name)
            .map(|(tag, _)| tag.as_str())
            .collect();
        tags.sort_unstable();
        tags
    }

    /// Serializable form, one entry per topic
    pub fn to_entries(&self) -> Vec<TopicEntry> {
        self.topics()
            .into_iter()
            .map(|topic| TopicEntry {
                tags: self.tags_for(&topic.name).into_iter().map(String::from).collect(),
                topic: topic.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tags: &[&str], name: &str, difficulty: Difficulty, order: u32) -> TopicEntry {
        TopicEntry {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            topic: TopicInfo::new(name, "Test", difficulty, order),
        }
    }

    #[test]
    fn test_aliases_share_topic() {
        let dictionary = TopicDictionary::from_entries(vec![entry(
            &["goroutines", "Go Routines"],
            "Goroutines",
            Difficulty::Medium,
            1,
        )])
        .unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.topics().len(), 1);
        assert_eq!(dictionary.get("go-routines").unwrap().name, "Goroutines");
        assert_eq!(dictionary.tags_for("Goroutines"), vec!["go-routines", "goroutines"]);
    }

    #[test]
    fn test_conflicting_tag_rejected() {
        let result = TopicDictionary::from_entries(vec![
            entry(&["maps"], "Maps", Difficulty::Easy, 1),
            entry(&["MAPS"], "Hash Tables", Difficulty::Hard, 2),
        ]);
        assert!(matches!(result, Err(TopicError::ConflictingTag { .. })));
    }

    #[test]
    fn test_topic_redefined_with_other_metadata_rejected() {
        let json = r#"[
            {"tags": ["a"], "name": "X", "category": "C1", "difficulty": "easy", "order": 1},
            {"tags": ["b"], "name": "X", "category": "C1", "difficulty": "hard", "order": 5}
        ]"#;
        let result = TopicDictionary::from_json_str(json);
        assert!(matches!(
            result,
            Err(TopicError::ConflictingTopic { ref name, .. }) if name == "X"
        ));
    }

    #[test]
    fn test_topic_split_across_entries() {
        let dictionary = TopicDictionary::from_entries(vec![
            entry(&["maps"], "Maps", Difficulty::Easy, 3),
            entry(&["hashmap"], "Maps", Difficulty::Easy, 3),
        ])
        .unwrap();
        assert_eq!(dictionary.topics().len(), 1);
        assert_eq!(dictionary.get("hashmap").unwrap().order, 3);
    }

    #[test]
    fn test_insert_keeps_exact_metadata() {
        let mut dictionary = TopicDictionary::new();
        dictionary.insert("a", TopicInfo::new("X", "C1", Difficulty::Easy, 1));
        dictionary.insert("b", TopicInfo::new("X", "C1", Difficulty::Hard, 5));

        let b = dictionary.get("b").unwrap();
        assert_eq!(b.difficulty, Difficulty::Hard);
        assert_eq!(b.order, 5);
    }

    #[test]
    fn test_shipped_java_dictionary_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/java_topics.json");
        let dictionary = TopicDictionary::from_json_file(&path).unwrap();
        assert_eq!(dictionary.len(), 14);
        assert_eq!(dictionary.get("streams").unwrap().name, "Streams");
        assert_eq!(dictionary.get("jvm").unwrap().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_empty_tag_rejected() {
        let result = TopicDictionary::from_entries(vec![entry(&["  "], "Blank", Difficulty::Easy, 1)]);
        assert!(matches!(result, Err(TopicError::EmptyTag { .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"tags": ["jvm", "jvm-tuning"], "name": "JVM", "category": "Runtime",
             "difficulty": "hard", "order": 1},
            {"tags": ["collections"], "name": "Collections", "category": "Core",
             "difficulty": "easy", "order": 2}
        ]"#;
        let dictionary = TopicDictionary::from_json_str(json).unwrap();
        let topics = dictionary.topics();
        assert_eq!(topics[0].name, "Collections");
        assert_eq!(topics[1].name, "JVM");
        assert_eq!(dictionary.get("jvm-tuning").unwrap().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_to_entries_round_trips() {
        let original = TopicDictionary::from_entries(vec![
            entry(&["a", "b"], "AB", Difficulty::Easy, 1),
            entry(&["c"], "C", Difficulty::Hard, 1),
        ])
        .unwrap();
        let rebuilt = TopicDictionary::from_entries(original.to_entries()).unwrap();
        assert_eq!(rebuilt.len(), 3);
        assert_eq!(rebuilt.get("b").unwrap().name, "AB");
    }

    #[test]
    fn test_fallback_topic() {
        let fallback = TopicInfo::fallback();
        assert_eq!(fallback.name, "General");
        assert_eq!(fallback.category, "Other");
        assert_eq!(fallback.difficulty, Difficulty::Medium);
        assert_eq!(fallback.order, 99);
        assert!(fallback.is_fallback());
    }
}
