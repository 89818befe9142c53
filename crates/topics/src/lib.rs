//! # Topics Crate
//!
//! Classifies interview-question tags into topics.
//!
//! ## Components
//!
//! ### Dictionary
//! Immutable tag → [`TopicInfo`] table. Many aliases share one topic, and a
//! dictionary can be built in code or loaded from JSON.
//!
//! ### Classifier
//! Holds one injected dictionary per [`catalog::Language`] and answers
//! `topic_for_tag`. Lookup never fails: anything unmapped resolves to the
//! "General" fallback topic.
//!
//! ## Example Usage
//!
//! ```ignore
//! use topics::TopicClassifier;
//! use catalog::Language;
//!
//! let classifier = TopicClassifier::builtin();
//! let topic = classifier.topic_for_tag(" GoRoutines ", Language::Go);
//! assert_eq!(topic.name, "Goroutines");
//! ```

// Public modules
pub mod error;
pub mod dictionary;
pub mod classifier;
pub mod go;

// Re-export commonly used types
pub use classifier::{normalize_tag, TopicClassifier};
pub use dictionary::{TopicDictionary, TopicEntry, TopicInfo};
pub use error::{Result, TopicError};
pub use go::go_dictionary;
