//! Error types for dictionary loading.
//!
//! Classification itself never fails; these only surface while building a
//! dictionary from external data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopicError {
    /// Dictionary file could not be read
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dictionary JSON was malformed
    #[error("Invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A tag was claimed by two different topics
    #[error("Tag '{tag}' maps to both '{first}' and '{second}'")]
    ConflictingTag {
        tag: String,
        first: String,
        second: String,
    },

    /// One topic name defined twice with different metadata
    #[error("Topic '{name}' is defined twice: {first:?} and {second:?}")]
    ConflictingTopic {
        name: String,
        first: crate::dictionary::TopicInfo,
        second: crate::dictionary::TopicInfo,
    },

    /// A tag normalized to the empty string
    #[error("Topic '{topic}' has an empty tag")]
    EmptyTag { topic: String },
}

pub type Result<T> = std::result::Result<T, TopicError>;
