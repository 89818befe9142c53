//! Reading question fixtures from disk.
//!
//! A fixture file is either a bare JSON array of questions or a full
//! `{ "questions": [...], "total": n }` page as the endpoint returns it.

use crate::error::{CatalogError, Result};
use crate::types::{Question, QuestionPage};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureDocument {
    List(Vec<Question>),
    Page(QuestionPage),
}

/// Load every question stored in a fixture file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let questions = parse_questions(&content, &file)?;
    debug!("Loaded {} questions from {}", questions.len(), file);
    Ok(questions)
}

/// Parse fixture JSON already held in memory.
///
/// `file` is only used to label errors.
pub fn parse_questions(content: &str, file: &str) -> Result<Vec<Question>> {
    let document: FixtureDocument =
        serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        })?;

    let questions = match document {
        FixtureDocument::List(questions) => questions,
        FixtureDocument::Page(page) => page.questions,
    };

    validate(&questions)?;
    Ok(questions)
}

/// Check that ids are unique within their category and non-empty
pub fn validate(questions: &[Question]) -> Result<()> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for question in questions {
        if question.id.trim().is_empty() {
            return Err(CatalogError::InvalidValue {
                field: "id".to_string(),
                value: question.id.clone(),
            });
        }
        if !seen.insert((question.category.as_str(), question.id.as_str())) {
            return Err(CatalogError::DuplicateId {
                id: question.id.clone(),
                category: question.category.clone(),
            });
        }
    }
    Ok(())
}
