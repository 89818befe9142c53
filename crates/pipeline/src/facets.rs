//! Tag facets for the multi-select.

use catalog::Question;
use std::collections::BTreeMap;

/// A distinct tag and how many loaded questions carry it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFacet {
    pub tag: String,
    pub count: usize,
}

/// Distinct tags across `questions`, alphabetically.
///
/// A question listing the same tag twice counts once.
pub fn tag_facets(questions: &[Question]) -> Vec<TagFacet> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for question in questions {
        let mut tags: Vec<&str> = question.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags.dedup();
        for tag in tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagFacet {
            tag: tag.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_facets() {
        let questions = vec![
            Question::new("1", "a", "go").with_tags(["maps", "slices"]),
            Question::new("2", "b", "go").with_tags(["maps", "maps"]),
            Question::new("3", "c", "go"),
        ];
        let facets = tag_facets(&questions);
        assert_eq!(
            facets,
            vec![
                TagFacet { tag: "maps".into(), count: 2 },
                TagFacet { tag: "slices".into(), count: 1 },
            ]
        );
    }
}
