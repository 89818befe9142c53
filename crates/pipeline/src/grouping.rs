//! Topic grouping of the filtered question set.
//!
//! Turns the filtered list into the on-page layout: questions are
//! classified by their first tag, merged by topic name, ordered by
//! difficulty tier, and numbered with a running index in display order.

use catalog::{Difficulty, Question, QuestionId};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use topics::{TopicClassifier, TopicInfo};
use tracing::debug;

/// Result sets at or below this size render as a flat list
pub const DEFAULT_FLAT_THRESHOLD: usize = 5;

/// A question with its 1-based position in display order
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedQuestion {
    pub number: usize,
    pub question: Question,
}

/// All filtered questions that classify into one topic
#[derive(Debug, Clone, PartialEq)]
pub struct TopicGroup {
    pub topic: TopicInfo,
    pub questions: Vec<NumberedQuestion>,
}

impl TopicGroup {
    pub fn count(&self) -> usize {
        self.questions.len()
    }
}

/// Topic groups sharing a difficulty tier
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultySection {
    pub difficulty: Difficulty,
    pub groups: Vec<TopicGroup>,
}

impl DifficultySection {
    pub fn count(&self) -> usize {
        self.groups.iter().map(TopicGroup::count).sum()
    }
}

/// How the filtered set should be drawn
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Nothing matched; render the empty state
    Empty,
    /// Few results; no headers
    Flat(Vec<NumberedQuestion>),
    /// Difficulty tiers, each with topic groups. Empty tiers are omitted.
    Sectioned(Vec<DifficultySection>),
}

impl Layout {
    pub fn question_count(&self) -> usize {
        match self {
            Layout::Empty => 0,
            Layout::Flat(questions) => questions.len(),
            Layout::Sectioned(sections) => sections.iter().map(DifficultySection::count).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Layout::Empty)
    }

    /// Questions in display order
    pub fn questions(&self) -> Vec<&NumberedQuestion> {
        match self {
            Layout::Empty => Vec::new(),
            Layout::Flat(questions) => questions.iter().collect(),
            Layout::Sectioned(sections) => sections
                .iter()
                .flat_map(|s| s.groups.iter())
                .flat_map(|g| g.questions.iter())
                .collect(),
        }
    }
}

/// Layout plus the questions whose own difficulty disagrees with their topic.
///
/// Grouping always trusts the topic table; the disagreements are surfaced
/// so they can be fixed at the source rather than reconciled here.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedView {
    pub layout: Layout,
    pub difficulty_conflicts: Vec<QuestionId>,
}

/// Groups filtered questions by classified topic.
#[derive(Debug, Clone)]
pub struct TopicGrouper {
    classifier: Arc<TopicClassifier>,
    flat_threshold: usize,
}

impl TopicGrouper {
    pub fn new(classifier: Arc<TopicClassifier>) -> Self {
        Self {
            classifier,
            flat_threshold: DEFAULT_FLAT_THRESHOLD,
        }
    }

    /// Configure the flat-list threshold (default: 5)
    pub fn with_flat_threshold(mut self, threshold: usize) -> Self {
        self.flat_threshold = threshold;
        self
    }

    pub fn classifier(&self) -> &TopicClassifier {
        &self.classifier
    }

    /// Build the layout for a filtered set.
    ///
    /// ## Algorithm
    /// 1. Classify every question by its first tag (in parallel)
    /// 2. Empty → `Empty`; at most `flat_threshold` → `Flat`
    /// 3. Merge by topic name (first-seen `TopicInfo` wins)
    /// 4. Sort: difficulty asc, order asc, count desc, name asc
    /// 5. Split into tiers and number questions in display order
    pub fn group(&self, filtered: &[&Question]) -> GroupedView {
        let topics: Vec<&TopicInfo> = filtered
            .par_iter()
            .map(|question| self.classifier.classify(question))
            .collect();

        let difficulty_conflicts = find_conflicts(filtered, &topics);
        if !difficulty_conflicts.is_empty() {
            debug!(
                "{} questions carry a difficulty that differs from their topic",
                difficulty_conflicts.len()
            );
        }

        let layout = if filtered.is_empty() {
            Layout::Empty
        } else if filtered.len() <= self.flat_threshold {
            Layout::Flat(
                filtered
                    .iter()
                    .enumerate()
                    .map(|(i, question)| NumberedQuestion {
                        number: i + 1,
                        question: (*question).clone(),
                    })
                    .collect(),
            )
        } else {
            Layout::Sectioned(build_sections(filtered, &topics))
        };

        GroupedView {
            layout,
            difficulty_conflicts,
        }
    }
}

fn find_conflicts(filtered: &[&Question], topics: &[&TopicInfo]) -> Vec<QuestionId> {
    filtered
        .iter()
        .zip(topics)
        .filter(|(question, topic)| {
            question
                .difficulty
                .is_some_and(|difficulty| difficulty != topic.difficulty)
        })
        .map(|(question, _)| question.id.clone())
        .collect()
}

fn build_sections(filtered: &[&Question], topics: &[&TopicInfo]) -> Vec<DifficultySection> {
    // Merge by topic name, remembering first-seen order
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<(&TopicInfo, Vec<&Question>)> = Vec::new();
    for (&question, &topic) in filtered.iter().zip(topics) {
        let slot = *slots.entry(topic.name.as_str()).or_insert_with(|| {
            merged.push((topic, Vec::new()));
            merged.len() - 1
        });
        merged[slot].1.push(question);
    }

    merged.sort_by(|(a, a_questions), (b, b_questions)| {
        a.difficulty
            .cmp(&b.difficulty)
            .then(a.order.cmp(&b.order))
            .then(b_questions.len().cmp(&a_questions.len()))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut sections: Vec<DifficultySection> = Vec::new();
    let mut number = 0;
    for difficulty in Difficulty::ALL {
        let groups: Vec<TopicGroup> = merged
            .iter()
            .filter(|(topic, _)| topic.difficulty == difficulty)
            .map(|(topic, questions)| TopicGroup {
                topic: (*topic).clone(),
                questions: questions
                    .iter()
                    .map(|question| {
                        number += 1;
                        NumberedQuestion {
                            number,
                            question: (*question).clone(),
                        }
                    })
                    .collect(),
            })
            .collect();

        if !groups.is_empty() {
            sections.push(DifficultySection { difficulty, groups });
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use topics::TopicDictionary;

    fn classifier() -> Arc<TopicClassifier> {
        let mut dictionary = TopicDictionary::new();
        dictionary.insert("basics", TopicInfo::new("Basics", "Core", Difficulty::Easy, 1));
        dictionary.insert("maps", TopicInfo::new("Maps", "Collections", Difficulty::Easy, 2));
        dictionary.insert("hashmap", TopicInfo::new("Maps", "Collections", Difficulty::Easy, 2));
        dictionary.insert("channels", TopicInfo::new("Channels", "Concurrency", Difficulty::Medium, 1));
        dictionary.insert("gc", TopicInfo::new("GC", "Runtime", Difficulty::Hard, 1));
        dictionary.insert("sched", TopicInfo::new("Scheduler", "Runtime", Difficulty::Hard, 2));
        Arc::new(TopicClassifier::new().with_dictionary(catalog::Language::Go, dictionary))
    }

    fn q(id: &str, tag: &str) -> Question {
        Question::new(id, format!("Q{id}"), "go").with_tags([tag])
    }

    fn headers(layout: &Layout) -> Vec<String> {
        match layout {
            Layout::Sectioned(sections) => sections
                .iter()
                .flat_map(|s| s.groups.iter().map(|g| g.topic.name.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_empty_layout() {
        let view = TopicGrouper::new(classifier()).group(&[]);
        assert_eq!(view.layout, Layout::Empty);
        assert_eq!(view.layout.question_count(), 0);
    }

    #[test]
    fn test_five_is_flat_six_is_sectioned() {
        let questions: Vec<Question> = (1..=6).map(|i| q(&i.to_string(), "gc")).collect();
        let refs: Vec<&Question> = questions.iter().collect();
        let grouper = TopicGrouper::new(classifier());

        let five = grouper.group(&refs[..5]);
        assert!(matches!(five.layout, Layout::Flat(ref qs) if qs.len() == 5));

        let six = grouper.group(&refs);
        assert!(matches!(six.layout, Layout::Sectioned(_)));
        assert_eq!(headers(&six.layout), vec!["GC"]);
    }

    #[test]
    fn test_sections_ordered_by_difficulty() {
        let questions = vec![
            q("1", "gc"),
            q("2", "gc"),
            q("3", "basics"),
            q("4", "channels"),
            q("5", "channels"),
            q("6", "basics"),
        ];
        let refs: Vec<&Question> = questions.iter().collect();
        let view = TopicGrouper::new(classifier()).group(&refs);

        let Layout::Sectioned(sections) = &view.layout else {
            panic!("expected sections");
        };
        let tiers: Vec<Difficulty> = sections.iter().map(|s| s.difficulty).collect();
        assert_eq!(tiers, vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]);
    }

    #[test]
    fn test_aliases_merge_into_one_group() {
        let questions = vec![
            q("1", "maps"),
            q("2", "hashmap"),
            q("3", "maps"),
            q("4", "gc"),
            q("5", "gc"),
            q("6", "gc"),
        ];
        let refs: Vec<&Question> = questions.iter().collect();
        let view = TopicGrouper::new(classifier()).group(&refs);
        assert_eq!(headers(&view.layout), vec!["Maps", "GC"]);
    }

    #[test]
    fn test_order_then_count_tie_break() {
        let mut dictionary = TopicDictionary::new();
        dictionary.insert("a", TopicInfo::new("A", "X", Difficulty::Hard, 1));
        dictionary.insert("b", TopicInfo::new("B", "X", Difficulty::Hard, 1));
        dictionary.insert("c", TopicInfo::new("C", "X", Difficulty::Hard, 0));
        let classifier = Arc::new(TopicClassifier::new().with_dictionary(catalog::Language::Go, dictionary));

        let questions = vec![q("1", "a"), q("2", "b"), q("3", "b"), q("4", "c"), q("5", "a"), q("6", "b")];
        let refs: Vec<&Question> = questions.iter().collect();
        let view = TopicGrouper::new(classifier).group(&refs);

        // C has the lowest order; B beats A on count at equal order
        assert_eq!(headers(&view.layout), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_running_index_follows_display_order() {
        let questions = vec![
            q("hard-1", "gc"),
            q("easy-1", "basics"),
            q("medium-1", "channels"),
            q("easy-2", "basics"),
            q("hard-2", "sched"),
            q("hard-3", "gc"),
        ];
        let refs: Vec<&Question> = questions.iter().collect();
        let view = TopicGrouper::new(classifier()).group(&refs);

        let ordered: Vec<(usize, &str)> = view
            .layout
            .questions()
            .iter()
            .map(|n| (n.number, n.question.id.as_str()))
            .collect();
        assert_eq!(
            ordered,
            vec![
                (1, "easy-1"),
                (2, "easy-2"),
                (3, "medium-1"),
                (4, "hard-1"),
                (5, "hard-3"),
                (6, "hard-2"),
            ]
        );
    }

    #[test]
    fn test_unmapped_and_untagged_fall_into_general() {
        let mut questions: Vec<Question> = (1..=5).map(|i| q(&i.to_string(), "no-such-tag")).collect();
        questions.push(Question::new("untagged", "No tags", "go"));
        let refs: Vec<&Question> = questions.iter().collect();
        let view = TopicGrouper::new(classifier()).group(&refs);

        let Layout::Sectioned(sections) = &view.layout else {
            panic!("expected sections");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].difficulty, Difficulty::Medium);
        assert_eq!(sections[0].groups[0].topic.name, "General");
        assert_eq!(sections[0].groups[0].count(), 6);
    }

    #[test]
    fn test_difficulty_conflicts_reported_not_reconciled() {
        let questions = vec![
            q("agrees", "gc").with_difficulty(Difficulty::Hard),
            q("disagrees", "gc").with_difficulty(Difficulty::Easy),
            q("unset", "gc"),
        ];
        let refs: Vec<&Question> = questions.iter().collect();
        let view = TopicGrouper::new(classifier()).group(&refs);

        assert_eq!(view.difficulty_conflicts, vec!["disagrees".to_string()]);
        assert_eq!(view.layout.question_count(), 3);
    }
}
