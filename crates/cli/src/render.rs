//! Terminal rendering of a [`SessionView`].
//!
//! Everything returns a `String` so the output can be checked in tests.

use browser::{ListStatus, SessionView};
use catalog::{Difficulty, Question};
use colored::{ColoredString, Colorize};
use pipeline::{Layout, NumberedQuestion, TopicGroup};
use std::fmt::Write;

/// Facets shown under the header
const MAX_FACETS: usize = 12;

pub fn loading_indicator(category: &str) -> String {
    format!("{} Loading {} questions...", "⏳".yellow(), category)
}

pub fn difficulty_label(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => "Easy".green().bold(),
        Difficulty::Medium => "Medium".yellow().bold(),
        Difficulty::Hard => "Hard".red().bold(),
    }
}

pub fn render_view(view: &SessionView) -> String {
    let mut out = String::new();
    render_header(&mut out, view);

    match &view.layout {
        Layout::Empty => {}
        Layout::Flat(questions) => {
            for question in questions {
                render_question(&mut out, question, "  ");
            }
        }
        Layout::Sectioned(sections) => {
            for section in sections {
                let _ = writeln!(
                    out,
                    "\n{} ({})",
                    difficulty_label(section.difficulty),
                    section.count()
                );
                for group in &section.groups {
                    render_group(&mut out, group);
                }
            }
        }
    }

    if !view.difficulty_conflicts.is_empty() {
        let _ = writeln!(
            out,
            "\n{} {} questions list a difficulty that differs from their topic: {}",
            "note:".cyan(),
            view.difficulty_conflicts.len(),
            view.difficulty_conflicts.join(", ")
        );
    }

    render_status(&mut out, view);
    out
}

fn render_header(out: &mut String, view: &SessionView) {
    let category = view.category.as_deref().unwrap_or("-");
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{} questions: {} shown, {} of {} loaded",
            category, view.visible, view.loaded, view.total
        )
        .bold()
        .blue()
    );

    if view.filters.is_active() {
        let tags: Vec<&str> = view.filters.selected_tags.iter().map(String::as_str).collect();
        let _ = writeln!(
            out,
            "  filters: tags [{}] search {:?}",
            tags.join(", "),
            view.filters.trimmed_query()
        );
    }

    if !view.facets.is_empty() {
        let facets: Vec<String> = view
            .facets
            .iter()
            .take(MAX_FACETS)
            .map(|f| format!("{} ({})", f.tag, f.count))
            .collect();
        let more = view.facets.len().saturating_sub(MAX_FACETS);
        let suffix = if more > 0 { format!(" +{more} more") } else { String::new() };
        let _ = writeln!(out, "  tags: {}{}", facets.join(", ").dimmed(), suffix);
    }
}

fn render_group(out: &mut String, group: &TopicGroup) {
    let _ = writeln!(
        out,
        "  {} {} {}",
        group.topic.name.bold(),
        format!("[{}]", group.topic.category).dimmed(),
        format!("({})", group.count()).cyan()
    );
    for question in &group.questions {
        render_question(out, question, "    ");
    }
}

fn render_question(out: &mut String, numbered: &NumberedQuestion, indent: &str) {
    let question: &Question = &numbered.question;
    let mut line = format!("{indent}{}. {}", numbered.number, question.title);
    if !question.tags.is_empty() {
        line.push_str(&format!(" {}", format!("#{}", question.tags.join(" #")).dimmed()));
    }
    if question.video_url.is_some() {
        line.push_str(" ▶");
    }
    let _ = writeln!(out, "{line}");
}

fn render_status(out: &mut String, view: &SessionView) {
    let line = match &view.status {
        ListStatus::Idle => "Pick a category to start.".dimmed().to_string(),
        ListStatus::Loading => loading_indicator(view.category.as_deref().unwrap_or("")),
        ListStatus::LoadingMore => format!("{} Loading more...", "⏳".yellow()),
        ListStatus::Error {
            message,
            can_retry,
            retry_count,
        } => {
            let retry = if *can_retry {
                format!("[retry] available ({retry_count} failed so far), pass --retry").yellow()
            } else {
                format!("[retry] disabled after {retry_count} failed attempts").dimmed()
            };
            format!("{} {}\n{}", "✗".red(), message.red(), retry)
        }
        ListStatus::Empty if view.filters.is_active() => format!(
            "{}\nTry removing a tag or changing the search.",
            "No questions found.".yellow()
        ),
        ListStatus::Empty => "No questions found.".yellow().to_string(),
        ListStatus::HasMore => format!(
            "{} more available; load them with --pages or --all",
            view.total.saturating_sub(view.loaded)
        )
        .cyan()
        .to_string(),
        ListStatus::EndOfList => format!("{} End of list: all {} questions loaded", "✓".green(), view.total),
    };
    let _ = writeln!(out, "\n{line}");
}
