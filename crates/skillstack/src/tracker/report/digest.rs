use super::super::domain::{ProgressEntry, ProgressStatus};
use super::aggregate::WeeklyRollup;

pub const NO_WEEKLY_RECORDS: &str = "No learning activities recorded this week.";
pub const NO_PROGRESS_DATA: &str = "No progress data available.";

/// Short weekly summary naming up to three completed and three in-progress
/// resource titles.
pub fn weekly_activity_summary(entries: &[ProgressEntry]) -> String {
    if entries.is_empty() {
        return NO_WEEKLY_RECORDS.to_string();
    }

    let rollup = WeeklyRollup::from_entries(entries);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "This week, you spent {:.1} hours on learning.",
        rollup.total_hours
    ));
    parts.push(format!(
        "You worked on {} resources: {}.",
        rollup.total_records,
        rollup.status_breakdown()
    ));

    if let Some(sentence) = titles_sentence("You completed", &rollup.completed_titles) {
        parts.push(sentence);
    }
    if let Some(sentence) = titles_sentence("You're currently working on", &rollup.in_progress_titles)
    {
        parts.push(sentence);
    }

    parts.join(" ")
}

/// Counts-only status summary over a batch of progress records.
pub fn progress_summary(entries: &[ProgressEntry]) -> String {
    if entries.is_empty() {
        return NO_PROGRESS_DATA.to_string();
    }

    let rollup = WeeklyRollup::from_entries(entries);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "You have {} learning resources: {}.",
        rollup.total_records,
        rollup.status_breakdown()
    ));

    let completed = rollup.count_of(ProgressStatus::Completed);
    if completed > 0 {
        parts.push(format!("You've completed {completed} resources."));
    }

    let in_progress = rollup.count_of(ProgressStatus::InProgress);
    if in_progress > 0 {
        parts.push(format!(
            "You're currently working on {in_progress} resources."
        ));
    }

    parts.join(" ")
}

/// `"<lead>: a, b, c."` with an `", and more"` tail past three titles; `None`
/// when no linked title exists, so the sentence is never rendered empty.
fn titles_sentence(lead: &str, titles: &[String]) -> Option<String> {
    if titles.is_empty() {
        return None;
    }

    let shown = titles.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
    let suffix = if titles.len() > 3 { ", and more" } else { "" };
    Some(format!("{lead}: {shown}{suffix}."))
}
