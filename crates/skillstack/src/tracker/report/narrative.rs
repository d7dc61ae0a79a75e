use chrono::{DateTime, Duration, Utc};

use super::super::domain::{ProgressEntry, ProgressStatus};
use super::aggregate::WeeklyRollup;

pub const NO_WEEKLY_ACTIVITY: &str = "No learning activity in the past week.";
const NO_SKILLS_DATA: &str = "No skills data available.";

/// Render the full weekly narrative report over an already-windowed record
/// set. `now` is the single clock reading for the invocation; the printed
/// period start is derived from it so the header always matches the window
/// the caller filtered with.
pub fn render_weekly_report(entries: &[ProgressEntry], now: DateTime<Utc>) -> String {
    if entries.is_empty() {
        return NO_WEEKLY_ACTIVITY.to_string();
    }

    let rollup = WeeklyRollup::from_entries(entries);
    let week_ago = now - Duration::days(7);

    let completed = rollup.count_of(ProgressStatus::Completed);
    let in_progress = rollup.count_of(ProgressStatus::InProgress);
    let started = rollup.count_of(ProgressStatus::Started);

    let mut lines: Vec<String> = vec![
        "Weekly Learning Summary Report".to_string(),
        "==============================".to_string(),
        format!(
            "Report Period: {} to {}",
            week_ago.format("%Y-%m-%d"),
            now.format("%Y-%m-%d")
        ),
        String::new(),
        "Overview:".to_string(),
        format!("- Total resources worked on: {}", rollup.total_records),
        format!("- Completed this week: {completed}"),
        format!("- In progress: {in_progress}"),
        format!("- Started: {started}"),
        format!("- Total hours spent: {:.2} hours", rollup.total_hours),
        String::new(),
        "Skills Developed:".to_string(),
    ];

    if rollup.skills.is_empty() {
        lines.push(NO_SKILLS_DATA.to_string());
    } else {
        lines.extend(rollup.skills.iter().map(|skill| format!("- {skill}")));
    }

    lines.push(String::new());
    lines.push("Difficulty Rating:".to_string());
    lines.push(format!(
        "- Average difficulty: {:.1}/5.0",
        rollup.average_difficulty
    ));

    lines.push(String::new());
    lines.push("Top Achievements:".to_string());
    if completed > 0 {
        lines.push(format!("- Completed {completed} resources!"));
    }
    if rollup.total_hours > 10.0 {
        lines.push(format!(
            "- Dedication award: {:.1} hours of learning!",
            rollup.total_hours
        ));
    }
    if rollup.skills.len() > 3 {
        lines.push(format!(
            "- Diverse learner: Worked on {} different skills!",
            rollup.skills.len()
        ));
    }

    lines.push(String::new());
    lines.push("Recommendations for Next Week:".to_string());
    if completed == 0 {
        lines.push("- Try to complete at least one resource this week".to_string());
    } else if completed < 3 {
        lines.push("- Great job! Try to complete a few more resources".to_string());
    } else {
        lines.push("- Excellent progress! Keep up the great work".to_string());
    }
    if rollup.total_hours < 5.0 {
        lines.push("- Consider dedicating more time to your learning goals".to_string());
    }
    if rollup.skills.len() < 2 {
        lines.push("- Try exploring resources in different skill areas".to_string());
    }

    lines.join("\n").trim().to_string()
}
