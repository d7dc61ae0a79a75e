use std::collections::BTreeSet;

use super::super::domain::{ProgressEntry, ProgressStatus};

/// Aggregated view of a batch of progress records, computed once and shared
/// by every report formatter.
#[derive(Debug, Default, Clone)]
pub struct WeeklyRollup {
    pub total_records: usize,
    /// Status histogram in first-occurrence order of the input records.
    pub status_counts: Vec<(ProgressStatus, usize)>,
    pub total_hours: f64,
    /// Distinct skill names touched, alphabetically ordered.
    pub skills: BTreeSet<String>,
    /// Mean of the records that carry a difficulty rating; 0.0 when none do.
    pub average_difficulty: f64,
    pub completed_titles: Vec<String>,
    pub in_progress_titles: Vec<String>,
}

impl WeeklyRollup {
    pub fn from_entries(entries: &[ProgressEntry]) -> Self {
        let mut rollup = WeeklyRollup {
            total_records: entries.len(),
            ..WeeklyRollup::default()
        };

        let mut rating_sum: u64 = 0;
        let mut rating_count: usize = 0;

        for entry in entries {
            let status = entry.status();
            match rollup
                .status_counts
                .iter_mut()
                .find(|(seen, _)| *seen == status)
            {
                Some((_, count)) => *count += 1,
                None => rollup.status_counts.push((status, 1)),
            }

            rollup.total_hours += entry.progress.hours_spent;

            if let Some(name) = entry.skill_name() {
                rollup.skills.insert(name.to_string());
            }

            if let Some(rating) = entry.progress.difficulty_rating {
                rating_sum += u64::from(rating);
                rating_count += 1;
            }

            if let Some(title) = entry.resource_title() {
                match status {
                    ProgressStatus::Completed => rollup.completed_titles.push(title.to_string()),
                    ProgressStatus::InProgress => rollup.in_progress_titles.push(title.to_string()),
                    _ => {}
                }
            }
        }

        if rating_count > 0 {
            rollup.average_difficulty = rating_sum as f64 / rating_count as f64;
        }

        rollup
    }

    pub fn count_of(&self, status: ProgressStatus) -> usize {
        self.status_counts
            .iter()
            .find(|(seen, _)| *seen == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Comma-joined `"N status"` breakdown used by the prose summaries.
    pub fn status_breakdown(&self) -> String {
        self.status_counts
            .iter()
            .map(|(status, count)| format!("{count} {}", status.display_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
