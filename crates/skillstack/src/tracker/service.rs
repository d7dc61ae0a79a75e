use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::dashboard::{self, DashboardStats, SkillBreakdown};
use super::domain::{ResourceId, SkillId};
use super::recommend::{rank_resources, rank_skills, ScoredResource, ScoredSkill};
use super::report::{render_weekly_report, weekly_activity_summary};
use super::repository::{LearningRepository, RepositoryError};
use super::summarize::{extract_key_points, summarize_notes, NO_NOTES};

/// Length of the trailing activity window, in days.
pub const ACTIVITY_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;
pub const DEFAULT_MAX_SENTENCES: usize = 3;
pub const DEFAULT_MAX_POINTS: usize = 5;

/// Facade composing the read-only repository with the analytics components.
///
/// Every method takes the records as the repository serves them right now;
/// the service holds no state of its own.
pub struct LearningInsightsService<R> {
    repository: Arc<R>,
}

/// Combined notes view for a single resource's progress record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesDigest {
    pub summary: String,
    pub key_points: Vec<String>,
}

impl<R> LearningInsightsService<R>
where
    R: LearningRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Top `limit` resources across every skill, scored by the fixed
    /// medium/platform/engagement heuristic.
    pub fn recommend_resources(&self, limit: usize) -> Result<Vec<ScoredResource>, InsightsError> {
        let resources = self.repository.resources()?;
        Ok(rank_resources(resources, limit))
    }

    /// Same scoring restricted to one skill; an unknown skill yields an
    /// empty list rather than an error.
    pub fn recommend_resources_by_skill(
        &self,
        skill: SkillId,
        limit: usize,
    ) -> Result<Vec<ScoredResource>, InsightsError> {
        let resources = self.repository.resources_for_skill(skill)?;
        Ok(rank_resources(resources, limit))
    }

    pub fn recommend_skills(&self, limit: usize) -> Result<Vec<ScoredSkill>, InsightsError> {
        let skills = self.repository.skills()?;
        Ok(rank_skills(skills, limit))
    }

    /// Extractive summary and key points for one resource's progress notes.
    /// `None` when the resource is unknown; a resource without notes gets
    /// the no-notes sentinel and an empty point list.
    pub fn resource_notes_digest(
        &self,
        resource: ResourceId,
        max_sentences: usize,
        max_points: usize,
    ) -> Result<Option<NotesDigest>, InsightsError> {
        let resources = self.repository.resources()?;
        let Some(snapshot) = resources.into_iter().find(|entry| entry.id == resource) else {
            return Ok(None);
        };

        let digest = match snapshot.progress.and_then(|progress| progress.notes) {
            Some(notes) => NotesDigest {
                summary: summarize_notes(&notes, max_sentences),
                key_points: extract_key_points(&notes, max_points),
            },
            None => NotesDigest {
                summary: NO_NOTES.to_string(),
                key_points: Vec::new(),
            },
        };

        Ok(Some(digest))
    }

    /// Full narrative report over the trailing window ending at `now`.
    ///
    /// `now` is read once by the caller and threads through both the window
    /// filter and the printed report period.
    pub fn weekly_report(&self, now: DateTime<Utc>) -> Result<String, InsightsError> {
        let entries = self
            .repository
            .progress_updated_since(now - Duration::days(ACTIVITY_WINDOW_DAYS))?;
        Ok(render_weekly_report(&entries, now))
    }

    /// Short title-bearing summary over the same trailing window.
    pub fn weekly_summary(&self, now: DateTime<Utc>) -> Result<String, InsightsError> {
        let entries = self
            .repository
            .progress_updated_since(now - Duration::days(ACTIVITY_WINDOW_DAYS))?;
        Ok(weekly_activity_summary(&entries))
    }

    pub fn dashboard_stats(&self, now: DateTime<Utc>) -> Result<DashboardStats, InsightsError> {
        let skills = self.repository.skills()?;
        let resources = self.repository.resources()?;
        let recent = self
            .repository
            .progress_updated_since(now - Duration::days(ACTIVITY_WINDOW_DAYS))?;
        Ok(dashboard::dashboard_stats(&skills, &resources, &recent))
    }

    pub fn skills_breakdown(&self) -> Result<Vec<SkillBreakdown>, InsightsError> {
        let skills = self.repository.skills()?;
        Ok(dashboard::skills_breakdown(&skills))
    }
}

/// Error raised by the insights service.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
