use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::tracker::domain::{
    DifficultyTier, Platform, ProgressEntry, ProgressSnapshot, ProgressStatus, ResourceId,
    ResourceKind, ResourceLink, ResourceSnapshot, SkillId, SkillRef, SkillSnapshot,
};
use crate::tracker::repository::{LearningRepository, RepositoryError};
use crate::tracker::service::LearningInsightsService;

/// Fixed clock reading shared by the tests so windows are deterministic.
pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 14, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub(super) fn skill_ref(id: u64, name: &str) -> SkillRef {
    SkillRef {
        id: SkillId(id),
        name: name.to_string(),
    }
}

pub(super) fn progress(status: ProgressStatus) -> ProgressSnapshot {
    ProgressSnapshot {
        status,
        hours_spent: 0.0,
        notes: None,
        difficulty_rating: None,
        started_at: None,
        completed_at: None,
        updated_at: days_ago(1),
    }
}

pub(super) fn resource(
    id: u64,
    title: &str,
    kind: ResourceKind,
    platform: Platform,
    status: Option<ProgressStatus>,
) -> ResourceSnapshot {
    ResourceSnapshot {
        id: ResourceId(id),
        title: title.to_string(),
        kind,
        platform,
        url: None,
        skill: skill_ref(1, "Rust"),
        progress: status.map(progress),
    }
}

pub(super) fn skill(id: u64, name: &str, resources: Vec<ResourceSnapshot>) -> SkillSnapshot {
    SkillSnapshot {
        id: SkillId(id),
        name: name.to_string(),
        category: Some("Programming".to_string()),
        target_hours: 40.0,
        difficulty: DifficultyTier::Intermediate,
        resources,
    }
}

pub(super) fn entry(
    status: ProgressStatus,
    hours: f64,
    skill_name: Option<&str>,
    title: Option<&str>,
) -> ProgressEntry {
    let mut snapshot = progress(status);
    snapshot.hours_spent = hours;
    ProgressEntry {
        progress: snapshot,
        resource: title.map(|title| ResourceLink {
            id: ResourceId(99),
            title: title.to_string(),
            skill: skill_name.map(|name| skill_ref(7, name)),
        }),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) skills: Arc<Mutex<Vec<SkillSnapshot>>>,
    pub(super) entries: Arc<Mutex<Vec<ProgressEntry>>>,
}

impl MemoryRepository {
    pub(super) fn with_skills(skills: Vec<SkillSnapshot>) -> Self {
        Self {
            skills: Arc::new(Mutex::new(skills)),
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn push_entries(&self, entries: Vec<ProgressEntry>) {
        self.entries
            .lock()
            .expect("entries mutex poisoned")
            .extend(entries);
    }
}

impl LearningRepository for MemoryRepository {
    fn resources(&self) -> Result<Vec<ResourceSnapshot>, RepositoryError> {
        let guard = self.skills.lock().expect("skills mutex poisoned");
        Ok(guard
            .iter()
            .flat_map(|skill| skill.resources.iter().cloned())
            .collect())
    }

    fn resources_for_skill(&self, skill: SkillId) -> Result<Vec<ResourceSnapshot>, RepositoryError> {
        let guard = self.skills.lock().expect("skills mutex poisoned");
        Ok(guard
            .iter()
            .filter(|snapshot| snapshot.id == skill)
            .flat_map(|snapshot| snapshot.resources.iter().cloned())
            .collect())
    }

    fn skills(&self) -> Result<Vec<SkillSnapshot>, RepositoryError> {
        let guard = self.skills.lock().expect("skills mutex poisoned");
        Ok(guard.clone())
    }

    fn progress_updated_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("entries mutex poisoned");
        Ok(guard
            .iter()
            .filter(|entry| entry.progress.updated_at >= since)
            .cloned()
            .collect())
    }
}

/// Repository that always fails, for exercising error paths.
pub(super) struct UnavailableRepository;

impl LearningRepository for UnavailableRepository {
    fn resources(&self) -> Result<Vec<ResourceSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn resources_for_skill(
        &self,
        _skill: SkillId,
    ) -> Result<Vec<ResourceSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn skills(&self) -> Result<Vec<SkillSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn progress_updated_since(
        &self,
        _since: DateTime<Utc>,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service(
    repository: MemoryRepository,
) -> LearningInsightsService<MemoryRepository> {
    LearningInsightsService::new(Arc::new(repository))
}
