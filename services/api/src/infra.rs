use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use skillstack::tracker::{
    LearningRepository, ProgressEntry, RepositoryError, ResourceLink, ResourceSnapshot, SkillId,
    SkillSnapshot,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot store backing the service when no external database is wired in.
///
/// Holds fully materialized skill snapshots; progress entries are derived
/// from the attached resources so the one-record-per-resource invariant
/// holds by construction.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLearningRepository {
    skills: Arc<Mutex<Vec<SkillSnapshot>>>,
}

impl InMemoryLearningRepository {
    pub(crate) fn with_skills(skills: Vec<SkillSnapshot>) -> Self {
        Self {
            skills: Arc::new(Mutex::new(skills)),
        }
    }

    pub(crate) fn replace_snapshot(&self, skills: Vec<SkillSnapshot>) {
        let mut guard = self.skills.lock().expect("snapshot mutex poisoned");
        *guard = skills;
    }
}

impl LearningRepository for InMemoryLearningRepository {
    fn resources(&self) -> Result<Vec<ResourceSnapshot>, RepositoryError> {
        let guard = self.skills.lock().expect("snapshot mutex poisoned");
        Ok(guard
            .iter()
            .flat_map(|skill| skill.resources.iter().cloned())
            .collect())
    }

    fn resources_for_skill(&self, skill: SkillId) -> Result<Vec<ResourceSnapshot>, RepositoryError> {
        let guard = self.skills.lock().expect("snapshot mutex poisoned");
        Ok(guard
            .iter()
            .filter(|snapshot| snapshot.id == skill)
            .flat_map(|snapshot| snapshot.resources.iter().cloned())
            .collect())
    }

    fn skills(&self) -> Result<Vec<SkillSnapshot>, RepositoryError> {
        let guard = self.skills.lock().expect("snapshot mutex poisoned");
        Ok(guard.clone())
    }

    fn progress_updated_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ProgressEntry>, RepositoryError> {
        let guard = self.skills.lock().expect("snapshot mutex poisoned");
        let mut entries = Vec::new();

        for skill in guard.iter() {
            for resource in &skill.resources {
                let Some(progress) = resource.progress.clone() else {
                    continue;
                };
                if progress.updated_at < since {
                    continue;
                }
                entries.push(ProgressEntry {
                    progress,
                    resource: Some(ResourceLink {
                        id: resource.id,
                        title: resource.title.clone(),
                        skill: Some(resource.skill.clone()),
                    }),
                });
            }
        }

        Ok(entries)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
