use serde::Serialize;

use super::domain::{
    Platform, ProgressEntry, ProgressStatus, ResourceKind, ResourceSnapshot, SkillId, SkillSnapshot,
};

/// Overall activity counters shown on the dashboard landing view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_skills: usize,
    pub total_resources: usize,
    pub completed_resources: usize,
    /// Percentage of all resources completed; 0.0 when there are none.
    pub completion_rate: f64,
    pub resources_by_platform: Vec<PlatformCount>,
    pub resources_by_type: Vec<KindCount>,
    /// Status histogram over the trailing activity window.
    pub recent_activity: Vec<StatusCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct KindCount {
    pub kind: ResourceKind,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: ProgressStatus,
    pub count: usize,
}

/// Per-skill engagement breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SkillBreakdown {
    pub id: SkillId,
    pub name: String,
    pub resource_count: usize,
    pub started_count: usize,
    pub in_progress_count: usize,
    pub completed_count: usize,
    /// Resources in any engaged state (started, in progress, or completed).
    pub active_count: usize,
    pub completion_rate: f64,
    pub activity_rate: f64,
}

pub fn dashboard_stats(
    skills: &[SkillSnapshot],
    resources: &[ResourceSnapshot],
    recent: &[ProgressEntry],
) -> DashboardStats {
    let completed_resources = resources
        .iter()
        .filter(|resource| {
            matches!(
                resource.progress.as_ref().map(|progress| progress.status),
                Some(ProgressStatus::Completed)
            )
        })
        .count();

    let completion_rate = if resources.is_empty() {
        0.0
    } else {
        completed_resources as f64 / resources.len() as f64 * 100.0
    };

    let mut by_platform: Vec<PlatformCount> = Vec::new();
    let mut by_kind: Vec<KindCount> = Vec::new();
    for resource in resources {
        match by_platform
            .iter_mut()
            .find(|entry| entry.platform == resource.platform)
        {
            Some(entry) => entry.count += 1,
            None => by_platform.push(PlatformCount {
                platform: resource.platform,
                count: 1,
            }),
        }
        match by_kind.iter_mut().find(|entry| entry.kind == resource.kind) {
            Some(entry) => entry.count += 1,
            None => by_kind.push(KindCount {
                kind: resource.kind,
                count: 1,
            }),
        }
    }

    let mut recent_activity: Vec<StatusCount> = Vec::new();
    for entry in recent {
        let status = entry.status();
        match recent_activity
            .iter_mut()
            .find(|entry| entry.status == status)
        {
            Some(entry) => entry.count += 1,
            None => recent_activity.push(StatusCount { status, count: 1 }),
        }
    }

    DashboardStats {
        total_skills: skills.len(),
        total_resources: resources.len(),
        completed_resources,
        completion_rate,
        resources_by_platform: by_platform,
        resources_by_type: by_kind,
        recent_activity,
    }
}

pub fn skills_breakdown(skills: &[SkillSnapshot]) -> Vec<SkillBreakdown> {
    skills
        .iter()
        .map(|skill| {
            let mut started_count = 0;
            let mut in_progress_count = 0;
            let mut completed_count = 0;

            for resource in &skill.resources {
                match resource.progress.as_ref().map(|progress| progress.status) {
                    Some(ProgressStatus::Started) => started_count += 1,
                    Some(ProgressStatus::InProgress) => in_progress_count += 1,
                    Some(ProgressStatus::Completed) => completed_count += 1,
                    Some(ProgressStatus::NotStarted) | None => {}
                }
            }

            let resource_count = skill.resources.len();
            let active_count = started_count + in_progress_count + completed_count;
            let (completion_rate, activity_rate) = if resource_count == 0 {
                (0.0, 0.0)
            } else {
                (
                    completed_count as f64 / resource_count as f64 * 100.0,
                    active_count as f64 / resource_count as f64 * 100.0,
                )
            };

            SkillBreakdown {
                id: skill.id,
                name: skill.name.clone(),
                resource_count,
                started_count,
                in_progress_count,
                completed_count,
                active_count,
                completion_rate,
                activity_rate,
            }
        })
        .collect()
}
