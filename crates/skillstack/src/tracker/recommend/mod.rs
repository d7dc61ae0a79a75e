mod weights;

use serde::Serialize;

use super::domain::{ProgressStatus, ResourceSnapshot, SkillSnapshot};
use weights::{kind_weight, platform_weight, status_bonus};

/// A resource paired with its heuristic recommendation score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResource {
    pub resource: ResourceSnapshot,
    pub score: u32,
}

/// A skill paired with its heuristic recommendation score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSkill {
    pub skill: SkillSnapshot,
    pub score: f64,
}

/// Heuristic score of a single resource: medium weight plus platform weight
/// plus engagement bonus.
pub fn resource_score(resource: &ResourceSnapshot) -> u32 {
    kind_weight(resource.kind)
        + platform_weight(resource.platform)
        + status_bonus(resource.progress.as_ref().map(|progress| progress.status))
}

/// Heuristic score of a skill: breadth of its resource collection plus how
/// much of it has been completed.
pub fn skill_score(skill: &SkillSnapshot) -> f64 {
    let total = skill.resources.len();
    let mut score = (total * 2) as f64;

    if total > 0 {
        let completed = skill
            .resources
            .iter()
            .filter(|resource| {
                matches!(
                    resource.progress.as_ref().map(|progress| progress.status),
                    Some(ProgressStatus::Completed)
                )
            })
            .count();
        score += completed as f64 / total as f64 * 10.0;
    }

    score
}

/// Rank resources by descending score and keep the top `limit`.
///
/// The sort is stable, so tied candidates keep their snapshot order.
pub fn rank_resources(resources: Vec<ResourceSnapshot>, limit: usize) -> Vec<ScoredResource> {
    let mut scored: Vec<ScoredResource> = resources
        .into_iter()
        .map(|resource| {
            let score = resource_score(&resource);
            ScoredResource { resource, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Rank skills by descending score and keep the top `limit`.
pub fn rank_skills(skills: Vec<SkillSnapshot>, limit: usize) -> Vec<ScoredSkill> {
    let mut scored: Vec<ScoredSkill> = skills
        .into_iter()
        .map(|skill| {
            let score = skill_score(&skill);
            ScoredSkill { skill, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}
