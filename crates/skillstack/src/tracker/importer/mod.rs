//! CSV learning-history import.
//!
//! Hydrates a full skill/resource/progress snapshot set from a flat export,
//! one resource per row. Grouping into skills preserves first-appearance
//! order so downstream ranking stays deterministic.

mod parser;

use std::io::Read;

use super::domain::{
    DifficultyTier, ProgressSnapshot, ResourceId, ResourceSnapshot, SkillId, SkillRef,
    SkillSnapshot,
};

/// Error raised while importing a learning-history export.
#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to read csv export: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

/// Builds snapshots from a CSV learning-history export.
pub struct LearningHistoryImporter;

impl LearningHistoryImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SkillSnapshot>, HistoryImportError> {
        let records = parser::parse_records(reader)?;

        let mut skills: Vec<SkillSnapshot> = Vec::new();
        let mut next_resource_id: u64 = 1;

        for record in records {
            let skill_index = match skills
                .iter()
                .position(|skill| skill.name == record.skill_name)
            {
                Some(index) => index,
                None => {
                    skills.push(SkillSnapshot {
                        id: SkillId(skills.len() as u64 + 1),
                        name: record.skill_name.clone(),
                        category: record.category.clone(),
                        target_hours: record.target_hours,
                        difficulty: parse_difficulty(record.skill_difficulty.as_deref()),
                        resources: Vec::new(),
                    });
                    skills.len() - 1
                }
            };

            let skill_ref = SkillRef {
                id: skills[skill_index].id,
                name: skills[skill_index].name.clone(),
            };

            let progress = record.progress.map(|fields| ProgressSnapshot {
                status: fields.status,
                hours_spent: fields.hours_spent,
                notes: fields.notes,
                difficulty_rating: fields.difficulty_rating,
                started_at: fields.started_at,
                completed_at: fields.completed_at,
                updated_at: fields.updated_at,
            });

            skills[skill_index].resources.push(ResourceSnapshot {
                id: ResourceId(next_resource_id),
                title: record.title,
                kind: record.kind,
                platform: record.platform,
                url: record.url,
                skill: skill_ref,
                progress,
            });
            next_resource_id += 1;
        }

        Ok(skills)
    }
}

fn parse_difficulty(value: Option<&str>) -> DifficultyTier {
    match value.map(str::trim) {
        Some(tier) if tier.eq_ignore_ascii_case("advanced") => DifficultyTier::Advanced,
        Some(tier) if tier.eq_ignore_ascii_case("intermediate") => DifficultyTier::Intermediate,
        _ => DifficultyTier::Beginner,
    }
}
