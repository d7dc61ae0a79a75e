use chrono::{DateTime, Utc};

use super::domain::{ProgressEntry, ResourceSnapshot, SkillId, SkillSnapshot};

/// Read-only query seam over the persisted learning records.
///
/// The analytics core consumes materialized snapshots and never writes back;
/// record lifecycle belongs to the storage collaborator behind this trait.
pub trait LearningRepository: Send + Sync {
    /// All resources with attached progress and skill reference.
    fn resources(&self) -> Result<Vec<ResourceSnapshot>, RepositoryError>;

    /// One skill's resources; an unknown skill id yields an empty list.
    fn resources_for_skill(&self, skill: SkillId) -> Result<Vec<ResourceSnapshot>, RepositoryError>;

    /// All skills with their resource collections attached.
    fn skills(&self) -> Result<Vec<SkillSnapshot>, RepositoryError>;

    /// Progress records whose `updated_at` is at or after `since`, each with
    /// its resource and skill link resolved.
    fn progress_updated_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ProgressEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
