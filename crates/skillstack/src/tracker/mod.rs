//! Learning-activity tracking core.
//!
//! Three stateless analytics components over read-only record snapshots:
//! recommendation scoring, extractive note summarization, and weekly
//! progress reporting. Storage and transport stay behind the
//! [`LearningRepository`] seam and the router module.

pub mod dashboard;
pub mod domain;
pub mod importer;
pub mod recommend;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod summarize;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardStats, SkillBreakdown};
pub use domain::{
    DifficultyTier, Platform, ProgressEntry, ProgressSnapshot, ProgressStatus, ResourceId,
    ResourceKind, ResourceLink, ResourceSnapshot, SkillId, SkillRef, SkillSnapshot,
};
pub use importer::{HistoryImportError, LearningHistoryImporter};
pub use recommend::{ScoredResource, ScoredSkill};
pub use report::WeeklyRollup;
pub use repository::{LearningRepository, RepositoryError};
pub use router::tracker_router;
pub use service::{InsightsError, LearningInsightsService, NotesDigest};
