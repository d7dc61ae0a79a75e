use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillId(pub u64);

/// Identifier wrapper for learning resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

/// Medium of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Course,
    Article,
    Book,
    Tutorial,
    Other,
}

impl ResourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Course => "course",
            ResourceKind::Article => "article",
            ResourceKind::Book => "book",
            ResourceKind::Tutorial => "tutorial",
            ResourceKind::Other => "other",
        }
    }

    /// Lenient parse for import boundaries; unrecognized media fall back to `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "video" => ResourceKind::Video,
            "course" => ResourceKind::Course,
            "article" => ResourceKind::Article,
            "book" => ResourceKind::Book,
            "tutorial" => ResourceKind::Tutorial,
            _ => ResourceKind::Other,
        }
    }
}

/// Hosting service a resource lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Udemy,
    Youtube,
    Coursera,
    Edx,
    Pluralsight,
    LinkedinLearning,
    Other,
}

impl Platform {
    pub const fn label(self) -> &'static str {
        match self {
            Platform::Udemy => "udemy",
            Platform::Youtube => "youtube",
            Platform::Coursera => "coursera",
            Platform::Edx => "edx",
            Platform::Pluralsight => "pluralsight",
            Platform::LinkedinLearning => "linkedin_learning",
            Platform::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "udemy" => Platform::Udemy,
            "youtube" => Platform::Youtube,
            "coursera" => Platform::Coursera,
            "edx" => Platform::Edx,
            "pluralsight" => Platform::Pluralsight,
            "linkedin_learning" | "linkedin learning" => Platform::LinkedinLearning,
            _ => Platform::Other,
        }
    }
}

/// Lifecycle stage of engagement with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    Started,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "not_started",
            ProgressStatus::Started => "started",
            ProgressStatus::InProgress => "in_progress",
            ProgressStatus::Completed => "completed",
        }
    }

    /// Human-readable form used in prose summaries, underscores rendered as spaces.
    pub const fn display_name(self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "not started",
            ProgressStatus::Started => "started",
            ProgressStatus::InProgress => "in progress",
            ProgressStatus::Completed => "completed",
        }
    }
}

/// Self-assessed difficulty tier of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    pub const fn label(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "Beginner",
            DifficultyTier::Intermediate => "Intermediate",
            DifficultyTier::Advanced => "Advanced",
        }
    }
}

/// Minimal reference to a resource's parent skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRef {
    pub id: SkillId,
    pub name: String,
}

/// Point-in-time view of a single progress record.
///
/// Records are owned and persisted by the collaborating storage layer; the
/// analytics core only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub status: ProgressStatus,
    pub hours_spent: f64,
    pub notes: Option<String>,
    pub difficulty_rating: Option<u8>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// A learning resource with its parent skill and, when one exists, its
/// single progress record attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub id: ResourceId,
    pub title: String,
    pub kind: ResourceKind,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub skill: SkillRef,
    pub progress: Option<ProgressSnapshot>,
}

/// A skill with its full resource collection attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSnapshot {
    pub id: SkillId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub target_hours: f64,
    pub difficulty: DifficultyTier,
    pub resources: Vec<ResourceSnapshot>,
}

/// Link from a windowed progress record back to its resource and skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub id: ResourceId,
    pub title: String,
    pub skill: Option<SkillRef>,
}

/// One windowed progress record together with its resource link.
///
/// The link is optional so a dangling record is treated as an explicit
/// absence rather than resolved through a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub progress: ProgressSnapshot,
    pub resource: Option<ResourceLink>,
}

impl ProgressEntry {
    pub fn status(&self) -> ProgressStatus {
        self.progress.status
    }

    pub fn skill_name(&self) -> Option<&str> {
        self.resource
            .as_ref()
            .and_then(|link| link.skill.as_ref())
            .map(|skill| skill.name.as_str())
    }

    pub fn resource_title(&self) -> Option<&str> {
        self.resource.as_ref().map(|link| link.title.as_str())
    }
}
