use super::super::domain::{Platform, ProgressStatus, ResourceKind};

/// Courses carry the most weight as the most comprehensive medium.
pub(crate) const fn kind_weight(kind: ResourceKind) -> u32 {
    match kind {
        ResourceKind::Course => 3,
        ResourceKind::Video => 2,
        ResourceKind::Article
        | ResourceKind::Book
        | ResourceKind::Tutorial
        | ResourceKind::Other => 1,
    }
}

/// Platform popularity weights; unlisted platforms score the floor of 1.
pub(crate) const fn platform_weight(platform: Platform) -> u32 {
    match platform {
        Platform::Udemy => 5,
        Platform::Coursera => 4,
        Platform::Youtube => 3,
        Platform::Edx => 2,
        Platform::Pluralsight | Platform::LinkedinLearning | Platform::Other => 1,
    }
}

/// Engagement bonus; a missing progress record scores 0.
pub(crate) const fn status_bonus(status: Option<ProgressStatus>) -> u32 {
    match status {
        Some(ProgressStatus::Completed) => 5,
        Some(ProgressStatus::InProgress) => 2,
        Some(ProgressStatus::Started) => 1,
        Some(ProgressStatus::NotStarted) | None => 0,
    }
}
