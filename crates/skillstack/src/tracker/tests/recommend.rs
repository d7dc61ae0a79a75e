use super::common::*;
use crate::tracker::domain::{Platform, ProgressStatus, ResourceKind};
use crate::tracker::recommend::{rank_resources, rank_skills, resource_score, skill_score};

#[test]
fn completed_udemy_course_scores_thirteen() {
    let candidate = resource(
        1,
        "Advanced Ownership",
        ResourceKind::Course,
        Platform::Udemy,
        Some(ProgressStatus::Completed),
    );

    assert_eq!(resource_score(&candidate), 13);
}

#[test]
fn unlisted_platform_and_type_fall_back_to_base_weight() {
    let candidate = resource(
        1,
        "Borrow Checker Deep Dive",
        ResourceKind::Book,
        Platform::Pluralsight,
        None,
    );

    // 1 for the medium, 1 for the platform, no engagement bonus.
    assert_eq!(resource_score(&candidate), 2);
}

#[test]
fn score_is_non_decreasing_as_status_advances() {
    let statuses = [
        None,
        Some(ProgressStatus::NotStarted),
        Some(ProgressStatus::Started),
        Some(ProgressStatus::InProgress),
        Some(ProgressStatus::Completed),
    ];

    let scores: Vec<u32> = statuses
        .iter()
        .map(|status| {
            resource_score(&resource(
                1,
                "Fixed",
                ResourceKind::Video,
                Platform::Youtube,
                *status,
            ))
        })
        .collect();

    for pair in scores.windows(2) {
        assert!(pair[0] <= pair[1], "scores must not regress: {scores:?}");
    }
}

#[test]
fn ranking_returns_top_limit_in_descending_order() {
    let candidates = vec![
        resource(1, "Article", ResourceKind::Article, Platform::Other, None),
        resource(
            2,
            "Course",
            ResourceKind::Course,
            Platform::Udemy,
            Some(ProgressStatus::Completed),
        ),
        resource(
            3,
            "Video",
            ResourceKind::Video,
            Platform::Youtube,
            Some(ProgressStatus::Started),
        ),
    ];

    let ranked = rank_resources(candidates, 2);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].resource.title, "Course");
    assert_eq!(ranked[0].score, 13);
    assert_eq!(ranked[1].resource.title, "Video");
    assert!(ranked[0].score >= ranked[1].score);
}

#[test]
fn every_returned_score_dominates_every_cut_candidate() {
    let candidates: Vec<_> = (0u64..8)
        .map(|index| {
            let status = match index % 4 {
                0 => Some(ProgressStatus::Completed),
                1 => Some(ProgressStatus::InProgress),
                2 => Some(ProgressStatus::Started),
                _ => None,
            };
            resource(index, "Candidate", ResourceKind::Video, Platform::Edx, status)
        })
        .collect();

    let all = rank_resources(candidates.clone(), usize::MAX);
    let kept = rank_resources(candidates, 3);

    let floor = kept.last().expect("three kept").score;
    for cut in &all[3..] {
        assert!(cut.score <= floor);
    }
}

#[test]
fn tied_candidates_keep_snapshot_order() {
    let candidates = vec![
        resource(10, "First", ResourceKind::Video, Platform::Youtube, None),
        resource(11, "Second", ResourceKind::Video, Platform::Youtube, None),
        resource(12, "Third", ResourceKind::Video, Platform::Youtube, None),
    ];

    let ranked = rank_resources(candidates, 3);

    let titles: Vec<&str> = ranked
        .iter()
        .map(|scored| scored.resource.title.as_str())
        .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[test]
fn zero_limit_and_empty_scope_yield_empty_lists() {
    let candidates = vec![resource(
        1,
        "Course",
        ResourceKind::Course,
        Platform::Udemy,
        None,
    )];

    assert!(rank_resources(candidates, 0).is_empty());
    assert!(rank_resources(Vec::new(), 5).is_empty());
    assert!(rank_skills(Vec::new(), 5).is_empty());
}

#[test]
fn skill_score_combines_breadth_and_completion() {
    let resources = vec![
        resource(
            1,
            "One",
            ResourceKind::Video,
            Platform::Youtube,
            Some(ProgressStatus::Completed),
        ),
        resource(
            2,
            "Two",
            ResourceKind::Video,
            Platform::Youtube,
            Some(ProgressStatus::InProgress),
        ),
        resource(3, "Three", ResourceKind::Video, Platform::Youtube, None),
        resource(4, "Four", ResourceKind::Video, Platform::Youtube, None),
    ];
    let candidate = skill(1, "Rust", resources);

    // 4 resources * 2 + (1/4 completed) * 10
    assert!((skill_score(&candidate) - 10.5).abs() < f64::EPSILON);
}

#[test]
fn skill_without_resources_scores_zero() {
    let candidate = skill(2, "Haskell", Vec::new());
    assert_eq!(skill_score(&candidate), 0.0);
}

#[test]
fn skill_ranking_prefers_completed_collections() {
    let finished = skill(
        1,
        "Rust",
        vec![resource(
            1,
            "One",
            ResourceKind::Video,
            Platform::Youtube,
            Some(ProgressStatus::Completed),
        )],
    );
    let untouched = skill(
        2,
        "Go",
        vec![resource(2, "Two", ResourceKind::Video, Platform::Youtube, None)],
    );

    let ranked = rank_skills(vec![untouched, finished], 2);

    assert_eq!(ranked[0].skill.name, "Rust");
    assert!((ranked[0].score - 12.0).abs() < f64::EPSILON);
    assert!((ranked[1].score - 2.0).abs() < f64::EPSILON);
}
