use crate::infra::InMemoryLearningRepository;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use skillstack::error::AppError;
use skillstack::tracker::{
    DifficultyTier, LearningHistoryImporter, LearningInsightsService, Platform, ProgressSnapshot,
    ProgressStatus, ResourceId, ResourceKind, ResourceSnapshot, SkillId, SkillRef, SkillSnapshot,
};

#[derive(Args, Debug)]
pub(crate) struct WeeklyReportArgs {
    /// Pin the report clock to a date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Learning-history CSV export to report over instead of the sample data
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pin the demo clock to a date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Learning-history CSV export to demo against instead of the sample data
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// How many recommendations to show
    #[arg(long, default_value_t = 5)]
    pub(crate) limit: usize,
}

pub(crate) fn run_weekly_report(args: WeeklyReportArgs) -> Result<(), AppError> {
    let WeeklyReportArgs { as_of, seed_csv } = args;

    let now = resolve_clock(as_of);
    let service = build_service(seed_csv)?;
    let report = service.weekly_report(now).map_err(insights_failure)?;

    print_banner_report(&report);

    Ok(())
}

fn print_banner_report(report: &str) {
    let rule = "=".repeat(50);
    println!("{rule}");
    println!("WEEKLY LEARNING SUMMARY");
    println!("{rule}");
    println!("{report}");
    println!("{rule}");
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        as_of,
        seed_csv,
        limit,
    } = args;

    let now = resolve_clock(as_of);
    let service = build_service(seed_csv)?;

    println!("SkillStack demo");

    println!("\nTop resource recommendations:");
    let resources = service.recommend_resources(limit).map_err(insights_failure)?;
    if resources.is_empty() {
        println!("  (no resources on record)");
    }
    for scored in resources {
        println!(
            "  [{:>2}] {} ({} on {})",
            scored.score,
            scored.resource.title,
            scored.resource.kind.label(),
            scored.resource.platform.label()
        );
    }

    println!("\nSkills worth a look:");
    let skills = service.recommend_skills(limit).map_err(insights_failure)?;
    for scored in skills {
        println!("  [{:>5.1}] {}", scored.score, scored.skill.name);
    }

    println!("\nThis week at a glance:");
    let summary = service.weekly_summary(now).map_err(insights_failure)?;
    println!("  {summary}");

    println!();
    let report = service.weekly_report(now).map_err(insights_failure)?;
    print_banner_report(&report);

    Ok(())
}

fn insights_failure(error: skillstack::tracker::InsightsError) -> AppError {
    AppError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        error.to_string(),
    ))
}

fn resolve_clock(as_of: Option<NaiveDate>) -> DateTime<Utc> {
    as_of
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .unwrap_or_else(Utc::now)
}

fn build_service(
    seed_csv: Option<PathBuf>,
) -> Result<LearningInsightsService<InMemoryLearningRepository>, AppError> {
    let skills = match seed_csv {
        Some(path) => {
            let file = File::open(&path)?;
            LearningHistoryImporter::from_reader(file)?
        }
        None => sample_history(),
    };

    let repository = Arc::new(InMemoryLearningRepository::with_skills(skills));
    Ok(LearningInsightsService::new(repository))
}

/// Bundled sample learning history so the demo and a freshly started server
/// have something to show.
pub(crate) fn sample_history() -> Vec<SkillSnapshot> {
    let now = Utc::now();

    let rust = SkillRef {
        id: SkillId(1),
        name: "Rust".to_string(),
    };
    let sql = SkillRef {
        id: SkillId(2),
        name: "SQL".to_string(),
    };
    let linux = SkillRef {
        id: SkillId(3),
        name: "Linux".to_string(),
    };

    vec![
        SkillSnapshot {
            id: rust.id,
            name: rust.name.clone(),
            category: Some("Programming".to_string()),
            target_hours: 60.0,
            difficulty: DifficultyTier::Intermediate,
            resources: vec![
                ResourceSnapshot {
                    id: ResourceId(1),
                    title: "Ultimate Rust Crash Course".to_string(),
                    kind: ResourceKind::Course,
                    platform: Platform::Udemy,
                    url: None,
                    skill: rust.clone(),
                    progress: Some(ProgressSnapshot {
                        status: ProgressStatus::Completed,
                        hours_spent: 9.5,
                        notes: Some(
                            "Finished the ownership chapters. Lifetimes finally clicked.\n\
                             - Re-do the trait object exercises\n\
                             - Benchmark the string splitting homework"
                                .to_string(),
                        ),
                        difficulty_rating: Some(4),
                        started_at: Some(now - Duration::days(20)),
                        completed_at: Some(now - Duration::days(2)),
                        updated_at: now - Duration::days(2),
                    }),
                },
                ResourceSnapshot {
                    id: ResourceId(2),
                    title: "Crust of Rust: Iterators".to_string(),
                    kind: ResourceKind::Video,
                    platform: Platform::Youtube,
                    url: None,
                    skill: rust.clone(),
                    progress: Some(ProgressSnapshot {
                        status: ProgressStatus::InProgress,
                        hours_spent: 1.5,
                        notes: Some("Paused halfway through the flat_map section.".to_string()),
                        difficulty_rating: Some(3),
                        started_at: Some(now - Duration::days(3)),
                        completed_at: None,
                        updated_at: now - Duration::days(1),
                    }),
                },
                ResourceSnapshot {
                    id: ResourceId(3),
                    title: "Rust for Rustaceans".to_string(),
                    kind: ResourceKind::Book,
                    platform: Platform::Other,
                    url: None,
                    skill: rust,
                    progress: None,
                },
            ],
        },
        SkillSnapshot {
            id: sql.id,
            name: sql.name.clone(),
            category: Some("Data".to_string()),
            target_hours: 25.0,
            difficulty: DifficultyTier::Beginner,
            resources: vec![ResourceSnapshot {
                id: ResourceId(4),
                title: "SQL for Data Analysis".to_string(),
                kind: ResourceKind::Course,
                platform: Platform::Coursera,
                url: None,
                skill: sql,
                progress: Some(ProgressSnapshot {
                    status: ProgressStatus::Started,
                    hours_spent: 0.75,
                    notes: None,
                    difficulty_rating: None,
                    started_at: Some(now - Duration::days(4)),
                    completed_at: None,
                    updated_at: now - Duration::days(4),
                }),
            }],
        },
        SkillSnapshot {
            id: linux.id,
            name: linux.name.clone(),
            category: Some("Operations".to_string()),
            target_hours: 15.0,
            difficulty: DifficultyTier::Beginner,
            resources: vec![ResourceSnapshot {
                id: ResourceId(5),
                title: "Linux Journey".to_string(),
                kind: ResourceKind::Tutorial,
                platform: Platform::Other,
                url: None,
                skill: linux,
                progress: Some(ProgressSnapshot {
                    status: ProgressStatus::NotStarted,
                    hours_spent: 0.0,
                    notes: None,
                    difficulty_rating: None,
                    started_at: None,
                    completed_at: None,
                    updated_at: now - Duration::days(12),
                }),
            }],
        },
    ]
}
