use crate::cli::ServeArgs;
use crate::demo::sample_history;
use crate::infra::{AppState, InMemoryLearningRepository};
use crate::routes::with_tracker_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::fs::File;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use skillstack::config::AppConfig;
use skillstack::error::AppError;
use skillstack::telemetry;
use skillstack::tracker::{LearningHistoryImporter, LearningInsightsService, SkillSnapshot};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    let seed_csv = args.seed_csv.take().or_else(|| config.seed_csv.clone());

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let snapshot = match seed_csv {
        Some(path) => {
            let skills = load_history(&path)?;
            info!(path = %path.display(), skills = skills.len(), "seeded snapshot store from export");
            skills
        }
        None => sample_history(),
    };

    let repository = Arc::new(InMemoryLearningRepository::with_skills(snapshot));
    let insights_service = Arc::new(LearningInsightsService::new(repository));

    let app = with_tracker_routes(insights_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skillstack tracker ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn load_history(path: &std::path::Path) -> Result<Vec<SkillSnapshot>, AppError> {
    let file = File::open(path)?;
    Ok(LearningHistoryImporter::from_reader(file)?)
}
