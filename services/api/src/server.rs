use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryScreeningRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use resume_ranker::config::AppConfig;
use resume_ranker::error::AppError;
use resume_ranker::screening::ScreeningService;
use resume_ranker::telemetry;
use resume_ranker::ScoringEngine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let engine = Arc::new(ScoringEngine::new(config.engine_config()));
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: engine.clone(),
    };

    let repository = Arc::new(InMemoryScreeningRepository::default());
    let screening_service = Arc::new(ScreeningService::with_engine(repository, engine));

    let app = with_service_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        strategy = %config.ranking.strategy,
        "resume ranker ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
