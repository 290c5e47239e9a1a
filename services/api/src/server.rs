use crate::cli::ServeArgs;
use crate::infra::{AppState, FileSystemExtractor};
use crate::routes::with_submission_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use submission_feedback::config::AppConfig;
use submission_feedback::error::AppError;
use submission_feedback::pipeline::submission::SubmissionService;
use submission_feedback::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let extractor = match args.submissions_dir.take() {
        Some(root) => FileSystemExtractor::rooted(root),
        None => FileSystemExtractor::inline_only(),
    };
    let service = Arc::new(
        SubmissionService::new(Arc::new(extractor), config.engine.evaluation.clone())
            .with_default_assignment_type(config.engine.default_assignment_type)
            .with_batch_workers(config.engine.batch_workers),
    );

    let app = with_submission_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_assignment_type = %config.engine.default_assignment_type,
        batch_workers = config.engine.batch_workers,
        "submission feedback service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
