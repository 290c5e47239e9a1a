use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use submission_feedback::pipeline::assignment::AssignmentType;
use submission_feedback::pipeline::evaluation::{Dimension, EvaluationConfig};
use submission_feedback::pipeline::submission::{
    submission_router, SubmissionService, TextExtractor,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DimensionView {
    pub(crate) name: &'static str,
    pub(crate) display_name: &'static str,
    /// `None` for dimensions reported without contributing to the overall score.
    pub(crate) weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogResponse {
    pub(crate) dimensions: Vec<DimensionView>,
    pub(crate) assignment_types: Vec<&'static str>,
    pub(crate) length_penalty_words: usize,
}

pub(crate) fn with_submission_routes<X>(service: Arc<SubmissionService<X>>) -> axum::Router
where
    X: TextExtractor + 'static,
{
    let catalog = Arc::new(catalog(service.evaluator().config()));

    submission_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/submissions/catalog",
            axum::routing::get(move || catalog_endpoint(catalog.clone())),
        )
}

pub(crate) fn catalog(config: &EvaluationConfig) -> CatalogResponse {
    CatalogResponse {
        dimensions: Dimension::ALL
            .into_iter()
            .map(|dimension| DimensionView {
                name: dimension.name(),
                display_name: dimension.display_name(),
                weight: config.weights.weight(dimension),
            })
            .collect(),
        assignment_types: AssignmentType::ALL
            .into_iter()
            .map(AssignmentType::label)
            .collect(),
        length_penalty_words: config.length_penalty_words,
    }
}

pub(crate) async fn catalog_endpoint(catalog: Arc<CatalogResponse>) -> Json<CatalogResponse> {
    Json(catalog.as_ref().clone())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use submission_feedback::pipeline::submission::PassthroughExtractor;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(SubmissionService::new(
            Arc::new(PassthroughExtractor),
            EvaluationConfig::default(),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_submission_routes(service).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get(app(true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, body) = get(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, _) = get(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn catalog_lists_dimensions_and_weights() {
        let (status, body) = get(app(true), "/api/v1/submissions/catalog").await;
        assert_eq!(status, StatusCode::OK);

        let dimensions = body["dimensions"].as_array().expect("dimensions");
        assert_eq!(dimensions.len(), 8);
        assert_eq!(dimensions[0]["name"], "structure");
        assert_eq!(dimensions[0]["weight"], 0.2);
        let originality = dimensions
            .iter()
            .find(|entry| entry["name"] == "originality")
            .expect("originality listed");
        assert!(originality["weight"].is_null());
        assert_eq!(body["assignmentTypes"].as_array().unwrap().len(), 6);
        assert_eq!(body["lengthPenaltyWords"], 150);
    }

    #[tokio::test]
    async fn submission_routes_are_mounted() {
        let router = app(true);
        let payload = json!({"file": {"name": "a.txt", "content": "Libraries help people learn."}});
        let response = router
            .oneshot(
                Request::post("/api/v1/submissions/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
