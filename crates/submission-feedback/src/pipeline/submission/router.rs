use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::{SubmissionFile, SubmissionOptions, SubmissionResult};
use super::extraction::TextExtractor;
use super::service::SubmissionService;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    file: SubmissionFile,
    #[serde(default)]
    options: SubmissionOptions,
}

/// `files` stays untyped so a non-array payload maps to a batch input error.
#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    #[serde(default)]
    files: Value,
    #[serde(default)]
    options: SubmissionOptions,
}

/// Router builder exposing single and batch analysis endpoints.
pub fn submission_router<X>(service: Arc<SubmissionService<X>>) -> Router
where
    X: TextExtractor + 'static,
{
    Router::new()
        .route("/api/v1/submissions/analyze", post(analyze_handler::<X>))
        .route("/api/v1/submissions/batch", post(batch_handler::<X>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<X>(
    State(service): State<Arc<SubmissionService<X>>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response
where
    X: TextExtractor + 'static,
{
    let AnalyzeRequest { file, options } = request;
    let outcome = tokio::task::spawn_blocking(move || {
        service
            .process_one(&file, &options)
            .map(|analysis| {
                SubmissionResult::success(file.name.clone(), file.resolved_student_name(), analysis)
            })
    })
    .await;

    match outcome {
        Ok(Ok(result)) => (StatusCode::OK, axum::Json(result)).into_response(),
        Ok(Err(error)) => AppError::from(error).into_response(),
        Err(error) => internal_error(error.to_string()),
    }
}

pub(crate) async fn batch_handler<X>(
    State(service): State<Arc<SubmissionService<X>>>,
    axum::Json(request): axum::Json<BatchRequest>,
) -> Response
where
    X: TextExtractor + 'static,
{
    let BatchRequest { files, options } = request;

    match service.process_batch_value_concurrent(&files, &options).await {
        Ok(batch) => {
            let payload = json!({
                "summary": batch.summary(),
                "results": batch,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

fn internal_error(message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
