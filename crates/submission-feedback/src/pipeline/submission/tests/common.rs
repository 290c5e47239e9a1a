use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::pipeline::evaluation::EvaluationConfig;
use crate::pipeline::submission::{
    ExtractionError, PassthroughExtractor, SubmissionFile, SubmissionService, TextExtractor,
};

pub(super) const ESSAY: &str = "In this essay I will argue that public libraries remain essential to modern communities. \
Libraries provide free access to books, computers and quiet study space for every resident.\n\n\
First, research shows that students who visit libraries read more often. For example, a 2019 survey of 1200 pupils found that regular visitors scored 15 percent higher in reading tests. \
Furthermore, librarians help people evaluate sources, which is an important skill because misinformation spreads quickly online.\n\n\
However, some critics argue that the internet has made libraries obsolete. This view ignores the fact that many households still lack reliable internet access. \
Therefore, closing libraries would widen the gap between rich and poor families.\n\n\
In conclusion, libraries are not relics of the past. They support learning, equality and community life, and councils should continue to fund them.";

pub(super) fn file(name: &str, content: &str) -> SubmissionFile {
    SubmissionFile::new(name, content)
}

pub(super) fn passthrough_service() -> Arc<SubmissionService<PassthroughExtractor>> {
    Arc::new(SubmissionService::new(
        Arc::new(PassthroughExtractor),
        EvaluationConfig::default(),
    ))
}

/// Fails for files whose name starts with `corrupt`.
pub(super) struct SelectiveExtractor;

impl TextExtractor for SelectiveExtractor {
    fn extract_text(&self, file: &SubmissionFile) -> Result<String, ExtractionError> {
        if file.name.starts_with("corrupt") {
            Err(ExtractionError::new("unsupported file encoding"))
        } else {
            Ok(file.content.clone())
        }
    }
}

/// Panics for files whose name starts with `panic`.
pub(super) struct PanickingExtractor;

impl TextExtractor for PanickingExtractor {
    fn extract_text(&self, file: &SubmissionFile) -> Result<String, ExtractionError> {
        if file.name.starts_with("panic") {
            panic!("extractor crashed on {}", file.name);
        }
        Ok(file.content.clone())
    }
}

pub(super) fn service_with<X: TextExtractor + 'static>(extractor: X) -> Arc<SubmissionService<X>> {
    Arc::new(SubmissionService::new(
        Arc::new(extractor),
        EvaluationConfig::default(),
    ))
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collected");
    serde_json::from_slice(&bytes).expect("json body")
}
