use super::domain::SubmissionFile;

/// Upstream text extraction. Implementations may block.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, file: &SubmissionFile) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExtractionError {
    message: String,
}

impl ExtractionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Treats the file content as already-extracted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughExtractor;

impl TextExtractor for PassthroughExtractor {
    fn extract_text(&self, file: &SubmissionFile) -> Result<String, ExtractionError> {
        Ok(file.content.clone())
    }
}
