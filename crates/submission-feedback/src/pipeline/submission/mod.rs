//! Single and batch submission processing with per-item failure isolation.

pub mod domain;
pub mod extraction;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    student_name_from_file, BatchResult, BatchSummary, SubmissionAnalysis, SubmissionFile,
    SubmissionOptions, SubmissionResult, SubmissionStatus,
};
pub use extraction::{ExtractionError, PassthroughExtractor, TextExtractor};
pub use router::submission_router;
pub use service::{SubmissionError, SubmissionService};
