//! Text analysis pipeline: features, assignment rubrics, dimension scoring and feedback.

pub mod assignment;
pub mod evaluation;
pub mod feedback;
pub(crate) mod keywords;
pub mod metrics;
pub mod submission;

pub use assignment::{AssignmentType, AssignmentTypeAnalyzer, TypeAnalysis};
pub use evaluation::{
    Dimension, DimensionEvaluator, DimensionResult, EvaluationConfig, EvaluationError,
    EvaluationReport,
};
pub use feedback::{FeedbackSynthesis, FeedbackSynthesizer, Priority};
pub use metrics::{TextFeatureExtractor, TextMetrics};
pub use submission::{
    submission_router, BatchResult, SubmissionError, SubmissionFile, SubmissionOptions,
    SubmissionResult, SubmissionService, SubmissionStatus,
};
