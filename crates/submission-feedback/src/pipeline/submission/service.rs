use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::domain::{
    student_name_from_file, BatchResult, SubmissionAnalysis, SubmissionFile, SubmissionOptions,
    SubmissionResult,
};
use super::extraction::{PassthroughExtractor, TextExtractor};
use crate::pipeline::assignment::{AssignmentType, AssignmentTypeAnalyzer};
use crate::pipeline::evaluation::{
    parse_dimensions, Dimension, DimensionEvaluator, EvaluationConfig, EvaluationError,
};
use crate::pipeline::feedback::FeedbackSynthesizer;
use crate::pipeline::metrics::TextFeatureExtractor;

/// Drives submissions through extraction, metrics, type analysis, evaluation and synthesis.
///
/// Holds no per-submission state, so one instance can serve concurrent batches.
pub struct SubmissionService<X = PassthroughExtractor> {
    extractor: Arc<X>,
    features: TextFeatureExtractor,
    analyzer: AssignmentTypeAnalyzer,
    evaluator: DimensionEvaluator,
    synthesizer: FeedbackSynthesizer,
    default_assignment_type: AssignmentType,
    batch_workers: usize,
}

impl<X> SubmissionService<X>
where
    X: TextExtractor + 'static,
{
    pub fn new(extractor: Arc<X>, config: EvaluationConfig) -> Self {
        Self {
            extractor,
            features: TextFeatureExtractor::default(),
            analyzer: AssignmentTypeAnalyzer::new(),
            evaluator: DimensionEvaluator::new(config),
            synthesizer: FeedbackSynthesizer::new(),
            default_assignment_type: AssignmentType::General,
            batch_workers: DEFAULT_BATCH_WORKERS,
        }
    }

    /// Type used when options omit `assignmentType`.
    pub fn with_default_assignment_type(mut self, assignment_type: AssignmentType) -> Self {
        self.default_assignment_type = assignment_type;
        self
    }

    /// Worker bound for [`Self::process_batch_value_concurrent`]; zero is treated as one.
    pub fn with_batch_workers(mut self, workers: usize) -> Self {
        self.batch_workers = workers.max(1);
        self
    }

    pub fn batch_workers(&self) -> usize {
        self.batch_workers
    }

    pub fn with_feature_extractor(mut self, features: TextFeatureExtractor) -> Self {
        self.features = features;
        self
    }

    pub fn evaluator(&self) -> &DimensionEvaluator {
        &self.evaluator
    }

    /// Analyzes a single submission, surfacing its failure to the caller.
    pub fn process_one(
        &self,
        file: &SubmissionFile,
        options: &SubmissionOptions,
    ) -> Result<SubmissionAnalysis, SubmissionError> {
        let plan = self.plan(options)?;
        self.analyze(file, &plan)
    }

    /// Analyzes files in order; per-file failures become error entries.
    pub fn process_batch(
        &self,
        files: &[SubmissionFile],
        options: &SubmissionOptions,
    ) -> Result<BatchResult, SubmissionError> {
        let plan = self.plan(options)?;
        info!(files = files.len(), assignment_type = %plan.assignment_type, "processing batch");

        let results = files
            .iter()
            .map(|file| self.record(file, &plan))
            .collect();
        let batch = BatchResult::new(results);
        log_summary(&batch);
        Ok(batch)
    }

    /// Batch entry point for untyped input such as a decoded request body.
    pub fn process_batch_value(
        &self,
        files: &Value,
        options: &SubmissionOptions,
    ) -> Result<BatchResult, SubmissionError> {
        let items = files
            .as_array()
            .ok_or_else(|| SubmissionError::InvalidBatchInput {
                found: json_kind(files).to_string(),
            })?;
        let plan = self.plan(options)?;
        info!(files = items.len(), assignment_type = %plan.assignment_type, "processing batch");

        let results = items
            .iter()
            .enumerate()
            .map(|(index, item)| match decode_item(index, item) {
                Ok(file) => self.record(&file, &plan),
                Err(rejected) => rejected,
            })
            .collect();
        let batch = BatchResult::new(results);
        log_summary(&batch);
        Ok(batch)
    }

    /// Runs the batch on a blocking worker pool of at most `workers` tasks.
    ///
    /// Results keep input order regardless of completion order.
    pub async fn process_batch_concurrent(
        self: &Arc<Self>,
        files: Vec<SubmissionFile>,
        options: &SubmissionOptions,
        workers: usize,
    ) -> Result<BatchResult, SubmissionError> {
        let plan = self.plan(options)?;
        let items = files.into_iter().map(Ok).collect();
        Ok(self.run_pool(items, plan, workers).await)
    }

    /// Untyped batch input run on the pool sized by [`Self::batch_workers`].
    pub async fn process_batch_value_concurrent(
        self: &Arc<Self>,
        files: &Value,
        options: &SubmissionOptions,
    ) -> Result<BatchResult, SubmissionError> {
        let items = files
            .as_array()
            .ok_or_else(|| SubmissionError::InvalidBatchInput {
                found: json_kind(files).to_string(),
            })?;
        let plan = self.plan(options)?;
        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| decode_item(index, item))
            .collect();
        Ok(self.run_pool(items, plan, self.batch_workers).await)
    }

    async fn run_pool(
        self: &Arc<Self>,
        items: Vec<Result<SubmissionFile, SubmissionResult>>,
        plan: Plan,
        workers: usize,
    ) -> BatchResult {
        let workers = workers.max(1);
        info!(
            files = items.len(),
            workers,
            assignment_type = %plan.assignment_type,
            "processing batch concurrently"
        );

        let plan = Arc::new(plan);
        let semaphore = Arc::new(Semaphore::new(workers));
        let mut pending = Vec::with_capacity(items.len());
        for item in items {
            let file = match item {
                Ok(file) => file,
                Err(rejected) => {
                    pending.push(Pending::Ready(rejected));
                    continue;
                }
            };
            // The semaphore is never closed, so acquisition only waits.
            let permit = semaphore.clone().acquire_owned().await.ok();
            let identity = (file.name.clone(), file.resolved_student_name());
            let service = Arc::clone(self);
            let plan = Arc::clone(&plan);
            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                service.record(&file, &plan)
            });
            pending.push(Pending::Running(identity, handle));
        }

        let mut results = Vec::with_capacity(pending.len());
        for entry in pending {
            let result = match entry {
                Pending::Ready(result) => result,
                Pending::Running((file_name, student_name), handle) => match handle.await {
                    Ok(result) => result,
                    Err(error) => {
                        warn!(file = %file_name, %error, "submission worker failed");
                        SubmissionResult::failure(
                            file_name,
                            student_name,
                            format!("Submission worker failed: {error}"),
                        )
                    }
                },
            };
            results.push(result);
        }

        let batch = BatchResult::new(results);
        log_summary(&batch);
        batch
    }

    fn plan(&self, options: &SubmissionOptions) -> Result<Plan, SubmissionError> {
        let assignment_type = options
            .assignment_type
            .as_deref()
            .map(AssignmentType::parse_lenient)
            .unwrap_or(self.default_assignment_type);

        let dimensions = match options.evaluation_criteria.as_deref() {
            None | Some([]) => None,
            Some(names) => Some(parse_dimensions(names)?),
        };

        Ok(Plan {
            assignment_type,
            dimensions,
        })
    }

    fn record(&self, file: &SubmissionFile, plan: &Plan) -> SubmissionResult {
        let student_name = file.resolved_student_name();
        match self.analyze(file, plan) {
            Ok(analysis) => {
                debug!(
                    file = %file.name,
                    overall_quality = analysis.overall_quality,
                    words = analysis.word_count,
                    "submission analyzed"
                );
                SubmissionResult::success(file.name.clone(), student_name, analysis)
            }
            Err(error) => {
                warn!(file = %file.name, %error, "submission failed");
                SubmissionResult::failure(file.name.clone(), student_name, error.to_string())
            }
        }
    }

    fn analyze(
        &self,
        file: &SubmissionFile,
        plan: &Plan,
    ) -> Result<SubmissionAnalysis, SubmissionError> {
        let text = self
            .extractor
            .extract_text(file)
            .map_err(|error| SubmissionError::ExtractionFailed {
                message: error.to_string(),
            })?;
        if text.trim().is_empty() {
            return Err(SubmissionError::EmptyContent);
        }

        let metrics = self.features.extract(&text);
        let type_analysis = self.analyzer.analyze(&text, plan.assignment_type);
        let evaluation = match &plan.dimensions {
            Some(dimensions) => {
                self.evaluator
                    .evaluate_selected(&text, plan.assignment_type, dimensions)
            }
            None => self.evaluator.evaluate_all(&text, plan.assignment_type),
        };
        let feedback = self
            .synthesizer
            .synthesize(&metrics, &type_analysis, &evaluation);

        Ok(SubmissionAnalysis {
            overall_quality: evaluation.overall_score,
            word_count: metrics.word_count,
            readability_score: metrics.readability_score,
            dimension_scores: evaluation.dimensions.clone(),
            strengths: feedback.strengths,
            improvement_areas: feedback.improvement_areas,
            feedback_suggestions: feedback.suggestions,
            assignment_focus: feedback.assignment_focus,
            narrative_feedback: evaluation.narrative_feedback.clone(),
            text_metrics: metrics,
            type_analysis,
            evaluation,
        })
    }
}

impl Default for SubmissionService<PassthroughExtractor> {
    fn default() -> Self {
        Self::new(Arc::new(PassthroughExtractor), EvaluationConfig::default())
    }
}

/// Pool size for untyped batches until [`SubmissionService::with_batch_workers`] overrides it.
const DEFAULT_BATCH_WORKERS: usize = 4;

/// Options resolved once per call.
struct Plan {
    assignment_type: AssignmentType,
    dimensions: Option<Vec<Dimension>>,
}

enum Pending {
    Ready(SubmissionResult),
    Running((String, String), JoinHandle<SubmissionResult>),
}

/// Decodes one untyped batch item; malformed records become error entries.
fn decode_item(index: usize, item: &Value) -> Result<SubmissionFile, SubmissionResult> {
    serde_json::from_value::<SubmissionFile>(item.clone()).map_err(|error| {
        let name = item
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("submission-{}", index + 1));
        warn!(file = %name, %error, "malformed submission record");
        SubmissionResult::failure(
            name.clone(),
            student_name_from_file(&name),
            format!("Invalid submission record: {error}"),
        )
    })
}

fn log_summary(batch: &BatchResult) {
    let summary = batch.summary();
    info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch complete"
    );
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SubmissionError {
    #[error("Submission content is empty")]
    EmptyContent,
    #[error("Text extraction failed: {message}")]
    ExtractionFailed { message: String },
    #[error(transparent)]
    UnknownDimension(#[from] EvaluationError),
    #[error("batch input must be an array of submissions, found {found}")]
    InvalidBatchInput { found: String },
}
