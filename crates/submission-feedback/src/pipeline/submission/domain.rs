use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::assignment::TypeAnalysis;
use crate::pipeline::evaluation::{Dimension, DimensionResult, EvaluationReport};
use crate::pipeline::feedback::{FeedbackSuggestion, ImprovementArea, StrengthEntry};
use crate::pipeline::metrics::TextMetrics;

/// One uploaded submission; `content` is the raw payload handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFile {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}

impl SubmissionFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            student_name: None,
        }
    }

    pub fn with_student(mut self, student_name: impl Into<String>) -> Self {
        self.student_name = Some(student_name.into());
        self
    }

    /// Explicit student name, falling back to one derived from the file name.
    pub fn resolved_student_name(&self) -> String {
        self.student_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| student_name_from_file(&self.name))
    }
}

/// `jane_doe-essay1.txt` becomes `Jane Doe Essay1`.
pub fn student_name_from_file(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    let name = stem
        .split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        "Unknown Student".to_string()
    } else {
        name
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<String>,
    /// Dimension names to compute; `None` computes all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_criteria: Option<Vec<String>>,
}

/// Merged output of the pipeline for one successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAnalysis {
    pub overall_quality: f64,
    pub word_count: usize,
    /// Flesch Reading Ease from the text metrics.
    pub readability_score: f64,
    pub dimension_scores: BTreeMap<Dimension, DimensionResult>,
    pub strengths: Vec<StrengthEntry>,
    pub improvement_areas: Vec<ImprovementArea>,
    pub feedback_suggestions: Vec<FeedbackSuggestion>,
    pub assignment_focus: Vec<String>,
    pub narrative_feedback: String,
    pub text_metrics: TextMetrics,
    pub type_analysis: TypeAnalysis,
    pub evaluation: EvaluationReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Error,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }
}

/// Per-file outcome. Exactly one of `analysis` and `error_message` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    file_name: String,
    student_name: String,
    status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<Box<SubmissionAnalysis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
    timestamp: DateTime<Utc>,
}

impl SubmissionResult {
    pub fn success(
        file_name: impl Into<String>,
        student_name: impl Into<String>,
        analysis: SubmissionAnalysis,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            student_name: student_name.into(),
            status: SubmissionStatus::Success,
            analysis: Some(Box::new(analysis)),
            error_message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(
        file_name: impl Into<String>,
        student_name: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            student_name: student_name.into(),
            status: SubmissionStatus::Error,
            analysis: None,
            error_message: Some(error_message.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    pub fn analysis(&self) -> Option<&SubmissionAnalysis> {
        self.analysis.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Results in input order, one per submitted file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchResult {
    results: Vec<SubmissionResult>,
}

impl BatchResult {
    pub fn new(results: Vec<SubmissionResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubmissionResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[SubmissionResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SubmissionResult> {
        self.results
    }

    pub fn summary(&self) -> BatchSummary {
        let qualities: Vec<f64> = self
            .results
            .iter()
            .filter_map(|result| result.analysis())
            .map(|analysis| analysis.overall_quality)
            .collect();

        let average_quality = if qualities.is_empty() {
            None
        } else {
            Some(qualities.iter().sum::<f64>() / qualities.len() as f64)
        };

        BatchSummary {
            total: self.results.len(),
            succeeded: qualities.len(),
            failed: self.results.len() - qualities.len(),
            average_quality,
        }
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a SubmissionResult;
    type IntoIter = std::slice::Iter<'a, SubmissionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub average_quality: Option<f64>,
}
