//! Merges metrics, type analysis and dimension scores into prioritized feedback.

mod areas;
mod strengths;
mod suggestions;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::assignment::TypeAnalysis;
use super::evaluation::EvaluationReport;
use super::metrics::TextMetrics;

pub use areas::ImprovementArea;
pub use strengths::{StrengthEntry, StrengthTier};
pub use suggestions::FeedbackSuggestion;

/// Dimensions scoring below this receive a suggestion and an improvement area.
pub const SUGGESTION_CUT: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    const fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// High sorts first.
impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSynthesis {
    pub suggestions: Vec<FeedbackSuggestion>,
    pub improvement_areas: Vec<ImprovementArea>,
    pub strengths: Vec<StrengthEntry>,
    /// Assignment-specific gaps reported by the type analysis.
    pub assignment_focus: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackSynthesizer;

impl FeedbackSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(
        &self,
        metrics: &TextMetrics,
        type_analysis: &TypeAnalysis,
        evaluation: &EvaluationReport,
    ) -> FeedbackSynthesis {
        FeedbackSynthesis {
            suggestions: suggestions::build(metrics, evaluation),
            improvement_areas: areas::build(metrics, evaluation),
            strengths: strengths::build(metrics, evaluation),
            assignment_focus: type_analysis.improvements.clone(),
        }
    }
}

/// Issues per sentence; the whole issue count when no sentences were found.
pub(crate) fn grammar_density(metrics: &TextMetrics) -> f64 {
    let issues = metrics.grammar_issues.len() as f64;
    if metrics.sentence_count == 0 {
        issues
    } else {
        issues / metrics.sentence_count as f64
    }
}

pub(crate) fn by_score(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}
