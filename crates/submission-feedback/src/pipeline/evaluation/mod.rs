mod config;
mod dimensions;
mod policy;

pub use config::{DimensionWeights, EvaluationConfig};
pub use policy::{weighted_overall, DimensionHighlight};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::assignment::AssignmentType;
use super::metrics::tokenize::{round2, TextProfile};

/// One named axis of qualitative evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Structure,
    Creativity,
    Accuracy,
    Presentation,
    CriticalThinking,
    Originality,
    Clarity,
    Depth,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Structure,
        Dimension::Creativity,
        Dimension::Accuracy,
        Dimension::Presentation,
        Dimension::CriticalThinking,
        Dimension::Originality,
        Dimension::Clarity,
        Dimension::Depth,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Structure => "structure",
            Dimension::Creativity => "creativity",
            Dimension::Accuracy => "accuracy",
            Dimension::Presentation => "presentation",
            Dimension::CriticalThinking => "critical_thinking",
            Dimension::Originality => "originality",
            Dimension::Clarity => "clarity",
            Dimension::Depth => "depth",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Dimension::Structure => "Structure",
            Dimension::Creativity => "Creativity",
            Dimension::Accuracy => "Accuracy",
            Dimension::Presentation => "Presentation",
            Dimension::CriticalThinking => "Critical Thinking",
            Dimension::Originality => "Originality",
            Dimension::Clarity => "Clarity",
            Dimension::Depth => "Depth",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = EvaluationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.name() == value)
            .ok_or_else(|| EvaluationError::UnknownDimension {
                name: value.to_string(),
            })
    }
}

/// Parses external criteria names, failing on the first unknown one.
pub fn parse_dimensions<S: AsRef<str>>(names: &[S]) -> Result<Vec<Dimension>, EvaluationError> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("unknown evaluation dimension '{name}'")]
    UnknownDimension { name: String },
}

/// Score, feedback and diagnostic sub-measurements for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionResult {
    #[serde(rename = "dimensionName")]
    pub dimension: Dimension,
    pub score: f64,
    pub feedback: String,
    pub details: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub dimensions: BTreeMap<Dimension, DimensionResult>,
    pub overall_score: f64,
    pub strengths: Vec<DimensionHighlight>,
    pub improvements: Vec<DimensionHighlight>,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Flesch-Kincaid grade normalized to `[0, 1]`; higher reads more easily.
    pub readability_score: f64,
    pub narrative_feedback: String,
}

impl EvaluationReport {
    pub fn score(&self, dimension: Dimension) -> Option<f64> {
        self.dimensions.get(&dimension).map(|result| result.score)
    }
}

/// Stateless evaluator applying the configured weights to the dimension heuristics.
#[derive(Debug, Clone, Default)]
pub struct DimensionEvaluator {
    config: EvaluationConfig,
}

impl DimensionEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Scores a single dimension named by external input.
    pub fn evaluate_one(
        &self,
        text: &str,
        dimension: &str,
        assignment_type: AssignmentType,
    ) -> Result<DimensionResult, EvaluationError> {
        let dimension: Dimension = dimension.parse()?;
        let profile = TextProfile::new(text);
        Ok(evaluate_dimension(dimension, &profile, assignment_type))
    }

    pub fn evaluate_all(&self, text: &str, assignment_type: AssignmentType) -> EvaluationReport {
        self.evaluate_selected(text, assignment_type, &Dimension::ALL)
    }

    /// Evaluates a subset of dimensions; duplicates are scored once.
    pub fn evaluate_selected(
        &self,
        text: &str,
        assignment_type: AssignmentType,
        selected: &[Dimension],
    ) -> EvaluationReport {
        let profile = TextProfile::new(text);

        let mut results = BTreeMap::new();
        for dimension in selected {
            results
                .entry(*dimension)
                .or_insert_with(|| evaluate_dimension(*dimension, &profile, assignment_type));
        }

        let scores: Vec<(Dimension, f64)> = results
            .values()
            .map(|result| (result.dimension, result.score))
            .collect();
        let overall_score = weighted_overall(&scores, profile.word_count(), &self.config);
        let (strengths, improvements) = policy::classify(results.values(), &self.config);
        let narrative_feedback = policy::narrative(
            overall_score,
            &strengths,
            &improvements,
            profile.word_count(),
            &self.config,
        );
        let (_, readability) = dimensions::normalized_readability(&profile);

        EvaluationReport {
            dimensions: results,
            overall_score,
            strengths,
            improvements,
            word_count: profile.word_count(),
            sentence_count: profile.sentence_count(),
            paragraph_count: profile.paragraph_count(),
            readability_score: round2(readability),
            narrative_feedback,
        }
    }
}

fn evaluate_dimension(
    dimension: Dimension,
    profile: &TextProfile<'_>,
    assignment_type: AssignmentType,
) -> DimensionResult {
    let scored = dimensions::score(dimension, profile, assignment_type);
    DimensionResult {
        dimension,
        score: scored.score,
        feedback: scored.feedback,
        details: scored.details,
    }
}
