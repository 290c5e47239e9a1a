use serde::{Deserialize, Serialize};

use super::Dimension;

/// Tunable weights and cut points for dimension scoring.
///
/// Defaults are the production constants; a JSON file can override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub weights: DimensionWeights,
    pub strength_threshold: f64,
    pub improvement_threshold: f64,
    /// Submissions shorter than this are scaled by `word_count / length_penalty_words`.
    pub length_penalty_words: usize,
    /// Submissions longer than this get a length note in the narrative.
    pub long_submission_words: usize,
    pub excellent_threshold: f64,
    pub good_threshold: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            strength_threshold: 0.7,
            improvement_threshold: 0.5,
            length_penalty_words: 150,
            long_submission_words: 1000,
            excellent_threshold: 0.8,
            good_threshold: 0.6,
        }
    }
}

impl EvaluationConfig {
    /// Multiplier applied to the weighted average: `min(1, word_count / length_penalty_words)`.
    pub fn length_factor(&self, word_count: usize) -> f64 {
        if self.length_penalty_words == 0 {
            return 1.0;
        }
        (word_count as f64 / self.length_penalty_words as f64).min(1.0)
    }
}

/// Contribution of each scorable dimension to the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub structure: f64,
    pub creativity: f64,
    pub accuracy: f64,
    pub presentation: f64,
    pub critical_thinking: f64,
    pub clarity: f64,
    pub depth: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            structure: 0.20,
            creativity: 0.15,
            accuracy: 0.15,
            presentation: 0.10,
            critical_thinking: 0.20,
            clarity: 0.10,
            depth: 0.10,
        }
    }
}

impl DimensionWeights {
    /// `None` for dimensions that are reported but never weighted (originality).
    pub fn weight(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Structure => Some(self.structure),
            Dimension::Creativity => Some(self.creativity),
            Dimension::Accuracy => Some(self.accuracy),
            Dimension::Presentation => Some(self.presentation),
            Dimension::CriticalThinking => Some(self.critical_thinking),
            Dimension::Clarity => Some(self.clarity),
            Dimension::Depth => Some(self.depth),
            Dimension::Originality => None,
        }
    }
}
