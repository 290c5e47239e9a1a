use serde::{Deserialize, Serialize};

use super::{by_score, SUGGESTION_CUT};
use crate::pipeline::evaluation::EvaluationReport;
use crate::pipeline::metrics::TextMetrics;

/// Scores at or above this are high-tier strengths.
pub const HIGH_STRENGTH: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    High,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthEntry {
    pub area: String,
    pub score: f64,
    pub tier: StrengthTier,
    pub description: String,
}

impl StrengthEntry {
    fn new(area: &str, score: f64, description: String) -> Self {
        Self {
            area: area.to_string(),
            score,
            tier: if score >= HIGH_STRENGTH {
                StrengthTier::High
            } else {
                StrengthTier::Moderate
            },
            description,
        }
    }
}

pub(super) fn build(metrics: &TextMetrics, evaluation: &EvaluationReport) -> Vec<StrengthEntry> {
    let mut strengths: Vec<StrengthEntry> = evaluation
        .dimensions
        .values()
        .filter(|result| result.score >= SUGGESTION_CUT)
        .map(|result| {
            StrengthEntry::new(
                result.dimension.display_name(),
                result.score,
                result.feedback.clone(),
            )
        })
        .collect();

    if metrics.word_count > 150 {
        strengths.push(StrengthEntry::new(
            "Length & Detail",
            (metrics.word_count as f64 / 500.0).min(1.0),
            format!("Substantial response of {} words", metrics.word_count),
        ));
    }

    if metrics.readability_score > 60.0 {
        strengths.push(StrengthEntry::new(
            "Readability",
            (metrics.readability_score / 100.0).min(1.0),
            format!(
                "Easy to read (Flesch reading ease {:.1})",
                metrics.readability_score
            ),
        ));
    }

    if metrics.vocabulary.diversity > 0.6 {
        strengths.push(StrengthEntry::new(
            "Vocabulary",
            metrics.vocabulary.diversity,
            format!(
                "Varied vocabulary ({} distinct words)",
                metrics.vocabulary.unique_word_count
            ),
        ));
    }

    strengths.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| by_score(b.score, a.score)));
    strengths
}
