use serde::{Deserialize, Serialize};

use super::config::EvaluationConfig;
use super::{Dimension, DimensionResult};

/// A dimension surfaced to the reader as a strength or an improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionHighlight {
    pub dimension: Dimension,
    pub score: f64,
    pub feedback: String,
}

impl From<&DimensionResult> for DimensionHighlight {
    fn from(result: &DimensionResult) -> Self {
        Self {
            dimension: result.dimension,
            score: result.score,
            feedback: result.feedback.clone(),
        }
    }
}

/// Weighted mean over the scorable dimensions present, scaled by the length penalty.
///
/// Weights are renormalized over the dimensions actually evaluated, so any subset still
/// yields a value on `[0, 1]`. Unweighted dimensions are ignored.
pub fn weighted_overall(
    scores: &[(Dimension, f64)],
    word_count: usize,
    config: &EvaluationConfig,
) -> f64 {
    let (weighted_sum, weight_total) = scores
        .iter()
        .filter_map(|(dimension, score)| {
            config
                .weights
                .weight(*dimension)
                .map(|weight| (score * weight, weight))
        })
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value, total + weight)
        });

    if weight_total <= 0.0 {
        return 0.0;
    }

    let average = (weighted_sum / weight_total).clamp(0.0, 1.0);
    average * config.length_factor(word_count)
}

pub(super) fn classify<'a>(
    results: impl Iterator<Item = &'a DimensionResult>,
    config: &EvaluationConfig,
) -> (Vec<DimensionHighlight>, Vec<DimensionHighlight>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    for result in results {
        if result.score >= config.strength_threshold {
            strengths.push(DimensionHighlight::from(result));
        } else if result.score < config.improvement_threshold {
            improvements.push(DimensionHighlight::from(result));
        }
    }

    (strengths, improvements)
}

pub(super) fn narrative(
    overall: f64,
    strengths: &[DimensionHighlight],
    improvements: &[DimensionHighlight],
    word_count: usize,
    config: &EvaluationConfig,
) -> String {
    let mut lines = Vec::new();

    let tier = if overall >= config.excellent_threshold {
        "Excellent work! This submission demonstrates strong quality across the evaluated dimensions."
    } else if overall >= config.good_threshold {
        "Good work. The submission is solid, with some room for improvement."
    } else {
        "This submission needs improvement in several areas."
    };
    lines.push(format!("Overall Assessment: {tier}"));

    if !strengths.is_empty() {
        lines.push(String::new());
        lines.push("Strengths:".to_string());
        for (position, highlight) in strengths.iter().enumerate() {
            lines.push(format!(
                "{}. {}: {}",
                position + 1,
                highlight.dimension.display_name(),
                highlight.feedback
            ));
        }
    }

    if !improvements.is_empty() {
        lines.push(String::new());
        lines.push("Areas for Improvement:".to_string());
        for (position, highlight) in improvements.iter().enumerate() {
            lines.push(format!(
                "{}. {}: {}",
                position + 1,
                highlight.dimension.display_name(),
                highlight.feedback
            ));
        }
    }

    if word_count < config.length_penalty_words {
        lines.push(String::new());
        lines.push(format!(
            "Note: At {word_count} words this submission is short; aim for at least {} words to develop your ideas fully.",
            config.length_penalty_words
        ));
    } else if word_count > config.long_submission_words {
        lines.push(String::new());
        lines.push(format!(
            "Note: At {word_count} words this submission is long; consider tightening it to keep the focus sharp."
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result(dimension: Dimension, score: f64) -> DimensionResult {
        DimensionResult {
            dimension,
            score,
            feedback: format!("{dimension} feedback"),
            details: BTreeMap::new(),
        }
    }

    #[test]
    fn weights_renormalize_over_evaluated_subset() {
        let config = EvaluationConfig::default();
        let overall = weighted_overall(
            &[(Dimension::Structure, 0.9), (Dimension::Clarity, 0.6)],
            300,
            &config,
        );
        let expected = (0.9 * 0.20 + 0.6 * 0.10) / 0.30;
        assert!((overall - expected).abs() < 1e-12);
    }

    #[test]
    fn only_unweighted_dimensions_score_zero() {
        let config = EvaluationConfig::default();
        assert_eq!(
            weighted_overall(&[(Dimension::Originality, 0.9)], 300, &config),
            0.0
        );
    }

    #[test]
    fn classify_uses_inclusive_strength_and_exclusive_improvement_cuts() {
        let config = EvaluationConfig::default();
        let results = [
            result(Dimension::Structure, 0.7),
            result(Dimension::Clarity, 0.5),
            result(Dimension::Depth, 0.49),
        ];
        let (strengths, improvements) = classify(results.iter(), &config);
        assert_eq!(strengths.len(), 1);
        assert_eq!(strengths[0].dimension, Dimension::Structure);
        assert_eq!(improvements.len(), 1);
        assert_eq!(improvements[0].dimension, Dimension::Depth);
    }

    #[test]
    fn narrative_lists_sections_and_short_length_note() {
        let config = EvaluationConfig::default();
        let strengths = vec![DimensionHighlight::from(&result(Dimension::Clarity, 0.9))];
        let improvements = vec![DimensionHighlight::from(&result(Dimension::Depth, 0.2))];

        let text = narrative(0.65, &strengths, &improvements, 80, &config);
        assert!(text.starts_with("Overall Assessment: Good work."));
        assert!(text.contains("Strengths:\n1. Clarity: clarity feedback"));
        assert!(text.contains("Areas for Improvement:\n1. Depth: depth feedback"));
        assert!(text.contains("At 80 words"));

        let long = narrative(0.9, &[], &[], 1200, &config);
        assert!(long.starts_with("Overall Assessment: Excellent work!"));
        assert!(long.contains("is long"));
        assert!(!long.contains("Strengths:"));
    }
}
