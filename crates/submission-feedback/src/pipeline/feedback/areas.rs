use serde::{Deserialize, Serialize};

use super::suggestions::GRAMMAR_DENSITY_HIGH;
use super::{grammar_density, Priority, SUGGESTION_CUT};
use crate::pipeline::evaluation::EvaluationReport;
use crate::pipeline::metrics::TextMetrics;

/// Diversity below this produces a vocabulary improvement area.
pub const LOW_DIVERSITY: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementArea {
    pub area: String,
    pub priority: Priority,
    pub score: f64,
    pub description: String,
}

pub(super) fn build(metrics: &TextMetrics, evaluation: &EvaluationReport) -> Vec<ImprovementArea> {
    let mut areas: Vec<ImprovementArea> = evaluation
        .dimensions
        .values()
        .filter(|result| result.score < SUGGESTION_CUT)
        .map(|result| ImprovementArea {
            area: result.dimension.display_name().to_string(),
            priority: band(result.score),
            score: result.score,
            description: result.feedback.clone(),
        })
        .collect();

    if !metrics.grammar_issues.is_empty() {
        let density = grammar_density(metrics);
        areas.push(ImprovementArea {
            area: "Grammar & Style".to_string(),
            priority: if density > GRAMMAR_DENSITY_HIGH {
                Priority::High
            } else {
                Priority::Medium
            },
            score: (1.0 - density).clamp(0.0, 1.0),
            description: format!(
                "{} grammar issue(s) across {} sentence(s)",
                metrics.grammar_issues.len(),
                metrics.sentence_count
            ),
        });
    }

    let vocabulary = &metrics.vocabulary;
    let low_diversity = vocabulary.total_word_count > 0 && vocabulary.diversity < LOW_DIVERSITY;
    let repeated = vocabulary.has_repeated_word();
    if low_diversity || repeated {
        let mut description = Vec::new();
        if low_diversity {
            description.push(format!(
                "Vocabulary diversity is {:.0}%; vary your word choice",
                vocabulary.diversity * 100.0
            ));
        }
        if !vocabulary.overused_words.is_empty() {
            let words: Vec<String> = vocabulary
                .overused_words
                .iter()
                .take(5)
                .map(|entry| format!("'{}' ({}x)", entry.word, entry.count))
                .collect();
            description.push(format!("Frequently repeated: {}", words.join(", ")));
        } else if let Some(entry) = vocabulary.most_frequent.as_ref().filter(|_| repeated) {
            description.push(format!(
                "'{}' appears {} times; try rephrasing some sentences",
                entry.word, entry.count
            ));
        }
        areas.push(ImprovementArea {
            area: "Vocabulary & Word Choice".to_string(),
            priority: if low_diversity {
                Priority::Medium
            } else {
                Priority::Low
            },
            score: vocabulary.diversity,
            description: description.join(". "),
        });
    }

    areas
}

pub(super) fn band(score: f64) -> Priority {
    if score < 0.4 {
        Priority::High
    } else if score < 0.6 {
        Priority::Medium
    } else {
        Priority::Low
    }
}
