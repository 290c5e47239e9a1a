use serde::{Deserialize, Serialize};

use super::{by_score, grammar_density, Priority, SUGGESTION_CUT};
use crate::pipeline::evaluation::{Dimension, EvaluationReport};
use crate::pipeline::metrics::TextMetrics;

/// Grammar issues per sentence above this make the grammar suggestion high priority.
pub const GRAMMAR_DENSITY_HIGH: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSuggestion {
    pub category: String,
    pub priority: Priority,
    pub score: f64,
    pub suggestion: String,
}

pub(super) fn build(metrics: &TextMetrics, evaluation: &EvaluationReport) -> Vec<FeedbackSuggestion> {
    let mut suggestions: Vec<FeedbackSuggestion> = evaluation
        .dimensions
        .values()
        .filter(|result| result.score < SUGGESTION_CUT)
        .map(|result| FeedbackSuggestion {
            category: result.dimension.display_name().to_string(),
            priority: priority_for(result.score),
            score: result.score,
            suggestion: remediation(result.dimension.name()),
        })
        .collect();

    if !metrics.grammar_issues.is_empty() {
        let density = grammar_density(metrics);
        suggestions.push(FeedbackSuggestion {
            category: "Grammar & Style".to_string(),
            priority: if density > GRAMMAR_DENSITY_HIGH {
                Priority::High
            } else {
                Priority::Medium
            },
            score: (1.0 - density).clamp(0.0, 1.0),
            suggestion: format!(
                "Found {} grammar issue(s). Proofread for sentence capitalization, split run-on sentences and remove repeated words.",
                metrics.grammar_issues.len()
            ),
        });
    }

    suggestions.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| by_score(a.score, b.score))
    });
    suggestions
}

fn priority_for(score: f64) -> Priority {
    if score < 0.4 {
        Priority::High
    } else if score < 0.7 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Canned remediation keyed by dimension name, with a generic fallback.
pub(crate) fn remediation(dimension: &str) -> String {
    let text = match dimension.parse::<Dimension>() {
        Ok(Dimension::Structure) => {
            "Outline before writing: open with an introduction, give each main idea its own paragraph and finish with a conclusion. Use transitions such as 'furthermore' and 'however' to link paragraphs."
        }
        Ok(Dimension::Creativity) => {
            "Experiment with vivid description, figurative language and varied sentence openings to make your writing more engaging."
        }
        Ok(Dimension::Accuracy) => {
            "Double-check facts and replace vague statements with specific, verifiable details. Avoid hedges like 'maybe' or 'I think' when stating facts."
        }
        Ok(Dimension::Presentation) => {
            "Proofread before submitting: capitalize each sentence, break up run-on sentences and separate ideas into paragraphs."
        }
        Ok(Dimension::CriticalThinking) => {
            "Explain why and how, not just what. Support claims with evidence, consider alternative viewpoints and draw your own conclusions."
        }
        Ok(Dimension::Originality) => {
            "Replace clichés and stock phrases with your own wording, and bring in a personal angle on the topic."
        }
        Ok(Dimension::Clarity) => {
            "Keep sentences focused on one idea, prefer simpler words where possible and read your work aloud to catch confusing passages."
        }
        Ok(Dimension::Depth) => {
            "Develop each point further with specific examples, explanation and analysis of their significance."
        }
        Err(_) => {
            return format!("Review the {dimension} of your work and revise the weakest sections.");
        }
    };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_bands() {
        assert_eq!(priority_for(0.2), Priority::High);
        assert_eq!(priority_for(0.55), Priority::Medium);
        assert_eq!(priority_for(0.9), Priority::Low);
    }

    #[test]
    fn unknown_dimensions_use_generic_template() {
        let text = remediation("tone");
        assert!(text.contains("tone"));
    }
}
