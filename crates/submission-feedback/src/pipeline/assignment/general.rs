use super::{Check, Rubric};
use crate::pipeline::metrics::tokenize::{capped, sentence_length_fit, TextProfile};

/// Composite reported for untyped submissions regardless of sub-scores.
const GENERAL_OVERALL: f64 = 0.7;

pub(super) static RUBRIC: Rubric = Rubric {
    checks: &[
        Check {
            name: "content",
            weight: 0.25,
            strength: "Substantial content",
            improvement: "Develop your content with more detail",
        },
        Check {
            name: "organization",
            weight: 0.25,
            strength: "Ideas are organized into paragraphs",
            improvement: "Organize ideas into separate paragraphs",
        },
        Check {
            name: "clarity",
            weight: 0.25,
            strength: "Sentences are a comfortable length to read",
            improvement: "Aim for sentences of roughly 15-25 words",
        },
        Check {
            name: "depth",
            weight: 0.25,
            strength: "Varied vocabulary suggests depth of thought",
            improvement: "Explore the topic in more depth with varied vocabulary",
        },
    ],
    improvement_cut: 0.5,
    fixed_overall: Some(GENERAL_OVERALL),
    score,
};

fn score(profile: &TextProfile<'_>) -> Vec<f64> {
    vec![
        capped(profile.word_count() as f64, 200.0),
        capped(profile.paragraph_count() as f64, 3.0),
        sentence_length_fit(profile.avg_words_per_sentence()),
        capped(profile.lexical_diversity(), 0.6),
    ]
}
