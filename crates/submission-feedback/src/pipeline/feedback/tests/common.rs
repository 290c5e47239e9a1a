use std::collections::BTreeMap;

use crate::pipeline::evaluation::{Dimension, DimensionResult, EvaluationReport};
use crate::pipeline::metrics::{
    GrammarIssue, GrammarIssueKind, SentimentScore, TextMetrics, VocabularyStats, WordFrequency,
};

/// A 100-word, five-sentence submission that triggers no derived feedback on its own.
pub(super) fn plain_metrics() -> TextMetrics {
    TextMetrics {
        word_count: 100,
        sentence_count: 5,
        paragraph_count: 2,
        average_words_per_sentence: 20.0,
        average_syllables_per_word: 1.5,
        readability_score: 50.0,
        sentiment: SentimentScore::default(),
        grammar_issues: Vec::new(),
        vocabulary: VocabularyStats {
            unique_word_count: 50,
            total_word_count: 100,
            diversity: 0.5,
            most_frequent: Some(frequency("the", 5)),
            overused_words: Vec::new(),
        },
    }
}

pub(super) fn frequency(word: &str, count: usize) -> WordFrequency {
    WordFrequency {
        word: word.to_string(),
        count,
    }
}

pub(super) fn capitalization_issues(count: usize) -> Vec<GrammarIssue> {
    (1..=count)
        .map(|index| GrammarIssue {
            kind: GrammarIssueKind::Capitalization,
            sentence_index: index,
            description: "Sentence should start with a capital letter".to_string(),
            suggestion: "Capitalize the first word".to_string(),
        })
        .collect()
}

pub(super) fn report(scores: &[(Dimension, f64)]) -> EvaluationReport {
    let dimensions: BTreeMap<Dimension, DimensionResult> = scores
        .iter()
        .map(|&(dimension, score)| {
            (
                dimension,
                DimensionResult {
                    dimension,
                    score,
                    feedback: format!("{} feedback", dimension.display_name()),
                    details: BTreeMap::new(),
                },
            )
        })
        .collect();

    EvaluationReport {
        dimensions,
        overall_score: 0.0,
        strengths: Vec::new(),
        improvements: Vec::new(),
        word_count: 100,
        sentence_count: 5,
        paragraph_count: 2,
        readability_score: 0.5,
        narrative_feedback: String::new(),
    }
}
