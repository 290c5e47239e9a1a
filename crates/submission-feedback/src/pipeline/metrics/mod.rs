//! Low-level text features: counts, readability, sentiment, grammar and vocabulary.

pub(crate) mod grammar;
mod sentiment;
mod syllables;
pub(crate) mod tokenize;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use grammar::{GrammarIssue, GrammarIssueKind, RUN_ON_WORD_LIMIT};
pub use sentiment::{AfinnLexicon, SentimentLexicon, SentimentScore};
pub use syllables::count_syllables;
pub use tokenize::{paragraphs, sentences, words};

use tokenize::{normalize, ratio, round2};

/// Words occurring more often than this are reported as overused.
pub const OVERUSE_THRESHOLD: usize = 5;

/// Immutable feature snapshot for a single submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub average_words_per_sentence: f64,
    pub average_syllables_per_word: f64,
    /// Flesch Reading Ease. Unclamped; dense text can go negative.
    pub readability_score: f64,
    pub sentiment: SentimentScore,
    pub grammar_issues: Vec<GrammarIssue>,
    pub vocabulary: VocabularyStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub unique_word_count: usize,
    pub total_word_count: usize,
    /// Distinct case-folded words over total words, two decimals.
    pub diversity: f64,
    /// Most repeated case-folded word of any length; ties go to the alphabetically first.
    pub most_frequent: Option<WordFrequency>,
    /// Content words above [`OVERUSE_THRESHOLD`], most frequent first.
    pub overused_words: Vec<WordFrequency>,
}

impl VocabularyStats {
    /// True when any single word occurs more than [`OVERUSE_THRESHOLD`] times.
    pub fn has_repeated_word(&self) -> bool {
        self.most_frequent
            .as_ref()
            .is_some_and(|entry| entry.count > OVERUSE_THRESHOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Flesch Reading Ease for precomputed averages.
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Stateless extractor; the sentiment lexicon is the only collaborator it holds.
#[derive(Clone)]
pub struct TextFeatureExtractor {
    lexicon: Arc<dyn SentimentLexicon>,
}

impl TextFeatureExtractor {
    pub fn new(lexicon: Arc<dyn SentimentLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn extract(&self, text: &str) -> TextMetrics {
        let words = words(text);
        let sentences = sentences(text);
        let paragraphs = paragraphs(text);

        let word_count = words.len();
        let sentence_count = sentences.len();
        let total_syllables: usize = words.iter().map(|word| count_syllables(word)).sum();

        let average_words_per_sentence = ratio(word_count as f64, sentence_count as f64);
        let average_syllables_per_word = ratio(total_syllables as f64, word_count as f64);
        let readability_score = if word_count == 0 || sentence_count == 0 {
            0.0
        } else {
            flesch_reading_ease(average_words_per_sentence, average_syllables_per_word)
        };

        TextMetrics {
            word_count,
            sentence_count,
            paragraph_count: paragraphs.len(),
            average_words_per_sentence: round2(average_words_per_sentence),
            average_syllables_per_word: round2(average_syllables_per_word),
            readability_score: round2(readability_score),
            sentiment: self.lexicon.analyze(text),
            grammar_issues: grammar::detect_issues(&sentences),
            vocabulary: vocabulary(&words),
        }
    }
}

impl Default for TextFeatureExtractor {
    fn default() -> Self {
        Self::new(Arc::new(AfinnLexicon::new()))
    }
}

impl std::fmt::Debug for TextFeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFeatureExtractor").finish_non_exhaustive()
    }
}

/// Words are case-folded with surrounding punctuation trimmed, the same
/// normalization the heuristics in [`tokenize::TextProfile`] use. The
/// denominator stays the whitespace word count, so punctuation-only tokens
/// lower diversity here but are dropped from the profile.
fn vocabulary(words: &[&str]) -> VocabularyStats {
    let total_word_count = words.len();

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for word in words {
        let token = normalize(word);
        if !token.is_empty() {
            *frequencies.entry(token).or_default() += 1;
        }
    }

    let most_frequent = frequencies
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(word, count)| WordFrequency {
            word: word.clone(),
            count: *count,
        });

    let mut overused_words: Vec<WordFrequency> = frequencies
        .iter()
        .filter(|(word, count)| word.chars().count() > 3 && **count > OVERUSE_THRESHOLD)
        .map(|(word, count)| WordFrequency {
            word: word.clone(),
            count: *count,
        })
        .collect();
    overused_words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    VocabularyStats {
        unique_word_count: frequencies.len(),
        total_word_count,
        diversity: round2(ratio(frequencies.len() as f64, total_word_count as f64)),
        most_frequent,
        overused_words,
    }
}
