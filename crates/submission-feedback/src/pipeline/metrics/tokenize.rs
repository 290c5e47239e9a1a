use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("valid regex"));

/// Whitespace-delimited tokens, untouched.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Sentences split on runs of terminal punctuation, trimmed, empties dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Paragraphs split on blank lines, trimmed, empties dropped.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Lowercases a token and strips surrounding punctuation, keeping inner apostrophes.
pub fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Divides, returning zero when the denominator is zero.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `min(1, raw / threshold)`, the capping pattern every heuristic uses.
pub(crate) fn capped(raw: f64, threshold: f64) -> f64 {
    ratio(raw, threshold).clamp(0.0, 1.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Population standard deviation; zero for fewer than two values.
pub(crate) fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Scores how close an average sentence length sits to the 15-25 word band.
pub(crate) fn sentence_length_fit(avg_words_per_sentence: f64) -> f64 {
    if avg_words_per_sentence == 0.0 {
        0.0
    } else if (15.0..=25.0).contains(&avg_words_per_sentence) {
        1.0
    } else {
        (1.0 - (avg_words_per_sentence - 20.0).abs() / 20.0).clamp(0.0, 1.0)
    }
}

/// Pre-tokenized view of a submission shared by the heuristic scorers.
///
/// Built once per call; nothing is cached across submissions.
#[derive(Debug, Clone)]
pub(crate) struct TextProfile<'a> {
    pub text: &'a str,
    pub words: Vec<&'a str>,
    pub sentences: Vec<&'a str>,
    pub paragraphs: Vec<&'a str>,
    pub tokens: Vec<String>,
    padded: String,
}

impl<'a> TextProfile<'a> {
    pub fn new(text: &'a str) -> Self {
        let words = words(text);
        let tokens: Vec<String> = words
            .iter()
            .map(|word| normalize(word))
            .filter(|token| !token.is_empty())
            .collect();
        let padded = format!(" {} ", tokens.join(" "));

        Self {
            text,
            words,
            sentences: sentences(text),
            paragraphs: paragraphs(text),
            tokens,
            padded,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn avg_words_per_sentence(&self) -> f64 {
        ratio(self.word_count() as f64, self.sentence_count() as f64)
    }

    /// Distinct normalized tokens over normalized tokens.
    pub fn lexical_diversity(&self) -> f64 {
        let distinct: std::collections::HashSet<&str> =
            self.tokens.iter().map(String::as_str).collect();
        ratio(distinct.len() as f64, self.tokens.len() as f64)
    }

    /// Counts occurrences of each term. Multi-word terms match whole-word phrases.
    pub fn count_terms(&self, terms: &[&str]) -> usize {
        terms.iter().map(|term| self.count_term(term)).sum()
    }

    pub fn count_term(&self, term: &str) -> usize {
        if term.contains(' ') {
            self.padded.matches(&format!(" {term} ")).count()
        } else {
            self.tokens.iter().filter(|token| token.as_str() == term).count()
        }
    }

    pub fn contains_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|term| self.count_term(term) > 0)
    }

    /// Word counts per sentence.
    pub fn sentence_lengths(&self) -> Vec<f64> {
        self.sentences
            .iter()
            .map(|sentence| sentence.split_whitespace().count() as f64)
            .collect()
    }

    /// Non-empty lines, trimmed.
    pub fn lines(&self) -> Vec<&'a str> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// True when any of the terms occurs in the given fragment as whole words.
pub(crate) fn fragment_contains(fragment: &str, terms: &[&str]) -> bool {
    TextProfile::new(fragment).contains_any(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences_on_punctuation_runs() {
        let found = sentences("Wait... what?! Yes.  ");
        assert_eq!(found, vec!["Wait", "what", "Yes"]);
    }

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        let found = paragraphs("First line\nstill first\n\n  \nSecond\r\n\r\nThird");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], "First line\nstill first");
    }

    #[test]
    fn counts_phrases_on_word_boundaries() {
        let profile = TextProfile::new("In conclusion, the conclusion holds. For example: this.");
        assert_eq!(profile.count_term("in conclusion"), 1);
        assert_eq!(profile.count_term("conclusion"), 2);
        assert_eq!(profile.count_term("for example"), 1);
    }

    #[test]
    fn ratio_defaults_to_zero() {
        assert_eq!(ratio(3.0, 0.0), 0.0);
        assert_eq!(capped(12.0, 6.0), 1.0);
    }
}
