use once_cell::sync::Lazy;
use regex::Regex;

static SILENT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));
static VOWEL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").expect("valid regex"));

/// Approximate syllable count for a single word.
///
/// A proxy for readability scoring rather than a dictionary lookup: silent endings and a
/// leading `y` are dropped, then vowel runs are counted. Never returns zero.
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if word.chars().count() <= 3 {
        return 1;
    }

    let trimmed = SILENT_SUFFIX.replace(&word, "");
    let trimmed = trimmed.strip_prefix('y').unwrap_or(&trimmed);

    VOWEL_RUN.find_iter(trimmed).count().max(1)
}
