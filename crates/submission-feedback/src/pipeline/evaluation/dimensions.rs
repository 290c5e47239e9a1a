//! Heuristic scorers, one per dimension.
//!
//! Every scorer is pure over `(text, assignment type)` and returns a clamped score, a feedback
//! line and the raw measurements behind the score. Required detail keys:
//!
//! | dimension | details |
//! |---|---|
//! | structure | `paragraphCount`, `transitionCount`, `hasIntroduction`, `hasConclusion`, `avgParagraphLength` |
//! | creativity | `vocabularyDiversity`, `descriptiveWordCount`, `figurativeCount`, `sentenceVariety` |
//! | accuracy | `factualIndicatorCount`, `hedgeCount`, `numericDetailCount` |
//! | presentation | `capitalizationIssues`, `runOnSentences`, `issueDensity`, `avgSentenceLength`, `paragraphCount` |
//! | critical_thinking | `indicatorCount`, `indicatorDensity`, `questionCount` |
//! | originality | `uniqueBigramRatio`, `clicheCount`, `vocabularyDiversity` |
//! | clarity | `gradeLevel`, `readability`, `avgSentenceLength`, `avgSyllablesPerWord`, `longSentenceRatio` |
//! | depth | `wordCount`, `complexWordRatio`, `elaborationCount`, `avgWordLength` |

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::Dimension;
use crate::pipeline::assignment::AssignmentType;
use crate::pipeline::keywords::{
    CLICHES, CONCLUSION_MARKERS, CRITICAL_TERMS, DESCRIPTIVE_TERMS, ELABORATION_TERMS,
    FACTUAL_TERMS, FIGURATIVE_TERMS, HEDGE_TERMS, INTRO_MARKERS, TRANSITIONS,
};
use crate::pipeline::metrics::count_syllables;
use crate::pipeline::metrics::grammar::{detect_issues, GrammarIssueKind};
use crate::pipeline::metrics::tokenize::{
    capped, fragment_contains, ratio, round2, standard_deviation, TextProfile,
};

static NUMERIC_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)?%?").expect("valid regex"));

/// Sentences above this many words count against clarity.
const LONG_SENTENCE_WORDS: f64 = 25.0;
/// Grade level that maps to a clarity readability of zero.
const MAX_GRADE_LEVEL: f64 = 16.0;

pub(super) struct Scored {
    pub score: f64,
    pub feedback: String,
    pub details: BTreeMap<String, f64>,
}

pub(super) fn score(
    dimension: Dimension,
    profile: &TextProfile<'_>,
    assignment_type: AssignmentType,
) -> Scored {
    let (score, details) = match dimension {
        Dimension::Structure => structure(profile, assignment_type),
        Dimension::Creativity => creativity(profile),
        Dimension::Accuracy => accuracy(profile),
        Dimension::Presentation => presentation(profile),
        Dimension::CriticalThinking => critical_thinking(profile),
        Dimension::Originality => originality(profile),
        Dimension::Clarity => clarity(profile),
        Dimension::Depth => depth(profile, assignment_type),
    };
    let score = round2(score.clamp(0.0, 1.0));

    Scored {
        score,
        feedback: feedback_for(dimension, score).to_string(),
        details: details
            .into_iter()
            .map(|(key, value)| (key.to_string(), round2(value)))
            .collect(),
    }
}

type Measured = (f64, Vec<(&'static str, f64)>);

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn expected_paragraphs(assignment_type: AssignmentType) -> f64 {
    match assignment_type {
        AssignmentType::Worksheet => 2.0,
        AssignmentType::Creative => 3.0,
        _ => 4.0,
    }
}

fn structure(profile: &TextProfile<'_>, assignment_type: AssignmentType) -> Measured {
    let paragraph_count = profile.paragraph_count() as f64;
    let transitions = profile.count_terms(TRANSITIONS) as f64;
    let opening = profile.paragraphs.first().copied().unwrap_or_default();
    let has_introduction = profile.paragraph_count() > 2 || fragment_contains(opening, INTRO_MARKERS);
    let has_conclusion = profile.contains_any(CONCLUSION_MARKERS);

    let score = capped(paragraph_count, expected_paragraphs(assignment_type)) * 0.3
        + capped(transitions, 5.0) * 0.3
        + flag(has_introduction) * 0.2
        + flag(has_conclusion) * 0.2;

    (
        score,
        vec![
            ("paragraphCount", paragraph_count),
            ("transitionCount", transitions),
            ("hasIntroduction", flag(has_introduction)),
            ("hasConclusion", flag(has_conclusion)),
            (
                "avgParagraphLength",
                ratio(profile.word_count() as f64, paragraph_count),
            ),
        ],
    )
}

fn creativity(profile: &TextProfile<'_>) -> Measured {
    let diversity = profile.lexical_diversity();
    let descriptive = profile.count_terms(DESCRIPTIVE_TERMS) as f64;
    let figurative = profile.count_terms(FIGURATIVE_TERMS) as f64;
    let variety = standard_deviation(&profile.sentence_lengths());

    let score = capped(diversity, 0.7) * 0.35
        + capped(descriptive, 8.0) * 0.25
        + capped(figurative, 3.0) * 0.2
        + capped(variety, 8.0) * 0.2;

    (
        score,
        vec![
            ("vocabularyDiversity", diversity),
            ("descriptiveWordCount", descriptive),
            ("figurativeCount", figurative),
            ("sentenceVariety", variety),
        ],
    )
}

fn accuracy(profile: &TextProfile<'_>) -> Measured {
    let factual = profile.count_terms(FACTUAL_TERMS) as f64;
    let hedges = profile.count_terms(HEDGE_TERMS) as f64;
    let numbers = NUMERIC_DETAIL.find_iter(profile.text).count() as f64;

    let score = if profile.word_count() == 0 {
        0.0
    } else {
        0.6 + (factual * 0.05).min(0.3) + (numbers * 0.02).min(0.1) - (hedges * 0.08).min(0.4)
    };

    (
        score,
        vec![
            ("factualIndicatorCount", factual),
            ("hedgeCount", hedges),
            ("numericDetailCount", numbers),
        ],
    )
}

fn presentation(profile: &TextProfile<'_>) -> Measured {
    let issues = detect_issues(&profile.sentences);
    let capitalization = issues
        .iter()
        .filter(|issue| issue.kind == GrammarIssueKind::Capitalization)
        .count() as f64;
    let run_ons = issues
        .iter()
        .filter(|issue| issue.kind == GrammarIssueKind::RunOn)
        .count() as f64;
    let density = ratio(issues.len() as f64, profile.sentence_count() as f64);
    let wall_of_text = profile.paragraph_count() == 1 && profile.word_count() > 150;

    let score = if profile.word_count() == 0 {
        0.0
    } else {
        1.0 - density.min(1.0) * 0.6 - if wall_of_text { 0.2 } else { 0.0 }
    };

    (
        score,
        vec![
            ("capitalizationIssues", capitalization),
            ("runOnSentences", run_ons),
            ("issueDensity", density),
            ("avgSentenceLength", profile.avg_words_per_sentence()),
            ("paragraphCount", profile.paragraph_count() as f64),
        ],
    )
}

fn critical_thinking(profile: &TextProfile<'_>) -> Measured {
    let indicators = profile.count_terms(CRITICAL_TERMS) as f64;
    let density = ratio(indicators * 100.0, profile.word_count() as f64);
    let questions = profile.text.matches('?').count() as f64;

    let score = capped(density, 3.0) * 0.8 + capped(questions, 3.0) * 0.2;

    (
        score,
        vec![
            ("indicatorCount", indicators),
            ("indicatorDensity", density),
            ("questionCount", questions),
        ],
    )
}

fn originality(profile: &TextProfile<'_>) -> Measured {
    let bigrams: Vec<(&str, &str)> = profile
        .tokens
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();
    let distinct: HashSet<&(&str, &str)> = bigrams.iter().collect();
    let bigram_ratio = ratio(distinct.len() as f64, bigrams.len() as f64);
    let cliches = profile.count_terms(CLICHES) as f64;
    let diversity = profile.lexical_diversity();

    let score = if profile.word_count() == 0 {
        0.0
    } else {
        bigram_ratio * 0.5 + capped(diversity, 0.7) * 0.3 + 0.2 - cliches * 0.1
    };

    (
        score,
        vec![
            ("uniqueBigramRatio", bigram_ratio),
            ("clicheCount", cliches),
            ("vocabularyDiversity", diversity),
        ],
    )
}

/// Flesch-Kincaid grade level.
pub(super) fn grade_level(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
}

/// Grade level mapped onto `[0, 1]` as `1 - grade / 16`; zero for empty text.
pub(super) fn normalized_readability(profile: &TextProfile<'_>) -> (f64, f64) {
    if profile.word_count() == 0 || profile.sentence_count() == 0 {
        return (0.0, 0.0);
    }
    let syllables: usize = profile.words.iter().map(|word| count_syllables(word)).sum();
    let grade = grade_level(
        profile.avg_words_per_sentence(),
        syllables as f64 / profile.word_count() as f64,
    );
    (grade, (1.0 - grade / MAX_GRADE_LEVEL).clamp(0.0, 1.0))
}

fn clarity(profile: &TextProfile<'_>) -> Measured {
    let (grade, readability) = normalized_readability(profile);
    let lengths = profile.sentence_lengths();
    let long_sentences = lengths
        .iter()
        .filter(|length| **length > LONG_SENTENCE_WORDS)
        .count();
    let long_ratio = ratio(long_sentences as f64, lengths.len() as f64);
    let syllables: usize = profile.words.iter().map(|word| count_syllables(word)).sum();

    let score = if profile.word_count() == 0 {
        0.0
    } else {
        readability * 0.7 + (1.0 - long_ratio) * 0.3
    };

    (
        score,
        vec![
            ("gradeLevel", grade),
            ("readability", readability),
            ("avgSentenceLength", profile.avg_words_per_sentence()),
            (
                "avgSyllablesPerWord",
                ratio(syllables as f64, profile.word_count() as f64),
            ),
            ("longSentenceRatio", long_ratio),
        ],
    )
}

fn depth(profile: &TextProfile<'_>, assignment_type: AssignmentType) -> Measured {
    let word_count = profile.word_count() as f64;
    let expected_words = match assignment_type {
        AssignmentType::Worksheet => 250.0,
        _ => 500.0,
    };
    let complex = profile
        .tokens
        .iter()
        .filter(|token| count_syllables(token) >= 3)
        .count() as f64;
    let complex_ratio = ratio(complex, profile.tokens.len() as f64);
    let elaborations = profile.count_terms(ELABORATION_TERMS) as f64;
    let letters: usize = profile.tokens.iter().map(|token| token.chars().count()).sum();

    let score = capped(word_count, expected_words) * 0.3
        + capped(complex_ratio, 0.15) * 0.3
        + capped(elaborations, 5.0) * 0.4;

    (
        score,
        vec![
            ("wordCount", word_count),
            ("complexWordRatio", complex_ratio),
            ("elaborationCount", elaborations),
            (
                "avgWordLength",
                ratio(letters as f64, profile.tokens.len() as f64),
            ),
        ],
    )
}

fn feedback_for(dimension: Dimension, score: f64) -> &'static str {
    let band = if score >= 0.7 {
        0
    } else if score >= 0.5 {
        1
    } else {
        2
    };
    let lines: [&str; 3] = match dimension {
        Dimension::Structure => [
            "Well-organized with clear paragraphs and smooth transitions.",
            "The structure is serviceable; clearer transitions would help ideas connect.",
            "Organize ideas into distinct paragraphs with an introduction and conclusion.",
        ],
        Dimension::Creativity => [
            "Creative, expressive language and varied sentences.",
            "Some creative touches; more descriptive language would add color.",
            "Try more vivid description, figurative language and varied sentence shapes.",
        ],
        Dimension::Accuracy => [
            "Claims are stated precisely and supported with concrete detail.",
            "Mostly precise; add specific facts or figures to firm up claims.",
            "Avoid hedging and support statements with verifiable facts.",
        ],
        Dimension::Presentation => [
            "Clean presentation with consistent capitalization and sentence control.",
            "Presentation is acceptable; proofread for capitalization and long sentences.",
            "Proofread carefully: fix capitalization, split run-on sentences and use paragraphs.",
        ],
        Dimension::CriticalThinking => [
            "Shows strong reasoning, weighing evidence and alternatives.",
            "Some analysis is present; push further on why and how.",
            "Go beyond description: explain causes, weigh evidence and consider other views.",
        ],
        Dimension::Originality => [
            "Fresh phrasing and an original perspective.",
            "Mostly original; replace stock phrases with your own wording.",
            "Avoid clichés and repeated phrasing; express ideas in your own words.",
        ],
        Dimension::Clarity => [
            "Clear, readable writing pitched at an accessible level.",
            "Generally clear; shorten the longest sentences for easier reading.",
            "Simplify long sentences and complex wording so the main points stand out.",
        ],
        Dimension::Depth => [
            "Explores the topic in depth with specific elaboration.",
            "Adequate depth; elaborate with more specific examples.",
            "Develop ideas further with explanations, examples and detail.",
        ],
    };
    lines[band]
}
