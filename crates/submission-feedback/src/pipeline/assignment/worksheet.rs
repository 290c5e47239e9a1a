use once_cell::sync::Lazy;
use regex::Regex;

use super::{Check, Rubric};
use crate::pipeline::keywords::{EXPLANATION_TERMS, HEDGE_TERMS};
use crate::pipeline::metrics::tokenize::{capped, ratio, TextProfile};

static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:q(?:uestion)?\s*\d+|\d+\s*[.):]|[a-h]\s*[.)])\s*").expect("valid regex")
});
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*•]|\d+\s*[.):]|[a-h]\s*[.)])\s+").expect("valid regex"));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("valid regex"));

/// Words a numbered answer needs after its marker to count as answered.
const MIN_ANSWER_WORDS: usize = 3;

pub(super) static RUBRIC: Rubric = Rubric {
    checks: &[
        Check {
            name: "completeness",
            weight: 0.30,
            strength: "All questions appear to be answered",
            improvement: "Make sure every question has a complete answer",
        },
        Check {
            name: "accuracy",
            weight: 0.25,
            strength: "Answers are stated precisely and confidently",
            improvement: "Give precise answers and check uncertain responses",
        },
        Check {
            name: "understanding",
            weight: 0.20,
            strength: "Answers explain the reasoning behind them",
            improvement: "Explain why your answers are correct, not just what they are",
        },
        Check {
            name: "effort",
            weight: 0.15,
            strength: "Responses show thorough effort",
            improvement: "Expand short responses with more detail",
        },
        Check {
            name: "organization",
            weight: 0.10,
            strength: "Answers are clearly numbered and organized",
            improvement: "Number or label your answers so each one is easy to find",
        },
    ],
    improvement_cut: 0.6,
    fixed_overall: None,
    score,
};

fn score(profile: &TextProfile<'_>) -> Vec<f64> {
    let lines = profile.lines();
    let words = profile.word_count() as f64;

    let mut questions = 0usize;
    let mut answered = 0usize;
    for (index, line) in lines.iter().enumerate() {
        let Some(marker) = QUESTION_MARKER.find(line) else {
            continue;
        };
        questions += 1;
        let inline_words = line[marker.end()..].split_whitespace().count();
        let follow_up = lines
            .get(index + 1)
            .is_some_and(|next| !QUESTION_MARKER.is_match(next));
        if inline_words >= MIN_ANSWER_WORDS || follow_up {
            answered += 1;
        }
    }
    let completeness = if questions == 0 {
        capped(words, 100.0)
    } else {
        ratio(answered as f64, questions as f64)
    };

    let hedges = profile.count_terms(HEDGE_TERMS) as f64;
    let numbers = NUMBER.find_iter(profile.text).count() as f64;
    let accuracy = if words == 0.0 {
        0.0
    } else {
        (1.0 - capped(hedges, 5.0)) * 0.7 + capped(numbers, 5.0) * 0.3
    };

    let understanding = capped(profile.count_terms(EXPLANATION_TERMS) as f64, 5.0);
    let effort = capped(words, 200.0);

    let structured_lines = lines.iter().filter(|line| LIST_MARKER.is_match(line)).count();
    let organization = capped(structured_lines as f64, 5.0)
        .max(capped(profile.paragraph_count() as f64, 3.0));

    vec![completeness, accuracy, understanding, effort, organization]
}
