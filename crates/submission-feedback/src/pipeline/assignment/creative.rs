use super::{Check, Rubric};
use crate::pipeline::keywords::{CHARACTER_TERMS, NARRATIVE_TERMS, SENSORY_TERMS};
use crate::pipeline::metrics::tokenize::{capped, ratio, standard_deviation, TextProfile};

pub(super) static RUBRIC: Rubric = Rubric {
    checks: &[
        Check {
            name: "creativity",
            weight: 0.25,
            strength: "Inventive, varied word choice",
            improvement: "Experiment with more unusual words and fresh ideas",
        },
        Check {
            name: "voice",
            weight: 0.20,
            strength: "A distinctive narrative voice comes through",
            improvement: "Let your narrator's personality show through rhythm and expression",
        },
        Check {
            name: "imagery",
            weight: 0.20,
            strength: "Vivid sensory imagery",
            improvement: "Add sensory details: what characters see, hear, smell and feel",
        },
        Check {
            name: "dialogue",
            weight: 0.15,
            strength: "Dialogue brings the characters to life",
            improvement: "Use dialogue to reveal character and move the story forward",
        },
        Check {
            name: "plot",
            weight: 0.10,
            strength: "Events unfold in a clear sequence",
            improvement: "Develop the plot with a clearer sequence of events",
        },
        Check {
            name: "character",
            weight: 0.10,
            strength: "Characters have thoughts and feelings of their own",
            improvement: "Develop characters through their thoughts, feelings and actions",
        },
    ],
    improvement_cut: 0.5,
    fixed_overall: None,
    score,
};

fn score(profile: &TextProfile<'_>) -> Vec<f64> {
    let long_words = profile
        .tokens
        .iter()
        .filter(|token| token.chars().count() > 8)
        .count();
    let long_word_ratio = ratio(long_words as f64, profile.tokens.len() as f64);
    let creativity =
        capped(profile.lexical_diversity(), 0.7) * 0.6 + capped(long_word_ratio, 0.1) * 0.4;

    let lengths = profile.sentence_lengths();
    let expressive = profile.text.matches(['!', '?']).count() as f64;
    let voice = capped(standard_deviation(&lengths), 8.0) * 0.5 + capped(expressive, 5.0) * 0.5;

    let imagery = capped(profile.count_terms(SENSORY_TERMS) as f64, 8.0);

    let quote_marks = profile.text.matches(['"', '\u{201c}', '\u{201d}']).count();
    let dialogue = capped((quote_marks / 2) as f64, 4.0);

    let plot = capped(profile.count_terms(NARRATIVE_TERMS) as f64, 6.0);
    let character = capped(profile.count_terms(CHARACTER_TERMS) as f64, 10.0);

    vec![creativity, voice, imagery, dialogue, plot, character]
}
