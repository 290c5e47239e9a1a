use super::{Check, Rubric};
use crate::pipeline::keywords::{
    ARGUMENT_TERMS, CONCLUSION_MARKERS, COUNTER_TERMS, EVIDENCE_TERMS, INTRO_MARKERS,
    THESIS_MARKERS,
};
use crate::pipeline::metrics::tokenize::{capped, fragment_contains, sentence_length_fit, TextProfile};

pub(super) static RUBRIC: Rubric = Rubric {
    checks: &[
        Check {
            name: "structure",
            weight: 0.25,
            strength: "Clear essay structure with an introduction, body and conclusion",
            improvement: "Organize the essay into an introduction, body paragraphs and a conclusion",
        },
        Check {
            name: "argumentation",
            weight: 0.25,
            strength: "Builds its argument with clear reasoning and addresses counterpoints",
            improvement: "Strengthen the argument with explicit reasoning and consider opposing views",
        },
        Check {
            name: "evidence",
            weight: 0.20,
            strength: "Supports claims with examples and evidence",
            improvement: "Back up claims with specific examples, data or sources",
        },
        Check {
            name: "style",
            weight: 0.15,
            strength: "Readable sentence lengths and varied word choice",
            improvement: "Vary sentence length and word choice to improve flow",
        },
        Check {
            name: "thesis",
            weight: 0.10,
            strength: "States a clear thesis early in the essay",
            improvement: "State your thesis clearly in the opening paragraph",
        },
        Check {
            name: "conclusion",
            weight: 0.05,
            strength: "Closes with a conclusion that ties the argument together",
            improvement: "Finish with a conclusion that summarizes your main points",
        },
    ],
    improvement_cut: 0.5,
    fixed_overall: None,
    score,
};

fn score(profile: &TextProfile<'_>) -> Vec<f64> {
    let paragraphs = &profile.paragraphs;
    let first = paragraphs.first().copied().unwrap_or_default();
    let last = paragraphs.last().copied().unwrap_or_default();

    let has_intro = paragraphs.len() > 1 || fragment_contains(first, INTRO_MARKERS);
    let has_conclusion =
        paragraphs.len() > 2 || profile.contains_any(CONCLUSION_MARKERS);
    let structure = capped(paragraphs.len() as f64, 5.0) * 0.6
        + if has_intro { 0.2 } else { 0.0 }
        + if has_conclusion { 0.2 } else { 0.0 };

    let arguments = profile.count_terms(ARGUMENT_TERMS) as f64;
    let counters = profile.count_terms(COUNTER_TERMS) as f64;
    let argumentation = capped(arguments + counters * 2.0, 10.0);

    let evidence = capped(profile.count_terms(EVIDENCE_TERMS) as f64, 6.0);

    let style = sentence_length_fit(profile.avg_words_per_sentence()) * 0.6
        + capped(profile.lexical_diversity(), 0.6) * 0.4;

    let thesis = if fragment_contains(first, THESIS_MARKERS) {
        1.0
    } else if profile.contains_any(THESIS_MARKERS) {
        0.6
    } else {
        0.2
    };

    let conclusion = if paragraphs.len() > 1 && fragment_contains(last, CONCLUSION_MARKERS) {
        1.0
    } else if profile.contains_any(CONCLUSION_MARKERS) {
        0.6
    } else if paragraphs.len() > 2 {
        0.4
    } else {
        0.2
    };

    vec![structure, argumentation, evidence, style, thesis, conclusion]
}
