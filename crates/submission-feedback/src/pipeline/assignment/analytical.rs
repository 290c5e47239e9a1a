use super::{Check, Rubric};
use crate::pipeline::keywords::{
    ARGUMENT_TERMS, CRITICAL_TERMS, EVALUATION_TERMS, EVIDENCE_TERMS, INTERPRETATION_TERMS,
    SYNTHESIS_TERMS,
};
use crate::pipeline::metrics::tokenize::{capped, TextProfile};

pub(super) static RUBRIC: Rubric = Rubric {
    checks: &[
        Check {
            name: "criticalThinking",
            weight: 0.25,
            strength: "Questions assumptions and weighs alternatives",
            improvement: "Question the assumptions behind the material and weigh alternative views",
        },
        Check {
            name: "evidence",
            weight: 0.20,
            strength: "Grounds the analysis in specific evidence",
            improvement: "Quote or reference specific evidence for each point",
        },
        Check {
            name: "interpretation",
            weight: 0.20,
            strength: "Interprets what the evidence means",
            improvement: "Explain what your evidence suggests or implies",
        },
        Check {
            name: "evaluation",
            weight: 0.15,
            strength: "Judges strengths and weaknesses explicitly",
            improvement: "Evaluate how effective or convincing the material is",
        },
        Check {
            name: "synthesis",
            weight: 0.10,
            strength: "Connects ideas into a coherent whole",
            improvement: "Draw connections between the ideas you analyze",
        },
        Check {
            name: "argumentation",
            weight: 0.10,
            strength: "Reasoning is laid out step by step",
            improvement: "Link your points with explicit reasoning (because, therefore)",
        },
    ],
    improvement_cut: 0.6,
    fixed_overall: None,
    score,
};

fn score(profile: &TextProfile<'_>) -> Vec<f64> {
    let quotations = (profile.text.matches('"').count() / 2) as f64;

    vec![
        capped(profile.count_terms(CRITICAL_TERMS) as f64, 6.0),
        capped(profile.count_terms(EVIDENCE_TERMS) as f64 + quotations, 5.0),
        capped(profile.count_terms(INTERPRETATION_TERMS) as f64, 5.0),
        capped(profile.count_terms(EVALUATION_TERMS) as f64, 5.0),
        capped(profile.count_terms(SYNTHESIS_TERMS) as f64, 4.0),
        capped(profile.count_terms(ARGUMENT_TERMS) as f64, 6.0),
    ]
}
