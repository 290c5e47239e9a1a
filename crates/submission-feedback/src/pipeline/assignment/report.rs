use once_cell::sync::Lazy;
use regex::Regex;

use super::{Check, Rubric};
use crate::pipeline::keywords::{
    FINDING_TERMS, METHOD_TERMS, REPORT_HEADINGS, RESEARCH_TERMS, SUBJECTIVE_TERMS,
};
use crate::pipeline::metrics::tokenize::{capped, normalize, TextProfile};

static CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([A-Z][A-Za-z&.\s-]*,?\s*\d{4}[a-z]?\)|\[\d+(?:[,\s-]+\d+)*\]|\bet al\.?")
        .expect("valid regex")
});

/// Lines at most this long without terminal punctuation read as section headings.
const HEADING_MAX_WORDS: usize = 6;

pub(super) static RUBRIC: Rubric = Rubric {
    checks: &[
        Check {
            name: "structure",
            weight: 0.20,
            strength: "Well-sectioned report with clear headings",
            improvement: "Divide the report into labelled sections such as Introduction, Method, Findings and Conclusion",
        },
        Check {
            name: "research",
            weight: 0.20,
            strength: "Draws on research and data throughout",
            improvement: "Incorporate more research, data or source material",
        },
        Check {
            name: "citations",
            weight: 0.15,
            strength: "Sources are cited consistently",
            improvement: "Cite the sources you rely on, e.g. (Author, 2020)",
        },
        Check {
            name: "objectivity",
            weight: 0.15,
            strength: "Maintains an objective, neutral tone",
            improvement: "Replace personal opinions and loaded words with neutral, evidence-based statements",
        },
        Check {
            name: "methodology",
            weight: 0.15,
            strength: "Explains how information was gathered",
            improvement: "Describe the method or procedure used to gather your information",
        },
        Check {
            name: "findings",
            weight: 0.15,
            strength: "Presents findings clearly",
            improvement: "State your results and findings explicitly",
        },
    ],
    improvement_cut: 0.5,
    fixed_overall: None,
    score,
};

fn is_heading(line: &str) -> bool {
    let trimmed = line.trim_start_matches('#').trim();
    if line.starts_with('#') && !trimmed.is_empty() {
        return true;
    }
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let unpunctuated = !trimmed.ends_with(['.', '!', '?', ',', ';']);
    let named = words.iter().any(|word| REPORT_HEADINGS.contains(&normalize(word).as_str()));
    !words.is_empty() && words.len() <= HEADING_MAX_WORDS && unpunctuated && named
}

fn score(profile: &TextProfile<'_>) -> Vec<f64> {
    let headings = profile.lines().into_iter().filter(|line| is_heading(line)).count();
    let structure = capped(headings as f64, 4.0) * 0.7 + capped(profile.paragraph_count() as f64, 5.0) * 0.3;

    let research = capped(profile.count_terms(RESEARCH_TERMS) as f64, 8.0);

    let citation_count = CITATION.find_iter(profile.text).count() + profile.count_term("according to");
    let citations = capped(citation_count as f64, 5.0);

    let objectivity = if profile.word_count() == 0 {
        0.0
    } else {
        let subjective = profile.count_terms(SUBJECTIVE_TERMS) + profile.count_term("i");
        1.0 - capped(subjective as f64, 10.0)
    };

    let methodology = capped(profile.count_terms(METHOD_TERMS) as f64, 5.0);
    let findings = capped(profile.count_terms(FINDING_TERMS) as f64, 5.0);

    vec![structure, research, citations, objectivity, methodology, findings]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_section_headings() {
        assert!(is_heading("Introduction"));
        assert!(is_heading("## Data collection"));
        assert!(is_heading("Results and Discussion"));
        assert!(!is_heading("The results were clear."));
    }

    #[test]
    fn counts_author_year_citations() {
        let text = "Rates rose (Smith, 2019) and fell [2]. Jones et al. disagree.";
        assert_eq!(CITATION.find_iter(text).count(), 3);
    }
}
