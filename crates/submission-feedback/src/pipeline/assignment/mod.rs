//! Assignment-type structural analysis.
//!
//! Each assignment type owns a rubric of weighted checks. A check is an independent
//! keyword or pattern heuristic scored on `[0, 1]`; the composite is the rubric-weighted sum.

mod analytical;
mod creative;
mod essay;
mod general;
mod report;
mod worksheet;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::metrics::tokenize::{round2, TextProfile};

/// Sub-scores at or above this are reported as strengths for every type.
pub const TYPE_STRENGTH_CUT: f64 = 0.7;

/// Category of submission driving which structural checks apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Essay,
    Worksheet,
    Report,
    Creative,
    Analysis,
    #[default]
    General,
}

impl AssignmentType {
    pub const ALL: [AssignmentType; 6] = [
        AssignmentType::Essay,
        AssignmentType::Worksheet,
        AssignmentType::Report,
        AssignmentType::Creative,
        AssignmentType::Analysis,
        AssignmentType::General,
    ];

    /// Maps a declared type name onto a handler; unknown names fall back to `General`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "essay" => Self::Essay,
            "worksheet" => Self::Worksheet,
            "report" => Self::Report,
            "creative" | "creative_writing" | "story" => Self::Creative,
            "analysis" | "analytical" => Self::Analysis,
            _ => Self::General,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AssignmentType::Essay => "essay",
            AssignmentType::Worksheet => "worksheet",
            AssignmentType::Report => "report",
            AssignmentType::Creative => "creative",
            AssignmentType::Analysis => "analysis",
            AssignmentType::General => "general",
        }
    }

    fn rubric(self) -> &'static Rubric {
        match self {
            AssignmentType::Essay => &essay::RUBRIC,
            AssignmentType::Worksheet => &worksheet::RUBRIC,
            AssignmentType::Report => &report::RUBRIC,
            AssignmentType::Creative => &creative::RUBRIC,
            AssignmentType::Analysis => &analytical::RUBRIC,
            AssignmentType::General => &general::RUBRIC,
        }
    }
}

impl fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One weighted check inside a type rubric.
pub(crate) struct Check {
    pub name: &'static str,
    pub weight: f64,
    pub strength: &'static str,
    pub improvement: &'static str,
}

pub(crate) struct Rubric {
    pub checks: &'static [Check],
    /// Sub-scores below this become improvement suggestions.
    pub improvement_cut: f64,
    /// Overrides the weighted composite when set.
    pub fixed_overall: Option<f64>,
    pub score: fn(&TextProfile<'_>) -> Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckScore {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

/// Structural analysis for one declared assignment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAnalysis {
    #[serde(rename = "type")]
    pub assignment_type: AssignmentType,
    pub checks: Vec<CheckScore>,
    pub overall_score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl TypeAnalysis {
    pub fn check(&self, name: &str) -> Option<f64> {
        self.checks
            .iter()
            .find(|check| check.name == name)
            .map(|check| check.score)
    }
}

/// Runs the rubric for the declared assignment type. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentTypeAnalyzer;

impl AssignmentTypeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str, assignment_type: AssignmentType) -> TypeAnalysis {
        let profile = TextProfile::new(text);
        let rubric = assignment_type.rubric();
        let raw_scores = (rubric.score)(&profile);

        let mut checks = Vec::with_capacity(rubric.checks.len());
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();
        let mut composite = 0.0;

        for (check, raw) in rubric.checks.iter().zip(raw_scores) {
            let score = round2(raw.clamp(0.0, 1.0));
            composite += score * check.weight;

            if score >= TYPE_STRENGTH_CUT {
                strengths.push(check.strength.to_string());
            } else if score < rubric.improvement_cut {
                improvements.push(check.improvement.to_string());
            }

            checks.push(CheckScore {
                name: check.name.to_string(),
                score,
                weight: check.weight,
            });
        }

        let overall_score = rubric
            .fixed_overall
            .unwrap_or_else(|| round2(composite.clamp(0.0, 1.0)));

        TypeAnalysis {
            assignment_type,
            checks,
            overall_score,
            strengths,
            improvements,
        }
    }
}
