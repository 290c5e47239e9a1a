//! Marker vocabularies consulted by the structural and dimension heuristics.
//!
//! Terms are lowercase; multi-word entries match whole-word phrases.

pub(crate) const INTRO_MARKERS: &[&str] = &[
    "introduction",
    "in this essay",
    "this essay",
    "this paper",
    "this report",
    "to begin",
    "first of all",
    "the purpose of",
];

pub(crate) const CONCLUSION_MARKERS: &[&str] = &[
    "in conclusion",
    "to conclude",
    "in summary",
    "to summarize",
    "to sum up",
    "overall",
    "ultimately",
    "conclusion",
];

pub(crate) const THESIS_MARKERS: &[&str] = &[
    "i argue",
    "i will argue",
    "this essay argues",
    "this essay will",
    "i believe",
    "i contend",
    "thesis",
    "should",
    "must",
];

pub(crate) const TRANSITIONS: &[&str] = &[
    "first",
    "second",
    "third",
    "next",
    "then",
    "finally",
    "furthermore",
    "moreover",
    "additionally",
    "however",
    "therefore",
    "consequently",
    "in addition",
    "as a result",
    "on the other hand",
    "for example",
    "meanwhile",
];

pub(crate) const ARGUMENT_TERMS: &[&str] = &[
    "because",
    "therefore",
    "thus",
    "consequently",
    "hence",
    "argue",
    "argues",
    "claim",
    "claims",
    "reason",
    "since",
    "as a result",
];

pub(crate) const COUNTER_TERMS: &[&str] = &[
    "however",
    "although",
    "on the other hand",
    "critics",
    "opponents",
    "some may argue",
    "nevertheless",
    "despite",
    "whereas",
];

pub(crate) const EVIDENCE_TERMS: &[&str] = &[
    "for example",
    "for instance",
    "according to",
    "research",
    "study",
    "studies",
    "data",
    "evidence",
    "statistics",
    "survey",
    "demonstrates",
    "shows",
    "quote",
    "source",
];

pub(crate) const CRITICAL_TERMS: &[&str] = &[
    "because",
    "therefore",
    "however",
    "although",
    "consequently",
    "thus",
    "analyze",
    "analyse",
    "evaluate",
    "evidence",
    "suggests",
    "implies",
    "assume",
    "assumption",
    "limitation",
    "in contrast",
    "on the other hand",
    "whereas",
    "nevertheless",
];

pub(crate) const INTERPRETATION_TERMS: &[&str] = &[
    "suggests",
    "implies",
    "indicates",
    "means",
    "represents",
    "symbolizes",
    "reveals",
    "reflects",
    "interpret",
    "interpretation",
];

pub(crate) const EVALUATION_TERMS: &[&str] = &[
    "effective",
    "ineffective",
    "strength",
    "strengths",
    "weakness",
    "weaknesses",
    "successful",
    "valid",
    "convincing",
    "flawed",
    "significant",
    "limited",
];

pub(crate) const SYNTHESIS_TERMS: &[&str] = &[
    "together",
    "combined",
    "connects",
    "connection",
    "relationship",
    "similarly",
    "likewise",
    "both",
    "in relation to",
    "taken together",
];

pub(crate) const HEDGE_TERMS: &[&str] = &[
    "i think",
    "maybe",
    "probably",
    "perhaps",
    "not sure",
    "i guess",
    "i don't know",
    "possibly",
    "kind of",
    "sort of",
];

pub(crate) const FACTUAL_TERMS: &[&str] = &[
    "according to",
    "research",
    "study",
    "studies",
    "data",
    "evidence",
    "percent",
    "measured",
    "recorded",
    "documented",
    "published",
];

pub(crate) const RESEARCH_TERMS: &[&str] = &[
    "research",
    "study",
    "studies",
    "survey",
    "data",
    "analysis",
    "source",
    "sources",
    "literature",
    "investigation",
    "investigated",
    "experiment",
];

pub(crate) const METHOD_TERMS: &[&str] = &[
    "method",
    "methods",
    "methodology",
    "procedure",
    "approach",
    "sample",
    "participants",
    "measured",
    "conducted",
    "collected",
    "interviewed",
];

pub(crate) const FINDING_TERMS: &[&str] = &[
    "found",
    "results",
    "findings",
    "shows",
    "showed",
    "indicates",
    "suggests",
    "revealed",
    "percent",
    "significant",
    "increase",
    "decrease",
];

pub(crate) const SUBJECTIVE_TERMS: &[&str] = &[
    "i think",
    "i feel",
    "i believe",
    "amazing",
    "terrible",
    "awesome",
    "awful",
    "obviously",
    "clearly",
    "best",
    "worst",
];

pub(crate) const REPORT_HEADINGS: &[&str] = &[
    "abstract",
    "introduction",
    "background",
    "method",
    "methods",
    "methodology",
    "results",
    "findings",
    "discussion",
    "conclusion",
    "conclusions",
    "summary",
    "references",
    "recommendations",
];

pub(crate) const SENSORY_TERMS: &[&str] = &[
    "saw",
    "see",
    "bright",
    "dark",
    "glow",
    "glowing",
    "shimmering",
    "golden",
    "red",
    "blue",
    "green",
    "heard",
    "whisper",
    "whispered",
    "echo",
    "roar",
    "smell",
    "scent",
    "taste",
    "sweet",
    "bitter",
    "cold",
    "warm",
    "soft",
    "rough",
    "smooth",
];

pub(crate) const DESCRIPTIVE_TERMS: &[&str] = &[
    "vivid",
    "gleaming",
    "ancient",
    "fragile",
    "towering",
    "silent",
    "gentle",
    "fierce",
    "tiny",
    "enormous",
    "delicate",
    "brilliant",
    "mysterious",
    "quietly",
    "slowly",
    "suddenly",
];

pub(crate) const FIGURATIVE_TERMS: &[&str] = &[
    "like a",
    "like an",
    "as if",
    "as though",
    "as bright as",
    "as cold as",
    "as quiet as",
];

pub(crate) const NARRATIVE_TERMS: &[&str] = &[
    "then",
    "suddenly",
    "after",
    "before",
    "finally",
    "later",
    "when",
    "meanwhile",
    "next",
    "eventually",
    "once",
];

pub(crate) const CHARACTER_TERMS: &[&str] = &[
    "he", "she", "they", "felt", "thought", "wondered", "smiled", "said", "asked", "remembered",
];

pub(crate) const EXPLANATION_TERMS: &[&str] = &[
    "because",
    "since",
    "therefore",
    "this means",
    "which shows",
    "so that",
    "explains",
    "the reason",
];

pub(crate) const ELABORATION_TERMS: &[&str] = &[
    "for example",
    "for instance",
    "specifically",
    "in particular",
    "this means",
    "furthermore",
    "moreover",
    "in other words",
    "to illustrate",
];

pub(crate) const CLICHES: &[&str] = &[
    "at the end of the day",
    "in today's society",
    "since the dawn of time",
    "throughout history",
    "last but not least",
    "in a nutshell",
    "think outside the box",
    "it goes without saying",
];
