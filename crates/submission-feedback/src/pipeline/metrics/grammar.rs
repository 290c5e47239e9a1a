use serde::{Deserialize, Serialize};

use super::tokenize::normalize;

/// Sentences longer than this many tokens are flagged as run-ons.
pub const RUN_ON_WORD_LIMIT: usize = 30;

/// Surface-level issue categories detected without a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarIssueKind {
    Capitalization,
    RunOn,
    RepeatedWord,
}

impl GrammarIssueKind {
    pub const fn label(self) -> &'static str {
        match self {
            GrammarIssueKind::Capitalization => "capitalization",
            GrammarIssueKind::RunOn => "run-on",
            GrammarIssueKind::RepeatedWord => "repeated-word",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarIssue {
    pub kind: GrammarIssueKind,
    /// 1-based position of the originating sentence.
    pub sentence_index: usize,
    pub description: String,
    pub suggestion: String,
}

/// Flags issues sentence by sentence, preserving sentence order.
pub(crate) fn detect_issues(sentences: &[&str]) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    for (position, sentence) in sentences.iter().enumerate() {
        let sentence_index = position + 1;

        if sentence.chars().next().is_some_and(char::is_lowercase) {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::Capitalization,
                sentence_index,
                description: format!("Sentence {sentence_index} does not start with a capital letter"),
                suggestion: "Capitalize the first word of each sentence".to_string(),
            });
        }

        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        if tokens.len() > RUN_ON_WORD_LIMIT {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::RunOn,
                sentence_index,
                description: format!(
                    "Sentence {sentence_index} runs to {} words",
                    tokens.len()
                ),
                suggestion: "Break long sentences into shorter, focused statements".to_string(),
            });
        }

        if let Some(repeated) = first_repeated_word(&tokens) {
            issues.push(GrammarIssue {
                kind: GrammarIssueKind::RepeatedWord,
                sentence_index,
                description: format!("Sentence {sentence_index} repeats \"{repeated}\""),
                suggestion: "Remove the duplicated word".to_string(),
            });
        }
    }

    issues
}

fn first_repeated_word(tokens: &[&str]) -> Option<String> {
    tokens.windows(2).find_map(|pair| {
        let left = normalize(pair[0]);
        let is_word = left.chars().any(char::is_alphabetic);
        (is_word && left == normalize(pair[1])).then_some(left)
    })
}
