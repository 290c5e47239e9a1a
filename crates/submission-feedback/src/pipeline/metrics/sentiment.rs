use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokenize::{normalize, ratio};

/// Polarity summary produced by a sentiment lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    pub score: i32,
    pub comparative: f64,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}

/// Lexicon collaborator consulted for sentiment polarity.
///
/// Implementations are called once per submission and may block.
pub trait SentimentLexicon: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentScore;
}

/// Word-valence lexicon in the AFINN style: each known word carries a score in -5..=5.
#[derive(Debug, Clone)]
pub struct AfinnLexicon {
    valences: HashMap<&'static str, i32>,
}

const AFINN_SUBSET: &[(&str, i32)] = &[
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("brilliant", 4),
    ("calm", 2),
    ("clear", 1),
    ("confident", 2),
    ("creative", 2),
    ("delight", 3),
    ("effective", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fantastic", 4),
    ("good", 3),
    ("great", 3),
    ("happy", 3),
    ("helpful", 2),
    ("hope", 2),
    ("important", 2),
    ("improve", 2),
    ("interesting", 2),
    ("joy", 3),
    ("like", 2),
    ("love", 3),
    ("loved", 3),
    ("nice", 3),
    ("perfect", 3),
    ("pleasant", 3),
    ("positive", 2),
    ("proud", 2),
    ("strong", 2),
    ("success", 2),
    ("successful", 3),
    ("support", 2),
    ("win", 4),
    ("wonderful", 4),
    ("afraid", -2),
    ("angry", -3),
    ("annoying", -2),
    ("awful", -3),
    ("bad", -3),
    ("boring", -3),
    ("broken", -1),
    ("confused", -2),
    ("crisis", -3),
    ("cruel", -3),
    ("damage", -3),
    ("dead", -3),
    ("difficult", -1),
    ("disappointed", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("hard", -1),
    ("hate", -3),
    ("hurt", -2),
    ("lonely", -2),
    ("lose", -3),
    ("lost", -3),
    ("negative", -2),
    ("pain", -2),
    ("poor", -2),
    ("problem", -2),
    ("sad", -2),
    ("scared", -2),
    ("terrible", -3),
    ("ugly", -3),
    ("unfair", -2),
    ("unhappy", -2),
    ("upset", -2),
    ("war", -2),
    ("weak", -2),
    ("worried", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

impl AfinnLexicon {
    pub fn new() -> Self {
        Self {
            valences: AFINN_SUBSET.iter().copied().collect(),
        }
    }
}

impl Default for AfinnLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for AfinnLexicon {
    fn analyze(&self, text: &str) -> SentimentScore {
        let tokens: Vec<String> = text.split_whitespace().map(normalize).collect();

        let mut result = SentimentScore::default();
        for token in &tokens {
            if let Some(valence) = self.valences.get(token.as_str()) {
                result.score += valence;
                if *valence > 0 {
                    result.positive_words.push(token.clone());
                } else {
                    result.negative_words.push(token.clone());
                }
            }
        }
        result.comparative = ratio(result.score as f64, tokens.len() as f64);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_known_words() {
        let lexicon = AfinnLexicon::new();
        let score = lexicon.analyze("I love this great essay, but the ending was bad.");

        assert_eq!(score.score, 3 + 3 - 3);
        assert_eq!(score.positive_words, vec!["love", "great"]);
        assert_eq!(score.negative_words, vec!["bad"]);
        assert!(score.comparative > 0.0);
    }

    #[test]
    fn empty_text_is_neutral() {
        let score = AfinnLexicon::new().analyze("   ");
        assert_eq!(score, SentimentScore::default());
    }
}
