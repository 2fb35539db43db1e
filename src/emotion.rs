//! Categorical emotion scoring: counts occurrences of emotion-tagged words
//! over an embedded NRC-style lexicon. A word can carry several tags (most
//! also carry "positive" or "negative"), and every occurrence counts once
//! per tag. Raw counts only; the aggregator turns them into percentages.

use std::collections::HashMap;

use crate::{tokenize, EmotionScorer};

/// Canonical tag order; results are always reported in this order.
pub const TAGS: [&str; 10] = [
    "anger",
    "anticipation",
    "disgust",
    "fear",
    "joy",
    "negative",
    "positive",
    "sadness",
    "surprise",
    "trust",
];

/// (word, tags). Tag names must all appear in [`TAGS`].
const LEXICON: &[(&str, &[&str])] = &[
    ("abandon", &["fear", "negative", "sadness"]),
    ("admire", &["joy", "positive", "trust"]),
    ("adventure", &["anticipation", "joy", "positive", "surprise"]),
    ("afraid", &["fear", "negative"]),
    ("amazing", &["joy", "positive", "surprise"]),
    ("angry", &["anger", "disgust", "negative"]),
    ("anxious", &["anticipation", "fear", "negative"]),
    ("attack", &["anger", "fear", "negative"]),
    ("awful", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("bad", &["negative"]),
    ("beautiful", &["joy", "positive"]),
    ("betray", &["anger", "disgust", "negative", "sadness", "surprise"]),
    ("birthday", &["anticipation", "joy", "positive", "surprise"]),
    ("broken", &["fear", "negative", "sadness"]),
    ("celebrate", &["anticipation", "joy", "positive"]),
    ("cheerful", &["joy", "positive"]),
    ("comfort", &["joy", "positive", "trust"]),
    ("courage", &["positive", "trust"]),
    ("crash", &["fear", "negative", "surprise"]),
    ("cruel", &["anger", "disgust", "fear", "negative"]),
    ("cry", &["negative", "sadness"]),
    ("danger", &["fear", "negative"]),
    ("dark", &["negative", "sadness"]),
    ("death", &["fear", "negative", "sadness"]),
    ("delicious", &["joy", "positive"]),
    ("delight", &["anticipation", "joy", "positive"]),
    ("despair", &["fear", "negative", "sadness"]),
    ("disaster", &["fear", "negative", "sadness", "surprise"]),
    ("disgusting", &["disgust", "negative"]),
    ("dread", &["anticipation", "fear", "negative"]),
    ("dream", &["anticipation", "joy", "positive"]),
    ("enemy", &["anger", "fear", "negative"]),
    ("evil", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("excited", &["anticipation", "joy", "positive", "surprise"]),
    ("fail", &["negative", "sadness"]),
    ("faith", &["anticipation", "joy", "positive", "trust"]),
    ("fear", &["fear", "negative"]),
    ("fight", &["anger", "fear", "negative"]),
    ("friend", &["joy", "positive", "trust"]),
    ("fun", &["anticipation", "joy", "positive"]),
    ("furious", &["anger", "disgust", "negative"]),
    ("gift", &["anticipation", "joy", "positive", "surprise"]),
    ("glad", &["joy", "positive"]),
    ("good", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("great", &["positive"]),
    ("grief", &["negative", "sadness"]),
    ("happy", &["anticipation", "joy", "positive", "trust"]),
    ("hate", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("hero", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("honest", &["positive", "trust"]),
    ("hope", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("horrible", &["anger", "disgust", "fear", "negative"]),
    ("hug", &["joy", "positive", "trust"]),
    ("hurt", &["anger", "fear", "negative", "sadness"]),
    ("joy", &["joy", "positive"]),
    ("kill", &["anger", "fear", "negative", "sadness"]),
    ("kind", &["joy", "positive", "trust"]),
    ("laugh", &["joy", "positive", "surprise"]),
    ("lonely", &["anger", "fear", "negative", "sadness"]),
    ("lose", &["anger", "fear", "negative", "sadness"]),
    ("love", &["joy", "positive"]),
    ("lucky", &["anticipation", "joy", "positive", "surprise"]),
    ("mother", &["anticipation", "joy", "positive", "trust"]),
    ("murder", &["anger", "disgust", "fear", "negative", "sadness", "surprise"]),
    ("music", &["joy", "positive", "sadness", "surprise"]),
    ("nervous", &["anticipation", "fear", "negative"]),
    ("nightmare", &["fear", "negative"]),
    ("pain", &["fear", "negative", "sadness"]),
    ("panic", &["fear", "negative"]),
    ("peace", &["anticipation", "joy", "positive", "trust"]),
    ("perfect", &["anticipation", "joy", "positive", "trust"]),
    ("poison", &["disgust", "fear", "negative"]),
    ("pray", &["anticipation", "joy", "positive", "trust"]),
    ("proud", &["joy", "positive", "trust"]),
    ("rage", &["anger", "negative"]),
    ("rotten", &["disgust", "negative"]),
    ("sad", &["negative", "sadness"]),
    ("scream", &["anger", "disgust", "fear", "negative", "surprise"]),
    ("shock", &["anger", "fear", "negative", "surprise"]),
    ("sick", &["disgust", "negative", "sadness"]),
    ("smile", &["joy", "positive", "surprise", "trust"]),
    ("success", &["anticipation", "joy", "positive"]),
    ("terrible", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("terror", &["fear", "negative"]),
    ("thief", &["anger", "disgust", "fear", "negative"]),
    ("tragedy", &["fear", "negative", "sadness", "surprise"]),
    ("trust", &["positive", "trust"]),
    ("ugly", &["disgust", "negative"]),
    ("victory", &["anticipation", "joy", "positive"]),
    ("war", &["anger", "fear", "negative", "sadness"]),
    ("wonderful", &["joy", "positive", "surprise", "trust"]),
    ("worry", &["anticipation", "fear", "negative", "sadness"]),
];

/// Emotion frequency scorer over the embedded lexicon.
pub struct EmotionLexicon {
    words: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionLexicon {
    pub fn new() -> Self {
        EmotionLexicon {
            words: LEXICON.iter().copied().collect(),
        }
    }
}

impl EmotionScorer for EmotionLexicon {
    fn score(&self, text: &str) -> Result<Vec<(String, u32)>, String> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for token in tokenize(text) {
            if let Some(tags) = self.words.get(token.as_str()) {
                for &tag in tags.iter() {
                    *counts.entry(tag).or_insert(0) += 1;
                }
            }
        }
        Ok(TAGS
            .iter()
            .filter_map(|tag| counts.get(tag).map(|&c| (tag.to_string(), c)))
            .collect())
    }
}
