//! Polarity/subjectivity scoring over an embedded pattern-style lexicon:
//! each entry carries a polarity in [-1, 1] and a subjectivity in [0, 1],
//! the text scores as the mean over matched tokens. A negator within the
//! preceding window multiplies the hit's polarity by -0.5, which is the
//! TextBlob behavior this provider mirrors.

use std::collections::HashMap;

use crate::{tokenize, PolarityScorer};

/// Tokens a negator keeps affecting after it appears.
const NEGATION_WINDOW: usize = 3;
/// Polarity multiplier under negation.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "none", "cant", "cannot", "dont", "doesnt",
    "didnt", "isnt", "wasnt", "wont",
];

/// (word, polarity, subjectivity).
const LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 0.7),
    ("annoying", -0.6, 0.8),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.7),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 0.9),
    ("broken", -0.4, 0.5),
    ("calm", 0.3, 0.7),
    ("charming", 0.7, 1.0),
    ("cruel", -0.8, 0.9),
    ("delicious", 1.0, 1.0),
    ("delightful", 0.9, 1.0),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("easy", 0.43, 0.83),
    ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.8),
    ("exciting", 0.5, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.4, 0.7),
    ("fresh", 0.3, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.9, 1.0),
    ("great", 0.8, 0.75),
    ("gross", -0.6, 0.9),
    ("happy", 0.8, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("helpful", 0.3, 0.3),
    ("horrible", -1.0, 1.0),
    ("impressive", 0.9, 1.0),
    ("interesting", 0.5, 0.5),
    ("like", 0.2, 0.1),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.7, 0.9),
    ("nasty", -0.8, 0.9),
    ("nice", 0.6, 1.0),
    ("pathetic", -1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.7, 0.9),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("simple", 0.0, 0.36),
    ("slow", -0.3, 0.4),
    ("stupid", -0.8, 0.9),
    ("superb", 0.9, 0.9),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 1.0),
    ("useful", 0.3, 0.2),
    ("useless", -0.5, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
];

/// Polarity/subjectivity scorer over the embedded lexicon.
pub struct PatternScorer {
    lexicon: HashMap<&'static str, (f64, f64)>,
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternScorer {
    pub fn new() -> Self {
        PatternScorer {
            lexicon: LEXICON.iter().map(|(w, p, s)| (*w, (*p, *s))).collect(),
        }
    }
}

impl PolarityScorer for PatternScorer {
    fn score(&self, text: &str) -> Result<(f64, f64), String> {
        let tokens = tokenize(text);

        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();
        let mut negation_left = 0usize;

        for token in &tokens {
            if NEGATORS.contains(&token.as_str()) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(&(polarity, subjectivity)) = self.lexicon.get(token.as_str()) {
                let polarity = if negation_left > 0 {
                    polarity * NEGATION_FACTOR
                } else {
                    polarity
                };
                polarities.push(polarity);
                subjectivities.push(subjectivity);
            }
            negation_left = negation_left.saturating_sub(1);
        }

        // No lexicon hits reads as neutral and objective.
        if polarities.is_empty() {
            return Ok((0.0, 0.0));
        }

        let n = polarities.len() as f64;
        let polarity = polarities.iter().sum::<f64>() / n;
        let subjectivity = subjectivities.iter().sum::<f64>() / n;
        Ok((polarity, subjectivity))
    }
}
