//! Rule-based compound polarity scoring in the VADER style: an embedded
//! valence lexicon with booster, negation and exclamation handling. The
//! compound score uses the usual `s / sqrt(s² + 15)` normalization; the
//! pos/neg/neu fractions are discriminated so they sum to 1 whenever the
//! text contains at least one token.

use std::collections::HashMap;

use crate::{tokenize, CompoundScorer, PolarityScores};

/// Alpha for compound-score normalization.
const ALPHA: f64 = 15.0;
/// Valence flip applied by a preceding negator.
const NEGATION_SCALAR: f64 = -0.74;
/// Largest number of `!` that still adds emphasis.
const MAX_EXCLAMATIONS: usize = 4;
/// Emphasis added per exclamation mark.
const EXCLAMATION_BOOST: f64 = 0.292;
/// How far back (in tokens) negators and boosters reach.
const LOOKBACK: usize = 3;
/// Damping for booster words one resp. two tokens before the hit.
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nobody", "nothing", "nowhere", "cant", "cannot",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "wont", "without",
];

/// (word, booster scalar); positive entries intensify, negative ones dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("completely", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("scarcely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

/// Embedded valence lexicon, mean ratings on the usual [-4, 4] scale.
const LEXICON: &[(&str, f64)] = &[
    ("adorable", 2.2),
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoying", -1.8),
    ("appalling", -2.7),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("broken", -1.6),
    ("calm", 1.3),
    ("charming", 2.4),
    ("cruel", -2.6),
    ("delicious", 2.3),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("disappointing", -2.1),
    ("disaster", -2.5),
    ("disgust", -2.2),
    ("disgusting", -2.4),
    ("dreadful", -2.6),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("evil", -3.0),
    ("excellent", 2.7),
    ("excited", 2.4),
    ("exciting", 2.3),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.4),
    ("fantastic", 2.6),
    ("fear", -2.2),
    ("fine", 0.8),
    ("fresh", 1.3),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 2.8),
    ("great", 3.1),
    ("gross", -1.9),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.6),
    ("helpful", 1.8),
    ("hope", 1.9),
    ("horrible", -2.5),
    ("impressive", 2.3),
    ("joy", 2.8),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.9),
    ("mess", -1.6),
    ("nasty", -2.6),
    ("nice", 1.8),
    ("pain", -2.3),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("poor", -1.9),
    ("problem", -1.7),
    ("recommend", 1.6),
    ("rotten", -2.4),
    ("sad", -2.1),
    ("safe", 1.9),
    ("scared", -2.2),
    ("smooth", 1.3),
    ("stupid", -2.4),
    ("success", 2.7),
    ("superb", 3.1),
    ("terrible", -2.1),
    ("terrifying", -2.7),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("trust", 1.6),
    ("ugly", -2.2),
    ("unhappy", -1.9),
    ("useful", 1.9),
    ("useless", -1.7),
    ("waste", -1.8),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worst", -3.1),
    ("worthless", -2.4),
    ("wrong", -2.1),
];

/// Compound polarity scorer over the embedded valence lexicon.
pub struct VaderScorer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        VaderScorer {
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Valence of `tokens[index]` after booster and negation adjustments.
    fn token_valence(&self, tokens: &[String], index: usize) -> Option<f64> {
        let mut valence = *self.lexicon.get(tokens[index].as_str())?;

        let start = index.saturating_sub(LOOKBACK);
        for prior in start..index {
            let word = tokens[prior].as_str();
            let distance = index - prior - 1;
            if let Some(&scalar) = self.boosters.get(word) {
                let damping = BOOSTER_DAMPING.get(distance).copied().unwrap_or(1.0);
                let adjustment = scalar * damping;
                valence += if valence < 0.0 { -adjustment } else { adjustment };
            }
            if NEGATORS.contains(&word) {
                valence *= NEGATION_SCALAR;
            }
        }
        Some(valence)
    }
}

impl CompoundScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<PolarityScores, String> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(PolarityScores {
                pos: 0.0,
                neg: 0.0,
                neu: 0.0,
                compound: 0.0,
            });
        }

        let mut valences = Vec::with_capacity(tokens.len());
        for index in 0..tokens.len() {
            // Boosters carry no valence of their own but still count as
            // neutral mass, like any other non-lexicon token.
            valences.push(self.token_valence(&tokens, index).unwrap_or(0.0));
        }

        let mut sum: f64 = valences.iter().sum();
        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        let emphasis = exclamations as f64 * EXCLAMATION_BOOST;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

        // Discriminate the per-token valences into pos/neg/neu mass. The +1/-1
        // offsets keep a sentiment hit heavier than a neutral token.
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for v in &valences {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        let total = pos_sum + neg_sum.abs() + neu_count;

        Ok(PolarityScores {
            pos: pos_sum / total,
            neg: neg_sum.abs() / total,
            neu: neu_count / total,
            compound,
        })
    }
}
