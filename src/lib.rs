#![forbid(unsafe_code)]
//! # Sentiment Analysis
//!
//! Library backing the `sentiment_analysis` CLI. One call to
//! [`Analyzer::analyze`] runs the input text through three independent
//! scoring providers (compound polarity, polarity/subjectivity, emotion
//! frequency) plus a language check and returns a single score table on a
//! uniform 0–100 percentage scale, ready for tabular display, bar-chart
//! rendering or CSV/JSON export (see [`export`]).
//!
//! Providers sit behind traits so a failing provider only drops its own
//! rows; the rest of the table still comes back, together with a
//! [`Diagnostic`] naming the provider that failed.

use std::collections::HashMap;

use serde::Serialize;

pub mod emotion;
pub mod export;
pub mod pattern;
pub mod vader;

/// Fixed metric labels, in table order.
pub const VADER_POSITIVE: &str = "VADER Positive";
pub const VADER_NEGATIVE: &str = "VADER Negative";
pub const VADER_NEUTRAL: &str = "VADER Neutral";
pub const VADER_COMPOUND: &str = "VADER Compound";
pub const TEXTBLOB_POLARITY: &str = "TextBlob Polarity";
pub const TEXTBLOB_SUBJECTIVITY: &str = "TextBlob Subjectivity";

/// ISO 639-3 code of the language the lexicons are built for.
pub const TARGET_LANG: &str = "eng";

/// One metric of a finished analysis. `score` is always on the 0–100
/// percentage scale, whatever the provider's native range was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub metric: String,
    pub score: f64,
}

impl ScoreRow {
    pub fn new(metric: impl Into<String>, score: f64) -> Self {
        ScoreRow {
            metric: metric.into(),
            score,
        }
    }
}

/// Ordered result rows of a single analysis run.
pub type ScoreTable = Vec<ScoreRow>;

/// Categorical bar color for chart rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    Green,
    Red,
    Blue,
    Purple,
}

impl BarColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarColor::Green => "green",
            BarColor::Red => "red",
            BarColor::Blue => "blue",
            BarColor::Purple => "purple",
        }
    }
}

/// Outcome of the advisory language check. Never blocks scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageCheck {
    /// Input was empty, detection never ran.
    Skipped,
    /// The detector could not settle on a language (short or ambiguous input).
    Undetermined,
    /// Detected the target language.
    English,
    /// Detected some other language (ISO 639-3 code). Scores may be off.
    Other(String),
}

/// A provider failure surfaced to the caller. The run still completes with
/// whatever rows the remaining providers produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub provider: &'static str,
    pub message: String,
}

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub rows: ScoreTable,
    pub language: LanguageCheck,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Color classification for every label in the table. Keys match the
    /// table's labels exactly, nothing more, nothing less.
    pub fn color_map(&self) -> HashMap<String, BarColor> {
        self.rows
            .iter()
            .map(|r| (r.metric.clone(), classify(&r.metric)))
            .collect()
    }
}

/// Native output of a compound polarity scorer: three fractions in [0,1]
/// summing to 1 plus a compound score in [-1,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub compound: f64,
}

/// Compound polarity provider ("VADER" rows).
pub trait CompoundScorer {
    fn score(&self, text: &str) -> Result<PolarityScores, String>;
}

/// Polarity/subjectivity provider ("TextBlob" rows). Returns
/// `(polarity, subjectivity)` with polarity in [-1,1], subjectivity in [0,1].
pub trait PolarityScorer {
    fn score(&self, text: &str) -> Result<(f64, f64), String>;
}

/// Categorical emotion provider. Returns raw match counts per emotion name,
/// in the provider's native key order; zero-count emotions are not listed.
pub trait EmotionScorer {
    fn score(&self, text: &str) -> Result<Vec<(String, u32)>, String>;
}

/// Language identification provider. `None` means undetermined.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Option<String>;
}

/// [`LanguageDetector`] backed by `whatlang`. Unreliable detections count as
/// undetermined, same as no detection at all.
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        if !info.is_reliable() {
            return None;
        }
        Some(info.lang().code().to_string())
    }
}

/// Splits text into lowercased words, stripping punctuation.
/// # Example
/// ```
/// use sentiment_analysis::tokenize;
/// let words = tokenize("I love this! (Really.)");
/// assert_eq!(words, vec!["i", "love", "this", "really"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        // Hyphenated words split into their parts.
        .replace('-', " ")
        .replace("'s", "")
        .replace(
            [
                '(', ')', ',', '"', '.', ';', ':', '=', '[', ']', '{', '}', '-', '_', '/', '\'',
                '’', '?', '!', '“', '‘', '”',
            ],
            "",
        )
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Maps a score label to its bar color. Pure function of the label string:
/// the six fixed metrics use a hardcoded lookup, emotion names use two
/// membership sets, and anything unrecognized falls back to blue.
pub fn classify(label: &str) -> BarColor {
    match label {
        VADER_POSITIVE | TEXTBLOB_POLARITY => BarColor::Green,
        VADER_NEGATIVE => BarColor::Red,
        VADER_NEUTRAL | TEXTBLOB_SUBJECTIVITY => BarColor::Blue,
        VADER_COMPOUND => BarColor::Purple,
        "positive" | "joy" | "trust" | "anticipation" | "surprise" => BarColor::Green,
        "negative" | "anger" | "disgust" | "fear" | "sadness" => BarColor::Red,
        _ => BarColor::Blue,
    }
}

/// Holds one instance of each provider. Construct once, reuse for every
/// analysis; lexicon loading happens here, not per call.
pub struct Analyzer {
    vader: Box<dyn CompoundScorer>,
    textblob: Box<dyn PolarityScorer>,
    nrc: Box<dyn EmotionScorer>,
    lang: Box<dyn LanguageDetector>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with the built-in lexicon providers and `whatlang` detection.
    pub fn new() -> Self {
        Analyzer {
            vader: Box::new(vader::VaderScorer::new()),
            textblob: Box::new(pattern::PatternScorer::new()),
            nrc: Box::new(emotion::EmotionLexicon::new()),
            lang: Box::new(WhatlangDetector),
        }
    }

    /// Analyzer over caller-supplied providers. Mainly useful for swapping
    /// in custom scorers or stubs in tests.
    pub fn with_providers(
        compound: Box<dyn CompoundScorer>,
        polarity: Box<dyn PolarityScorer>,
        emotions: Box<dyn EmotionScorer>,
        language: Box<dyn LanguageDetector>,
    ) -> Self {
        Analyzer {
            vader: compound,
            textblob: polarity,
            nrc: emotions,
            lang: language,
        }
    }

    /// Runs the full pipeline on `text` and returns the score table.
    ///
    /// Empty (or whitespace-only) input short-circuits: no provider is
    /// invoked and the report is empty. Otherwise the language check runs
    /// first (advisory only), then the three scorers in fixed order. A
    /// scorer failure drops that scorer's rows and records a diagnostic;
    /// the other scorers still contribute.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        if text.trim().is_empty() {
            return AnalysisReport {
                rows: Vec::new(),
                language: LanguageCheck::Skipped,
                diagnostics: Vec::new(),
            };
        }

        let language = match self.lang.detect(text) {
            None => LanguageCheck::Undetermined,
            Some(code) if code == TARGET_LANG => LanguageCheck::English,
            Some(code) => LanguageCheck::Other(code),
        };

        let mut rows: ScoreTable = Vec::new();
        let mut diagnostics = Vec::new();

        match self.vader.score(text) {
            Ok(s) => {
                rows.push(ScoreRow::new(VADER_POSITIVE, s.pos * 100.0));
                rows.push(ScoreRow::new(VADER_NEGATIVE, s.neg * 100.0));
                rows.push(ScoreRow::new(VADER_NEUTRAL, s.neu * 100.0));
                rows.push(ScoreRow::new(VADER_COMPOUND, s.compound * 100.0));
            }
            Err(message) => diagnostics.push(Diagnostic {
                provider: "VADER",
                message,
            }),
        }

        match self.textblob.score(text) {
            Ok((polarity, subjectivity)) => {
                rows.push(ScoreRow::new(TEXTBLOB_POLARITY, polarity * 100.0));
                rows.push(ScoreRow::new(TEXTBLOB_SUBJECTIVITY, subjectivity * 100.0));
            }
            Err(message) => diagnostics.push(Diagnostic {
                provider: "TextBlob",
                message,
            }),
        }

        match self.nrc.score(text) {
            Ok(counts) => {
                let total: u32 = counts.iter().map(|(_, c)| *c).sum();
                // total == 0 is the degenerate "no emotion words" case: no rows.
                if total > 0 {
                    for (emotion, count) in counts {
                        rows.push(ScoreRow::new(
                            emotion,
                            f64::from(count) / f64::from(total) * 100.0,
                        ));
                    }
                }
            }
            Err(message) => diagnostics.push(Diagnostic {
                provider: "NRC",
                message,
            }),
        }

        AnalysisReport {
            rows,
            language,
            diagnostics,
        }
    }
}
