//! Integration tests for `sentiment_analysis`.
//
// This suite verifies:
// - Library behavior (row order, percentage invariants, color classification,
//   empty input, per-provider failure isolation)
// - Export behavior (CSV round-trip, JSON shape)
// - CLI behavior including export formats and empty input
//
// Notes:
// - CLI tests run the binary with a per-process working directory.
// - Provider failures are simulated through stub scorers plugged into
//   `Analyzer::with_providers`.

use std::fs;
use std::path::Path;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

use sentiment_analysis::export::{self, CSV_FILENAME, JSON_FILENAME};
use sentiment_analysis::{
    Analyzer, BarColor, CompoundScorer, EmotionScorer, LanguageCheck, LanguageDetector,
    PolarityScorer, PolarityScores, WhatlangDetector, TEXTBLOB_POLARITY, TEXTBLOB_SUBJECTIVITY,
    VADER_COMPOUND, VADER_NEGATIVE, VADER_NEUTRAL, VADER_POSITIVE,
};

const POSITIVE_TEXT: &str = "I love this! It's wonderful and great.";
const NEGATIVE_TEXT: &str = "I hate this. It's terrible and disgusting.";
const NEUTRAL_TEXT: &str = "The report is on the table.";

const EPS: f64 = 1e-6;

// --------------------- helpers ---------------------

/// Sum of the scores of the rows at `range`.
fn sum_scores(report: &sentiment_analysis::AnalysisReport, range: std::ops::Range<usize>) -> f64 {
    report.rows[range].iter().map(|r| r.score).sum()
}

/// Run CLI successfully with a specific working directory.
fn run_cli_ok_in(dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = assert_cmd::Command::cargo_bin("sentiment_analysis").unwrap();
    cmd.current_dir(dir);
    cmd.args(args).assert().success()
}

// Stub providers for failure-path and classification tests.

struct FailingEmotions;
impl EmotionScorer for FailingEmotions {
    fn score(&self, _text: &str) -> Result<Vec<(String, u32)>, String> {
        Err("lexicon unavailable".to_string())
    }
}

struct FixedEmotions(Vec<(String, u32)>);
impl EmotionScorer for FixedEmotions {
    fn score(&self, _text: &str) -> Result<Vec<(String, u32)>, String> {
        Ok(self.0.clone())
    }
}

struct FixedCompound(PolarityScores);
impl CompoundScorer for FixedCompound {
    fn score(&self, _text: &str) -> Result<PolarityScores, String> {
        Ok(self.0)
    }
}

struct FixedPolarity(f64, f64);
impl PolarityScorer for FixedPolarity {
    fn score(&self, _text: &str) -> Result<(f64, f64), String> {
        Ok((self.0, self.1))
    }
}

struct FixedLanguage(Option<&'static str>);
impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> Option<String> {
        self.0.map(String::from)
    }
}

fn stub_analyzer(emotions: Box<dyn EmotionScorer>, language: Box<dyn LanguageDetector>) -> Analyzer {
    Analyzer::with_providers(
        Box::new(FixedCompound(PolarityScores {
            pos: 0.5,
            neg: 0.1,
            neu: 0.4,
            compound: 0.6,
        })),
        Box::new(FixedPolarity(0.25, 0.75)),
        emotions,
        language,
    )
}

// --------------------- library tests ---------------------

#[test]
fn first_six_rows_have_fixed_order() {
    let report = Analyzer::new().analyze(POSITIVE_TEXT);
    let labels: Vec<&str> = report.rows.iter().map(|r| r.metric.as_str()).collect();
    assert!(labels.len() >= 6);
    assert_eq!(
        &labels[..6],
        &[
            VADER_POSITIVE,
            VADER_NEGATIVE,
            VADER_NEUTRAL,
            VADER_COMPOUND,
            TEXTBLOB_POLARITY,
            TEXTBLOB_SUBJECTIVITY,
        ]
    );
}

#[test]
fn vader_percentages_sum_to_100() {
    // "so very really" is intensifiers only; such tokens still count as
    // neutral mass, so the invariant holds for them too.
    for text in [POSITIVE_TEXT, NEGATIVE_TEXT, NEUTRAL_TEXT, "so very really"] {
        let report = Analyzer::new().analyze(text);
        // pos + neg + neu, compound excluded.
        let sum = sum_scores(&report, 0..3);
        assert!((sum - 100.0).abs() < EPS, "{text}: {sum}");
    }
}

#[test]
fn emotion_percentages_sum_to_100_when_present() {
    let report = Analyzer::new().analyze(POSITIVE_TEXT);
    assert!(report.rows.len() > 6, "expected emotion rows");
    let sum = sum_scores(&report, 6..report.rows.len());
    assert!((sum - 100.0).abs() < EPS, "{sum}");
}

#[test]
fn no_emotion_rows_when_no_emotion_words() {
    let report = Analyzer::new().analyze("qwerty asdfgh zxcvbn uiop");
    assert_eq!(report.rows.len(), 6);
}

#[test]
fn empty_input_produces_empty_report() {
    let report = Analyzer::new().analyze("");
    assert!(report.rows.is_empty());
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.language, LanguageCheck::Skipped);

    // Providers are never consulted: scorers that would fail leave no
    // diagnostics and the detector result stays Skipped.
    let stub = stub_analyzer(Box::new(FailingEmotions), Box::new(FixedLanguage(Some("spa"))));
    let report = stub.analyze("   \n\t");
    assert!(report.rows.is_empty());
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.language, LanguageCheck::Skipped);
}

#[test]
fn color_map_covers_exactly_the_table_labels() {
    for text in [POSITIVE_TEXT, NEGATIVE_TEXT, NEUTRAL_TEXT] {
        let report = Analyzer::new().analyze(text);
        let colors = report.color_map();
        assert_eq!(colors.len(), report.rows.len(), "{text}");
        for row in &report.rows {
            assert!(colors.contains_key(&row.metric), "{text}: {}", row.metric);
        }
    }
}

#[test]
fn positive_example_scores_positive() {
    let report = Analyzer::new().analyze(POSITIVE_TEXT);
    let colors = report.color_map();
    let get = |label: &str| {
        report
            .rows
            .iter()
            .find(|r| r.metric == label)
            .map(|r| r.score)
    };
    assert!(get(VADER_POSITIVE).unwrap() > get(VADER_NEGATIVE).unwrap());
    assert!(get(TEXTBLOB_POLARITY).unwrap() > 0.0);
    let joy = get("joy").unwrap_or(0.0);
    let positive = get("positive").unwrap_or(0.0);
    assert!(joy + positive > 0.0);
    if joy > 0.0 {
        assert_eq!(colors["joy"], BarColor::Green);
    }
    if positive > 0.0 {
        assert_eq!(colors["positive"], BarColor::Green);
    }
}

#[test]
fn negative_example_scores_negative() {
    let report = Analyzer::new().analyze(NEGATIVE_TEXT);
    let colors = report.color_map();
    let get = |label: &str| {
        report
            .rows
            .iter()
            .find(|r| r.metric == label)
            .map(|r| r.score)
            .unwrap_or(0.0)
    };
    assert!(get(VADER_NEGATIVE) > get(VADER_POSITIVE));
    let negative_share = get("anger") + get("disgust") + get("negative");
    let positive_share = get("joy") + get("positive");
    assert!(negative_share > positive_share);
    for label in ["anger", "disgust", "negative"] {
        if get(label) > 0.0 {
            assert_eq!(colors[label], BarColor::Red, "{label}");
        }
    }
}

#[test]
fn failing_emotion_provider_keeps_fixed_rows() {
    let analyzer = stub_analyzer(Box::new(FailingEmotions), Box::new(FixedLanguage(Some("eng"))));
    let report = analyzer.analyze(POSITIVE_TEXT);
    assert_eq!(report.rows.len(), 6);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].provider, "NRC");
    assert!(report.diagnostics[0].message.contains("lexicon unavailable"));
}

#[test]
fn unmapped_emotion_label_falls_back_to_blue() {
    let emotions = FixedEmotions(vec![("nostalgia".to_string(), 3), ("joy".to_string(), 1)]);
    let analyzer = stub_analyzer(Box::new(emotions), Box::new(FixedLanguage(Some("eng"))));
    let report = analyzer.analyze("whatever");
    let colors = report.color_map();
    assert_eq!(colors["nostalgia"], BarColor::Blue);
    assert_eq!(colors["joy"], BarColor::Green);
    // Percentages still split over the emotion total.
    let nostalgia = report.rows.iter().find(|r| r.metric == "nostalgia").unwrap();
    assert!((nostalgia.score - 75.0).abs() < EPS);
}

#[test]
fn language_advisories_map_from_detector() {
    let undetermined = stub_analyzer(Box::new(FailingEmotions), Box::new(FixedLanguage(None)));
    assert_eq!(
        undetermined.analyze("short").language,
        LanguageCheck::Undetermined
    );

    let foreign = stub_analyzer(Box::new(FailingEmotions), Box::new(FixedLanguage(Some("spa"))));
    assert_eq!(
        foreign.analyze("hola").language,
        LanguageCheck::Other("spa".to_string())
    );

    let english = stub_analyzer(Box::new(FailingEmotions), Box::new(FixedLanguage(Some("eng"))));
    assert_eq!(english.analyze("hello").language, LanguageCheck::English);
}

#[test]
fn whatlang_detects_english_prose() {
    let detector = WhatlangDetector;
    let text = "The quick brown fox jumps over the lazy dog, and everyone in the \
                village agreed that it was the most remarkable thing they had seen \
                all year, because foxes rarely jump over dogs in broad daylight.";
    assert_eq!(detector.detect(text), Some("eng".to_string()));
    assert_eq!(detector.detect(""), None);
}

// --------------------- export tests ---------------------

#[test]
fn csv_round_trip_reproduces_the_table() {
    let report = Analyzer::new().analyze(POSITIVE_TEXT);
    let td = tempdir().unwrap();
    let path = export::write_csv(&report.rows, td.path()).unwrap();
    assert!(path.ends_with(CSV_FILENAME));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["Metric", "Score"])
    );
    let mut parsed: Vec<(String, f64)> = Vec::new();
    for record in reader.records() {
        let record = record.unwrap();
        parsed.push((record[0].to_string(), record[1].parse().unwrap()));
    }
    assert_eq!(parsed.len(), report.rows.len());
    for (row, (metric, score)) in report.rows.iter().zip(&parsed) {
        assert_eq!(&row.metric, metric);
        assert!((row.score - score).abs() < EPS, "{metric}");
    }
}

#[test]
fn json_export_writes_table_in_order() {
    let report = Analyzer::new().analyze(NEGATIVE_TEXT);
    let td = tempdir().unwrap();
    let path = export::write_json(&report.rows, td.path()).unwrap();
    assert!(path.ends_with(JSON_FILENAME));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), report.rows.len());
    assert_eq!(array[0]["metric"], VADER_POSITIVE);
}

// --------------------- CLI tests ---------------------

#[test]
fn cli_prints_score_table() {
    let td = tempdir().unwrap();
    run_cli_ok_in(td.path(), &[POSITIVE_TEXT])
        .stdout(predicate::str::contains("VADER Positive"))
        .stdout(predicate::str::contains("TextBlob Subjectivity"));
}

#[test]
fn cli_exports_csv() {
    let td = tempdir().unwrap();
    run_cli_ok_in(td.path(), &[POSITIVE_TEXT, "--export-format", "csv"])
        .stdout(predicate::str::contains("Results written to"));
    let csv = fs::read_to_string(td.path().join(CSV_FILENAME)).unwrap();
    assert!(csv.starts_with("Metric,Score"));
    assert!(csv.contains("VADER Compound"));
}

#[test]
fn cli_exports_json_to_out_dir() {
    let td = tempdir().unwrap();
    let out = td.path().join("results");
    fs::create_dir(&out).unwrap();
    run_cli_ok_in(
        td.path(),
        &[
            NEGATIVE_TEXT,
            "--export-format",
            "json",
            "--out",
            out.to_str().unwrap(),
        ],
    );
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join(JSON_FILENAME)).unwrap()).unwrap();
    assert_eq!(json[0]["metric"], VADER_POSITIVE);
}

#[test]
fn cli_warns_on_non_english_input_by_default() {
    // No RUST_LOG in the environment; the advisory must still show up.
    let td = tempdir().unwrap();
    let text = "El rápido zorro marrón salta sobre el perro perezoso mientras \
                todos los habitantes del pueblo observan con asombro y alegría \
                durante la gran fiesta del verano en la plaza mayor.";
    let mut cmd = assert_cmd::Command::cargo_bin("sentiment_analysis").unwrap();
    cmd.current_dir(td.path());
    cmd.env_remove("RUST_LOG");
    cmd.arg(text)
        .assert()
        .success()
        .stderr(predicate::str::contains("not in English"));
}

#[test]
fn cli_empty_stdin_performs_no_analysis() {
    let td = tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("sentiment_analysis").unwrap();
    cmd.current_dir(td.path());
    cmd.write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No analysis performed."));
    // No export file appears either.
    assert!(!td.path().join(CSV_FILENAME).exists());
}

#[test]
fn cli_reads_text_from_file() {
    let td = assert_fs::TempDir::new().unwrap();
    let f = td.child("review.txt");
    f.write_str(NEGATIVE_TEXT).unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("sentiment_analysis").unwrap();
    cmd.current_dir(td.path());
    cmd.args(["--file", f.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("VADER Negative"));
}

#[test]
fn cli_missing_file_fails() {
    let td = tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("sentiment_analysis").unwrap();
    cmd.current_dir(td.path());
    cmd.args(["--file", "does_not_exist.txt"]).assert().failure();
}
