//! Output artifacts of an analysis run: plain-text table for stdout,
//! CSV/JSON files, and chart-ready records carrying the bar color.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{classify, AnalysisReport, ScoreRow};

/// Default CSV export filename.
pub const CSV_FILENAME: &str = "sentiment_analysis_results.csv";
/// Default JSON export filename.
pub const JSON_FILENAME: &str = "sentiment_analysis_results.json";

/// One bar of the chart: label, 0–100 value and categorical color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Chart records for a report, in table order.
pub fn chart_data(report: &AnalysisReport) -> Vec<ChartBar> {
    report
        .rows
        .iter()
        .map(|row| ChartBar {
            label: row.metric.clone(),
            value: row.score,
            color: classify(&row.metric).as_str(),
        })
        .collect()
}

/// Serializes the table as CSV with a `Metric,Score` header. Scores keep
/// their full float precision so a re-import reproduces the table.
pub fn to_csv_string(rows: &[ScoreRow]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Metric", "Score"])
        .map_err(|e| format!("Write CSV header failed: {e}"))?;
    for row in rows {
        writer
            .write_record([row.metric.as_str(), &row.score.to_string()])
            .map_err(|e| format!("Write CSV row failed: {e}"))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Flush CSV failed: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV not UTF-8: {e}"))
}

/// Writes the CSV export into `dir` under [`CSV_FILENAME`]; returns the path.
pub fn write_csv(rows: &[ScoreRow], dir: &Path) -> Result<PathBuf, String> {
    let path = dir.join(CSV_FILENAME);
    let csv = to_csv_string(rows)?;
    fs::write(&path, csv).map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    Ok(path)
}

/// Serializes the table as a JSON array of `{"metric": …, "score": …}`.
pub fn to_json_string(rows: &[ScoreRow]) -> Result<String, String> {
    serde_json::to_string_pretty(rows).map_err(|e| format!("Serialize JSON failed: {e}"))
}

/// Writes the JSON export into `dir` under [`JSON_FILENAME`]; returns the path.
pub fn write_json(rows: &[ScoreRow], dir: &Path) -> Result<PathBuf, String> {
    let path = dir.join(JSON_FILENAME);
    let json = to_json_string(rows)?;
    fs::write(&path, json).map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    Ok(path)
}

/// Renders the table for terminal display, one aligned row per metric.
pub fn render_table(rows: &[ScoreRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.metric.chars().count())
        .chain(std::iter::once("Metric".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  {:>8}\n", "Metric", "Score"));
    for row in rows {
        out.push_str(&format!("{:<width$}  {:>8.2}\n", row.metric, row.score));
    }
    out.trim_end().to_string()
}
