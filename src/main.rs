#![forbid(unsafe_code)]
//! # Sentiment Analysis CLI
//!
//! Command-line interface for the `sentiment_analysis` crate. Feed it a
//! block of text and it prints a combined sentiment/emotion score table
//! (all values on a 0–100 percentage scale) and optionally writes the
//! results as CSV or JSON.
//!
//! ## Features
//! - Compound polarity (VADER-style), polarity/subjectivity and emotion
//!   frequency scores in one table.
//! - Advisory language check; non-English input only warns, never blocks.
//! - A failing scorer drops its own rows and logs an error, the rest of
//!   the table still prints.
//!
//! ## Example
//! ```bash
//! cargo run --release -- "I love this tool!" --export-format csv
//! ```
//!
//! See `--help` for all available options.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::{error, warn};
use sentiment_analysis::export;
use sentiment_analysis::{Analyzer, LanguageCheck};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    None,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Text to analyze; omit to read from --file or stdin
    text: Option<String>,

    /// Read the text to analyze from a UTF-8 file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output format for the results file (none, csv, json)
    #[arg(long, default_value = "none")]
    export_format: ExportFormat,

    /// Directory the results file is written to
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn read_input(cli: &Cli) -> Result<String, String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .map_err(|e| format!("Read {} failed: {e}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Read stdin failed: {e}"))?;
    Ok(buffer)
}

fn main() {
    // Language advisories are warn-level and must reach the user even
    // without RUST_LOG set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let text = match read_input(&cli) {
        Ok(text) => text,
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    };

    if text.trim().is_empty() {
        println!("No analysis performed.");
        return;
    }

    let analyzer = Analyzer::new();
    let report = analyzer.analyze(&text);

    match &report.language {
        LanguageCheck::Undetermined => warn!("Language detection failed."),
        LanguageCheck::Other(code) => warn!(
            "The input text is not in English (detected: {code}). The analysis may not be accurate."
        ),
        LanguageCheck::English | LanguageCheck::Skipped => {}
    }
    for diagnostic in &report.diagnostics {
        error!("{} error: {}", diagnostic.provider, diagnostic.message);
    }

    println!("{}", export::render_table(&report.rows));

    let written = match cli.export_format {
        ExportFormat::None => None,
        ExportFormat::Csv => Some(export::write_csv(&report.rows, &cli.out)),
        ExportFormat::Json => Some(export::write_json(&report.rows, &cli.out)),
    };
    match written {
        None => {}
        Some(Ok(path)) => println!("Results written to {}", path.display()),
        Some(Err(e)) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }
}
