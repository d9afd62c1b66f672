//! Covrep CLI - coverage report generation from LCOV tracefiles

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::Parser;
use covrep_core::{
    build_summary, parse_tracefile, render_coverage_report, render_json, render_text,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "covrep")]
#[command(about = "Render HTML, text, and JSON coverage summaries from LCOV tracefiles")]
#[command(version)]
struct Cli {
    /// Path to the LCOV tracefile (e.g. lcov.info)
    tracefile: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Output file path (for HTML format, default: coverage-report.html)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.output.is_some() && cli.format != OutputFormat::Html {
        anyhow::bail!("--output is only valid with --format html");
    }

    if !cli.tracefile.exists() {
        anyhow::bail!("Tracefile does not exist: {}", cli.tracefile.display());
    }

    let input = std::fs::read_to_string(&cli.tracefile)
        .with_context(|| format!("Failed to read tracefile: {}", cli.tracefile.display()))?;
    let records = parse_tracefile(&input)
        .with_context(|| format!("Failed to parse tracefile: {}", cli.tracefile.display()))?;

    if records.is_empty() {
        eprintln!(
            "warning: no coverage records found in {}",
            cli.tracefile.display()
        );
    }

    // The reported file list follows tracefile order
    let reported_files: Vec<String> = records.iter().map(|r| r.file.clone()).collect();

    match cli.format {
        OutputFormat::Text => {
            print!("{}", render_text(&build_summary(&records, &reported_files)));
        }
        OutputFormat::Json => {
            println!("{}", render_json(&build_summary(&records, &reported_files)));
        }
        OutputFormat::Html => {
            let html = render_coverage_report(Some(&records), Some(&reported_files))
                .ok_or_else(|| anyhow::anyhow!("report rendering produced no document"))?;
            let output_path = cli
                .output
                .unwrap_or_else(|| PathBuf::from("coverage-report.html"));
            write_html_report(&output_path, &html)?;
            eprintln!("Wrote {}", output_path.display());
        }
    }

    Ok(())
}

/// Write the HTML report atomically (temp + rename pattern)
fn write_html_report(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let temp_path = path.with_extension("html.tmp");
    std::fs::write(&temp_path, html)
        .with_context(|| format!("Failed to write temporary file: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
