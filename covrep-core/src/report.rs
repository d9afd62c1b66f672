//! Reporting and output generation
//!
//! Text and JSON views of the aggregated coverage summary, alongside the
//! HTML renderer in `html`.
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::aggregate::{compute_totals, format_count, format_percentage};
use crate::record::{CoverageMetric, FileCoverageRecord};
use serde::{Deserialize, Serialize};

/// One metric category in summary form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CategorySummary {
    pub category: String,
    pub found: u64,
    pub hit: u64,
    pub percent: f64,
}

/// Serializable coverage summary: the four categories in report order plus
/// the reported file list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CoverageSummary {
    pub categories: Vec<CategorySummary>,
    pub files: Vec<String>,
}

/// Build the summary view from records and the reported file list
pub fn build_summary(
    records: &[FileCoverageRecord],
    reported_files: &[String],
) -> CoverageSummary {
    let totals = compute_totals(records);
    let categories = totals
        .categories()
        .iter()
        .map(|(label, metric)| CategorySummary {
            category: (*label).to_string(),
            found: metric.found,
            hit: metric.hit,
            percent: metric.percent(),
        })
        .collect();

    CoverageSummary {
        categories,
        files: reported_files.to_vec(),
    }
}

/// Render the summary as text output
pub fn render_text(summary: &CoverageSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<10} {}\n",
        "CATEGORY", "COVERED", "HIT / FOUND"
    ));
    for category in &summary.categories {
        let metric = CoverageMetric::new(category.found, category.hit);
        output.push_str(&format!(
            "{:<12} {:<10} {}\n",
            category.category,
            format_percentage(&metric),
            format_count(&metric),
        ));
    }

    if !summary.files.is_empty() {
        output.push('\n');
        output.push_str(&format!("Files ({})\n", summary.files.len()));
        for file in &summary.files {
            output.push_str(&format!("  {}\n", file));
        }
    }

    output
}

/// Render the summary as JSON output
pub fn render_json(summary: &CoverageSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(file: &str) -> FileCoverageRecord {
        FileCoverageRecord {
            file: file.to_string(),
            lines: CoverageMetric::new(20, 10),
            branches: CoverageMetric::new(10, 5),
            functions: CoverageMetric::new(4, 2),
            statements: CoverageMetric::new(25, 20),
        }
    }

    #[test]
    fn test_summary_categories_in_report_order() {
        let summary = build_summary(&[create_test_record("a.ts")], &["a.ts".to_string()]);
        let labels: Vec<&str> = summary
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(labels, vec!["Lines", "Branches", "Functions", "Statements"]);
    }

    #[test]
    fn test_text_output_contains_each_category_row() {
        let summary = build_summary(&[create_test_record("a.ts")], &["a.ts".to_string()]);
        let text = render_text(&summary);

        assert!(text.contains("Lines"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("(20 / 25)"));
        assert!(text.contains("Files (1)"));
        assert!(text.contains("  a.ts"));
    }

    #[test]
    fn test_text_output_omits_empty_file_section() {
        let summary = build_summary(&[], &[]);
        let text = render_text(&summary);
        assert!(!text.contains("Files ("));
    }

    #[test]
    fn test_json_round_trip() {
        let summary = build_summary(&[create_test_record("a.ts")], &["a.ts".to_string()]);
        let json = render_json(&summary);
        let parsed: CoverageSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
