//! Aggregation views - coverage totals across records
//!
//! Computes derived totals from per-file coverage records without modifying
//! the input.
//!
//! Global invariants enforced:
//! - Totals are strictly derived (never stored, always computed)
//! - Summation is associative and order-independent
//! - Category order in every report is fixed: Lines, Branches, Functions,
//!   Statements

use crate::record::{CoverageMetric, FileCoverageRecord};
use serde::{Deserialize, Serialize};

/// Aggregate totals for the four metric categories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CoverageTotals {
    pub lines: CoverageMetric,
    pub branches: CoverageMetric,
    pub functions: CoverageMetric,
    pub statements: CoverageMetric,
}

impl CoverageTotals {
    /// Category labels and metrics in the fixed report order.
    ///
    /// Every renderer iterates this array, so the ordering lives in exactly
    /// one place.
    pub fn categories(&self) -> [(&'static str, &CoverageMetric); 4] {
        [
            ("Lines", &self.lines),
            ("Branches", &self.branches),
            ("Functions", &self.functions),
            ("Statements", &self.statements),
        ]
    }
}

/// Sum per-category hit/found counters across all records
pub fn compute_totals(records: &[FileCoverageRecord]) -> CoverageTotals {
    let mut totals = CoverageTotals::default();

    for record in records {
        totals.lines.add(&record.lines);
        totals.branches.add(&record.branches);
        totals.functions.add(&record.functions);
        totals.statements.add(&record.statements);
    }

    totals
}

/// Format a metric as a percentage string.
///
/// Zero found renders the literal `0%`; anything else renders exactly two
/// decimal places with a trailing `%` (`50.00%`).
pub fn format_percentage(metric: &CoverageMetric) -> String {
    if metric.found == 0 {
        "0%".to_string()
    } else {
        format!("{:.2}%", metric.percent())
    }
}

/// Format a metric as a `(hit / found)` count string
pub fn format_count(metric: &CoverageMetric) -> String {
    format!("({} / {})", metric.hit, metric.found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(
        file: &str,
        lines: (u64, u64),
        branches: (u64, u64),
        functions: (u64, u64),
        statements: (u64, u64),
    ) -> FileCoverageRecord {
        FileCoverageRecord {
            file: file.to_string(),
            lines: CoverageMetric::new(lines.0, lines.1),
            branches: CoverageMetric::new(branches.0, branches.1),
            functions: CoverageMetric::new(functions.0, functions.1),
            statements: CoverageMetric::new(statements.0, statements.1),
        }
    }

    #[test]
    fn test_totals_empty_input_is_all_zero() {
        let totals = compute_totals(&[]);
        assert_eq!(totals, CoverageTotals::default());
    }

    #[test]
    fn test_totals_sum_each_category_independently() {
        let records = vec![
            create_test_record("file1.ts", (10, 8), (5, 3), (3, 2), (15, 12)),
            create_test_record("file2.ts", (20, 15), (10, 7), (5, 4), (25, 20)),
        ];

        let totals = compute_totals(&records);
        assert_eq!(totals.lines, CoverageMetric::new(30, 23));
        assert_eq!(totals.branches, CoverageMetric::new(15, 10));
        assert_eq!(totals.functions, CoverageMetric::new(8, 6));
        assert_eq!(totals.statements, CoverageMetric::new(40, 32));
    }

    #[test]
    fn test_totals_order_independent() {
        let a = create_test_record("a.ts", (10, 8), (5, 3), (3, 2), (15, 12));
        let b = create_test_record("b.ts", (20, 15), (10, 7), (5, 4), (25, 20));

        let forward = compute_totals(&[a.clone(), b.clone()]);
        let reversed = compute_totals(&[b, a]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_categories_fixed_order() {
        let totals = CoverageTotals::default();
        let labels: Vec<&str> = totals.categories().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Lines", "Branches", "Functions", "Statements"]);
    }

    #[test]
    fn test_format_percentage_zero_found() {
        assert_eq!(format_percentage(&CoverageMetric::new(0, 0)), "0%");
    }

    #[test]
    fn test_format_percentage_two_decimals() {
        assert_eq!(format_percentage(&CoverageMetric::new(20, 10)), "50.00%");
        assert_eq!(format_percentage(&CoverageMetric::new(25, 20)), "80.00%");
        assert_eq!(format_percentage(&CoverageMetric::new(3, 1)), "33.33%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(&CoverageMetric::new(20, 10)), "(10 / 20)");
        assert_eq!(format_count(&CoverageMetric::new(0, 0)), "(0 / 0)");
    }
}
