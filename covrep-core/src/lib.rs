//! Covrep core library - coverage aggregation and report rendering

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Aggregation is a pure fold over input records
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Identical input yields byte-for-byte identical output

pub mod aggregate;
pub mod html;
pub mod lcov;
pub mod record;
pub mod report;

pub use aggregate::{compute_totals, format_count, format_percentage, CoverageTotals};
pub use html::render_coverage_report;
pub use lcov::parse_tracefile;
pub use record::{CoverageMetric, FileCoverageRecord};
pub use report::{build_summary, render_json, render_text, CategorySummary, CoverageSummary};
