//! Coverage record types
//!
//! Plain data consumed by aggregation and rendering. Records are immutable
//! inputs: constructed once by a producer (tracefile parser, test fixture),
//! never mutated afterwards.
//!
//! The `hit <= found` invariant is upheld by producers, not enforced here;
//! arithmetic downstream is performed on the counters as given.

use serde::{Deserialize, Serialize};

/// Hit/found counters for one metric category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CoverageMetric {
    pub found: u64,
    pub hit: u64,
}

impl CoverageMetric {
    /// Create a metric from found/hit counters
    pub fn new(found: u64, hit: u64) -> Self {
        CoverageMetric { found, hit }
    }

    /// Add another metric's counters into this one
    pub fn add(&mut self, other: &CoverageMetric) {
        self.found += other.found;
        self.hit += other.hit;
    }

    /// Covered fraction as a percentage. Zero found is 0.0, never a division error.
    pub fn percent(&self) -> f64 {
        if self.found == 0 {
            0.0
        } else {
            (self.hit as f64 / self.found as f64) * 100.0
        }
    }
}

/// Per-file coverage counters, one record per source file under coverage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct FileCoverageRecord {
    pub file: String,
    pub lines: CoverageMetric,
    pub branches: CoverageMetric,
    pub functions: CoverageMetric,
    pub statements: CoverageMetric,
}
