//! LCOV tracefile parsing
//!
//! Consumes the text format emitted by lcov/geninfo and the istanbul family
//! of tools: records delimited by `SF:` ... `end_of_record`, with per-record
//! summary counters (`LF:`/`LH:`, `FNF:`/`FNH:`, `BRF:`/`BRH:`) and
//! per-point detail lines (`DA:`, `FNDA:`, `BRDA:`).
//!
//! Global invariants enforced:
//! - Record order follows tracefile order
//! - Unknown directives are ignored; malformed numeric fields are errors
//!   carrying the 1-based line number

use crate::record::{CoverageMetric, FileCoverageRecord};
use anyhow::{Context, Result};

/// Counters collected while scanning one `SF:` ... `end_of_record` block
#[derive(Default)]
struct RecordBuilder {
    file: String,
    lf: Option<u64>,
    lh: Option<u64>,
    fnf: Option<u64>,
    fnh: Option<u64>,
    brf: Option<u64>,
    brh: Option<u64>,
    da_found: u64,
    da_hit: u64,
    fn_count: u64,
    fnda_hit: u64,
    brda_found: u64,
    brda_hit: u64,
}

impl RecordBuilder {
    fn new(file: String) -> Self {
        RecordBuilder {
            file,
            ..Default::default()
        }
    }

    /// Resolve summary counters, falling back to detail-line tallies.
    ///
    /// Statements are derived from the instrumentation points (`DA:` lines);
    /// a summary-only tracefile reports statements equal to lines.
    fn finish(self) -> FileCoverageRecord {
        let da_totals = CoverageMetric::new(self.da_found, self.da_hit);

        let lines = match (self.lf, self.lh) {
            (Some(found), Some(hit)) => CoverageMetric::new(found, hit),
            _ => da_totals,
        };
        let functions = match (self.fnf, self.fnh) {
            (Some(found), Some(hit)) => CoverageMetric::new(found, hit),
            _ => CoverageMetric::new(self.fn_count, self.fnda_hit),
        };
        let branches = match (self.brf, self.brh) {
            (Some(found), Some(hit)) => CoverageMetric::new(found, hit),
            _ => CoverageMetric::new(self.brda_found, self.brda_hit),
        };
        let statements = if self.da_found == 0 { lines } else { da_totals };

        FileCoverageRecord {
            file: self.file,
            lines,
            branches,
            functions,
            statements,
        }
    }
}

/// Parse an LCOV tracefile into per-file coverage records.
///
/// A trailing record without `end_of_record` is still emitted. Directives
/// outside any record (`TN:` headers and the like) are skipped.
pub fn parse_tracefile(input: &str) -> Result<Vec<FileCoverageRecord>> {
    let mut records = Vec::new();
    let mut current: Option<RecordBuilder> = None;

    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        if let Some(path) = line.strip_prefix("SF:") {
            if let Some(builder) = current.take() {
                records.push(builder.finish());
            }
            current = Some(RecordBuilder::new(path.trim().to_string()));
            continue;
        }

        if line == "end_of_record" {
            if let Some(builder) = current.take() {
                records.push(builder.finish());
            }
            continue;
        }

        let builder = match current.as_mut() {
            Some(builder) => builder,
            None => continue,
        };

        if let Some(value) = line.strip_prefix("LF:") {
            builder.lf = Some(parse_counter(value, "LF", line_no)?);
        } else if let Some(value) = line.strip_prefix("LH:") {
            builder.lh = Some(parse_counter(value, "LH", line_no)?);
        } else if let Some(value) = line.strip_prefix("FNF:") {
            builder.fnf = Some(parse_counter(value, "FNF", line_no)?);
        } else if let Some(value) = line.strip_prefix("FNH:") {
            builder.fnh = Some(parse_counter(value, "FNH", line_no)?);
        } else if let Some(value) = line.strip_prefix("BRF:") {
            builder.brf = Some(parse_counter(value, "BRF", line_no)?);
        } else if let Some(value) = line.strip_prefix("BRH:") {
            builder.brh = Some(parse_counter(value, "BRH", line_no)?);
        } else if let Some(value) = line.strip_prefix("DA:") {
            let count = execution_count(value, "DA", 1, line_no)?;
            builder.da_found += 1;
            if count > 0 {
                builder.da_hit += 1;
            }
        } else if let Some(value) = line.strip_prefix("FNDA:") {
            let count = execution_count(value, "FNDA", 0, line_no)?;
            if count > 0 {
                builder.fnda_hit += 1;
            }
        } else if line.strip_prefix("FN:").is_some() {
            builder.fn_count += 1;
        } else if let Some(value) = line.strip_prefix("BRDA:") {
            builder.brda_found += 1;
            if branch_taken(value, line_no)? {
                builder.brda_hit += 1;
            }
        }
        // TN:, VER: and other directives carry nothing the report uses
    }

    if let Some(builder) = current.take() {
        records.push(builder.finish());
    }

    Ok(records)
}

/// Parse a bare numeric summary counter (`LF:42`)
fn parse_counter(value: &str, directive: &str, line_no: usize) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("invalid {} count on line {}", directive, line_no))
}

/// Extract the execution count from a comma-separated detail line.
///
/// `DA:<line>,<count>[,checksum]` carries the count in field 1;
/// `FNDA:<count>,<name>` carries it in field 0.
fn execution_count(value: &str, directive: &str, field: usize, line_no: usize) -> Result<u64> {
    let raw = value
        .split(',')
        .nth(field)
        .with_context(|| format!("truncated {} entry on line {}", directive, line_no))?;
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid {} count on line {}", directive, line_no))
}

/// Whether a `BRDA:<line>,<block>,<branch>,<taken>` entry was taken.
///
/// The taken column is `-` when the branch was never reached.
fn branch_taken(value: &str, line_no: usize) -> Result<bool> {
    let taken = value
        .split(',')
        .nth(3)
        .with_context(|| format!("truncated BRDA entry on line {}", line_no))?
        .trim();
    if taken == "-" {
        return Ok(false);
    }
    let count = taken
        .parse::<u64>()
        .with_context(|| format!("invalid BRDA taken count on line {}", line_no))?;
    Ok(count > 0)
}
