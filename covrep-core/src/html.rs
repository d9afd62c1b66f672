//! HTML report generation
//!
//! Renders the coverage summary as a single self-contained HTML page with
//! embedded CSS. The layout is fixed: one heading, four summary blocks in
//! the order Lines, Branches, Functions, Statements, then the reported file
//! list. No JavaScript; the page works offline.

use crate::aggregate::{compute_totals, format_count, format_percentage, CoverageTotals};
use crate::record::FileCoverageRecord;

/// Render the coverage report document.
///
/// Returns `None` when either input is absent, so callers must handle the
/// missing-input case before using the result. Present-but-empty inputs are
/// not an error: they render a valid zero-valued report with an empty file
/// list.
pub fn render_coverage_report(
    records: Option<&[FileCoverageRecord]>,
    reported_files: Option<&[String]>,
) -> Option<String> {
    let records = records?;
    let reported_files = reported_files?;

    let totals = compute_totals(records);

    Some(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Test Coverage Report</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {summary}
        {file_list}
        {footer}
    </div>
</body>
</html>"#,
        css = inline_css(),
        header = render_header(),
        summary = render_summary(&totals),
        file_list = render_file_list(reported_files),
        footer = render_footer(),
    ))
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
/* Reset & Base */
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

/* Container */
.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

/* Header */
header {
    margin-bottom: 2rem;
    padding-bottom: 1rem;
    border-bottom: 2px solid #e5e7eb;
}

header h1 {
    font-size: 2rem;
    font-weight: 700;
}

/* Summary */
.summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
    margin-bottom: 2rem;
}

.summary-card {
    background: #f9fafb;
    padding: 1rem;
    border-radius: 0.5rem;
    border-left: 4px solid #3b82f6;
}

.summary-card h3 {
    font-size: 0.875rem;
    font-weight: 600;
    color: #6b7280;
    margin-bottom: 0.5rem;
}

.summary-card .value {
    font-size: 1.5rem;
    font-weight: 700;
}

.summary-card .count {
    color: #6b7280;
    font-size: 0.875rem;
}

/* Section */
.section {
    margin-bottom: 2rem;
}

.section h2 {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

/* File list */
.file-list {
    list-style: none;
}

.file-list li {
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid #e5e7eb;
    font-family: 'Monaco', 'Courier New', monospace;
    font-size: 0.875rem;
}

.file-list li:last-child {
    border-bottom: none;
}

/* Footer */
footer {
    margin-top: 3rem;
    padding-top: 1rem;
    border-top: 1px solid #e5e7eb;
    text-align: center;
    color: #6b7280;
    font-size: 0.875rem;
}

/* Mobile */
@media (max-width: 768px) {
    .container {
        padding: 1rem;
    }

    header h1 {
        font-size: 1.5rem;
    }

    .summary {
        grid-template-columns: 1fr;
    }
}

/* Dark Mode */
@media (prefers-color-scheme: dark) {
    body {
        background: #111827;
        color: #f9fafb;
    }

    header {
        border-bottom-color: #374151;
    }

    .summary-card {
        background: #1f2937;
    }

    .file-list li {
        border-bottom-color: #374151;
    }

    footer {
        border-top-color: #374151;
    }
}
"#
}

/// Render header section
fn render_header() -> String {
    r#"<header>
    <h1>Test Coverage Report</h1>
</header>"#
        .to_string()
}

/// Render the four summary blocks in fixed category order
fn render_summary(totals: &CoverageTotals) -> String {
    let cards: String = totals
        .categories()
        .iter()
        .map(|(label, metric)| {
            format!(
                r#"<div class="summary-card">
        <h3>{label}</h3>
        <div class="value">{percentage}</div>
        <div class="count">{count}</div>
    </div>"#,
                label = label,
                percentage = format_percentage(metric),
                count = format_count(metric),
            )
        })
        .collect();

    format!(
        r#"<div class="summary">{cards}</div>"#,
        cards = cards,
    )
}

/// Render the reported file list; one entry per identifier, in input order
fn render_file_list(files: &[String]) -> String {
    let items: String = files
        .iter()
        .map(|file| format!("<li>{}</li>", html_escape(file)))
        .collect();

    format!(
        r#"<section class="section">
    <h2>Files ({count})</h2>
    <ul class="file-list">{items}</ul>
</section>"#,
        count = files.len(),
        items = items,
    )
}

/// Render footer
fn render_footer() -> String {
    r#"<footer>
    <p>Generated by covrep</p>
</footer>"#
        .to_string()
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
