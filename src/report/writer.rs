use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::models::{Report, ReportRow};

pub const COLUMNS: [&str; 5] = [
    "Repository Name",
    "Has Maintainers?",
    "Current Maintainers",
    "Open Issues",
    "Repository URL",
];

const ISSUES_COLUMN: usize = 3;

pub const MAINTAINER_SEPARATOR: &str = "; ";

fn header(include_issue_counts: bool) -> Vec<&'static str> {
    COLUMNS
        .iter()
        .enumerate()
        .filter(|(i, _)| include_issue_counts || *i != ISSUES_COLUMN)
        .map(|(_, name)| *name)
        .collect()
}

fn record(row: &ReportRow, include_issue_counts: bool) -> Vec<String> {
    let mut fields = vec![
        row.repo_name.clone(),
        row.has_maintainers.to_string(),
        row.maintainer_logins.join(MAINTAINER_SEPARATOR),
    ];
    if include_issue_counts {
        fields.push(row.open_issue_count.unwrap_or(0).to_string());
    }
    fields.push(row.repo_url.clone());
    fields
}

fn csv_writer(style: QuoteStyle, buffer: Vec<u8>) -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer)
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Renders the report as CSV text: a bare header line, then one record per
/// row with every field quoted and embedded quotes doubled.
pub fn render_csv(report: &Report) -> Result<String> {
    let mut header_writer = csv_writer(QuoteStyle::Necessary, Vec::new());
    header_writer.write_record(header(report.include_issue_counts))?;

    let mut writer = csv_writer(QuoteStyle::Always, into_bytes(header_writer)?);
    for row in &report.rows {
        writer.write_record(record(row, report.include_issue_counts))?;
    }

    Ok(String::from_utf8(into_bytes(writer)?)?)
}

/// Writes the whole report in a single call, replacing any existing file.
pub fn write_csv(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let text = render_csv(report)?;
    std::fs::write(path, text)?;
    Ok(())
}
