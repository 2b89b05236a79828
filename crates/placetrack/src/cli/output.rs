//! Text and JSON rendering of dashboard contents.

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::record::{PlacementRecord, DATE_FORMAT};
use crate::stats::PlacementStats;

/// Shown when a list has nothing to display.
pub const EMPTY_LIST: &str = "No placement records found.";

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Render a list of records.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(
    records: &[&PlacementRecord],
    format: OutputFormat,
    display: &DisplayConfig,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    if records.is_empty() {
        return Ok(EMPTY_LIST.to_string());
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.student_name.clone(),
                r.department.clone(),
                r.company_name.clone(),
                package_label(r.package, display),
                r.date_placed.format(DATE_FORMAT).to_string(),
            ]
        })
        .collect();

    Ok(match format {
        OutputFormat::Table => table(&rows),
        _ => rows
            .iter()
            .map(|[id, student, dept, company, package, date]| {
                format!("{student} ({dept}) - {company}, {package}, placed {date} [#{id}]")
            })
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Render the summary figures.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_stats(stats: &PlacementStats, json: bool, display: &DisplayConfig) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(stats)?);
    }
    Ok(format!(
        "Total Placements: {}\nCompanies:        {}\nAvg Package:      {}",
        stats.total_placements,
        stats.companies,
        stats.average_label(&display.currency_symbol)
    ))
}

/// A single package, e.g. `₹12.5 LPA`.
#[must_use]
pub fn package_label(package: f64, display: &DisplayConfig) -> String {
    format!(
        "{}{} {}",
        display.currency_symbol, package, display.package_unit
    )
}

fn table(rows: &[[String; 6]]) -> String {
    const HEADERS: [&str; 6] = ["ID", "Student", "Department", "Company", "Package", "Date"];

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(String::from);
    for row in std::iter::once(&header).chain(rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.pop();
    out
}
