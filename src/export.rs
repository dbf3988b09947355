//! Output formatting for the `list` command.
//!
//! Converts a slice of advocates to:
//! - Table - aligned columns for terminal reading
//! - JSON - the wire shape (`{"data": [...]}`) for programmatic use
//! - CSV - one row per advocate, specialties joined with `"; "`
//!
//! All three formats iterate the same declarative column table as the
//! interactive UI, so a new field shows up everywhere at once.

use std::fmt::Write as _;

use anyhow::Result;
use serde_json::json;

use crate::model::Advocate;
use crate::search::fields::{FIELDS, FieldValue};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Aligned columns for terminal reading
    #[default]
    Table,
    /// The endpoint's wire shape, pretty-printed
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Render `advocates` in the requested format.
pub fn render(advocates: &[Advocate], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Table => Ok(render_table(advocates)),
        ExportFormat::Json => render_json(advocates),
        ExportFormat::Csv => Ok(render_csv(advocates)),
    }
}

fn render_table(advocates: &[Advocate]) -> String {
    let rows: Vec<Vec<String>> = advocates
        .iter()
        .map(|advocate| {
            FIELDS
                .iter()
                .map(|field| field.value(advocate).display())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = FIELDS.iter().map(|field| field.label.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = format_row(FIELDS.iter().map(|field| field.label.to_string()), &widths);
    let _ = writeln!(out, "{}", console::style(header).bold());
    for row in &rows {
        let _ = writeln!(out, "{}", format_row(row.iter().cloned(), &widths));
    }
    out
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn render_json(advocates: &[Advocate]) -> Result<String> {
    let body = serde_json::to_string_pretty(&json!({ "data": advocates }))?;
    Ok(body + "\n")
}

fn render_csv(advocates: &[Advocate]) -> String {
    let mut out = String::new();

    let header: Vec<String> = FIELDS.iter().map(|f| escape_csv(f.label)).collect();
    let _ = writeln!(out, "{}", header.join(","));

    for advocate in advocates {
        let row: Vec<String> = FIELDS
            .iter()
            .map(|field| match field.value(advocate) {
                FieldValue::Tags(tags) => escape_csv(&tags.join("; ")),
                value => escape_csv(&value.display()),
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(","));
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
