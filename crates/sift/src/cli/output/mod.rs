//! Rendering, JSON serialization, and CSV export for CLI output.

use std::{path::Path, process::ExitCode};

use comfy_table::Table;
use serde::Serialize;
use sift_entity::EntityCategory;
use sift_jobs::EntityReport;
use sift_scan::RankedMatch;

use crate::cli::args::OutputArgs;

/// Header row for exported search results.
const SEARCH_CSV_HEADER: [&str; 3] = ["Document Name", "Matched Snippet", "Match Count"];

/// Header row for exported entity results.
const ENTITY_CSV_HEADER: [&str; 2] = ["Document Name", "Extracted Entities"];

/// JSON output for a search run.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Total ranked matches returned.
    total_matches: usize,
    /// Ranked matches in display order.
    results: Vec<JsonMatch<'a>>,
}

/// One ranked match in JSON output.
#[derive(Serialize)]
struct JsonMatch<'a> {
    /// Display name of the document.
    document: String,
    /// Character offset of the match.
    offset: usize,
    /// The match snippet.
    snippet: &'a str,
    /// Query tokens found in the snippet.
    match_count: usize,
}

/// JSON output for an extraction run.
#[derive(Serialize)]
struct JsonEntityOutput {
    /// The requested category.
    category: String,
    /// Per-document entity sets.
    documents: Vec<JsonDocumentEntities>,
}

/// One document's entities in JSON output.
#[derive(Serialize)]
struct JsonDocumentEntities {
    /// Display name of the document.
    document: String,
    /// Distinct entities, in set order.
    entities: Vec<String>,
}

/// Renders ranked search results as a table, JSON, and/or CSV.
pub fn search_results(ranked: &[RankedMatch], query: &str, output: &OutputArgs) -> ExitCode {
    if let Some(path) = &output.csv
        && let Err(e) = write_search_csv(ranked, path)
    {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    if output.json {
        let json_output = JsonSearchOutput {
            query,
            total_matches: ranked.len(),
            results: ranked
                .iter()
                .map(|result| JsonMatch {
                    document: display_name(&result.document),
                    offset: result.offset,
                    snippet: &result.snippet,
                    match_count: result.match_count,
                })
                .collect(),
        };
        return print_json(&json_output);
    }

    if ranked.is_empty() {
        println!("No results found.");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.set_header(SEARCH_CSV_HEADER.to_vec());
    for result in ranked {
        table.add_row(vec![
            display_name(&result.document),
            flatten_newlines(&result.snippet),
            result.match_count.to_string(),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}

/// Renders per-document entity sets as a table, JSON, and/or CSV.
///
/// The table's second column is titled after the requested category; the
/// CSV export always uses the fixed `Extracted Entities` header.
pub fn entity_results(
    reports: &[EntityReport],
    category: EntityCategory,
    output: &OutputArgs,
) -> ExitCode {
    if let Some(path) = &output.csv
        && let Err(e) = write_entity_csv(reports, path)
    {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    if output.json {
        let json_output = JsonEntityOutput {
            category: category.to_string(),
            documents: reports
                .iter()
                .map(|report| JsonDocumentEntities {
                    document: display_name(&report.document),
                    entities: report.entities.iter().cloned().collect(),
                })
                .collect(),
        };
        return print_json(&json_output);
    }

    if reports.is_empty() {
        println!("No documents processed.");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.set_header(vec!["Document Name", category.as_str()]);
    for report in reports {
        table.add_row(vec![
            display_name(&report.document),
            flatten_newlines(&joined_entities(report)),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}

/// Writes search results to a CSV file with the fixed header row.
fn write_search_csv(ranked: &[RankedMatch], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(SEARCH_CSV_HEADER)?;
    for result in ranked {
        writer.write_record([
            display_name(&result.document),
            flatten_newlines(&result.snippet),
            result.match_count.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes entity results to a CSV file with the fixed header row.
fn write_entity_csv(reports: &[EntityReport], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(ENTITY_CSV_HEADER)?;
    for report in reports {
        writer.write_record([
            display_name(&report.document),
            flatten_newlines(&joined_entities(report)),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Serializes and prints a JSON payload.
fn print_json<T: Serialize>(payload: &T) -> ExitCode {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File name used for display.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Comma-joins a report's entities for single-cell display.
fn joined_entities(report: &EntityReport) -> String {
    report
        .entities
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replaces newlines with spaces so snippets stay on one table/CSV row.
fn flatten_newlines(text: &str) -> String {
    text.replace('\n', " ")
}
