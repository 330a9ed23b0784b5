//! Generate infographic tool definition.
//!
//! Renders per-column value distributions from a CSV file into a
//! self-contained HTML page and writes it inside the project root.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;

use serde_json::{Value, json};
use tracing::{info, instrument};

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, optional_str_or, required_str};
use super::parse_csv::{ParseCsvTool, ParsedCsv};
use crate::core::config::Config;
use crate::core::security::resolve_sandbox_path;

/// Validated parameters for the generate infographic tool.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateInfographicParams {
    pub csv_path: String,
    pub output_path: String,
    pub title: String,
}

/// Top entries kept per column in the rendered cards.
const TOP_ENTRIES: usize = 5;

/// Per-column value distribution used by the renderer.
struct ColumnSummary {
    header: String,
    /// `(value, count)` pairs, most frequent first.
    top_entries: Vec<(String, usize)>,
    unique_values: usize,
}

/// Generate infographic tool - writes an HTML report from CSV data.
pub struct GenerateInfographicTool;

impl GenerateInfographicTool {
    pub const NAME: &'static str = "generate_infographic";
    pub const DESCRIPTION: &'static str = "Generuje infografikę HTML z danych CSV.";

    pub const DEFAULT_OUTPUT_PATH: &'static str = "output/infographic.html";
    pub const DEFAULT_TITLE: &'static str = "Infografika";

    pub fn validate(input: &Value) -> Result<GenerateInfographicParams, Vec<FieldError>> {
        ensure_object(input)?;
        let mut errors = Vec::new();

        let csv_path = required_str(input, "csvPath")
            .map_err(|e| errors.push(e))
            .ok();
        let output_path = optional_str_or(input, "outputPath", Self::DEFAULT_OUTPUT_PATH)
            .map_err(|e| errors.push(e))
            .ok();
        let title = optional_str_or(input, "title", Self::DEFAULT_TITLE)
            .map_err(|e| errors.push(e))
            .ok();

        match (csv_path, output_path, title) {
            (Some(csv_path), Some(output_path), Some(title)) if errors.is_empty() => {
                Ok(GenerateInfographicParams {
                    csv_path,
                    output_path,
                    title,
                })
            }
            _ => Err(errors),
        }
    }

    #[instrument(skip_all, fields(csv = %params.csv_path, output = %params.output_path))]
    pub fn execute(params: &GenerateInfographicParams, config: &Config) -> Result<Value, ToolError> {
        // Both ends of the operation must stay inside the sandbox.
        let output_safe_path =
            resolve_sandbox_path(&params.output_path, &config.security.root_path)?;
        let parsed = ParseCsvTool::load(&params.csv_path, config)?;

        let summaries = summarize_columns(&parsed);
        let html = render_infographic(&params.title, parsed.rows.len(), &summaries);

        if let Some(parent) = output_safe_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ToolError::Write {
                path: params.output_path.clone(),
                source,
            })?;
        }
        fs::write(&output_safe_path, &html).map_err(|source| ToolError::Write {
            path: params.output_path.clone(),
            source,
        })?;

        info!(rows = parsed.rows.len(), "Infographic written");

        Ok(json!({
            "success": true,
            "outputPath": params.output_path,
            "totalResponses": parsed.rows.len(),
        }))
    }

    fn run(input: &Value, config: &Config) -> Result<Value, ToolCallError> {
        let params = Self::validate(input)?;
        Ok(Self::execute(&params, config)?)
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            manifest: ManifestEntry {
                name: Self::NAME,
                description: Self::DESCRIPTION,
                input_schema: json!({
                    "type": "object",
                    "required": ["csvPath"],
                    "properties": {
                        "csvPath": {
                            "type": "string",
                            "description": "Ścieżka do pliku CSV z danymi"
                        },
                        "outputPath": {
                            "type": "string",
                            "description": "Miejsce zapisu wygenerowanej infografiki (HTML)",
                            "default": Self::DEFAULT_OUTPUT_PATH
                        },
                        "title": {
                            "type": "string",
                            "description": "Tytuł infografiki",
                            "default": Self::DEFAULT_TITLE
                        }
                    }
                }),
            },
            run: Self::run,
        }
    }
}

/// Count value occurrences per column; empty cells are bucketed as
/// "Brak danych".
fn summarize_columns(parsed: &ParsedCsv) -> Vec<ColumnSummary> {
    parsed
        .headers
        .iter()
        .map(|header| {
            let mut counts: HashMap<String, usize> = HashMap::new();
            for row in &parsed.rows {
                let raw = ParsedCsv::cell(row, header).unwrap_or("");
                let normalized = if raw.trim().is_empty() { "Brak danych" } else { raw };
                *counts.entry(normalized.to_string()).or_insert(0) += 1;
            }
            let unique_values = counts.len();

            let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
            // Most frequent first; ties broken by value for determinism.
            entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            entries.truncate(TOP_ENTRIES);

            ColumnSummary {
                header: header.clone(),
                top_entries: entries,
                unique_values,
            }
        })
        .collect()
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn render_infographic(title: &str, total_rows: usize, summaries: &[ColumnSummary]) -> String {
    let title = escape_html(title);
    let mut cards = String::new();

    for summary in summaries {
        let header = escape_html(&summary.header);
        if summary.top_entries.is_empty() {
            let _ = write!(
                cards,
                "<div class=\"card\"><h2>{header}</h2><p class=\"no-data\">Brak danych</p></div>"
            );
            continue;
        }

        let max_count = summary.top_entries[0].1.max(1);
        let mut bars = String::new();
        for (value, count) in &summary.top_entries {
            // Rounded to the nearest percent.
            let percentage = ((count * 100 + max_count / 2) / max_count).min(100);
            let _ = write!(
                bars,
                "<div class=\"bar\"><span>{count}</span>\
                 <div style=\"--width: {percentage}%\"></div>\
                 <p style=\"margin-left:10px;\">{}</p></div>",
                escape_html(value)
            );
        }
        let _ = write!(
            cards,
            "<div class=\"card\"><h2>{header}</h2>{bars}\
             <p class=\"no-data\">Łącznie odpowiedzi: {total_rows}, \
             unikalnych wartości: {}</p></div>",
            summary.unique_values
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pl">
  <head>
    <meta charset="utf-8" />
    <title>{title}</title>
    <style>
      body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #f4f6f8; color: #2c3e50; margin: 0; padding: 40px; }}
      h1 {{ text-align: center; margin-bottom: 10px; }}
      .summary {{ text-align: center; margin-bottom: 30px; font-size: 1.1rem; }}
      .grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; }}
      .card {{ background: white; border-radius: 12px; padding: 20px; box-shadow: 0 8px 20px rgba(0,0,0,0.08); }}
      .card h2 {{ font-size: 1.1rem; margin-top: 0; }}
      .bar {{ display: flex; align-items: center; margin: 8px 0; }}
      .bar span {{ flex: 0 0 50px; font-weight: bold; }}
      .bar div {{ flex: 1; height: 10px; background: #ecf0f1; border-radius: 5px; overflow: hidden; margin-left: 10px; position: relative; }}
      .bar div::after {{ content: ""; position: absolute; left: 0; top: 0; bottom: 0; background: linear-gradient(90deg, #3498db, #8e44ad); width: var(--width, 0%); }}
      .no-data {{ font-style: italic; color: #7f8c8d; }}
    </style>
  </head>
  <body>
    <h1>{title}</h1>
    <div class="summary">Łączna liczba odpowiedzi: {total_rows}</div>
    <div class="grid">{cards}</div>
  </body>
</html>"#
    )
}
