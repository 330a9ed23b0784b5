//! Parse CSV tool definition.
//!
//! Minimal comma-delimited parsing: no quoting or escaping, whitespace
//! trimmed on every cell, blank lines skipped. The parsed form is shared
//! with the analysis and infographic tools.

use std::fs;

use serde_json::{Map, Value, json};
use tracing::instrument;

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, required_str};
use crate::core::config::Config;
use crate::core::security::resolve_sandbox_path;

/// Validated parameters for the parse CSV tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseCsvParams {
    pub path: String,
}

/// Parsed CSV content: header names plus one string-keyed record per row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<(String, String)>>,
}

impl ParsedCsv {
    /// Value of a named cell in a row, if the column exists.
    pub fn cell<'a>(row: &'a [(String, String)], column: &str) -> Option<&'a str> {
        row.iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// A row as a JSON object, columns in header order.
    pub fn row_to_json(row: &[(String, String)]) -> Value {
        let map: Map<String, Value> = row
            .iter()
            .map(|(header, value)| (header.clone(), Value::String(value.clone())))
            .collect();
        Value::Object(map)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "headers": self.headers,
            "rows": self.rows.iter().map(|r| Self::row_to_json(r)).collect::<Vec<_>>(),
        })
    }
}

/// Parse CSV text. Leading/trailing whitespace on the whole document and on
/// every cell is trimmed; rows shorter than the header are padded with empty
/// strings, extra cells are dropped.
pub fn parse_csv_text(content: &str) -> ParsedCsv {
    let content = content.trim();
    if content.is_empty() {
        return ParsedCsv::default();
    }

    let mut lines = content.lines();
    let headers: Vec<String> = match lines.next() {
        Some(header_line) => header_line.split(',').map(|h| h.trim().to_string()).collect(),
        None => return ParsedCsv::default(),
    };

    let rows = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    (header.clone(), values.get(i).copied().unwrap_or("").to_string())
                })
                .collect()
        })
        .collect();

    ParsedCsv { headers, rows }
}

/// Parse CSV tool - reads and parses a CSV file from the project root.
pub struct ParseCsvTool;

impl ParseCsvTool {
    pub const NAME: &'static str = "parse_csv";
    pub const DESCRIPTION: &'static str = "Parsuje CSV i zwraca dane jako JSON.";

    pub fn validate(input: &Value) -> Result<ParseCsvParams, Vec<FieldError>> {
        ensure_object(input)?;
        let path = required_str(input, "path").map_err(|e| vec![e])?;
        Ok(ParseCsvParams { path })
    }

    /// Resolve, read and parse a CSV file. Shared with `analyze_data` and
    /// `generate_infographic`.
    pub fn load(path: &str, config: &Config) -> Result<ParsedCsv, ToolError> {
        let safe_path = resolve_sandbox_path(path, &config.security.root_path)?;
        let content = fs::read_to_string(&safe_path).map_err(|source| ToolError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(parse_csv_text(&content))
    }

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &ParseCsvParams, config: &Config) -> Result<Value, ToolError> {
        let parsed = Self::load(&params.path, config)?;
        Ok(parsed.to_json())
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
                    "required": ["path"],
                    "properties": {
                        "path": { "type": "string", "description": "Ścieżka do pliku CSV" }
                    }
                }),
            },
            run: Self::run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(root: &TempDir) -> Config {
        let mut config = Config::default();
        config.security.root_path = root.path().to_path_buf();
        config
    }

    #[test]
    fn test_parse_csv_round_trip() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("data.csv"), "A,B\n1,2\n3,4").unwrap();

        let params = ParseCsvParams { path: "data.csv".into() };
        let output = ParseCsvTool::execute(&params, &test_config(&root)).unwrap();

        assert_eq!(output["headers"], json!(["A", "B"]));
        assert_eq!(
            output["rows"],
            json!([{ "A": "1", "B": "2" }, { "A": "3", "B": "4" }])
        );
    }

    #[test]
    fn test_parse_csv_trims_and_skips_blank_lines() {
        let parsed = parse_csv_text(" Name , Age \nAlice, 30\n\n  \nBob ,25\n");
        assert_eq!(parsed.headers, vec!["Name", "Age"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(ParsedCsv::cell(&parsed.rows[0], "Name"), Some("Alice"));
        assert_eq!(ParsedCsv::cell(&parsed.rows[0], "Age"), Some("30"));
        assert_eq!(ParsedCsv::cell(&parsed.rows[1], "Name"), Some("Bob"));
    }

    #[test]
    fn test_parse_csv_crlf_line_endings() {
        let parsed = parse_csv_text("A,B\r\n1,2\r\n3,4\r\n");
        assert_eq!(parsed.headers, vec!["A", "B"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(ParsedCsv::cell(&parsed.rows[1], "B"), Some("4"));
    }

    #[test]
    fn test_parse_csv_empty_file() {
        let parsed = parse_csv_text("   \n  ");
        assert!(parsed.headers.is_empty());
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_parse_csv_short_row_padded() {
        let parsed = parse_csv_text("A,B,C\n1,2");
        assert_eq!(ParsedCsv::cell(&parsed.rows[0], "C"), Some(""));
    }

    #[test]
    fn test_parse_csv_extra_cells_dropped() {
        let parsed = parse_csv_text("A,B\n1,2,3,4");
        assert_eq!(parsed.rows[0].len(), 2);
    }

    #[test]
    fn test_parse_csv_missing_file() {
        let root = TempDir::new().unwrap();
        let params = ParseCsvParams { path: "absent.csv".into() };
        let err = ParseCsvTool::execute(&params, &test_config(&root)).unwrap_err();
        assert!(matches!(err, ToolError::Read { .. }));
    }

    #[test]
    fn test_parse_csv_escape_rejected() {
        let root = TempDir::new().unwrap();
        let params = ParseCsvParams { path: "../outside.csv".into() };
        let err = ParseCsvTool::execute(&params, &test_config(&root)).unwrap_err();
        assert!(err.is_forbidden());
    }
}
