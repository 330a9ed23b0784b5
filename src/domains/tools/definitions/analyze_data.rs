//! Analyze data tool definition.
//!
//! Summary statistics over one CSV column, or a general preview of the file
//! when no column is named.

use serde_json::{Value, json};
use tracing::instrument;

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, optional_str, required_str};
use super::parse_csv::{ParseCsvTool, ParsedCsv};
use crate::core::config::Config;

/// Validated parameters for the analyze data tool.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeDataParams {
    pub path: String,
    pub column: Option<String>,
}

/// Number of rows included in the column-less preview.
const PREVIEW_ROWS: usize = 5;

/// Analyze data tool - column statistics or a CSV preview.
pub struct AnalyzeDataTool;

impl AnalyzeDataTool {
    pub const NAME: &'static str = "analyze_data";
    pub const DESCRIPTION: &'static str = "Analizuje dane CSV i zwraca statystyki.";

    pub fn validate(input: &Value) -> Result<AnalyzeDataParams, Vec<FieldError>> {
        ensure_object(input)?;
        let mut errors = Vec::new();

        let path = required_str(input, "path").map_err(|e| errors.push(e)).ok();
        let column = match optional_str(input, "column") {
            Ok(column) => column,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match path {
            Some(path) if errors.is_empty() => Ok(AnalyzeDataParams { path, column }),
            _ => Err(errors),
        }
    }

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &AnalyzeDataParams, config: &Config) -> Result<Value, ToolError> {
        let parsed = ParseCsvTool::load(&params.path, config)?;

        match &params.column {
            Some(column) => Self::column_stats(&parsed, column),
            None => Ok(Self::preview(&parsed)),
        }
    }

    fn column_stats(parsed: &ParsedCsv, column: &str) -> Result<Value, ToolError> {
        if !parsed.headers.iter().any(|h| h == column) {
            return Err(ToolError::MissingColumn {
                column: column.to_string(),
            });
        }

        let mut values: Vec<f64> = parsed
            .rows
            .iter()
            .filter_map(|row| ParsedCsv::cell(row, column))
            .filter_map(|cell| cell.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect();

        if values.is_empty() {
            return Ok(json!({
                "column": column,
                "count": parsed.rows.len(),
                "numericCount": 0,
                "min": Value::Null,
                "max": Value::Null,
                "sum": 0,
                "average": Value::Null,
                "median": Value::Null,
            }));
        }

        values.sort_by(f64::total_cmp);
        let min = values[0];
        let max = values[values.len() - 1];
        let sum: f64 = values.iter().sum();
        let average = sum / values.len() as f64;
        let mid = values.len() / 2;
        let median = if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        Ok(json!({
            "column": column,
            "count": parsed.rows.len(),
            "numericCount": values.len(),
            "min": min,
            "max": max,
            "sum": sum,
            "average": average,
            "median": median,
        }))
    }

    fn preview(parsed: &ParsedCsv) -> Value {
        let preview: Vec<Value> = parsed
            .rows
            .iter()
            .take(PREVIEW_ROWS)
            .map(|r| ParsedCsv::row_to_json(r))
            .collect();

        json!({
            "headers": parsed.headers,
            "count": parsed.rows.len(),
            "preview": preview,
        })
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
                        "path": { "type": "string", "description": "Ścieżka do pliku CSV" },
                        "column": { "type": "string", "description": "Kolumna do analizy" }
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
    use std::fs;
    use tempfile::TempDir;

    fn test_config(root: &TempDir) -> Config {
        let mut config = Config::default();
        config.security.root_path = root.path().to_path_buf();
        config
    }

    fn write_ages_csv(root: &TempDir) {
        fs::write(
            root.path().join("ages.csv"),
            "Name,Age\nA,25\nB,30\nC,35\nD,25\nE,35",
        )
        .unwrap();
    }

    #[test]
    fn test_analyze_numeric_column_stats() {
        let root = TempDir::new().unwrap();
        write_ages_csv(&root);

        let params = AnalyzeDataParams {
            path: "ages.csv".into(),
            column: Some("Age".into()),
        };
        let output = AnalyzeDataTool::execute(&params, &test_config(&root)).unwrap();

        assert_eq!(output["count"], 5);
        assert_eq!(output["numericCount"], 5);
        assert_eq!(output["min"], 25.0);
        assert_eq!(output["max"], 35.0);
        assert_eq!(output["sum"], 150.0);
        assert_eq!(output["average"], 30.0);
        assert_eq!(output["median"], 30.0);
    }

    #[test]
    fn test_analyze_even_count_median_averages_middle_pair() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("even.csv"), "X\n1\n2\n3\n4").unwrap();

        let params = AnalyzeDataParams {
            path: "even.csv".into(),
            column: Some("X".into()),
        };
        let output = AnalyzeDataTool::execute(&params, &test_config(&root)).unwrap();
        assert_eq!(output["median"], 2.5);
    }

    #[test]
    fn test_analyze_non_numeric_column_yields_nulls() {
        let root = TempDir::new().unwrap();
        write_ages_csv(&root);

        let params = AnalyzeDataParams {
            path: "ages.csv".into(),
            column: Some("Name".into()),
        };
        let output = AnalyzeDataTool::execute(&params, &test_config(&root)).unwrap();

        assert_eq!(output["count"], 5);
        assert_eq!(output["numericCount"], 0);
        assert_eq!(output["min"], Value::Null);
        assert_eq!(output["average"], Value::Null);
        assert_eq!(output["sum"], 0);
    }

    #[test]
    fn test_analyze_missing_column_is_domain_error() {
        let root = TempDir::new().unwrap();
        write_ages_csv(&root);

        let params = AnalyzeDataParams {
            path: "ages.csv".into(),
            column: Some("Salary".into()),
        };
        let err = AnalyzeDataTool::execute(&params, &test_config(&root)).unwrap_err();
        assert!(matches!(err, ToolError::MissingColumn { column } if column == "Salary"));
    }

    #[test]
    fn test_analyze_without_column_returns_preview() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join("many.csv"),
            "N\n1\n2\n3\n4\n5\n6\n7",
        )
        .unwrap();

        let params = AnalyzeDataParams {
            path: "many.csv".into(),
            column: None,
        };
        let output = AnalyzeDataTool::execute(&params, &test_config(&root)).unwrap();

        assert_eq!(output["headers"], json!(["N"]));
        assert_eq!(output["count"], 7);
        assert_eq!(output["preview"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_analyze_validate_path_required() {
        let errors = AnalyzeDataTool::validate(&json!({ "column": "Age" })).unwrap_err();
        assert_eq!(errors[0].message, "path is required");
    }

    #[test]
    fn test_analyze_validate_column_optional() {
        let params = AnalyzeDataTool::validate(&json!({ "path": "x.csv" })).unwrap();
        assert_eq!(params.column, None);
    }
}
