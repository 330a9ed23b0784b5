//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod analyze_data;
pub mod generate_infographic;
pub mod list_files;
pub mod parse_csv;
pub mod ping;
pub mod read_file;
pub mod write_file;

pub use analyze_data::{AnalyzeDataParams, AnalyzeDataTool};
pub use generate_infographic::{GenerateInfographicParams, GenerateInfographicTool};
pub use list_files::{ListFilesParams, ListFilesTool};
pub use parse_csv::{ParseCsvParams, ParseCsvTool, ParsedCsv, parse_csv_text};
pub use ping::{PingParams, PingTool};
pub use read_file::{ReadFileParams, ReadFileTool};
pub use write_file::{WriteFileParams, WriteFileTool};
