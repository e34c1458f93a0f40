//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod csv;
mod json;
mod table;

use crate::cli::OutputFormat;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::{key_value_table, TableFormatter};

/// Ordered, stringified table content handed over by the commands
///
/// `keys` are the machine-readable column names used for structured output;
/// `headers` are the human-readable table headers. Both are in display order
/// and each row's values line up with them.
#[derive(Debug, Clone)]
pub struct TableData {
    pub keys: Vec<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Trait for output formatters
pub trait Formatter {
    /// Format and print the table data
    fn format(&self, data: &TableData);
}

/// Render table data in the requested format
pub fn render(data: &TableData, format: &OutputFormat) {
    match format {
        OutputFormat::Table => TableFormatter.format(data),
        OutputFormat::Csv => CsvFormatter.format(data),
        OutputFormat::Json => JsonFormatter.format(data),
        OutputFormat::Yaml => {
            let value = json::to_json_value(data);
            match serde_yml::to_string(&value) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => eprintln!("Error serializing to YAML: {}", e),
            }
        }
    }
}

/// Print a raw API value as pretty JSON or YAML (single-resource output)
pub fn output_raw(value: &serde_json::Value, format: &OutputFormat) {
    match format {
        OutputFormat::Yaml => match serde_yml::to_string(value) {
            Ok(yaml) => println!("{}", yaml),
            Err(e) => eprintln!("Error serializing to YAML: {}", e),
        },
        _ => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        },
    }
}

#[cfg(test)]
pub(crate) fn sample_data() -> TableData {
    TableData {
        keys: vec!["id".to_string(), "name".to_string()],
        headers: vec!["Id".to_string(), "Name".to_string()],
        rows: vec![
            vec!["111111".to_string(), "dedicatedhost01".to_string()],
            vec!["222222".to_string(), "dedicatedhost02".to_string()],
        ],
    }
}
