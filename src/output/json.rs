//! JSON output formatter

use serde_json::{Map, Value};

use super::{Formatter, TableData};

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, data: &TableData) {
        let value = to_json_value(data);
        match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
    }
}

/// Convert table data to a JSON array of objects keyed by column name.
///
/// Duplicate columns collapse to one key; cell values stay strings, exactly
/// as rendered in the table.
pub(crate) fn to_json_value(data: &TableData) -> Value {
    let items: Vec<Value> = data
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (key, value) in data.keys.iter().zip(row.iter()) {
                obj.insert(key.clone(), Value::String(value.clone()));
            }
            Value::Object(obj)
        })
        .collect();
    Value::Array(items)
}
