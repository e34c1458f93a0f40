//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Formatter, TableData};

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, data: &TableData) {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !data.headers.is_empty() {
            table.set_header(data.headers.clone());
        }

        for row in &data.rows {
            table.add_row(row.clone());
        }

        println!("{}", table);
    }
}

/// Build a two-column name/value table as a string, for detail views and
/// nested sub-tables (e.g. guests inside a host detail).
pub fn key_value_table(pairs: &[(String, String)]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Name", "Value"]);
    for (name, value) in pairs {
        table.add_row(vec![name.clone(), value.clone()]);
    }
    table.to_string()
}
