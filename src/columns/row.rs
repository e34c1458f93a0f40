//! Materialization of remote records into display rows

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::columns::{ColumnKind, ColumnRegistry, ColumnSource, Selection};

/// Placeholder for absent or null fields
pub const EMPTY_VALUE: &str = "-";

/// One record's formatted cell values, keyed by column name
#[derive(Debug, Clone)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Cell value for a column, `"-"` when the column was never materialized
    pub fn get(&self, name: &str) -> &str {
        self.cells.get(name).map(String::as_str).unwrap_or(EMPTY_VALUE)
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[(&str, &str)]) -> Row {
        Row {
            cells: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Turn one fetched record into a row of formatted strings.
///
/// Every display column plus the sort key is materialized, so the sort
/// engine can order by a key that is not displayed. Absence is data, not an
/// error: records routinely omit optional sub-objects (a host with no
/// billing item, no guests), and those cells render as `"-"`.
pub fn materialize(record: &Value, selection: &Selection, registry: &ColumnRegistry) -> Row {
    let mut cells = HashMap::new();

    let names = selection
        .display_columns
        .iter()
        .map(|s| s.as_str())
        .chain(std::iter::once(selection.sort_key.as_str()));

    for name in names {
        let spec = registry.expect(name);
        let value = match &spec.source {
            ColumnSource::Field(path) => format_path(record, path, spec.kind),
            ColumnSource::Composite(paths, sep) => paths
                .iter()
                .map(|path| format_path(record, path, spec.kind))
                .collect::<Vec<_>>()
                .join(sep),
        };
        cells.insert(name.to_string(), value);
    }

    Row { cells }
}

/// Extract and format the value at a dotted path.
///
/// Descends objects key by key. When the path runs into an array, the
/// remaining path is applied to every element and the results are joined
/// with `","` (e.g. `tagReferences.tag.name` over a tag list).
fn format_path(record: &Value, path: &str, kind: ColumnKind) -> String {
    let mut leaves = Vec::new();
    collect_leaves(record, path, &mut leaves);

    let formatted: Vec<String> = leaves
        .into_iter()
        .filter(|v| !v.is_null())
        .map(|v| format_leaf(v, kind))
        .collect();

    if formatted.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        formatted.join(",")
    }
}

fn collect_leaves<'a>(value: &'a Value, path: &str, out: &mut Vec<&'a Value>) {
    if path.is_empty() {
        // a path ending at an array yields one leaf per element
        match value {
            Value::Array(items) => {
                for item in items {
                    collect_leaves(item, path, out);
                }
            }
            _ => out.push(value),
        }
        return;
    }
    match value {
        Value::Object(map) => {
            let (head, rest) = match path.split_once('.') {
                Some((head, rest)) => (head, rest),
                None => (path, ""),
            };
            if let Some(next) = map.get(head) {
                collect_leaves(next, rest, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_leaves(item, path, out);
            }
        }
        _ => {}
    }
}

fn format_leaf(value: &Value, kind: ColumnKind) -> String {
    match kind {
        ColumnKind::Int | ColumnKind::UInt => match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        ColumnKind::Float => float_of(value)
            .map(|f| format!("{:.2}", f))
            .unwrap_or_else(|| value.to_string()),
        ColumnKind::Timestamp => match value.as_str() {
            Some(s) => format_timestamp(s),
            None => value.to_string(),
        },
        ColumnKind::String => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

fn float_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        // currency amounts arrive as decimal strings
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Normalize provider timestamps (RFC 3339 with an offset) to RFC 3339 UTC,
/// which sorts correctly as plain bytes. Unparsable input passes through.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => raw.to_string(),
    }
}
