//! Classic infrastructure API layer
//!
//! [`SlClient`] speaks the REST transport, [`CredentialsResolver`] finds the
//! account credentials, and the resource modules (`hosts`, `guests`,
//! `ordering`) hold the models, API calls, and command handlers.

mod client;
mod credentials;
mod filters;

pub mod guests;
pub mod hosts;
pub mod ordering;

pub use client::SlClient;
pub use credentials::{Credentials, CredentialsResolver};
pub use filters::ObjectFilter;

use serde_json::Value;

use crate::columns::{materialize, sort_rows, ColumnRegistry, Selection};
use crate::output::TableData;

/// Turn fetched records into sorted, display-ready table data.
///
/// Shared tail of every list command: materialize each record against the
/// selection, sort by the selected key, then line cells up under the selected
/// columns in display order.
pub(crate) fn tabulate(
    records: &[Value],
    selection: &Selection,
    registry: &ColumnRegistry,
) -> TableData {
    let mut rows: Vec<_> = records
        .iter()
        .map(|record| materialize(record, selection, registry))
        .collect();

    let sort_kind = registry.expect(&selection.sort_key).kind;
    sort_rows(&mut rows, &selection.sort_key, sort_kind);

    let keys: Vec<String> = selection.display_columns.clone();
    let headers: Vec<String> = selection
        .display_columns
        .iter()
        .map(|name| registry.expect(name).header.to_string())
        .collect();
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            selection
                .display_columns
                .iter()
                .map(|name| row.get(name).to_string())
                .collect()
        })
        .collect();

    TableData {
        keys,
        headers,
        rows: table_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::testutil;
    use serde_json::json;

    #[test]
    fn test_tabulate_sorts_and_projects() {
        let registry = testutil::registry();
        let selection =
            Selection::validate("cpu", &["hostname".to_string(), "cpu".to_string()], &testutil::column_set())
                .unwrap();
        let records = vec![
            json!({"hostname": "b", "maxCpu": 56}),
            json!({"hostname": "a", "maxCpu": 8}),
        ];

        let data = tabulate(&records, &selection, &registry);
        assert_eq!(data.headers, vec!["Hostname", "Cpu"]);
        assert_eq!(data.rows[0], vec!["a", "8"]);
        assert_eq!(data.rows[1], vec!["b", "56"]);
    }

    #[test]
    fn test_tabulate_empty_records() {
        let registry = testutil::registry();
        let selection = Selection::validate("", &[], &testutil::column_set()).unwrap();
        let data = tabulate(&[], &selection, &registry);
        assert!(data.rows.is_empty());
        assert_eq!(data.keys, vec!["id", "hostname", "cpu"]);
    }
}
