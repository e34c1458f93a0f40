//! Row ordering by a selected column

use std::cmp::Ordering;

use crate::columns::{ColumnKind, Row};

/// Sort rows ascending by `key`, comparing per the column's kind.
///
/// The sort is stable: rows with equal key values keep their fetched order.
/// Numeric kinds compare the parsed values, so `4 < 8 < 56`; cells that do
/// not parse (the `"-"` placeholder) sort after every parsed value and keep
/// their relative order. Strings and timestamps compare as bytes, which is
/// correct for RFC 3339 UTC timestamps.
pub fn sort_rows(rows: &mut [Row], key: &str, kind: ColumnKind) {
    rows.sort_by(|a, b| compare_cells(a.get(key), b.get(key), kind));
}

fn compare_cells(a: &str, b: &str, kind: ColumnKind) -> Ordering {
    match kind {
        ColumnKind::Int | ColumnKind::UInt | ColumnKind::Float => {
            match (a.parse::<f64>(), b.parse::<f64>()) {
                (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => Ordering::Equal,
            }
        }
        ColumnKind::String | ColumnKind::Timestamp => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_with(key: &str, values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Row::from_cells(&[(key, v), ("pos", &i.to_string())]))
            .collect()
    }

    fn cell_values<'a>(rows: &'a [Row], key: &str) -> Vec<&'a str> {
        rows.iter().map(|r| r.get(key)).collect()
    }

    #[test]
    fn test_numeric_sort_is_numeric_not_lexicographic() {
        let mut rows = rows_with("cpu", &["8", "56", "4"]);
        sort_rows(&mut rows, "cpu", ColumnKind::Int);
        assert_eq!(cell_values(&rows, "cpu"), vec!["4", "8", "56"]);
    }

    #[test]
    fn test_string_sort_is_lexicographic() {
        let mut rows = rows_with("hostname", &["dedicatedhost02", "dedicatedhost01"]);
        sort_rows(&mut rows, "hostname", ColumnKind::String);
        assert_eq!(
            cell_values(&rows, "hostname"),
            vec!["dedicatedhost01", "dedicatedhost02"]
        );
    }

    #[test]
    fn test_timestamp_sort_byte_order() {
        let mut rows = rows_with(
            "created",
            &["2023-06-01T00:00:00Z", "2021-01-01T00:00:00Z", "2022-12-31T23:59:59Z"],
        );
        sort_rows(&mut rows, "created", ColumnKind::Timestamp);
        assert_eq!(
            cell_values(&rows, "created"),
            vec![
                "2021-01-01T00:00:00Z",
                "2022-12-31T23:59:59Z",
                "2023-06-01T00:00:00Z"
            ]
        );
    }

    #[test]
    fn test_unparsable_numeric_sorts_last() {
        let mut rows = rows_with("memory", &["-", "242", "-", "64"]);
        sort_rows(&mut rows, "memory", ColumnKind::Int);
        assert_eq!(cell_values(&rows, "memory"), vec!["64", "242", "-", "-"]);
    }

    #[test]
    fn test_unparsable_rows_keep_relative_order() {
        let mut rows = vec![
            Row::from_cells(&[("memory", "-"), ("id", "first")]),
            Row::from_cells(&[("memory", "8"), ("id", "second")]),
            Row::from_cells(&[("memory", "-"), ("id", "third")]),
        ];
        sort_rows(&mut rows, "memory", ColumnKind::Int);
        assert_eq!(cell_values(&rows, "id"), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_sort_stability_on_equal_keys() {
        let mut rows = vec![
            Row::from_cells(&[("cpu", "56"), ("id", "a")]),
            Row::from_cells(&[("cpu", "56"), ("id", "b")]),
            Row::from_cells(&[("cpu", "4"), ("id", "c")]),
            Row::from_cells(&[("cpu", "56"), ("id", "d")]),
        ];
        sort_rows(&mut rows, "cpu", ColumnKind::Int);
        assert_eq!(cell_values(&rows, "id"), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_float_sort() {
        let mut rows = rows_with("price", &["21.39", "3.50", "100.00"]);
        sort_rows(&mut rows, "price", ColumnKind::Float);
        assert_eq!(cell_values(&rows, "price"), vec!["3.50", "21.39", "100.00"]);
    }

    #[test]
    fn test_empty_rows_no_panic() {
        let mut rows: Vec<Row> = Vec::new();
        sort_rows(&mut rows, "id", ColumnKind::Int);
        assert!(rows.is_empty());
    }
}
