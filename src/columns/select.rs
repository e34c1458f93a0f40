//! Validation of user-supplied `--column` and `--sortby` flags

use crate::columns::ColumnSet;
use crate::error::{Result, SlError};

/// Validated per-invocation column selection
///
/// `display_columns` keeps the user's order when columns were passed
/// explicitly, so users can reorder the table by listing columns in the order
/// they want. Duplicate names are preserved as given, matching the behavior
/// of repeating the `--column` flag.
#[derive(Debug, Clone)]
pub struct Selection {
    pub display_columns: Vec<String>,
    pub sort_key: String,
}

impl Selection {
    /// Validate a requested sort key and display-column list against the
    /// command's column set.
    ///
    /// An empty `requested` list selects the declared defaults in declared
    /// order; a blank `sortby` falls back to the command's default sort key.
    /// The first unknown column or non-sortable key fails the whole call.
    pub fn validate(sortby: &str, requested: &[String], set: &ColumnSet) -> Result<Selection> {
        let sort_key = if sortby.is_empty() {
            set.default_sort.to_string()
        } else if set.sortable(sortby) {
            sortby.to_string()
        } else {
            return Err(SlError::UnsupportedSortKey {
                key: sortby.to_string(),
                allowed: set.sortable_names(),
            });
        };

        let display_columns = if requested.is_empty() {
            set.default_columns.iter().map(|c| c.to_string()).collect()
        } else {
            for name in requested {
                if !set.allows(name) {
                    return Err(SlError::UnsupportedColumn {
                        name: name.clone(),
                        allowed: set.displayable_names(),
                    });
                }
            }
            requested.to_vec()
        };

        Ok(Selection {
            display_columns,
            sort_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::testutil::column_set;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_default_selection() {
        let sel = Selection::validate("", &[], &column_set()).unwrap();
        assert_eq!(sel.display_columns, vec!["id", "hostname", "cpu"]);
        assert_eq!(sel.sort_key, "id");
    }

    #[test]
    fn test_explicit_columns_keep_user_order() {
        let sel = Selection::validate("", &cols(&["guid", "created_by"]), &column_set()).unwrap();
        assert_eq!(sel.display_columns, vec!["guid", "created_by"]);
    }

    #[test]
    fn test_user_order_overrides_default_order() {
        let sel = Selection::validate("", &cols(&["cpu", "id"]), &column_set()).unwrap();
        assert_eq!(sel.display_columns, vec!["cpu", "id"]);
    }

    #[test]
    fn test_duplicate_columns_preserved() {
        let sel = Selection::validate("", &cols(&["id", "id"]), &column_set()).unwrap();
        assert_eq!(sel.display_columns, vec!["id", "id"]);
    }

    #[test]
    fn test_unknown_column_rejected() {
        let err = Selection::validate("", &cols(&["id", "nonexistent_field"]), &column_set())
            .unwrap_err();
        match err {
            SlError::UnsupportedColumn { name, allowed } => {
                assert_eq!(name, "nonexistent_field");
                assert!(allowed.contains("hostname"));
            }
            other => panic!("expected UnsupportedColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_first_offending_column_reported() {
        let err =
            Selection::validate("", &cols(&["bogus_a", "bogus_b"]), &column_set()).unwrap_err();
        match err {
            SlError::UnsupportedColumn { name, .. } => assert_eq!(name, "bogus_a"),
            other => panic!("expected UnsupportedColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_sort_key_accepted() {
        let sel = Selection::validate("hostname", &[], &column_set()).unwrap();
        assert_eq!(sel.sort_key, "hostname");
    }

    #[test]
    fn test_non_sortable_key_rejected() {
        let err = Selection::validate("guid", &[], &column_set()).unwrap_err();
        match err {
            SlError::UnsupportedSortKey { key, allowed } => {
                assert_eq!(key, "guid");
                assert!(allowed.contains("hostname"));
            }
            other => panic!("expected UnsupportedSortKey, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_key_need_not_be_displayed() {
        // sorting by a default column while displaying only optionals is fine
        let sel = Selection::validate("cpu", &cols(&["guid"]), &column_set()).unwrap();
        assert_eq!(sel.sort_key, "cpu");
        assert_eq!(sel.display_columns, vec!["guid"]);
    }
}
