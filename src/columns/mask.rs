//! Field-mask compilation from a validated selection

use log::debug;

use crate::columns::{ColumnRegistry, Selection};

/// Compile the minimal remote field mask for a selection.
///
/// The result is the union of remote field paths for every display column
/// plus the sort key (which must be fetchable even when not displayed), each
/// path at most once, in first-occurrence order, comma-joined. Paths are
/// opaque here: the provider's mask syntax is a flat dotted-path list.
///
/// Panics if the selection references a name absent from the registry; that
/// is a registry/column-set mismatch, not a runtime condition.
pub fn compile_mask(selection: &Selection, registry: &ColumnRegistry) -> String {
    let mut paths: Vec<&str> = Vec::new();

    let names = selection
        .display_columns
        .iter()
        .map(|s| s.as_str())
        .chain(std::iter::once(selection.sort_key.as_str()));

    for name in names {
        for path in registry.expect(name).remote_fields() {
            if !paths.contains(path) {
                paths.push(path);
            }
        }
    }

    let mask = paths.join(",");
    debug!("compiled field mask: {}", mask);
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::testutil::registry;

    fn selection(display: &[&str], sort: &str) -> Selection {
        Selection {
            display_columns: display.iter().map(|s| s.to_string()).collect(),
            sort_key: sort.to_string(),
        }
    }

    #[test]
    fn test_mask_is_union_of_display_and_sort() {
        let mask = compile_mask(&selection(&["id", "hostname"], "cpu"), &registry());
        assert_eq!(mask, "id,hostname,maxCpu");
    }

    #[test]
    fn test_mask_dedupes_sort_key_already_displayed() {
        let mask = compile_mask(&selection(&["id", "cpu"], "cpu"), &registry());
        assert_eq!(mask, "id,maxCpu");
    }

    #[test]
    fn test_mask_dedupes_repeated_columns() {
        let mask = compile_mask(&selection(&["id", "id"], "id"), &registry());
        assert_eq!(mask, "id");
    }

    #[test]
    fn test_mask_includes_all_composite_paths() {
        let mask = compile_mask(&selection(&["memory"], "id"), &registry());
        assert_eq!(
            mask,
            "allocationStatus.memoryAllocated,allocationStatus.memoryCapacity,id"
        );
    }

    #[test]
    fn test_mask_contains_nothing_extra() {
        // exactly the fields for displayed columns plus the sort key
        let mask = compile_mask(&selection(&["guid"], "hostname"), &registry());
        assert_eq!(mask, "globalIdentifier,hostname");
    }

    #[test]
    #[should_panic(expected = "missing from registry")]
    fn test_mask_panics_on_registry_mismatch() {
        compile_mask(&selection(&["not_registered"], "id"), &registry());
    }
}
