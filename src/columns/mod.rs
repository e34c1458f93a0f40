//! Display column engine shared by the list-style commands
//!
//! Each list command declares its columns once, as a [`ColumnRegistry`] plus a
//! [`ColumnSet`]. From there the engine validates `--column`/`--sortby`
//! selections, compiles the minimal remote field mask, turns fetched records
//! into string rows, and sorts them by any selected key. Adding a column to a
//! command means adding one registry entry, nothing else.

mod mask;
mod row;
mod select;
mod sort;

pub use mask::compile_mask;
pub use row::{materialize, Row};
pub use select::Selection;
pub use sort::sort_rows;

/// How a column's underlying value is compared and formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Int,
    UInt,
    Float,
    Timestamp,
}

/// Where a column's value comes from in the remote record
#[derive(Debug, Clone, Copy)]
pub enum ColumnSource {
    /// A single dotted path into the record
    Field(&'static str),
    /// Several paths rendered into one cell, joined by a literal separator
    /// (e.g. cpu "allocated/total")
    Composite(&'static [&'static str], &'static str),
}

/// One displayable column: canonical name, table header, remote source, kind
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub header: &'static str,
    pub source: ColumnSource,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    /// Remote field paths this column needs fetched
    pub fn remote_fields(&self) -> &[&'static str] {
        match &self.source {
            ColumnSource::Field(path) => std::slice::from_ref(path),
            ColumnSource::Composite(paths, _) => paths,
        }
    }
}

/// Static name-to-spec mapping for one command
#[derive(Debug)]
pub struct ColumnRegistry {
    specs: &'static [ColumnSpec],
}

impl ColumnRegistry {
    /// Wrap a static spec table. Panics on duplicate names: the registries
    /// are constructed from literals, so a duplicate is a programming error.
    pub fn new(specs: &'static [ColumnSpec]) -> Self {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|s| s.name == spec.name) {
                panic!("duplicate column name '{}' in registry", spec.name);
            }
        }
        Self { specs }
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Lookup that must succeed: a validated selection referencing a column
    /// absent from the registry means the registry and the column set are out
    /// of sync, which is a bug, not user input.
    pub fn expect(&self, name: &str) -> &ColumnSpec {
        self.get(name)
            .unwrap_or_else(|| panic!("column '{}' missing from registry", name))
    }
}

/// Per-command column configuration
#[derive(Debug, Clone, Copy)]
pub struct ColumnSet {
    /// Columns shown when the user passes no `--column` flags, in order
    pub default_columns: &'static [&'static str],
    /// Columns the user may add explicitly
    pub optional_columns: &'static [&'static str],
    /// Columns accepted by `--sortby`
    pub sortable_columns: &'static [&'static str],
    /// Sort key used when `--sortby` is absent
    pub default_sort: &'static str,
}

impl ColumnSet {
    /// Whether `name` may be displayed (default or optional)
    pub fn allows(&self, name: &str) -> bool {
        self.default_columns.contains(&name) || self.optional_columns.contains(&name)
    }

    /// Whether `name` may be sorted by
    pub fn sortable(&self, name: &str) -> bool {
        self.sortable_columns.contains(&name)
    }

    /// All displayable names, for error messages
    pub fn displayable_names(&self) -> String {
        self.default_columns
            .iter()
            .chain(self.optional_columns.iter())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// All sortable names, for error messages
    pub fn sortable_names(&self) -> String {
        self.sortable_columns.join(", ")
    }
}
