//! Dedicated host resource: columns, API calls, command handlers

pub mod api;
pub mod commands;
pub mod models;

use crate::columns::{ColumnKind, ColumnRegistry, ColumnSet, ColumnSource, ColumnSpec};

/// Columns available on the host list
pub const SPECS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "id",
        header: "Id",
        source: ColumnSource::Field("id"),
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        name: "name",
        header: "Name",
        source: ColumnSource::Field("name"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "datacenter",
        header: "Datacenter",
        source: ColumnSource::Field("datacenter.name"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "router",
        header: "Router",
        source: ColumnSource::Field("backendRouter.hostname"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "cpu",
        header: "Cpu (allocated/total)",
        source: ColumnSource::Composite(
            &["allocationStatus.cpuAllocated", "allocationStatus.cpuCount"],
            "/",
        ),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "memory",
        header: "Memory (allocated/total)",
        source: ColumnSource::Composite(
            &[
                "allocationStatus.memoryAllocated",
                "allocationStatus.memoryCapacity",
            ],
            "/",
        ),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "disk",
        header: "Disk (allocated/total)",
        source: ColumnSource::Composite(
            &[
                "allocationStatus.diskAllocated",
                "allocationStatus.diskCapacity",
            ],
            "/",
        ),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "guests",
        header: "Guests",
        source: ColumnSource::Field("guestCount"),
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        name: "created",
        header: "Created",
        source: ColumnSource::Field("createDate"),
        kind: ColumnKind::Timestamp,
    },
    ColumnSpec {
        name: "modified",
        header: "Modified",
        source: ColumnSource::Field("modifyDate"),
        kind: ColumnKind::Timestamp,
    },
    ColumnSpec {
        name: "owner",
        header: "Owner",
        source: ColumnSource::Field("billingItem.orderItem.order.userRecord.username"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "notes",
        header: "Notes",
        source: ColumnSource::Field("notes"),
        kind: ColumnKind::String,
    },
];

pub fn registry() -> ColumnRegistry {
    ColumnRegistry::new(SPECS)
}

pub fn column_set() -> ColumnSet {
    ColumnSet {
        default_columns: &[
            "id", "name", "datacenter", "router", "cpu", "memory", "disk", "guests",
        ],
        optional_columns: &["created", "modified", "owner", "notes"],
        sortable_columns: &["id", "name", "datacenter", "router", "guests", "created"],
        default_sort: "id",
    }
}
