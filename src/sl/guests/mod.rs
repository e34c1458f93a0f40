//! Virtual guest resource: columns, API calls, command handlers

pub mod api;
pub mod commands;
pub mod models;

use crate::columns::{ColumnKind, ColumnRegistry, ColumnSet, ColumnSource, ColumnSpec};

/// Columns available on the guest list
pub const SPECS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "id",
        header: "Id",
        source: ColumnSource::Field("id"),
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        name: "hostname",
        header: "Hostname",
        source: ColumnSource::Field("hostname"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "domain",
        header: "Domain",
        source: ColumnSource::Field("domain"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "cpu",
        header: "Cpu",
        source: ColumnSource::Field("maxCpu"),
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        name: "memory",
        header: "Memory",
        source: ColumnSource::Field("maxMemory"),
        kind: ColumnKind::Int,
    },
    ColumnSpec {
        name: "public_ip",
        header: "Public Ip",
        source: ColumnSource::Field("primaryIpAddress"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "private_ip",
        header: "Private Ip",
        source: ColumnSource::Field("primaryBackendIpAddress"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "datacenter",
        header: "Datacenter",
        source: ColumnSource::Field("datacenter.name"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "action",
        header: "Action",
        source: ColumnSource::Field("activeTransaction.transactionStatus.name"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "guid",
        header: "Guid",
        source: ColumnSource::Field("globalIdentifier"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "power_state",
        header: "Power State",
        source: ColumnSource::Field("powerState.name"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "created_by",
        header: "Created By",
        source: ColumnSource::Field("billingItem.orderItem.order.userRecord.username"),
        kind: ColumnKind::String,
    },
    ColumnSpec {
        name: "tags",
        header: "Tags",
        source: ColumnSource::Field("tagReferences.tag.name"),
        kind: ColumnKind::String,
    },
];

pub fn registry() -> ColumnRegistry {
    ColumnRegistry::new(SPECS)
}

pub fn column_set() -> ColumnSet {
    ColumnSet {
        default_columns: &[
            "id",
            "hostname",
            "domain",
            "cpu",
            "memory",
            "public_ip",
            "private_ip",
            "datacenter",
            "action",
        ],
        optional_columns: &["guid", "power_state", "created_by", "tags"],
        sortable_columns: &[
            "id",
            "hostname",
            "domain",
            "cpu",
            "memory",
            "public_ip",
            "private_ip",
            "datacenter",
        ],
        default_sort: "hostname",
    }
}
