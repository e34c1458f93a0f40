//! Virtual guest API models

use serde::Deserialize;

/// Minimal guest record used by the cancel flow
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefGuest {
    pub id: i64,
    pub fully_qualified_domain_name: Option<String>,
}

/// Outcome of one guest cancellation
#[derive(Debug, Clone)]
pub struct CancelStatus {
    pub id: i64,
    pub fqdn: String,
    pub status: String,
}
