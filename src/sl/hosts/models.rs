//! Dedicated host API models

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a decimal amount that the API may return as a JSON number or
/// as a quoted string (e.g. "3.04").
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse::<f64>().ok(),
        _ => None,
    })
}

/// A dedicated host, as fetched for the detail view
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedicatedHost {
    pub id: i64,
    pub name: String,
    pub cpu_count: Option<i64>,
    pub memory_capacity: Option<i64>,
    pub disk_capacity: Option<i64>,
    pub create_date: Option<String>,
    pub modify_date: Option<String>,
    pub backend_router: Option<Router>,
    pub billing_item: Option<BillingItem>,
    pub datacenter: Option<Datacenter>,
    #[serde(default)]
    pub guests: Vec<HostGuest>,
    pub guest_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Router {
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub long_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "amount")]
    pub next_invoice_total_recurring_amount: Option<f64>,
    #[serde(default)]
    pub children: Vec<BillingChild>,
    pub order_item: Option<OrderItem>,
}

impl BillingItem {
    /// Total recurring price: the item's own amount plus all child items
    pub fn total_recurring(&self) -> f64 {
        self.next_invoice_total_recurring_amount.unwrap_or(0.0)
            + self
                .children
                .iter()
                .filter_map(|c| c.next_invoice_total_recurring_amount)
                .sum::<f64>()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingChild {
    pub category_code: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub next_invoice_total_recurring_amount: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    pub order: Option<Order>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user_record: Option<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub username: Option<String>,
}

/// A guest as embedded in the host detail mask
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostGuest {
    pub id: i64,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub uuid: Option<String>,
}
