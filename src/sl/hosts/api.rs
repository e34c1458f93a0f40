//! Dedicated host API calls

use serde_json::Value;

use crate::config::{api, HOST_DETAIL_MASK};
use crate::error::Result;
use crate::sl::hosts::models::DedicatedHost;
use crate::sl::{ObjectFilter, SlClient};

/// List dedicated hosts on the account, paginated.
///
/// Filter paths are relative to the account service, so conditions use the
/// `dedicatedHosts.` prefix while the mask stays relative to the host record.
pub async fn list_hosts(
    client: &SlClient,
    mask: &str,
    name: Option<&str>,
    datacenter: Option<&str>,
    owner: Option<&str>,
    order_id: Option<i64>,
) -> Result<Vec<Value>> {
    let mut filter = ObjectFilter::new().order_by("dedicatedHosts.id");
    if let Some(name) = name {
        filter = filter.eq("dedicatedHosts.name", name);
    }
    if let Some(datacenter) = datacenter {
        filter = filter.eq("dedicatedHosts.datacenter.name", datacenter);
    }
    if let Some(owner) = owner {
        filter = filter.eq(
            "dedicatedHosts.billingItem.orderItem.order.userRecord.username",
            owner,
        );
    }
    if let Some(order_id) = order_id {
        filter = filter.eq("dedicatedHosts.billingItem.orderItem.order.id", order_id);
    }

    client
        .fetch_list(
            api::ACCOUNT_SERVICE,
            None,
            "getDedicatedHosts",
            Some(mask),
            Some(&filter.build()),
            "dedicated hosts on your account",
        )
        .await
}

/// Fetch one dedicated host with the fixed detail mask
pub async fn get_host(client: &SlClient, id: i64) -> Result<(DedicatedHost, Value)> {
    client
        .fetch_resource(
            api::DEDICATED_HOST_SERVICE,
            id,
            Some(HOST_DETAIL_MASK),
            &format!("dedicated host {}", id),
        )
        .await
}
