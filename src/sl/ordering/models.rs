//! Product package and order models

use serde::Deserialize;

use crate::error::{Result, SlError};
use crate::sl::hosts::models::amount;

/// The dedicated host ordering package, with items and regions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: i64,
    pub key_name: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Package {
    /// Find the ordering region whose datacenter shortname matches
    pub fn region_for(&self, datacenter: &str) -> Result<&Region> {
        self.regions
            .iter()
            .find(|r| {
                r.location
                    .as_ref()
                    .and_then(|l| l.location.as_ref())
                    .and_then(|l| l.name.as_deref())
                    == Some(datacenter)
            })
            .ok_or_else(|| SlError::Ordering("Invalid datacenter name specified.".to_string()))
    }

    /// Items in the dedicated host flavor category
    pub fn flavors(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| {
            item.item_category
                .as_ref()
                .and_then(|c| c.category_code.as_deref())
                == Some("dedicated_virtual_hosts")
        })
    }

    /// Pick the price id for a host size under the given billing and region.
    ///
    /// A price matches when its fee kind matches the billing rate and it is
    /// either location-neutral or its location group is one of the region's
    /// price groups.
    pub fn price_id_for(&self, size: &str, hourly: bool, region: &Region) -> Result<i64> {
        for item in &self.items {
            if item.key_name.as_deref() != Some(size) {
                continue;
            }
            for price in &item.prices {
                if !price.matches_billing(hourly) {
                    continue;
                }
                if !price.matches_location(region) {
                    continue;
                }
                return price
                    .id
                    .ok_or_else(|| SlError::Ordering("Price ID not found".to_string()));
            }
        }
        Err(SlError::Ordering(format!(
            "Could not find valid price for dedicated host with size '{}'",
            size
        )))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Option<i64>,
    pub key_name: Option<String>,
    pub description: Option<String>,
    pub item_category: Option<ItemCategory>,
    #[serde(default)]
    pub prices: Vec<Price>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    pub category_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: Option<i64>,
    pub location_group_id: Option<i64>,
    #[serde(default, deserialize_with = "amount")]
    pub hourly_recurring_fee: Option<f64>,
    #[serde(default, deserialize_with = "amount")]
    pub recurring_fee: Option<f64>,
}

impl Price {
    pub fn matches_billing(&self, hourly: bool) -> bool {
        if hourly {
            self.hourly_recurring_fee.is_some()
        } else {
            self.recurring_fee.is_some()
        }
    }

    pub fn matches_location(&self, region: &Region) -> bool {
        let Some(group_id) = self.location_group_id else {
            return true;
        };
        region
            .price_groups()
            .any(|g| g.id == Some(group_id))
    }
}

/// An item price with its pricing location group, as returned by the
/// package's `getItemPrices` method
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPrice {
    pub item: Option<PricedItem>,
    pub pricing_location_group: Option<PricingLocationGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    pub key_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingLocationGroup {
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub long_name: Option<String>,
}

/// An ordering region; `keyname` (e.g. "DALLAS10") goes into the order
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub keyname: Option<String>,
    pub location: Option<RegionLocation>,
}

impl Region {
    fn price_groups(&self) -> impl Iterator<Item = &PriceGroup> {
        self.location
            .as_ref()
            .and_then(|l| l.location.as_ref())
            .map(|l| l.price_groups.iter())
            .into_iter()
            .flatten()
    }

    pub fn datacenter_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.location.as_ref())
            .and_then(|l| l.name.as_deref())
    }

    pub fn datacenter_long_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.location.as_ref())
            .and_then(|l| l.long_name.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionLocation {
    pub location: Option<GroupedLocation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedLocation {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub long_name: Option<String>,
    #[serde(default)]
    pub price_groups: Vec<PriceGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceGroup {
    pub id: Option<i64>,
}

/// A private network VLAN, as listed for create-options
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vlan {
    pub id: i64,
    pub name: Option<String>,
    pub primary_router: Option<VlanRouter>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanRouter {
    pub id: Option<i64>,
    pub hostname: Option<String>,
}

/// Receipt returned by order placement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Option<i64>,
}
