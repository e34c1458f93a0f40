//! Product package and order API calls

use serde_json::{json, Value};

use crate::config::{api, defaults};
use crate::error::{Result, SlError};
use crate::sl::ordering::models::{ItemPrice, OrderReceipt, Package, Vlan};
use crate::sl::{ObjectFilter, SlClient};

/// Fields needed to build and describe dedicated host orders
const PACKAGE_MASK: &str = "id,keyName,\
items[id,keyName,description,itemCategory[categoryCode],prices[id,locationGroupId,hourlyRecurringFee,recurringFee]],\
regions[keyname,location[location[id,name,longName,priceGroups]]]";

/// Fetch the dedicated host ordering package.
///
/// The package is looked up by key name; exactly one match is expected.
pub async fn get_package(client: &SlClient) -> Result<Package> {
    let filter = ObjectFilter::new()
        .eq("keyName", defaults::HOST_PACKAGE_KEY)
        .build();
    let mut packages = client
        .fetch_list(
            api::PACKAGE_SERVICE,
            None,
            "getAllObjects",
            Some(PACKAGE_MASK),
            Some(&filter),
            "ordering package",
        )
        .await?;

    if packages.len() != 1 {
        return Err(SlError::Ordering("Ordering package is not found".to_string()));
    }
    Ok(serde_json::from_value(packages.remove(0))?)
}

/// Fetch the package's item prices with their pricing location groups
pub async fn get_item_prices(client: &SlClient, package_id: i64) -> Result<Vec<ItemPrice>> {
    let records = client
        .fetch_list(
            api::PACKAGE_SERVICE,
            Some(package_id),
            "getItemPrices",
            Some("item[keyName],pricingLocationGroup[locations]"),
            None,
            "package item prices",
        )
        .await?;
    let mut prices = Vec::with_capacity(records.len());
    for record in records {
        prices.push(serde_json::from_value(record)?);
    }
    Ok(prices)
}

/// List the account's private VLANs in one datacenter
pub async fn get_private_vlans(client: &SlClient, datacenter: &str) -> Result<Vec<Vlan>> {
    let filter = ObjectFilter::new()
        .eq("privateNetworkVlans.primaryRouter.datacenter.name", datacenter)
        .build();
    let records = client
        .fetch_list(
            api::ACCOUNT_SERVICE,
            None,
            "getPrivateNetworkVlans",
            Some("id,name,primaryRouter[id,hostname]"),
            Some(&filter),
            "private vlans",
        )
        .await?;
    let mut vlans = Vec::with_capacity(records.len());
    for record in records {
        vlans.push(serde_json::from_value(record)?);
    }
    Ok(vlans)
}

/// Fetch one VLAN with its primary router id
pub async fn get_vlan(client: &SlClient, vlan_id: i64) -> Result<Vlan> {
    let (vlan, _raw): (Vlan, Value) = client
        .fetch_resource(
            api::VLAN_SERVICE,
            vlan_id,
            Some("id,primaryRouter[id]"),
            &format!("vlan {}", vlan_id),
        )
        .await?;
    Ok(vlan)
}

/// Build the order container for a dedicated host
pub fn build_order_template(
    package: &Package,
    size: &str,
    hostname: &str,
    domain: &str,
    datacenter: &str,
    hourly: bool,
    router_id: i64,
) -> Result<Value> {
    let region = package.region_for(datacenter)?;
    let price_id = package.price_id_for(size, hourly, region)?;

    Ok(json!({
        "complexType": "SoftLayer_Container_Product_Order_Virtual_DedicatedHost",
        "location": region.keyname,
        "packageId": package.id,
        "prices": [{ "id": price_id }],
        "useHourlyPricing": hourly,
        "hardware": [{
            "hostname": hostname,
            "domain": domain,
            "primaryBackendNetworkComponent": {
                "router": { "id": router_id }
            }
        }]
    }))
}

/// Verify an order without placing it
pub async fn verify_order(client: &SlClient, order: Value) -> Result<Value> {
    client
        .call_method(
            api::ORDER_SERVICE,
            "verifyOrder",
            vec![order],
            "order verification",
        )
        .await
}

/// Place an order, returning the typed receipt and the raw response
pub async fn place_order(client: &SlClient, order: Value) -> Result<(OrderReceipt, Value)> {
    let raw: Value = client
        .call_method(
            api::ORDER_SERVICE,
            "placeOrder",
            vec![order, json!(false)],
            "order placement",
        )
        .await?;
    let receipt: OrderReceipt = serde_json::from_value(raw.clone())?;
    Ok((receipt, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param_contains};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> SlClient {
        SlClient::with_base_url("user".to_string(), "key".to_string(), uri.to_string())
    }

    fn package_body() -> Value {
        json!([{
            "id": 813,
            "keyName": "DEDICATED_HOST",
            "items": [{
                "id": 1,
                "keyName": "56_CORES_X_242_RAM_X_1_4_TB",
                "description": "56 Cores X 242 RAM X 1.2 TB",
                "itemCategory": {"categoryCode": "dedicated_virtual_hosts"},
                "prices": [{"id": 200269, "locationGroupId": null, "hourlyRecurringFee": "3.164"}]
            }],
            "regions": [{
                "keyname": "DALLAS10",
                "location": {"location": {"id": 1441195, "name": "dal10",
                                          "longName": "Dallas 10", "priceGroups": [{"id": 503}]}}
            }]
        }])
    }

    #[tokio::test]
    async fn test_get_package_single_match() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Product_Package/getAllObjects.json"))
            .and(query_param_contains("objectFilter", "DEDICATED_HOST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(package_body()))
            .mount(&mock_server)
            .await;

        let package = get_package(&client).await.unwrap();
        assert_eq!(package.id, 813);
        assert_eq!(package.regions.len(), 1);
    }

    #[tokio::test]
    async fn test_get_package_missing_errors() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Product_Package/getAllObjects.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let err = get_package(&client).await.unwrap_err();
        assert!(err.to_string().contains("Ordering package is not found"));
    }

    #[test]
    fn test_build_order_template() {
        let package: Package = serde_json::from_value(package_body()[0].clone()).unwrap();
        let order = build_order_template(
            &package,
            "56_CORES_X_242_RAM_X_1_4_TB",
            "dhost01",
            "example.com",
            "dal10",
            true,
            987654,
        )
        .unwrap();
        assert_eq!(
            order["complexType"],
            "SoftLayer_Container_Product_Order_Virtual_DedicatedHost"
        );
        assert_eq!(order["location"], "DALLAS10");
        assert_eq!(order["prices"][0]["id"], 200269);
        assert_eq!(order["useHourlyPricing"], true);
        assert_eq!(
            order["hardware"][0]["primaryBackendNetworkComponent"]["router"]["id"],
            987654
        );
    }

    #[test]
    fn test_build_order_template_bad_datacenter() {
        let package: Package = serde_json::from_value(package_body()[0].clone()).unwrap();
        let err = build_order_template(
            &package,
            "56_CORES_X_242_RAM_X_1_4_TB",
            "dhost01",
            "example.com",
            "nowhere01",
            true,
            987654,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid datacenter name"));
    }

    #[tokio::test]
    async fn test_place_order_sends_save_quote_flag() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/SoftLayer_Product_Order/placeOrder.json"))
            .and(body_partial_json(json!({"parameters": [{"packageId": 813}, false]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": 112356450})))
            .mount(&mock_server)
            .await;

        let (receipt, raw) = place_order(&client, json!({"packageId": 813}))
            .await
            .unwrap();
        assert_eq!(receipt.order_id, Some(112356450));
        assert_eq!(raw["orderId"], 112356450);
    }

    #[tokio::test]
    async fn test_get_vlan_router() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Network_Vlan/1234567/getObject.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1234567, "primaryRouter": {"id": 987654}})),
            )
            .mount(&mock_server)
            .await;

        let vlan = get_vlan(&client, 1234567).await.unwrap();
        assert_eq!(vlan.primary_router.unwrap().id, Some(987654));
    }

    #[tokio::test]
    async fn test_get_private_vlans_filters_by_datacenter() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Account/getPrivateNetworkVlans.json"))
            .and(query_param_contains("objectFilter", "dal10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1234567, "name": "private-a",
                 "primaryRouter": {"id": 1, "hostname": "bcr01a.dal10"}}
            ])))
            .mount(&mock_server)
            .await;

        let vlans = get_private_vlans(&client, "dal10").await.unwrap();
        assert_eq!(vlans.len(), 1);
        assert_eq!(vlans[0].name.as_deref(), Some("private-a"));
    }
}
