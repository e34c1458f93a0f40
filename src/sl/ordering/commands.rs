//! Ordering command handlers: create and create-options

use crate::cli::{CreateArgs, CreateOptionsArgs, OutputFormat};
use crate::error::{Result, SlError};
use crate::output::{output_raw, render, TableData};
use crate::sl::ordering::api;
use crate::sl::ordering::models::{Package, Vlan};
use crate::sl::SlClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the host create-options command
pub async fn run_create_options(
    client: &SlClient,
    args: &CreateOptionsArgs,
    quiet: bool,
) -> Result<()> {
    match (&args.datacenter, &args.flavor) {
        (None, None) => {
            let package = fetch_package(client, quiet).await?;
            render(&locations_table(&package), &args.output);
            println!();
            render(&flavors_table(&package), &args.output);
            Ok(())
        }
        (Some(datacenter), Some(flavor)) => {
            let package = fetch_package(client, quiet).await?;

            let spinner = create_spinner("Checking vlan availability...", quiet);
            let result = vlans_for(client, &package, datacenter, flavor).await;
            finish_spinner(spinner);
            let vlans = result?;

            render(&vlans_table(&vlans), &args.output);
            Ok(())
        }
        _ => Err(SlError::InvalidUsage(
            "Both -d|--datacenter and -f|--flavor need to be passed as arguments \
             e.g. slctl host create-options -d ams01 -f 56_CORES_X_242_RAM_X_1_4_TB"
                .to_string(),
        )),
    }
}

/// Run the host create command
pub async fn run_create(client: &SlClient, args: &CreateArgs, quiet: bool) -> Result<()> {
    if args.billing != "hourly" && args.billing != "monthly" {
        return Err(SlError::InvalidUsage(
            "[-b|--billing] has to be either hourly or monthly.".to_string(),
        ));
    }
    let hourly = args.billing == "hourly";

    let spinner = create_spinner(&format!("Fetching vlan {}...", args.vlan_private), quiet);
    let result = api::get_vlan(client, args.vlan_private).await;
    finish_spinner(spinner);
    let vlan = result?;

    // Structured output implies no interactive prompt
    let interactive = matches!(args.output, OutputFormat::Table | OutputFormat::Csv);
    if !args.test && interactive {
        let confirmed =
            confirm_action("This action will incur charges on your account. Continue?", args.force)?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let router_id = vlan
        .primary_router
        .as_ref()
        .and_then(|r| r.id)
        .ok_or_else(|| SlError::Ordering("Failed to get vlan primary router ID.".to_string()))?;

    let package = fetch_package(client, quiet).await?;
    let order = api::build_order_template(
        &package,
        &args.size,
        &args.hostname,
        &args.domain,
        &args.datacenter,
        hourly,
        router_id,
    )?;

    if args.test {
        let spinner = create_spinner("Verifying the order...", quiet);
        let result = api::verify_order(client, order).await;
        finish_spinner(spinner);
        let verified = result?;

        println!("The order is correct.");
        if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
            output_raw(&verified, &args.output);
        }
        return Ok(());
    }

    let spinner = create_spinner("Placing the order...", quiet);
    let result = api::place_order(client, order).await;
    finish_spinner(spinner);
    let (receipt, raw) = result?;

    match receipt.order_id {
        Some(order_id) => println!("The order {} was placed.", order_id),
        None => println!("The order was placed."),
    }
    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        output_raw(&raw, &args.output);
    }
    Ok(())
}

async fn fetch_package(client: &SlClient, quiet: bool) -> Result<Package> {
    let spinner = create_spinner("Fetching the ordering package...", quiet);
    let result = api::get_package(client).await;
    finish_spinner(spinner);
    result
}

/// Private VLANs usable in the datacenter, provided the flavor is priced
/// there.
async fn vlans_for(
    client: &SlClient,
    package: &Package,
    datacenter: &str,
    flavor: &str,
) -> Result<Vec<Vlan>> {
    let item_prices = api::get_item_prices(client, package.id).await?;

    let available = item_prices.iter().any(|ip| {
        ip.item.as_ref().and_then(|i| i.key_name.as_deref()) == Some(flavor)
            && ip
                .pricing_location_group
                .as_ref()
                .map(|g| g.locations.iter().any(|l| l.name.as_deref() == Some(datacenter)))
                .unwrap_or(false)
    });

    if !available {
        return Err(SlError::Ordering(
            "There are not private vlans available for this datacenter.".to_string(),
        ));
    }

    api::get_private_vlans(client, datacenter).await
}

/// Orderable datacenters, sorted by shortname
fn locations_table(package: &Package) -> TableData {
    let mut rows: Vec<(String, String)> = package
        .regions
        .iter()
        .filter_map(|region| {
            let name = region.datacenter_name()?;
            let long_name = region.datacenter_long_name()?;
            Some((name.to_string(), long_name.to_string()))
        })
        .collect();
    rows.sort();
    rows.dedup();

    TableData {
        keys: vec!["datacenter".to_string(), "value".to_string()],
        headers: vec!["Datacenter".to_string(), "Value".to_string()],
        rows: rows
            .into_iter()
            .map(|(name, long_name)| vec![long_name, name])
            .collect(),
    }
}

/// Orderable host flavors, sorted by key name
fn flavors_table(package: &Package) -> TableData {
    let mut rows: Vec<(String, String)> = package
        .flavors()
        .filter_map(|item| {
            let key_name = item.key_name.as_deref()?;
            let description = item.description.as_deref().unwrap_or("-");
            Some((key_name.to_string(), description.to_string()))
        })
        .collect();
    rows.sort();
    rows.dedup();

    TableData {
        keys: vec!["flavor".to_string(), "value".to_string()],
        headers: vec![
            "Dedicated Virtual Host Flavor(s)".to_string(),
            "Value".to_string(),
        ],
        rows: rows
            .into_iter()
            .map(|(key_name, description)| vec![description, key_name])
            .collect(),
    }
}

fn vlans_table(vlans: &[Vlan]) -> TableData {
    TableData {
        keys: vec![
            "id".to_string(),
            "name".to_string(),
            "router".to_string(),
        ],
        headers: vec![
            "Id".to_string(),
            "Name".to_string(),
            "Primary Router Hostname".to_string(),
        ],
        rows: vlans
            .iter()
            .map(|vlan| {
                vec![
                    vlan.id.to_string(),
                    vlan.name.clone().unwrap_or_else(|| "-".to_string()),
                    vlan.primary_router
                        .as_ref()
                        .and_then(|r| r.hostname.clone())
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_package() -> Package {
        serde_json::from_value(json!({
            "id": 813,
            "items": [
                {
                    "id": 1,
                    "keyName": "56_CORES_X_242_RAM_X_1_4_TB",
                    "description": "56 Cores X 242 RAM X 1.2 TB",
                    "itemCategory": {"categoryCode": "dedicated_virtual_hosts"},
                    "prices": []
                },
                {
                    "id": 2,
                    "keyName": "1_GBPS_PUBLIC_PRIVATE_NETWORK_UPLINKS",
                    "description": "1 Gbps Public & Private Network Uplinks",
                    "itemCategory": {"categoryCode": "port_speed"},
                    "prices": []
                }
            ],
            "regions": [
                {"keyname": "SEOUL", "location": {"location":
                    {"id": 2, "name": "seo01", "longName": "Seoul 1"}}},
                {"keyname": "DALLAS10", "location": {"location":
                    {"id": 1, "name": "dal10", "longName": "Dallas 10"}}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_locations_table_sorted_by_shortname() {
        let data = locations_table(&sample_package());
        assert_eq!(data.rows[0], vec!["Dallas 10", "dal10"]);
        assert_eq!(data.rows[1], vec!["Seoul 1", "seo01"]);
    }

    #[test]
    fn test_flavors_table_only_host_category() {
        let data = flavors_table(&sample_package());
        assert_eq!(data.rows.len(), 1);
        assert_eq!(
            data.rows[0],
            vec!["56 Cores X 242 RAM X 1.2 TB", "56_CORES_X_242_RAM_X_1_4_TB"]
        );
    }

    #[test]
    fn test_vlans_table_missing_router() {
        let vlans: Vec<Vlan> =
            serde_json::from_value(json!([{"id": 1234567, "name": "private-a"}])).unwrap();
        let data = vlans_table(&vlans);
        assert_eq!(data.rows[0], vec!["1234567", "private-a", "-"]);
    }
}
