//! Dedicated host command handlers

use crate::cli::{DetailArgs, ListArgs, OutputFormat};
use crate::columns::{compile_mask, Selection};
use crate::error::Result;
use crate::output::{key_value_table, output_raw, render, TableData};
use crate::sl::hosts::models::DedicatedHost;
use crate::sl::hosts::{api, column_set, registry};
use crate::sl::{tabulate, SlClient};
use crate::ui::{create_spinner, finish_spinner};

/// Run the host list command
pub async fn run_list(client: &SlClient, args: &ListArgs, quiet: bool) -> Result<()> {
    let set = column_set();
    let registry = registry();
    let selection = Selection::validate(&args.sortby, &args.column, &set)?;
    let mask = compile_mask(&selection, &registry);

    let spinner = create_spinner("Fetching dedicated hosts...", quiet);
    let result = api::list_hosts(
        client,
        &mask,
        args.name.as_deref(),
        args.datacenter.as_deref(),
        args.owner.as_deref(),
        args.order_id,
    )
    .await;
    finish_spinner(spinner);
    let records = result?;

    if records.is_empty() {
        println!("No dedicated hosts are found.");
        return Ok(());
    }

    let data = tabulate(&records, &selection, &registry);
    render(&data, &args.output);
    Ok(())
}

/// Run the host detail command
pub async fn run_detail(client: &SlClient, args: &DetailArgs, quiet: bool) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching dedicated host {}...", args.id), quiet);
    let result = api::get_host(client, args.id).await;
    finish_spinner(spinner);
    let (host, raw) = result?;

    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        output_raw(&raw, &args.output);
        return Ok(());
    }

    println!("{}", key_value_table(&detail_pairs(&host, args.price)));

    if args.guests {
        println!();
        render(&guests_table(&host), &args.output);
    }

    Ok(())
}

/// Name/value pairs for the detail table
fn detail_pairs(host: &DedicatedHost, with_price: bool) -> Vec<(String, String)> {
    let opt_str = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    let opt_int = |v: &Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());

    let mut pairs = vec![
        ("Id".to_string(), host.id.to_string()),
        ("Name".to_string(), host.name.clone()),
        ("Cpu Count".to_string(), opt_int(&host.cpu_count)),
        ("Memory Capacity".to_string(), opt_int(&host.memory_capacity)),
        ("Disk Capacity".to_string(), opt_int(&host.disk_capacity)),
        (
            "Datacenter".to_string(),
            host.datacenter
                .as_ref()
                .map(|dc| opt_str(&dc.name))
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Router".to_string(),
            host.backend_router
                .as_ref()
                .map(|r| opt_str(&r.hostname))
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Owner".to_string(),
            host.billing_item
                .as_ref()
                .and_then(|b| b.order_item.as_ref())
                .and_then(|oi| oi.order.as_ref())
                .and_then(|o| o.user_record.as_ref())
                .map(|u| opt_str(&u.username))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Created".to_string(), opt_str(&host.create_date)),
        ("Modified".to_string(), opt_str(&host.modify_date)),
        ("Guest Count".to_string(), opt_int(&host.guest_count)),
    ];

    if with_price {
        let total = host
            .billing_item
            .as_ref()
            .map(|b| b.total_recurring())
            .unwrap_or(0.0);
        pairs.push(("Price Rate".to_string(), format!("{:.2}", total)));
    }

    pairs
}

/// Table of the guests embedded in the host detail
fn guests_table(host: &DedicatedHost) -> TableData {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    TableData {
        keys: vec![
            "id".to_string(),
            "hostname".to_string(),
            "domain".to_string(),
            "uuid".to_string(),
        ],
        headers: vec![
            "Id".to_string(),
            "Hostname".to_string(),
            "Domain".to_string(),
            "Uuid".to_string(),
        ],
        rows: host
            .guests
            .iter()
            .map(|g| {
                vec![
                    g.id.to_string(),
                    opt(&g.hostname),
                    opt(&g.domain),
                    opt(&g.uuid),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_host() -> DedicatedHost {
        serde_json::from_value(json!({
            "id": 111111,
            "name": "dedicatedhost01",
            "cpuCount": 56,
            "memoryCapacity": 242,
            "diskCapacity": 1200,
            "createDate": "2017-11-08T00:00:00-06:00",
            "backendRouter": {"id": 1, "hostname": "bcr01a.dal10"},
            "datacenter": {"id": 2, "name": "dal10", "longName": "Dallas 10"},
            "billingItem": {
                "id": 3,
                "nextInvoiceTotalRecurringAmount": "3.04",
                "children": [
                    {"categoryCode": "dedicated_host_ram", "nextInvoiceTotalRecurringAmount": 0.96}
                ],
                "orderItem": {"id": 4, "order": {"userRecord": {"username": "sl-user"}}}
            },
            "guests": [
                {"id": 5, "hostname": "web01", "domain": "example.com", "uuid": "aa-bb-cc"}
            ],
            "guestCount": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_detail_pairs_without_price() {
        let pairs = detail_pairs(&sample_host(), false);
        assert!(pairs.iter().any(|(k, v)| k == "Owner" && v == "sl-user"));
        assert!(pairs.iter().any(|(k, v)| k == "Datacenter" && v == "dal10"));
        assert!(!pairs.iter().any(|(k, _)| k == "Price Rate"));
    }

    #[test]
    fn test_detail_pairs_price_sums_children() {
        let pairs = detail_pairs(&sample_host(), true);
        assert!(pairs.iter().any(|(k, v)| k == "Price Rate" && v == "4.00"));
    }

    #[test]
    fn test_detail_pairs_missing_relations() {
        let host: DedicatedHost =
            serde_json::from_value(json!({"id": 1, "name": "h"})).unwrap();
        let pairs = detail_pairs(&host, true);
        assert!(pairs.iter().any(|(k, v)| k == "Owner" && v == "-"));
        assert!(pairs.iter().any(|(k, v)| k == "Price Rate" && v == "0.00"));
    }

    #[test]
    fn test_guests_table_rows() {
        let data = guests_table(&sample_host());
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0][1], "web01");
    }
}
