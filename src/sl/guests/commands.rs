//! Virtual guest command handlers

use crate::cli::{CancelGuestsArgs, GuestsArgs};
use crate::columns::{compile_mask, Selection};
use crate::error::Result;
use crate::output::{render, TableData};
use crate::sl::guests::models::CancelStatus;
use crate::sl::guests::{api, column_set, registry};
use crate::sl::{tabulate, SlClient};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the host guests command
pub async fn run_guests(client: &SlClient, args: &GuestsArgs, quiet: bool) -> Result<()> {
    let set = column_set();
    let registry = registry();
    let selection = Selection::validate(&args.sortby, &args.column, &set)?;
    let mask = compile_mask(&selection, &registry);

    let spinner = create_spinner(
        &format!("Fetching guests on dedicated host {}...", args.id),
        quiet,
    );
    let result = api::list_guests(
        client,
        args.id,
        &mask,
        args.cpu,
        args.memory,
        args.hostname.as_deref(),
        args.domain.as_deref(),
        &args.tag,
    )
    .await;
    finish_spinner(spinner);
    let records = result?;

    if records.is_empty() {
        println!("No guests are found on the dedicated host.");
        return Ok(());
    }

    let data = tabulate(&records, &selection, &registry);
    render(&data, &args.output);
    Ok(())
}

/// Run the host cancel-guests command.
///
/// Cancels every guest on the host, one at a time, and reports a status row
/// per guest. A failed deletion is reported and the remaining guests are
/// still attempted.
pub async fn run_cancel_guests(
    client: &SlClient,
    args: &CancelGuestsArgs,
    quiet: bool,
) -> Result<()> {
    let spinner = create_spinner(
        &format!("Fetching guests on dedicated host {}...", args.id),
        quiet,
    );
    let result = api::brief_guests(client, args.id).await;
    finish_spinner(spinner);
    let guests = result?;

    if guests.is_empty() {
        println!("No guests are found on the dedicated host.");
        return Ok(());
    }

    let prompt = format!(
        "This will cancel all {} guest(s) on dedicated host {} and cannot be undone. Continue?",
        guests.len(),
        args.id
    );
    if !confirm_action(&prompt, args.force)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut statuses = Vec::with_capacity(guests.len());
    for guest in guests {
        let fqdn = guest
            .fully_qualified_domain_name
            .unwrap_or_else(|| "-".to_string());
        let status = match api::delete_guest(client, guest.id).await {
            Ok(()) => "Cancelled".to_string(),
            Err(e) => format!("Failed: {}", e),
        };
        statuses.push(CancelStatus {
            id: guest.id,
            fqdn,
            status,
        });
    }

    render(&status_table(&statuses), &args.output);
    Ok(())
}

fn status_table(statuses: &[CancelStatus]) -> TableData {
    TableData {
        keys: vec!["id".to_string(), "fqdn".to_string(), "status".to_string()],
        headers: vec!["Id".to_string(), "Fqdn".to_string(), "Status".to_string()],
        rows: statuses
            .iter()
            .map(|s| vec![s.id.to_string(), s.fqdn.clone(), s.status.clone()])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table_shape() {
        let data = status_table(&[
            CancelStatus {
                id: 1234567,
                fqdn: "web01.example.com".to_string(),
                status: "Cancelled".to_string(),
            },
            CancelStatus {
                id: 1234568,
                fqdn: "web02.example.com".to_string(),
                status: "Failed: API error (404): not found".to_string(),
            },
        ]);
        assert_eq!(data.headers, vec!["Id", "Fqdn", "Status"]);
        assert_eq!(data.rows[0][2], "Cancelled");
        assert!(data.rows[1][2].starts_with("Failed"));
    }
}
