//! Virtual guest API calls

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::sl::guests::models::BriefGuest;
use crate::sl::{ObjectFilter, SlClient};

/// List guests on a dedicated host, paginated.
///
/// Filter paths are relative to the host service, so conditions use the
/// `guests.` prefix.
#[allow(clippy::too_many_arguments)]
pub async fn list_guests(
    client: &SlClient,
    host_id: i64,
    mask: &str,
    cpu: Option<i64>,
    memory: Option<i64>,
    hostname: Option<&str>,
    domain: Option<&str>,
    tags: &[String],
) -> Result<Vec<Value>> {
    let mut filter = ObjectFilter::new();
    if let Some(cpu) = cpu {
        filter = filter.eq("guests.maxCpu", cpu);
    }
    if let Some(memory) = memory {
        filter = filter.eq("guests.maxMemory", memory);
    }
    if let Some(hostname) = hostname {
        filter = filter.query("guests.hostname", hostname);
    }
    if let Some(domain) = domain {
        filter = filter.query("guests.domain", domain);
    }
    if !tags.is_empty() {
        filter = filter.in_values("guests.tagReferences.tag.name", tags);
    }

    let filter = if filter.is_empty() {
        None
    } else {
        Some(filter.build())
    };

    client
        .fetch_list(
            api::DEDICATED_HOST_SERVICE,
            Some(host_id),
            "getGuests",
            Some(mask),
            filter.as_ref(),
            "guests on the dedicated host",
        )
        .await
}

/// Fetch the id and FQDN of every guest on a host, for the cancel flow
pub async fn brief_guests(client: &SlClient, host_id: i64) -> Result<Vec<BriefGuest>> {
    let records = client
        .fetch_list(
            api::DEDICATED_HOST_SERVICE,
            Some(host_id),
            "getGuests",
            Some("id,fullyQualifiedDomainName"),
            None,
            "guests on the dedicated host",
        )
        .await?;
    let mut guests = Vec::with_capacity(records.len());
    for record in records {
        guests.push(serde_json::from_value(record)?);
    }
    Ok(guests)
}

/// Delete one guest immediately, destroying its data
pub async fn delete_guest(client: &SlClient, guest_id: i64) -> Result<()> {
    let url = format!("{}/{}/{}.json", client.base_url(), api::GUEST_SERVICE, guest_id);
    debug!("Deleting guest {} via: {}", guest_id, url);

    let response = client.delete(&url).send().await?;
    let _: Value = client
        .parse_api_response(response, &format!("guest {} deletion", guest_id))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param_contains};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> SlClient {
        SlClient::with_base_url("user".to_string(), "key".to_string(), uri.to_string())
    }

    #[tokio::test]
    async fn test_list_guests_filters_relative_to_host() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Virtual_DedicatedHost/111111/getGuests.json"))
            .and(query_param_contains("objectFilter", "maxCpu"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 1, "hostname": "web01"}])),
            )
            .mount(&mock_server)
            .await;

        let guests = list_guests(&client, 111111, "id,hostname", Some(8), None, None, None, &[])
            .await
            .unwrap();
        assert_eq!(guests.len(), 1);
    }

    #[tokio::test]
    async fn test_list_guests_no_filter_param_when_unfiltered() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Virtual_DedicatedHost/111111/getGuests.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let guests = list_guests(&client, 111111, "id", None, None, None, None, &[])
            .await
            .unwrap();
        assert!(guests.is_empty());
    }

    #[tokio::test]
    async fn test_brief_guests_parses_fqdn() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Virtual_DedicatedHost/111111/getGuests.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!([{"id": 1234567, "fullyQualifiedDomainName": "web01.example.com"}]),
            ))
            .mount(&mock_server)
            .await;

        let guests = brief_guests(&client, 111111).await.unwrap();
        assert_eq!(guests[0].id, 1234567);
    }

    #[tokio::test]
    async fn test_delete_guest() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/SoftLayer_Virtual_Guest/1234567.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
            .mount(&mock_server)
            .await;

        assert!(delete_guest(&client, 1234567).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_guest_error_surfaces() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/SoftLayer_Virtual_Guest/1234567.json"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Unable to find object"})),
            )
            .mount(&mock_server)
            .await;

        let err = delete_guest(&client, 1234567).await.unwrap_err();
        assert!(err.to_string().contains("Unable to find object"));
    }
}
