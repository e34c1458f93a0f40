//! HTTP client for the classic infrastructure REST API

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, SlError};

/// Classic infrastructure API client
///
/// Endpoints follow the `SoftLayer_<Service>[/<id>]/<method>.json` REST
/// convention with HTTP basic auth. Field masks, object filters, and
/// pagination travel as query parameters.
pub struct SlClient {
    client: Client,
    username: String,
    api_key: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl SlClient {
    /// Create a new client with pooled connection settings
    pub fn new(username: String, api_key: String, host: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            username,
            api_key,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(username: String, api_key: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            username,
            api_key,
            host: String::new(),
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}{}", self.host, api::BASE_PATH)
    }

    /// Build a service endpoint URL: `{base}/{service}[/{id}]/{method}.json`
    pub(crate) fn service_url(&self, service: &str, id: Option<i64>, method: &str) -> String {
        match id {
            Some(id) => format!("{}/{}/{}/{}.json", self.base_url(), service, id, method),
            None => format!("{}/{}/{}.json", self.base_url(), service, method),
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let credentials = BASE64.encode(format!("{}:{}", self.username, self.api_key));
        builder
            .header("Authorization", format!("Basic {}", credentials))
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning an error for non-success status codes.
    ///
    /// The API reports failures as a JSON body with an `error` field; that
    /// message is surfaced when present.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => body["error"]
                    .as_str()
                    .map(|e| format!("Failed to fetch {}: {}", error_context, e))
                    .unwrap_or_else(|| format!("Failed to fetch {}", error_context)),
                Err(_) => format!("Failed to fetch {}", error_context),
            };
            return Err(SlError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Append mask and filter query parameters to a URL
    pub(crate) fn with_query(url: &str, mask: Option<&str>, filter: Option<&Value>) -> String {
        let mut url = url.to_string();
        let mut sep = '?';
        if let Some(mask) = mask {
            url.push_str(&format!("{}objectMask=mask[{}]", sep, mask));
            sep = '&';
        }
        if let Some(filter) = filter {
            let encoded = urlencoding::encode(&filter.to_string()).into_owned();
            url.push_str(&format!("{}objectFilter={}", sep, encoded));
        }
        url
    }

    /// Fetch a list endpoint, following `resultLimit` offset pagination
    /// until a short page signals the end (page size from config).
    pub async fn fetch_list(
        &self,
        service: &str,
        id: Option<i64>,
        method: &str,
        mask: Option<&str>,
        filter: Option<&Value>,
        error_context: &str,
    ) -> Result<Vec<Value>> {
        let base = Self::with_query(&self.service_url(service, id, method), mask, filter);
        let sep = if base.contains('?') { '&' } else { '?' };

        let mut all: Vec<Value> = Vec::new();
        let mut offset = 0u32;
        loop {
            let url = format!("{}{}resultLimit={},{}", base, sep, offset, api::PAGE_LIMIT);
            debug!("Fetching page from: {}", url);

            let response = self.get(&url).send().await?;
            let page: Vec<Value> = self.parse_api_response(response, error_context).await?;

            let page_len = page.len() as u32;
            all.extend(page);
            if page_len < api::PAGE_LIMIT {
                break;
            }
            offset += api::PAGE_LIMIT;
        }

        debug!("Fetched {} records for {}", all.len(), error_context);
        Ok(all)
    }

    /// Fetch a single resource as a typed model plus its raw JSON.
    ///
    /// The raw value is kept for structured output so JSON/YAML renditions
    /// show the record exactly as the API returned it.
    pub async fn fetch_resource<T>(
        &self,
        service: &str,
        id: i64,
        mask: Option<&str>,
        error_context: &str,
    ) -> Result<(T, Value)>
    where
        T: DeserializeOwned,
    {
        let url = Self::with_query(&self.service_url(service, Some(id), "getObject"), mask, None);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let raw: Value = self.parse_api_response(response, error_context).await?;
        let item: T = serde_json::from_value(raw.clone()).map_err(|e| SlError::Api {
            status: 200,
            message: format!("Failed to parse {}: {}", error_context, e),
        })?;
        Ok((item, raw))
    }

    /// POST a method call with a `parameters` body, returning the parsed result
    pub async fn call_method<T>(
        &self,
        service: &str,
        method: &str,
        parameters: Vec<Value>,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.service_url(service, None, method);
        debug!("Calling {} at: {}", method, url);

        let body = serde_json::json!({ "parameters": parameters });
        let response = self.post(&url).json(&body).send().await?;
        self.parse_api_response(response, error_context).await
    }
}
