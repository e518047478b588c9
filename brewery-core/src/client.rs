//! reqwest-backed access to the Open Brewery DB listing endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{BreweryDirectory, BreweryRecord, FetchError, StateName};

pub const DEFAULT_API_URL: &str = "https://api.openbrewerydb.org/v1/breweries";

/// Per-page request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct ListQuery<'a> {
    by_state: &'a str,
    page: u32,
    per_page: u32,
}

#[derive(Debug, Clone)]
pub struct BreweryClient {
    client: Client,
    base_url: String,
}

impl BreweryClient {
    /// Client with a bounded per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BreweryDirectory for BreweryClient {
    async fn fetch_page(
        &self,
        state: &StateName,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<BreweryRecord>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&ListQuery {
                by_state: state.as_str(),
                page,
                per_page,
            })
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        serde_json::from_slice::<Vec<BreweryRecord>>(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_encodes_state_with_spaces() {
        let client = BreweryClient::new(DEFAULT_API_URL, DEFAULT_TIMEOUT).unwrap();
        let request = client
            .client
            .get(client.base_url())
            .query(&ListQuery {
                by_state: "new york",
                page: 2,
                per_page: 50,
            })
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.openbrewerydb.org/v1/breweries?by_state=new+york&page=2&per_page=50"
        );
    }
}
