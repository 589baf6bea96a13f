//! Shopify Admin API client for fetching orders.

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;

use super::types::{Order, OrdersResponse};

/// Page-size cap for a single orders fetch. One bounded page only.
pub const PAGE_LIMIT: u32 = 250;

/// Client for a store's Admin API.
pub struct OrdersClient {
    base_url: String,
    access_token: String,
    client: Client,
}

impl OrdersClient {
    /// Create a new client for the configured store.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config.api_base(), config.access_token.clone())
    }

    /// Create a client against an explicit base URL (mock servers in tests).
    pub fn with_base_url(base_url: String, access_token: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            base_url,
            access_token,
            client,
        })
    }

    /// Fetch the store's open, unfulfilled orders, capped at [`PAGE_LIMIT`].
    ///
    /// Transport failures and non-success statuses abort the run; there is
    /// no retry.
    pub async fn fetch_unfulfilled(&self) -> Result<Vec<Order>> {
        let limit = PAGE_LIMIT.to_string();

        let response = self
            .client
            .get(format!("{}/orders.json", self.base_url))
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json")
            .query(&[
                ("status", "open"),
                ("fulfillment_status", "unfulfilled"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| anyhow!("Shopify request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(anyhow!("Shopify API error ({status}): {error_text}"));
        }

        let body: OrdersResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse orders response: {e}"))?;

        tracing::debug!(count = body.orders.len(), "Fetched unfulfilled orders");
        Ok(body.orders)
    }
}
