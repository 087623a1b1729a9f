//! HTTP adapter for a remote ledger process
//!
//! Posts one transfer message per call to the process that owns the
//! asset (or to the caller's profile process in shared mode).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::traits::AssetEndpoint;
use crate::transfer::types::CallResult;

/// Endpoint handle bound to one ledger process
pub struct LedgerEndpoint {
    client: Client,
    base_url: String,
    process_id: String,
}

impl LedgerEndpoint {
    pub fn new(client: Client, base_url: &str, process_id: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            process_id: process_id.to_string(),
        }
    }

    /// Create an HTTP client with pooled connections and timeouts
    pub fn build_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    /// Build one endpoint handle per supplied process id, sharing the client
    pub fn build_pool(
        client: &Client,
        base_url: &str,
        process_ids: &[String],
    ) -> Vec<Arc<dyn AssetEndpoint>> {
        process_ids
            .iter()
            .map(|process_id| {
                Arc::new(LedgerEndpoint::new(client.clone(), base_url, process_id))
                    as Arc<dyn AssetEndpoint>
            })
            .collect()
    }
}

#[async_trait]
impl AssetEndpoint for LedgerEndpoint {
    async fn transfer(&self, asset_id: &str, recipient: &str, quantity: &str) -> CallResult {
        let url = format!("{}/process/{}/transfer", self.base_url, self.process_id);
        let body = json!({
            "action": "Transfer",
            "recipient": recipient,
            "asset_id": asset_id,
            "quantity": quantity,
        });

        match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => CallResult::Success,
            Ok(response) => CallResult::Failed(format!("ledger returned {}", response.status())),
            Err(e) => CallResult::Failed(e.to_string()),
        }
    }

    fn name(&self) -> &str {
        &self.process_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimmed() {
        let endpoint =
            LedgerEndpoint::new(LedgerEndpoint::build_client(), "http://localhost:3000/", "p1");

        assert_eq!(endpoint.base_url, "http://localhost:3000");
        assert_eq!(endpoint.name(), "p1");
    }

    #[test]
    fn test_build_pool_preserves_order() {
        let client = LedgerEndpoint::build_client();
        let ids = vec!["p1".to_string(), "p2".to_string(), "p3".to_string()];

        let pool = LedgerEndpoint::build_pool(&client, "http://localhost:3000", &ids);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].name(), "p1");
        assert_eq!(pool[1].name(), "p2");
        assert_eq!(pool[2].name(), "p3");
    }
}
