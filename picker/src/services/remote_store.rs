//! HTTP client for the contracted collection endpoints

use async_trait::async_trait;

use crate::error::StoreFailure;
use crate::traits::RemoteStore;
use shared::Restaurant;

/// Remote store backed by the collection webserver.
///
/// One attempt per operation; no retries or backoff. Failures carry enough
/// detail for the coordinator's degradation warning.
pub struct HttpRemoteStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRemoteStore {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/restaurants-collection", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn fetch(&self) -> Result<Vec<Restaurant>, StoreFailure> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| StoreFailure::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreFailure::Status(response.status().as_u16()));
        }

        response
            .json::<Vec<Restaurant>>()
            .await
            .map_err(|e| StoreFailure::Decode(e.to_string()))
    }

    async fn replace(&self, snapshot: &[Restaurant]) -> Result<(), StoreFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&snapshot)
            .send()
            .await
            .map_err(|e| StoreFailure::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreFailure::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
