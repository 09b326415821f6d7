use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::error::FetchError;
use crate::config::ApiSettings;
use crate::model::User;
use crate::query::Fetcher;

/// Fetches the users resource.
///
/// Holds only the pooled HTTP client and immutable settings, so one
/// instance can serve any number of concurrent calls.
pub struct UsersClient {
    client: Client,
    url: String,
    simulated_latency: Duration,
}

impl UsersClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout())
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            url: settings.users_url(),
            simulated_latency: settings.simulated_latency(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one `GET` of the users resource.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        tracing::debug!(url = %self.url, "Fetching users");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Users request failed");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::from_transport)?;
        let users: Vec<User> = serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        tracing::info!(count = users.len(), "Users received");
        Ok(users)
    }
}

#[async_trait]
impl Fetcher<Vec<User>, FetchError> for UsersClient {
    async fn fetch(&self) -> Result<Vec<User>, FetchError> {
        self.fetch_users().await
    }
}
