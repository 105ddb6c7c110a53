use crate::domain::model::{parse_park_lines, ParkRecord, StateCode};
use crate::domain::ports::ParkSource;
use crate::utils::error::{ParkError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Talks to a running lookup service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpParkClient {
    client: Client,
    endpoint: Url,
}

impl HttpParkClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET with one query parameter. Non-2xx statuses become `ServiceError`
    /// carrying the raw body text.
    async fn get_text(&self, key: &str, value: &str) -> Result<String> {
        tracing::debug!("GET {}?{}={}", self.endpoint, key, value);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[(key, value)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Lookup service responded {} ({} bytes)", status, body.len());

        if status.is_success() {
            Ok(body)
        } else {
            Err(ParkError::ServiceError {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl ParkSource for HttpParkClient {
    async fn list_parks(&self, state: &StateCode) -> Result<Vec<String>> {
        let body = self.get_text("state", state.as_str()).await?;
        Ok(parse_park_lines(&body))
    }

    async fn park_info(&self, name: &str) -> Result<ParkRecord> {
        let body = self.get_text("park", name).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
