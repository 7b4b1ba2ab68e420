use std::time::Duration;

use luxgate_api::models::*;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5001";

/// HTTP client for the public gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_threshold(&self) -> Result<Threshold> {
        let response = self.http_client.get(self.url("/controle/config")).send().await?;

        decode(response).await
    }

    pub async fn update_threshold(&self, value: f64) -> Result<UpdateThresholdResponse> {
        let response = self
            .http_client
            .post(self.url("/controle/config"))
            .json(&UpdateThresholdRequest {
                limite_luz: Some(value),
            })
            .send()
            .await?;

        decode(response).await
    }

    /// Full history in arrival order, oldest first.
    pub async fn fetch_readings(&self) -> Result<Vec<Reading>> {
        let response = self.http_client.get(self.url("/logging/log")).send().await?;

        decode(response).await
    }

    pub async fn post_reading(&self, reading: &Reading) -> Result<StatusResponse> {
        let response = self
            .http_client
            .post(self.url("/logging/log"))
            .json(&CreateReadingRequest::from(reading.clone()))
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|e| e.error.message)
        .unwrap_or(text);

    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
