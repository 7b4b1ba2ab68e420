use luxgate_api::models::Threshold;

use crate::error::{ClientError, Result};
use crate::gateway::GatewayClient;
use crate::status::DerivedStatus;

/// Pull based session over the gateway.
///
/// Nothing is refreshed in the background; every update comes from an
/// explicit call to [`Dashboard::refresh`] or [`Dashboard::submit_threshold`].
pub struct Dashboard {
    client: GatewayClient,
    threshold: Threshold,
    status: Option<DerivedStatus>,
}

impl Dashboard {
    pub fn new(client: GatewayClient) -> Self {
        Self {
            client,
            threshold: Threshold::default(),
            status: None,
        }
    }

    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    /// Last threshold the gateway reported, or the default before the first fetch.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn status(&self) -> Option<&DerivedStatus> {
        self.status.as_ref()
    }

    /// Fetches the threshold, keeping the last known value when that fails.
    pub async fn refresh_threshold(&mut self) -> Threshold {
        match self.client.fetch_threshold().await {
            Ok(threshold) => self.apply_threshold(threshold),
            Err(e) => tracing::warn!("Failed to fetch current threshold: {}", e),
        }

        self.threshold
    }

    /// Fetches history and threshold independently and recomputes the status.
    ///
    /// The two reads are not coordinated, so the threshold may be slightly
    /// newer or older than the latest reading it is compared with.
    pub async fn refresh(&mut self) -> Result<&DerivedStatus> {
        let (readings, threshold) =
            tokio::join!(self.client.fetch_readings(), self.client.fetch_threshold());

        match threshold {
            Ok(threshold) => self.threshold = threshold,
            Err(e) => tracing::warn!("Failed to fetch current threshold: {}", e),
        }

        let readings = readings?;
        tracing::debug!(readings = readings.len(), "History refreshed");

        let status = self
            .status
            .insert(DerivedStatus::compute(readings, self.threshold));

        Ok(&*status)
    }

    /// Parses operator input and replaces the threshold on the gateway.
    pub async fn submit_threshold(&mut self, input: &str) -> Result<Threshold> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let value = input
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ClientError::InvalidInput(input.to_string()))?;

        let response = self.client.update_threshold(value).await?;
        tracing::info!(limite_luz = response.config.limite_luz, "Threshold sent");

        Ok(self.refresh_threshold().await)
    }

    fn apply_threshold(&mut self, threshold: Threshold) {
        self.threshold = threshold;
        if let Some(status) = self.status.take() {
            self.status = Some(status.with_threshold(threshold));
        }
    }
}
