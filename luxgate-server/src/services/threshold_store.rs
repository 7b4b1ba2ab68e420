use std::sync::Arc;

use luxgate_api::models::Threshold;
use tokio::sync::RwLock;

use crate::errors::ValidationError;

/// Process wide threshold shared by every request handler.
///
/// Cloning the store shares the underlying value. Each read or write holds the
/// lock for a single assignment, so readers observe either the old or the new
/// threshold, never a mix.
#[derive(Debug, Clone, Default)]
pub struct ThresholdStore {
    threshold: Arc<RwLock<Threshold>>,
}

impl ThresholdStore {
    pub fn new(initial: Threshold) -> Self {
        Self {
            threshold: Arc::new(RwLock::new(initial)),
        }
    }

    pub async fn get_threshold(&self) -> Threshold {
        *self.threshold.read().await
    }

    /// Replaces the threshold, last write wins.
    pub async fn set_threshold(&self, candidate: Option<f64>) -> Result<Threshold, ValidationError> {
        let value = candidate.ok_or(ValidationError::MissingField("limite_luz"))?;
        if !value.is_finite() {
            return Err(ValidationError::InvalidNumber("limite_luz"));
        }

        let mut threshold = self.threshold.write().await;
        let previous = *threshold;
        *threshold = Threshold::from(value);

        tracing::info!(
            previous = previous.limite_luz,
            current = value,
            "Threshold updated"
        );

        Ok(*threshold)
    }
}
