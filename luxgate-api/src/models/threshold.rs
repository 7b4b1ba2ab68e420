use serde::{Deserialize, Serialize};

/// Threshold applied when nothing has been configured yet.
pub const DEFAULT_THRESHOLD: f64 = 500.0;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Brightness below which the LED is switched on
    pub limite_luz: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            limite_luz: DEFAULT_THRESHOLD,
        }
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self { limite_luz: value }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateThresholdRequest {
    /// New brightness threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limite_luz: Option<f64>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateThresholdResponse {
    /// Always `"ok"`
    pub status: String,
    /// Threshold after the update
    pub config: Threshold,
}
