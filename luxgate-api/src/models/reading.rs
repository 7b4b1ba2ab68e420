use std::fmt;

use serde::{Deserialize, Serialize};

/// Producer supplied time marker, kept in the form it arrived in.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingTimestamp {
    /// ISO datetime or any opaque textual token
    Text(String),
    /// Counter of a device without a wall clock
    Sequence(u64),
}

impl fmt::Display for ReadingTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingTimestamp::Text(text) => write!(f, "{text}"),
            ReadingTimestamp::Sequence(seq) => write!(f, "{seq}"),
        }
    }
}

impl From<&str> for ReadingTimestamp {
    fn from(value: &str) -> Self {
        ReadingTimestamp::Text(value.to_string())
    }
}

impl From<String> for ReadingTimestamp {
    fn from(value: String) -> Self {
        ReadingTimestamp::Text(value)
    }
}

impl From<u64> for ReadingTimestamp {
    fn from(value: u64) -> Self {
        ReadingTimestamp::Sequence(value)
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Measured luminosity
    pub valor_luz: f64,
    /// When the device took the measurement
    pub timestamp: ReadingTimestamp,
}

impl Reading {
    pub fn new(valor_luz: f64, timestamp: impl Into<ReadingTimestamp>) -> Self {
        Self {
            valor_luz,
            timestamp: timestamp.into(),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReadingRequest {
    /// Measured luminosity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_luz: Option<f64>,
    /// When the device took the measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<ReadingTimestamp>,
}

impl From<Reading> for CreateReadingRequest {
    fn from(reading: Reading) -> Self {
        Self {
            valor_luz: Some(reading.valor_luz),
            timestamp: Some(reading.timestamp),
        }
    }
}
