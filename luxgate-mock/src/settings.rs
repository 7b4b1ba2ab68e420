use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    Iso,
    Sequence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub gateway_url: String,
    pub interval_secs: u64,
    pub day_ticks: u32,
    pub timestamp: TimestampMode,
    pub noise: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub sensor: Sensor,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/mock.toml"
        )))?;

        settings.sensor.validate()?;

        Ok(settings)
    }
}

impl Sensor {
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.day_ticks == 0 || self.interval_secs == 0 {
            return Err("sensor.day_ticks and sensor.interval_secs must be positive".into());
        }

        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err("sensor.noise must be a finite, non-negative number".into());
        }

        Ok(())
    }
}
