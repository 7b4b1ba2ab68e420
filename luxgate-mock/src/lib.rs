use std::sync::Arc;
use std::time::Duration;

use luxgate_api::models::{Reading, ReadingTimestamp, Threshold};
use luxgate_client::{ActuatorState, GatewayClient};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::time::interval;

use crate::settings::{Sensor, Settings, TimestampMode};
use crate::simulate::sample_lux;

pub mod settings;
pub mod simulate;

/// Stand-in for the light sensor board: polls the threshold, drives a
/// virtual LED and reports each sample to the reading log.
pub struct SensorSimulator {
    client: GatewayClient,
    sensor: Sensor,
    threshold: Threshold,
    tick: u64,
}

impl SensorSimulator {
    pub fn new(sensor: Sensor) -> luxgate_client::Result<Self> {
        Ok(Self {
            client: GatewayClient::new(sensor.gateway_url.clone())?,
            sensor,
            threshold: Threshold::default(),
            tick: 0,
        })
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn next_reading(&mut self) -> Reading {
        let day_ticks = u64::from(self.sensor.day_ticks.max(1));
        let day_fraction = (self.tick % day_ticks) as f64 / day_ticks as f64;
        let valor_luz = sample_lux(day_fraction, self.sensor.noise);

        let timestamp = match self.sensor.timestamp {
            TimestampMode::Iso => OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .map(ReadingTimestamp::Text)
                .unwrap_or(ReadingTimestamp::Sequence(self.tick)),
            TimestampMode::Sequence => ReadingTimestamp::Sequence(self.tick),
        };

        self.tick += 1;

        Reading {
            valor_luz,
            timestamp,
        }
    }

    /// One sensor cycle. A failed threshold poll keeps the previous threshold.
    pub async fn step(&mut self) -> luxgate_client::Result<ActuatorState> {
        match self.client.fetch_threshold().await {
            Ok(threshold) => self.threshold = threshold,
            Err(e) => tracing::warn!("Failed to poll threshold: {}", e),
        }

        let reading = self.next_reading();
        let led = ActuatorState::evaluate(Some(&reading), &self.threshold);
        tracing::info!(
            valor_luz = reading.valor_luz,
            limite_luz = self.threshold.limite_luz,
            "LED {}",
            led
        );

        self.client.post_reading(&reading).await?;

        Ok(led)
    }
}

pub async fn run(settings: &Arc<Settings>) -> luxgate_client::Result<()> {
    let mut simulator = SensorSimulator::new(settings.sensor.clone())?;
    let mut ticker = interval(Duration::from_secs(settings.sensor.interval_secs));

    tracing::info!("Reporting to {}", settings.sensor.gateway_url);

    loop {
        ticker.tick().await;

        if let Err(e) = simulator.step().await {
            tracing::warn!("Failed to report reading: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(timestamp: TimestampMode) -> Sensor {
        Sensor {
            gateway_url: "http://127.0.0.1:9".to_string(),
            interval_secs: 1,
            day_ticks: 4,
            timestamp,
            noise: 0.0,
        }
    }

    #[test]
    fn test_sequence_timestamps() {
        let mut simulator = SensorSimulator::new(sensor(TimestampMode::Sequence)).unwrap();

        let stamps: Vec<ReadingTimestamp> = (0..3).map(|_| simulator.next_reading().timestamp).collect();
        assert_eq!(
            stamps,
            vec![
                ReadingTimestamp::Sequence(0),
                ReadingTimestamp::Sequence(1),
                ReadingTimestamp::Sequence(2),
            ]
        );
    }

    #[test]
    fn test_iso_timestamps() {
        let mut simulator = SensorSimulator::new(sensor(TimestampMode::Iso)).unwrap();

        let ReadingTimestamp::Text(text) = simulator.next_reading().timestamp else {
            panic!("Expected a textual timestamp");
        };
        assert!(OffsetDateTime::parse(&text, &Rfc3339).is_ok());
    }

    #[test]
    fn test_day_cycle_wraps() {
        let mut simulator = SensorSimulator::new(sensor(TimestampMode::Sequence)).unwrap();

        let values: Vec<f64> = (0..8).map(|_| simulator.next_reading().valor_luz).collect();
        assert_eq!(values[..4], values[4..]);
        // Tick 2 of 4 is midday
        assert!(values[2] > values[0]);
    }

    #[tokio::test]
    async fn test_step_keeps_threshold_when_unreachable() {
        let mut simulator = SensorSimulator::new(sensor(TimestampMode::Sequence)).unwrap();

        assert!(simulator.step().await.is_err());
        assert_eq!(simulator.threshold(), Threshold::default());
    }
}
