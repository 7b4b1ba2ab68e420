use std::fmt;

use luxgate_api::models::{Reading, ReadingTimestamp, Threshold};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const DISPLAY_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year], [hour]:[minute]:[second]");

// Datetimes without an offset are local wall-clock time.
const LOCAL_FORMATS: [&[BorrowedFormatItem<'_>]; 3] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
];

// Minute precision with an offset, which RFC 3339 does not cover.
const UTC_MINUTE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]Z");
const OFFSET_MINUTE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
);

/// What the LED should be doing given the latest reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorState {
    On,
    Off,
    Unknown,
}

impl ActuatorState {
    /// The LED is on while the latest reading is strictly darker than the threshold.
    pub fn evaluate(latest: Option<&Reading>, threshold: &Threshold) -> Self {
        match latest {
            None => ActuatorState::Unknown,
            Some(reading) if reading.valor_luz < threshold.limite_luz => ActuatorState::On,
            Some(_) => ActuatorState::Off,
        }
    }
}

impl fmt::Display for ActuatorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActuatorState::On => write!(f, "ON"),
            ActuatorState::Off => write!(f, "OFF"),
            ActuatorState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Client side view computed from one fetch of history and threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStatus {
    /// Readings with the most recent first.
    pub history: Vec<Reading>,
    pub threshold: Threshold,
    pub actuator_state: ActuatorState,
}

impl DerivedStatus {
    /// `readings` must be in arrival order, as the reading log returns them.
    pub fn compute(mut readings: Vec<Reading>, threshold: Threshold) -> Self {
        readings.reverse();
        let actuator_state = ActuatorState::evaluate(readings.first(), &threshold);

        Self {
            history: readings,
            threshold,
            actuator_state,
        }
    }

    pub fn latest_reading(&self) -> Option<&Reading> {
        self.history.first()
    }

    /// Re-evaluates the actuator against a newer threshold without refetching history.
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.actuator_state = ActuatorState::evaluate(self.history.first(), &threshold);
        self.threshold = threshold;
        self
    }
}

/// Parses a calendar timestamp, reading offset-less values in `local`.
pub fn parse_timestamp(timestamp: &ReadingTimestamp, local: UtcOffset) -> Option<OffsetDateTime> {
    let ReadingTimestamp::Text(text) = timestamp else {
        return None;
    };

    if let Ok(datetime) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(datetime);
    }

    if let Ok(datetime) = OffsetDateTime::parse(text, OFFSET_MINUTE_FORMAT) {
        return Some(datetime);
    }

    if let Ok(datetime) = PrimitiveDateTime::parse(text, UTC_MINUTE_FORMAT) {
        return Some(datetime.assume_utc());
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(text, format).ok())
        .map(|datetime| datetime.assume_offset(local))
}

/// Renders calendar timestamps in `offset`, anything else as a sequence label.
pub fn format_timestamp(timestamp: &ReadingTimestamp, offset: UtcOffset) -> String {
    parse_timestamp(timestamp, offset)
        .and_then(|datetime| datetime.to_offset(offset).format(DISPLAY_FORMAT).ok())
        .unwrap_or_else(|| format!("Reading #{timestamp}"))
}
