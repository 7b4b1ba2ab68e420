use std::fmt::Write;

use time::UtcOffset;

use crate::status::{DerivedStatus, format_timestamp};

pub fn render_status(status: &DerivedStatus, offset: UtcOffset, limit: Option<usize>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "LED:       {}", status.actuator_state);
    let _ = writeln!(out, "Threshold: {}", status.threshold.limite_luz);
    match status.latest_reading() {
        Some(reading) => {
            let _ = writeln!(out, "Latest:    {}", reading.valor_luz);
        }
        None => {
            let _ = writeln!(out, "Latest:    -");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "History ({} readings)", status.history.len());

    let shown = limit.unwrap_or(status.history.len());
    for (index, reading) in status.history.iter().take(shown).enumerate() {
        let marker = if index == 0 { "  (latest)" } else { "" };
        let _ = writeln!(
            out,
            "  {:>8}  {}{}",
            reading.valor_luz,
            format_timestamp(&reading.timestamp, offset),
            marker
        );
    }

    out
}
