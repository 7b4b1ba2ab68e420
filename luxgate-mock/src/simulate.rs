use std::f64::consts::PI;

use rand_distr::{Distribution, Normal};

const MAX_SUNLIGHT_LUX: f64 = 1000.0;
const MAX_MOONLIGHT_LUX: f64 = 5.0;

const SUNRISE_START: f64 = 0.23;
const SUNRISE_END: f64 = 0.25;
const SUNSET_START: f64 = 0.73;
const SUNSET_END: f64 = 0.75;

/// Luminosity over a day, `day_fraction` running from midnight (0.0) to midnight (1.0).
pub fn simulation_lux(day_fraction: f64) -> f64 {
    let day_fraction = day_fraction.rem_euclid(1.0);

    if (SUNRISE_START..=SUNSET_END).contains(&day_fraction) {
        if day_fraction <= SUNRISE_END {
            let progress = (day_fraction - SUNRISE_START) / (SUNRISE_END - SUNRISE_START);
            (progress * PI / 2.0).sin() * MAX_SUNLIGHT_LUX
        } else if day_fraction >= SUNSET_START {
            let progress = (day_fraction - SUNSET_START) / (SUNSET_END - SUNSET_START);
            (progress * PI / 2.0).cos() * MAX_SUNLIGHT_LUX
        } else {
            MAX_SUNLIGHT_LUX
        }
    } else {
        // Moonlight peaks at midnight
        let radians = day_fraction * 2.0 * PI;
        (radians.cos().max(0.0) * (MAX_MOONLIGHT_LUX - 0.01)) + 0.01
    }
}

/// One sensor sample with Gaussian noise of standard deviation `noise`, never negative.
pub fn sample_lux(day_fraction: f64, noise: f64) -> f64 {
    let jitter = match Normal::new(0.0, noise) {
        Ok(normal) if noise > 0.0 => normal.sample(&mut rand::rng()),
        _ => 0.0,
    };

    (simulation_lux(day_fraction) + jitter).max(0.0).round()
}
