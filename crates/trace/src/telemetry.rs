//! Decorative link telemetry.
//!
//! These values carry no physical meaning; they are deterministic-plus-
//! jitter functions of progress reproduced only for display consistency.

use rand::Rng;

/// One telemetry reading for the active trace span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    /// Received optical power, dBm. Degrades on a sawtooth as the signal
    /// crosses spans, recovering at each amplifier site.
    pub power_dbm: f64,
    /// Optical signal-to-noise ratio, dB. Degrades linearly with distance.
    pub osnr_db: f64,
    /// Pre-FEC bit error ratio. Zero until late in the path, then a fixed
    /// illustrative constant.
    pub ber: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            power_dbm: -2.0,
            osnr_db: 28.0,
            ber: 0.0,
        }
    }
}

impl Telemetry {
    /// Sample a reading for the given progress.
    pub fn sample<R: Rng>(progress: f64, rng: &mut R) -> Self {
        let power = -2.0 - rng.gen::<f64>() * 2.0 - (progress % 30.0) / 3.0;
        let osnr = 28.0 - progress / 5.0 + rng.gen::<f64>();
        let ber = if progress > 80.0 { 1.2e-4 } else { 0.0 };
        Self {
            power_dbm: round_tenth(power),
            osnr_db: round_tenth(osnr),
            ber,
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
