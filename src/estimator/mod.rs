//! Frequency estimator: one snapshot in, one frequency out.
//!
//! Reciprocal counting: both counters run over the same edge-synchronized
//! window, so `sig/ref` is an exact cycle ratio and the reference calibration
//! carries the full precision. No smoothing or averaging across cycles.

pub mod types;

use crate::counters::CounterSnapshot;

pub use types::{EstimatorError, Measurement};

/// True frequency of the nominal 10 MHz reference, measured against an
/// external standard. Calibration data, not computed at runtime.
pub const REFERENCE_FREQUENCY_HZ: f64 = 10_001_305.4;

/// Significant digits a one-second gate (multiplier 1) resolves: ~10^7
/// reference pulses plus the synchronized window give just about 8.
const BASE_SIG_FIGURES: u8 = 8;

pub fn estimate(
    snapshot: &CounterSnapshot,
    gate_multiplier: u32,
) -> Result<Measurement, EstimatorError> {
    let ref_total = snapshot.ref_total();
    if ref_total == 0 {
        return Err(EstimatorError::NoReferencePulses);
    }
    let frequency_hz = snapshot.sig_total() as f64 / ref_total as f64 * REFERENCE_FREQUENCY_HZ;
    Ok(Measurement {
        frequency_hz,
        sig_figures: sig_figures(gate_multiplier),
    })
}

/// A longer gate accumulates proportionally more reference pulses, so the
/// digit budget grows by one per decade of gate multiplier.
fn sig_figures(gate_multiplier: u32) -> u8 {
    BASE_SIG_FIGURES + int_digits(gate_multiplier.max(1) as f64) - 1
}

/// Decimal digits before the point; 0 for values below 1.
pub(crate) fn int_digits(value: f64) -> u8 {
    if value < 1.0 {
        return 0;
    }
    let mut digits = 0;
    let mut v = value as u64;
    while v > 0 {
        v /= 10;
        digits += 1;
    }
    digits
}

impl Measurement {
    /// Digits to show after the decimal point when rendered in Hz:
    /// whatever the significant-digit budget leaves over.
    pub fn frac_digits(&self) -> u8 {
        self.sig_figures.saturating_sub(int_digits(self.frequency_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ref_total: u64, sig_total: u64) -> CounterSnapshot {
        use crate::counters::COUNTER_LIMIT;
        CounterSnapshot {
            ref_count: (ref_total % u64::from(COUNTER_LIMIT)) as u32,
            ref_overflow: (ref_total / u64::from(COUNTER_LIMIT)) as u32,
            sig_count: (sig_total % u64::from(COUNTER_LIMIT)) as u32,
            sig_overflow: (sig_total / u64::from(COUNTER_LIMIT)) as u32,
        }
    }

    #[test]
    fn matches_calibration_run() {
        // Numbers taken from a real synchronized-gate calibration capture.
        let m = estimate(&snapshot(10_001_339, 5), 1).unwrap();
        assert!((m.frequency_hz - 4.999_983_2).abs() < 1e-6);
        assert_eq!(m.sig_figures, 8);
    }

    #[test]
    fn unsynchronized_window_shows_in_ref_total_alone() {
        // Same input signal, gate not edge-synchronized: the only difference
        // is the reference total, there is no separate code path.
        let m = estimate(&snapshot(10_004_615, 5), 1).unwrap();
        assert!((m.frequency_hz - 4.998_345_9).abs() < 1e-6);
    }

    #[test]
    fn empty_reference_window_is_an_error_not_a_division() {
        assert_eq!(
            estimate(&snapshot(0, 123), 1),
            Err(EstimatorError::NoReferencePulses)
        );
    }

    #[test]
    fn monotone_in_signal_count() {
        let mut last = 0.0;
        for sig in [1u64, 2, 10, 500, 19_999, 20_000, 123_456] {
            let m = estimate(&snapshot(10_001_339, sig), 1).unwrap();
            assert!(m.frequency_hz > last);
            last = m.frequency_hz;
        }
    }

    #[test]
    fn digit_budget_tracks_the_magnitude() {
        let m = Measurement {
            frequency_hz: 123.456,
            sig_figures: 8,
        };
        assert_eq!(m.frac_digits(), 5);

        let m = Measurement {
            frequency_hz: 0.5,
            sig_figures: 8,
        };
        assert_eq!(m.frac_digits(), 8);

        let m = Measurement {
            frequency_hz: 5_000_652.7,
            sig_figures: 8,
        };
        assert_eq!(m.frac_digits(), 1);
    }

    #[test]
    fn digit_budget_scales_with_gate_length() {
        assert_eq!(sig_figures(1), 8);
        assert_eq!(sig_figures(10), 9);
        assert_eq!(sig_figures(100), 10);
        // Multiplier 0 would be a configuration bug; treated as 1.
        assert_eq!(sig_figures(0), 8);
    }
}
