//! Rendering for the two-line character panel.

use core::fmt::Write;

use heapless::String;

use crate::estimator::{int_digits, Measurement};
use crate::profile::Selection;

/// Character width of the panel.
pub const LINE_WIDTH: usize = 16;

pub type Line = String<LINE_WIDTH>;

fn scaled(hz: f64) -> (f64, &'static str) {
    if hz >= 1_000_000.0 {
        (hz / 1_000_000.0, "MHz")
    } else if hz >= 1_000.0 {
        (hz / 1_000.0, "kHz")
    } else {
        (hz, "Hz")
    }
}

/// Line 1: the measured frequency, unit-scaled, with exactly the fractional
/// digits the gate length earns (the significant-digit budget follows the
/// value through the unit scaling).
pub fn measurement_line(measurement: &Measurement) -> Line {
    let (value, unit) = scaled(measurement.frequency_hz);
    let frac = usize::from(measurement.sig_figures.saturating_sub(int_digits(value))).min(9);
    let mut line = Line::new();
    // Capacity overruns just truncate; the panel is best-effort anyway.
    let _ = write!(line, "{:.*}{}", frac, value, unit);
    line
}

/// Line 2: generated frequency and effective duty. Shorter digit budget so
/// the duty suffix always fits.
pub fn generator_line(selection: &Selection) -> Line {
    let (value, unit) = scaled(selection.entry.calibrated_hz);
    let frac = usize::from(6u8.saturating_sub(int_digits(value))).min(4);
    let mut line = Line::new();
    let _ = write!(
        line,
        "{:.*}{} {}%",
        frac, value, unit, selection.effective_duty
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{select, DutyCycle};

    fn measurement(hz: f64) -> Measurement {
        Measurement {
            frequency_hz: hz,
            sig_figures: 8,
        }
    }

    #[test]
    fn hz_range_shows_the_full_budget() {
        assert_eq!(measurement_line(&measurement(4.999_983_2)).as_str(), "4.9999832Hz");
        assert_eq!(measurement_line(&measurement(123.456)).as_str(), "123.45600Hz");
    }

    #[test]
    fn units_scale_with_magnitude() {
        assert_eq!(measurement_line(&measurement(10_001.305_4)).as_str(), "10.001305kHz");
        assert_eq!(measurement_line(&measurement(5_000_652.7)).as_str(), "5.0006527MHz");
    }

    #[test]
    fn lines_fit_the_panel() {
        for hz in [0.5, 4.999_983_2, 999.999_99, 123_456.78, 5_000_652.7] {
            assert!(measurement_line(&measurement(hz)).len() <= LINE_WIDTH);
        }
        for index in 0..19 {
            let line = generator_line(&select(index, DutyCycle::DEFAULT));
            assert!(line.len() <= LINE_WIDTH);
        }
    }

    #[test]
    fn generator_line_shows_duty() {
        let selection = select(7, DutyCycle::from_percent(60).unwrap());
        assert_eq!(generator_line(&selection).as_str(), "1.0001kHz 60%");

        // Infeasible row: requested duty suppressed, 50 shown.
        let selection = select(15, DutyCycle::from_percent(60).unwrap());
        assert_eq!(generator_line(&selection).as_str(), "500.065kHz 50%");
    }
}
