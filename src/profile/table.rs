//! The generator timing table. Build-time data, never computed on the
//! device.
//!
//! Every row satisfies `nominal_hz * 2 * half_period_ticks * tick_multiplier
//! == TICK_CLOCK_HZ` exactly; the calibrated column is the same division
//! done with the measured tick clock instead of the nominal one.

use super::types::PulseProfileEntry;

/// Waveform timer input clock, nominal. PLL'd up 4x from the same 10 MHz
/// reference the counters use.
pub const TICK_CLOCK_HZ: f64 = 40_000_000.0;

/// Measured tick clock: 4x the calibrated reference.
pub const TICK_CLOCK_CAL_HZ: f64 = 40_005_221.6;

/// Rows in ascending nominal frequency, 1-2-5 per decade, 5 Hz to 5 MHz.
pub static PROFILE_TABLE: [PulseProfileEntry; 19] = [
    PulseProfileEntry { tick_multiplier: 256, half_period_ticks: 15_625, nominal_hz: 5.0, calibrated_hz: 5.000_652_7 },
    PulseProfileEntry { tick_multiplier: 128, half_period_ticks: 15_625, nominal_hz: 10.0, calibrated_hz: 10.001_305_4 },
    PulseProfileEntry { tick_multiplier: 64, half_period_ticks: 15_625, nominal_hz: 20.0, calibrated_hz: 20.002_610_8 },
    PulseProfileEntry { tick_multiplier: 32, half_period_ticks: 12_500, nominal_hz: 50.0, calibrated_hz: 50.006_527 },
    PulseProfileEntry { tick_multiplier: 16, half_period_ticks: 12_500, nominal_hz: 100.0, calibrated_hz: 100.013_054 },
    PulseProfileEntry { tick_multiplier: 8, half_period_ticks: 12_500, nominal_hz: 200.0, calibrated_hz: 200.026_108 },
    PulseProfileEntry { tick_multiplier: 4, half_period_ticks: 10_000, nominal_hz: 500.0, calibrated_hz: 500.065_27 },
    PulseProfileEntry { tick_multiplier: 2, half_period_ticks: 10_000, nominal_hz: 1_000.0, calibrated_hz: 1_000.130_54 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 10_000, nominal_hz: 2_000.0, calibrated_hz: 2_000.261_08 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 4_000, nominal_hz: 5_000.0, calibrated_hz: 5_000.652_7 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 2_000, nominal_hz: 10_000.0, calibrated_hz: 10_001.305_4 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 1_000, nominal_hz: 20_000.0, calibrated_hz: 20_002.610_8 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 400, nominal_hz: 50_000.0, calibrated_hz: 50_006.527 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 200, nominal_hz: 100_000.0, calibrated_hz: 100_013.054 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 100, nominal_hz: 200_000.0, calibrated_hz: 200_026.108 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 40, nominal_hz: 500_000.0, calibrated_hz: 500_065.27 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 20, nominal_hz: 1_000_000.0, calibrated_hz: 1_000_130.54 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 10, nominal_hz: 2_000_000.0, calibrated_hz: 2_000_261.08 },
    PulseProfileEntry { tick_multiplier: 1, half_period_ticks: 4, nominal_hz: 5_000_000.0, calibrated_hz: 5_000_652.7 },
];
