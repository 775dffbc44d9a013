/// One row of the generator timing table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseProfileEntry {
    /// Prescaler applied to the waveform tick clock.
    pub tick_multiplier: u32,
    /// Ticks per half period at 50 % duty.
    pub half_period_ticks: u32,
    /// The frequency this row is labeled with.
    pub nominal_hz: f64,
    /// What the row actually produces, given the measured tick clock.
    pub calibrated_hz: f64,
}

/// The timing actually armed into the waveform timer: prescaler plus on/off
/// tick counts. Fully determines frequency and duty of the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseProfile {
    pub tick_multiplier: u32,
    pub on_ticks: u32,
    pub off_ticks: u32,
}

/// Requested duty in percent: 10..=90 in steps of ten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycle(pub(crate) u8);
