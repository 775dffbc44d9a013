/// One reciprocal-count result, ready for display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub frequency_hz: f64,
    /// Total significant decimal digits this measurement is good for.
    pub sig_figures: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EstimatorError {
    /// The gate window contained no reference pulses, so the ratio is
    /// undefined. The cycle is skipped, never divided.
    NoReferencePulses,
}
