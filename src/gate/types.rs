/// Timing of the free-running gate toggle, in milliseconds of the scheduler
/// tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GateConfig {
    /// Gate half-period at multiplier 1. One second gives the reference
    /// counter ~10^7 pulses, i.e. an 8-digit ratio.
    pub base_ms: u64,
    /// Upper bound of the random offset added to every cycle.
    pub jitter_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            base_ms: 1_000,
            jitter_ms: 500,
        }
    }
}
