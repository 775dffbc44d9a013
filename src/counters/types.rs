use super::COUNTER_LIMIT;

/// Raw capture of both gated counters for one gate window. Produced by the
/// snapshot transaction, consumed exactly once by the estimator, then
/// discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterSnapshot {
    /// Reference counter value, `0 <= ref_count < COUNTER_LIMIT`.
    pub ref_count: u32,
    /// Times the reference counter hit the compare threshold this window.
    pub ref_overflow: u32,
    /// Signal counter value, `0 <= sig_count < COUNTER_LIMIT`.
    pub sig_count: u32,
    /// Times the signal counter hit the compare threshold this window.
    pub sig_overflow: u32,
}

impl CounterSnapshot {
    pub fn ref_total(&self) -> u64 {
        u64::from(self.ref_overflow) * u64::from(COUNTER_LIMIT) + u64::from(self.ref_count)
    }

    pub fn sig_total(&self) -> u64 {
        u64::from(self.sig_overflow) * u64::from(COUNTER_LIMIT) + u64::from(self.sig_count)
    }
}
