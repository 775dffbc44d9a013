//! Traits for the fixed-purpose hardware the firmware core drives.
//!
//! The edge-synchronized gate window, the two pulse counters, the waveform
//! timer and the character LCD are all board peripherals. The core only ever
//! talks to them through these seams, so the whole measurement/generation
//! engine runs on the host for testing.

use crate::profile::types::PulseProfile;

/// One gated hardware pulse counter (reference or signal input).
///
/// The counter is armed with a compare threshold of
/// [`COUNTER_LIMIT`](crate::counters::COUNTER_LIMIT); reaching it raises the
/// overflow interrupt and wraps the count back to zero.
pub trait PulseChannel {
    /// Stop accumulating without losing the current value.
    fn pause(&mut self);
    /// Resume accumulating.
    fn resume(&mut self);
    /// Current count. While paused this is stable and strictly below the
    /// compare threshold.
    fn count(&self) -> u32;
    /// Reset the count to zero.
    fn clear(&mut self);
    /// Consume the compare-match latch of a wrap the overflow handler has not
    /// serviced yet. Used by the snapshot transaction to attribute such a
    /// wrap to the window that is closing.
    fn take_pending_overflow(&mut self) -> bool;
}

/// The output timer that turns a [`PulseProfile`] into a physical two-level
/// signal.
pub trait WaveformOutput {
    type Error;

    /// Full reconfigure, equivalent to stop-then-restart with the new timing.
    /// The output glitches for a bounded time on every call; acceptable for a
    /// hand-tuned bench instrument.
    fn apply(&mut self, profile: &PulseProfile) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRow {
    /// Line 1: the measured input frequency.
    Measured,
    /// Line 2: the generated frequency and duty.
    Generated,
}

/// Two-line fixed-width character panel. Strictly best-effort: the device
/// may be absent and nothing besides the readout depends on it.
pub trait DisplayPanel {
    type Error;

    fn write_row(&mut self, row: DisplayRow, text: &str) -> Result<(), Self::Error>;
}
