//! Shared state of the two gated pulse counters.
//!
//! This is the only state crossing the interrupt/main-loop boundary on the
//! measurement side, so everything here is either an atomic with a single
//! writer or the snapshot [`Signal`], whose signal/wait pair is the
//! release/acquire publish point between the gate-edge interrupt and the
//! measurement task.

pub mod types;

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::hw::PulseChannel;

pub use types::CounterSnapshot;

/// Compare threshold both hardware counters are armed with. Deliberately
/// below the 16-bit ceiling so a wrap is always a clean compare-match event
/// and never a silent rollover.
pub const COUNTER_LIMIT: u32 = 20_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterLine {
    Reference,
    Signal,
}

pub struct CounterBank {
    ref_overflow: AtomicU32,
    sig_overflow: AtomicU32,
    snapshot: Signal<CriticalSectionRawMutex, CounterSnapshot>,
}

impl CounterBank {
    pub const fn new() -> Self {
        Self {
            ref_overflow: AtomicU32::new(0),
            sig_overflow: AtomicU32::new(0),
            snapshot: Signal::new(),
        }
    }

    /// Overflow interrupt path. O(1), allocation-free, runs regardless of
    /// gate state. Nothing else may write these tallies.
    pub fn note_overflow(&self, line: CounterLine) {
        let tally = match line {
            CounterLine::Reference => &self.ref_overflow,
            CounterLine::Signal => &self.sig_overflow,
        };
        tally.fetch_add(1, Ordering::Release);
    }

    /// The snapshot transaction, run from the falling edge of the
    /// synchronized gate window.
    ///
    /// The caller must keep the overflow interrupt masked for the duration of
    /// the call. A wrap that latched in hardware just before the pause is
    /// folded in here via [`PulseChannel::take_pending_overflow`] and credited
    /// to the window that is closing; consuming the latch keeps the handler
    /// from counting the same wrap again for the next window. That is the
    /// whole resolution of the pause/clear overflow race: one defined owner
    /// per latched event.
    pub fn close_window<R, S>(&self, reference: &mut R, signal: &mut S)
    where
        R: PulseChannel,
        S: PulseChannel,
    {
        reference.pause();
        signal.pause();

        let mut ref_overflow = self.ref_overflow.swap(0, Ordering::AcqRel);
        if reference.take_pending_overflow() {
            ref_overflow += 1;
        }
        let mut sig_overflow = self.sig_overflow.swap(0, Ordering::AcqRel);
        if signal.take_pending_overflow() {
            sig_overflow += 1;
        }

        let snapshot = CounterSnapshot {
            ref_count: reference.count(),
            ref_overflow,
            sig_count: signal.count(),
            sig_overflow,
        };

        reference.clear();
        signal.clear();
        reference.resume();
        signal.resume();

        // Single-slot handoff: if the consumer is still busy with the last
        // window, the older snapshot is silently overwritten.
        self.snapshot.signal(snapshot);
    }

    pub async fn wait_snapshot(&self) -> CounterSnapshot {
        self.snapshot.wait().await
    }

    pub fn try_take_snapshot(&self) -> Option<CounterSnapshot> {
        self.snapshot.try_take()
    }
}
