//! Gate sequencer: toggles the gate output line on a jittered period.
//!
//! The hardware edge-synchronizer turns these toggles into the actual
//! counting window, so the exact toggle moment is uncritical. The jitter is
//! not: with a bare `base_ms * multiplier` period the gate edge can
//! phase-lock to an input whose frequency is a simple integer ratio of the
//! gate rate, and the synchronized window then lands on the same offset every
//! cycle, biasing the measurement by up to one input period in a
//! reproducible direction. A random 0..=jitter_ms offset per cycle breaks
//! the lock.

pub mod types;

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub use types::GateConfig;

pub struct GateSequencer<P: OutputPin> {
    pin: P,
    config: GateConfig,
    multiplier: &'static AtomicU32,
    level: bool,
    rng: SmallRng,
}

impl<P: OutputPin> GateSequencer<P> {
    /// `seed` should come from a hardware entropy word so two instruments
    /// don't jitter in lockstep; any value is safe.
    pub fn new(pin: P, config: GateConfig, multiplier: &'static AtomicU32, seed: u64) -> Self {
        Self {
            pin,
            config,
            multiplier,
            level: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Next toggle delay: `base * multiplier` plus this cycle's jitter. The
    /// multiplier is re-read every cycle so a user change takes effect on the
    /// following window.
    fn next_period(&mut self) -> Duration {
        let multiplier = self.multiplier.load(Ordering::Relaxed).max(1) as u64;
        let jitter = self.rng.gen_range(0..=self.config.jitter_ms);
        Duration::from_millis(self.config.base_ms * multiplier + jitter)
    }

    pub async fn run(mut self) -> ! {
        loop {
            Timer::after(self.next_period()).await;
            self.level = !self.level;
            // After successful pin configuration this cannot fail; if it
            // somehow does, the measurement only loses one window.
            if self.pin.set_state(self.level.into()).is_err() {
                warn!("gate pin write failed");
            }
        }
    }
}
