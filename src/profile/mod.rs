//! Pulse profile selector: table row + requested duty -> armed timing.

pub mod table;
pub mod types;

pub use table::PROFILE_TABLE;
pub use types::{DutyCycle, PulseProfile, PulseProfileEntry};

/// Half-period band (both ends exclusive) within which the timer resolution
/// can represent a skewed on/off split reliably. Outside it duty is pinned
/// at 50 % no matter what was requested.
pub const DUTY_FEASIBLE_MIN_TICKS: u32 = 40;
pub const DUTY_FEASIBLE_MAX_TICKS: u32 = 18_000;

/// The out-of-the-box row (1 kHz) the reset gesture returns to.
pub const DEFAULT_INDEX: usize = 7;

pub fn duty_feasible(half_period_ticks: u32) -> bool {
    half_period_ticks > DUTY_FEASIBLE_MIN_TICKS && half_period_ticks < DUTY_FEASIBLE_MAX_TICKS
}

impl DutyCycle {
    pub const DEFAULT: DutyCycle = DutyCycle(50);

    /// Validated constructor for values coming back from flash.
    pub fn from_percent(percent: u8) -> Option<DutyCycle> {
        ((10..=90).contains(&percent) && percent % 10 == 0).then_some(DutyCycle(percent))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Button step: +10, wrapping 90 -> 10. Advances even while the current
    /// row cannot honor it; the row pins the effective duty, not the stored
    /// request.
    pub fn advance(&mut self) {
        self.0 = if self.0 >= 90 { 10 } else { self.0 + 10 };
    }
}

/// On/off tick split for one half-period. Returns the armed counts plus the
/// duty that actually applies (50 when the row is infeasible).
///
/// `on = round(period * percent / 100)` in pure integer arithmetic, so at
/// 50 % this collapses to exactly `on == off == half_period_ticks` and the
/// row's calibration holds untouched.
pub fn split_half_period(half_period_ticks: u32, requested: DutyCycle) -> (u32, u32, u8) {
    if !duty_feasible(half_period_ticks) || requested.percent() == 50 {
        return (half_period_ticks, half_period_ticks, 50);
    }
    let period = 2 * half_period_ticks;
    let on = ((u64::from(period) * u64::from(requested.percent()) + 50) / 100) as u32;
    (on, period - on, requested.percent())
}

/// A fully resolved selection: the table row plus the timing to arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub entry: &'static PulseProfileEntry,
    pub profile: PulseProfile,
    /// Duty that ends up on the output.
    pub effective_duty: u8,
}

pub fn select(index: usize, requested: DutyCycle) -> Selection {
    let index = index.min(PROFILE_TABLE.len() - 1);
    let entry = &PROFILE_TABLE[index];
    let (on_ticks, off_ticks, effective_duty) =
        split_half_period(entry.half_period_ticks, requested);
    Selection {
        index,
        entry,
        profile: PulseProfile {
            tick_multiplier: entry.tick_multiplier,
            on_ticks,
            off_ticks,
        },
        effective_duty,
    }
}
