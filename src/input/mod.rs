//! The two values the operator owns: table index and requested duty.

pub mod types;

use crate::profile::{DutyCycle, DEFAULT_INDEX, PROFILE_TABLE};

pub use types::InputEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuningState {
    pub index: usize,
    pub duty: DutyCycle,
}

impl TuningState {
    pub fn new(index: usize, duty: DutyCycle) -> Self {
        Self {
            index: index.min(PROFILE_TABLE.len() - 1),
            duty,
        }
    }

    /// Applies one event. Returns true when the selection changed and the
    /// waveform timer needs re-arming.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Step(delta) => {
                // Bounded and non-wrapping: turning past either end parks at
                // that end.
                let max = (PROFILE_TABLE.len() - 1) as i32;
                let next = (self.index as i32 + i32::from(delta)).clamp(0, max) as usize;
                let changed = next != self.index;
                self.index = next;
                changed
            }
            InputEvent::DutyButton => {
                self.duty.advance();
                true
            }
            InputEvent::ResetIndex => {
                let changed = self.index != DEFAULT_INDEX;
                self.index = DEFAULT_INDEX;
                changed
            }
        }
    }
}

impl Default for TuningState {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX,
            duty: DutyCycle::DEFAULT,
        }
    }
}
