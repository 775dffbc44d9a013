use serde::{Deserialize, Serialize};

use crate::input::TuningState;
use crate::profile::DEFAULT_INDEX;

/// The two integers that survive a power cycle: last table index and last
/// requested duty percent. Nothing else is retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTuning {
    pub index: u16,
    pub duty_percent: u8,
}

impl Default for StoredTuning {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX as u16,
            duty_percent: 50,
        }
    }
}

impl From<&TuningState> for StoredTuning {
    fn from(tuning: &TuningState) -> Self {
        Self {
            index: tuning.index as u16,
            duty_percent: tuning.duty.percent(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    Serialize,
    Flash,
}
