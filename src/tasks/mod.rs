//! Cooperative task layer. The board binary spawns these on its executor and
//! feeds [`INPUT_BUS`] / [`COUNTER_BANK`] from its interrupt glue:
//! counter-overflow interrupts call [`CounterBank::note_overflow`], the
//! gate-window falling edge calls [`CounterBank::close_window`], the encoder
//! decoder pushes [`InputEvent`]s.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embedded_hal::digital::OutputPin;
use embedded_storage_async::nor_flash::NorFlash;

use crate::counters::CounterBank;
use crate::display::{generator_line, measurement_line};
use crate::estimator::{self, EstimatorError};
use crate::gate::GateSequencer;
use crate::hw::{DisplayPanel, DisplayRow, WaveformOutput};
use crate::input::{InputEvent, TuningState};
use crate::persist::{StoredTuning, TuningStore};
use crate::profile;

/// A shared panel slot; `None` when the display was not detected at boot.
pub type PanelSlot<D> = Mutex<CriticalSectionRawMutex, Option<D>>;

/// Decoded operator input from the board glue to the control task.
pub static INPUT_BUS: Channel<CriticalSectionRawMutex, InputEvent, 8> = Channel::new();

/// User-selected gate multiplier. Single writer (the board's gate-time
/// control glue); read by the sequencer and the estimator.
pub static GATE_MULTIPLIER: AtomicU32 = AtomicU32::new(1);

/// The counters' shared state: overflow/gate interrupt glue on one side,
/// `measure_task` on the other.
pub static COUNTER_BANK: CounterBank = CounterBank::new();

pub async fn gate_task<P: OutputPin>(sequencer: GateSequencer<P>) -> ! {
    sequencer.run().await
}

/// Consumes snapshots as the gate publishes them. Each window stands alone:
/// no smoothing, no averaging, and an empty window is skipped, not shown.
pub async fn measure_task<D: DisplayPanel>(bank: &'static CounterBank, panel: &PanelSlot<D>) -> ! {
    loop {
        let snapshot = bank.wait_snapshot().await;
        match estimator::estimate(&snapshot, GATE_MULTIPLIER.load(Ordering::Relaxed)) {
            Ok(measurement) => {
                debug!(
                    "measured {} Hz ({} significant digits)",
                    measurement.frequency_hz, measurement.sig_figures
                );
                write_row(panel, DisplayRow::Measured, &measurement_line(&measurement)).await;
            }
            Err(EstimatorError::NoReferencePulses) => {
                warn!("empty gate window, skipping this cycle");
            }
        }
    }
}

/// Owns the tuning state: restores it from flash, applies operator input,
/// re-arms the waveform timer and persists every change.
pub async fn control_task<W, D, F>(
    mut waveform: W,
    panel: &PanelSlot<D>,
    mut store: TuningStore<F>,
) -> !
where
    W: WaveformOutput,
    D: DisplayPanel,
    F: NorFlash,
{
    let mut tuning = store.load().await.into_tuning();
    apply_selection(&mut waveform, panel, &tuning).await;

    loop {
        let event = INPUT_BUS.receive().await;
        if !tuning.apply(event) {
            continue;
        }
        apply_selection(&mut waveform, panel, &tuning).await;
        if store.save(&StoredTuning::from(&tuning)).await.is_err() {
            // Worst case the operator re-selects after the next power cycle.
            warn!("failed to persist tuning");
        }
    }
}

async fn apply_selection<W, D>(waveform: &mut W, panel: &PanelSlot<D>, tuning: &TuningState)
where
    W: WaveformOutput,
    D: DisplayPanel,
{
    let selection = profile::select(tuning.index, tuning.duty);
    // The operator debugging line: one tuple per reconfiguration.
    info!(
        "gen: idx={} mult={} on={} off={} duty={}% f={} Hz",
        selection.index,
        selection.profile.tick_multiplier,
        selection.profile.on_ticks,
        selection.profile.off_ticks,
        selection.effective_duty,
        selection.entry.calibrated_hz,
    );
    // Fire-and-forget re-arm: on failure the previous timing keeps running
    // and we only log. No retry.
    if waveform.apply(&selection.profile).is_err() {
        warn!("waveform re-arm failed, keeping previous output");
    }
    write_row(panel, DisplayRow::Generated, &generator_line(&selection)).await;
}

async fn write_row<D: DisplayPanel>(panel: &PanelSlot<D>, row: DisplayRow, text: &str) {
    let mut panel = panel.lock().await;
    if let Some(panel) = panel.as_mut() {
        // A missing or failing panel only loses the readout, never the
        // measurement or the output.
        if panel.write_row(row, text).is_err() {
            warn!("display write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DutyCycle, PulseProfile};
    use embassy_futures::block_on;

    #[derive(Default)]
    struct RecordingWaveform {
        applied: Option<PulseProfile>,
        fail: bool,
    }

    impl WaveformOutput for RecordingWaveform {
        type Error = ();

        fn apply(&mut self, profile: &PulseProfile) -> Result<(), Self::Error> {
            if self.fail {
                return Err(());
            }
            self.applied = Some(*profile);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingPanel {
        rows: [heapless::String<32>; 2],
    }

    impl DisplayPanel for RecordingPanel {
        type Error = ();

        fn write_row(&mut self, row: DisplayRow, text: &str) -> Result<(), Self::Error> {
            let slot = match row {
                DisplayRow::Measured => &mut self.rows[0],
                DisplayRow::Generated => &mut self.rows[1],
            };
            slot.clear();
            slot.push_str(text).map_err(|_| ())
        }
    }

    #[test]
    fn reconfiguration_arms_the_row_timing() {
        let mut waveform = RecordingWaveform::default();
        let panel: PanelSlot<RecordingPanel> = Mutex::new(Some(RecordingPanel::default()));
        let tuning = TuningState::new(7, DutyCycle::from_percent(60).unwrap());

        block_on(apply_selection(&mut waveform, &panel, &tuning));

        let armed = waveform.applied.unwrap();
        assert_eq!(armed.tick_multiplier, 2);
        assert_eq!(armed.on_ticks + armed.off_ticks, 20_000);
        let panel = block_on(panel.lock());
        assert_eq!(panel.as_ref().unwrap().rows[1].as_str(), "1.0001kHz 60%");
    }

    #[test]
    fn rearm_failure_is_swallowed() {
        let mut waveform = RecordingWaveform {
            fail: true,
            ..Default::default()
        };
        let panel: PanelSlot<RecordingPanel> = Mutex::new(None);
        let tuning = TuningState::default();

        // Must neither panic nor touch the recorded state.
        block_on(apply_selection(&mut waveform, &panel, &tuning));
        assert!(waveform.applied.is_none());
    }

    #[test]
    fn absent_panel_disables_only_the_readout() {
        let panel: PanelSlot<RecordingPanel> = Mutex::new(None);
        block_on(write_row(&panel, DisplayRow::Measured, "4.9999832Hz"));
    }
}
