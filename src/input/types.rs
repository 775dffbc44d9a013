/// Decoded operator input. The board glue owns the quadrature decoding and
/// button debouncing; only the resulting events cross into the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Signed detent count from the rotary encoder.
    Step(i16),
    /// Momentary duty button press.
    DutyButton,
    /// Long-press gesture: back to the default row.
    ResetIndex,
}
