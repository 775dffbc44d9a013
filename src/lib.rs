#![cfg_attr(not(test), no_std)]

//! Core of a reciprocal frequency counter and two-level pulse generator.
//!
//! Measurement side: a jittered gate toggle is edge-synchronized in hardware
//! to the input signal, two gated counters accumulate reference and signal
//! pulses across overflows, and the estimator turns each window's snapshot
//! into an 8-significant-digit frequency.
//!
//! Generation side: a precomputed timing table maps the selected row and the
//! requested duty to the prescaler/on/off triple armed into the waveform
//! timer.
//!
//! Everything chip-specific (counter peripherals, waveform timer, LCD, the
//! encoder glue) stays behind the traits in [`hw`]; the per-board binary
//! binds them and spawns the tasks in [`tasks`].

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod counters;
pub mod display;
pub mod estimator;
pub mod gate;
pub mod hw;
pub mod input;
pub mod persist;
pub mod profile;
pub mod tasks;
