//! RF Test-Mode Beacon Library
//!
//! This library drives a radio's low-level RF test-mode interface to put
//! identifiable test signals on the air: Morse-coded CW identification and
//! three synthetic modulation waveforms for bench work.
//!
//! # Architecture
//!
//! The library is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │        Beacon loop (transmit, yield, retransmit)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     SIGNAL LAYER                             │
//! │  Morse encoder & sequencer  │  Jam / FM / AM synthesizers    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   EMISSION PRIMITIVE                         │
//! │        emit_tone: key on, busy-wait, key off                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 DRIVER / DELAY LAYER                         │
//! │  RfTestDriver  │  DelayNs (busy)  │  DelayNs (async yield)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Validate, then key**: every parameter is checked before the first
//!   driver call, so a failed request never partially transmits
//! - **Streaming**: Morse elements are generated from the borrowed text as
//!   they are keyed, with no per-message buffer
//! - **Calibrated arithmetic**: iteration counts use the exact integer
//!   division order the hardware constants were measured against
//! - **Injected collaborators**: the RF driver and both delay disciplines
//!   are traits, so host tests run against a simulated clock
//! - **No unsafe in application code**: the only FFI lives in the
//!   optional `esp-phy` driver

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Logging macros (defmt on target, `log` on host); must come first.
#[macro_use]
mod fmt;

/// Morse Encoding and Keying
///
/// Character table, dot timing, element streaming and playback.
pub mod cw;

/// Tone Emission
///
/// The single bridge from a symbolic duration to a keyed pulse.
pub mod tone;

/// Waveform Synthesis
///
/// Frequency-hop jam, square-wave FM and sine-table AM generators.
pub mod synth;

/// RF Driver Interface
///
/// The opaque frequency-set / key primitives consumed by the core.
pub mod driver;

/// Transmitter
///
/// Owns the injected driver and busy-wait delay.
pub mod transmitter;

/// Beacon Loop
///
/// Repeated identification with scheduler-yielding pauses.
pub mod beacon;

/// Error types
pub mod error;

/// Shared types used across modules
pub mod types;

/// Calibration constants and beacon defaults
pub mod config;

pub use beacon::{Beacon, BeaconConfig};
pub use cw::MorseReport;
pub use driver::{CwOutParams, RfTestDriver, ToneParams};
pub use error::{Error, Parameter, Result};
pub use transmitter::Transmitter;
pub use types::{Attenuation, Wpm};

/// Delay provider that busy-waits for `DelayNs` and yields for the async
/// `DelayNs`, backed by the embassy time driver.
#[cfg(feature = "embedded")]
pub type SystemDelay = embassy_time::Delay;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::beacon::{Beacon, BeaconConfig};
    pub use crate::config::*;
    pub use crate::driver::{CwOutParams, RfTestDriver, ToneParams};
    pub use crate::error::{Error, Parameter, Result};
    pub use crate::transmitter::Transmitter;
    pub use crate::types::*;

    // Delay traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
}
