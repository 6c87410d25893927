//! Morse Encoding and Keying
//!
//! Text is keyed in two stages:
//!
//! 1. [`encode`] streams the message as [`Element`]s, skipping characters
//!    without a Morse mapping
//! 2. [`Transmitter::morse_transmit`](crate::Transmitter::morse_transmit)
//!    keys each element as it arrives, tones through `emit_tone` and gaps
//!    with the busy-wait delay
//!
//! Parameters are validated before the first element is produced, so a
//! rejected request keys nothing.

pub mod encoder;
pub mod sequencer;
pub mod table;
pub mod timing;

pub use encoder::{encode, Encoder};
pub use sequencer::MorseReport;
pub use table::lookup;
pub use timing::{DotTiming, Element, Step};
