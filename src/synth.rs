//! Waveform Synthesis
//!
//! Three open-loop generators that approximate continuous modulation with
//! nothing but frequency-register writes, tone-attenuation writes and
//! busy-wait delays:
//!
//! - [`jam`]: frequency sweep around a centre, driven by a sine table
//! - [`fm`]: square-wave FM, toggling a fixed frequency offset
//! - [`am`]: sine-table AM, stepping the tone attenuation
//!
//! Each generator derives its iteration count up front from the requested
//! duration and the calibrated loop overhead, then runs to completion.
//! The integer divisions happen in a fixed order; reordering them changes
//! the truncation and breaks the calibration.

pub mod am;
pub mod fm;
pub mod jam;
pub mod lut;

pub use am::SineAmPlan;
pub use fm::SquareWavePlan;
pub use jam::JamPlan;
