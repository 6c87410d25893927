//! Sine-table AM emulation
//!
//! Holds the carrier frequency and steps the tone attenuation through the
//! 64-entry sine table, `127 - 27 - sample` per step.

use embedded_hal::delay::DelayNs;

use super::lut::{AM_LUT, AM_LUT_LEN};
use crate::config::{
    AM_CARRIER_ATTENUATION, LOOP_OVERHEAD_US, MICROS_PER_SECOND, SAMPLE_WRITE_OVERHEAD_US,
};
use crate::driver::{RfTestDriver, ToneParams};
use crate::error::{Error, Parameter, Result};
use crate::tone::ms_to_us;
use crate::transmitter::Transmitter;
use crate::types::Attenuation;

#[allow(clippy::cast_possible_truncation)]
const TABLE_LEN: u32 = AM_LUT_LEN as u32;

/// Timing of a sine-table AM run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SineAmPlan {
    /// Busy-wait after each attenuation write
    pub sample_delay_us: u32,
    /// Full table walks
    pub repeat: u32,
}

impl SineAmPlan {
    /// Plan a run at `signal_hz` for `duration_ms`
    ///
    /// ```text
    /// sample_delay_us = (1_000_000 - 2) / (signal_hz * 64)
    /// repeat          = ((duration_ms * 1000) - 266) / ((sample_delay_us + 2) * 64)
    /// ```
    ///
    /// A duration under 266 µs plans zero walks.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `signal_hz` is 0.
    pub fn new(signal_hz: u16, duration_ms: u32) -> Result<Self> {
        if signal_hz == 0 {
            return Err(Error::InvalidParameter(Parameter::SignalHz));
        }

        let sample_delay_us = MICROS_PER_SECOND.saturating_sub(SAMPLE_WRITE_OVERHEAD_US)
            / (u32::from(signal_hz) * TABLE_LEN);
        let repeat = ms_to_us(duration_ms).saturating_sub(LOOP_OVERHEAD_US)
            / ((sample_delay_us + SAMPLE_WRITE_OVERHEAD_US) * TABLE_LEN);

        Ok(Self {
            sample_delay_us,
            repeat,
        })
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SineAmPlan {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "SineAm(delay={}us, repeat={})",
            self.sample_delay_us,
            self.repeat
        );
    }
}

/// Tone attenuation for one AM table entry
///
/// Saturates to the `0..=255` attenuation range. A plain narrowing cast
/// would wrap instead (`100 - 127` becoming 229, near silence at the
/// positive peak); the built-in table stays within `-32..=32` and never
/// reaches either bound.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_attenuation(sample: i8) -> Attenuation {
    let raw = (AM_CARRIER_ATTENUATION - i16::from(sample)).clamp(0, i16::from(u8::MAX));
    Attenuation::new(raw as u8)
}

impl<R: RfTestDriver, D: DelayNs> Transmitter<R, D> {
    /// Sine-table amplitude modulation at `signal_hz` for `duration_ms`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `signal_hz` is 0; nothing is written.
    pub fn sin_am(
        &mut self,
        carrier_mhz: u16,
        signal_hz: u16,
        duration_ms: u32,
    ) -> Result<SineAmPlan> {
        let plan = SineAmPlan::new(signal_hz, duration_ms)?;
        info!(
            "Sine AM {} Hz on {} MHz: sample delay {} us, {} cycles",
            signal_hz,
            carrier_mhz,
            plan.sample_delay_us,
            plan.repeat
        );

        self.driver.set_frequency(carrier_mhz, 0);
        for _ in 0..plan.repeat {
            for &sample in &AM_LUT {
                self.driver
                    .start_tx_tone(ToneParams::cw(sample_attenuation(sample)));
                self.delay.delay_us(plan.sample_delay_us);
            }
        }

        Ok(plan)
    }
}
