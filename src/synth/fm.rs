//! Square-wave FM emulation
//!
//! Toggles the carrier between `+100` and `0` offset at the modulation
//! frequency. One repeat is one full cycle: high half, then low half.

use embedded_hal::delay::DelayNs;

use crate::config::{FM_DEVIATION_KHZ, LOOP_OVERHEAD_US, MICROS_PER_SECOND};
use crate::driver::{RfTestDriver, ToneParams};
use crate::error::{Error, Parameter, Result};
use crate::tone::ms_to_us;
use crate::transmitter::Transmitter;
use crate::types::Attenuation;

/// Timing of a square-wave FM run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareWavePlan {
    /// Busy-wait after each frequency write
    pub half_period_us: u32,
    /// Full on/off cycles
    pub repeat: u32,
}

impl SquareWavePlan {
    /// Plan a run at `signal_hz` for `duration_ms`
    ///
    /// ```text
    /// half_period_us = (1_000_000 - 266) / signal_hz
    /// repeat         = ((duration_ms * 1000) / (half_period_us + 266)) >> 1
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `signal_hz` is 0.
    pub fn new(signal_hz: u16, duration_ms: u32) -> Result<Self> {
        if signal_hz == 0 {
            return Err(Error::InvalidParameter(Parameter::SignalHz));
        }

        let half_period_us =
            MICROS_PER_SECOND.saturating_sub(LOOP_OVERHEAD_US) / u32::from(signal_hz);
        let repeat = (ms_to_us(duration_ms) / (half_period_us + LOOP_OVERHEAD_US)) >> 1;

        Ok(Self {
            half_period_us,
            repeat,
        })
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SquareWavePlan {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "SquareWave(half={}us, repeat={})",
            self.half_period_us,
            self.repeat
        );
    }
}

impl<R: RfTestDriver, D: DelayNs> Transmitter<R, D> {
    /// Key the carrier for square-wave FM
    ///
    /// Turns the transmitter on, starts a tone at `attenuation` and parks the
    /// carrier at zero offset. Call before [`Self::squarewave_fm`].
    pub fn squarewave_fm_init(&mut self, carrier_mhz: u16, attenuation: Attenuation) {
        debug!("Square-wave FM init at {} MHz", carrier_mhz);
        self.driver.force_tx(true);
        self.driver.start_tx_tone(ToneParams::cw(attenuation));
        self.driver.set_frequency(carrier_mhz, 0);
    }

    /// Square-wave frequency modulation at `signal_hz` for `duration_ms`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `signal_hz` is 0; nothing is written.
    pub fn squarewave_fm(
        &mut self,
        carrier_mhz: u16,
        signal_hz: u16,
        duration_ms: u32,
    ) -> Result<SquareWavePlan> {
        let plan = SquareWavePlan::new(signal_hz, duration_ms)?;
        info!(
            "Square-wave FM {} Hz on {} MHz: half period {} us, {} cycles",
            signal_hz,
            carrier_mhz,
            plan.half_period_us,
            plan.repeat
        );

        for _ in 0..plan.repeat {
            self.driver.set_frequency(carrier_mhz, FM_DEVIATION_KHZ);
            self.delay.delay_us(plan.half_period_us);
            self.driver.set_frequency(carrier_mhz, 0);
            self.delay.delay_us(plan.half_period_us);
        }

        Ok(plan)
    }
}
