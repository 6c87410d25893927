//! Tone Emission
//!
//! Keys the transmitter for an exact number of milliseconds. This is the
//! only place where a symbolic duration becomes a hardware pulse; it knows
//! nothing about Morse.

use embedded_hal::delay::DelayNs;

use crate::driver::{RfTestDriver, ToneParams};
use crate::transmitter::Transmitter;
use crate::types::Attenuation;

/// Convert whole milliseconds to the busy-wait microsecond count
#[must_use]
pub const fn ms_to_us(duration_ms: u32) -> u32 {
    duration_ms.saturating_mul(1000)
}

impl<R: RfTestDriver, D: DelayNs> Transmitter<R, D> {
    /// Key on at `attenuation`, busy-wait `duration_ms`, key off
    ///
    /// A zero duration still keys on and off, with a zero-length wait.
    pub fn emit_tone(&mut self, attenuation: Attenuation, duration_ms: u32) {
        self.driver.force_tx(true);
        self.driver.start_tx_tone(ToneParams::cw(attenuation));
        self.delay.delay_us(ms_to_us(duration_ms));
        self.driver.force_tx(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ms_to_us_scales() {
        assert_eq!(ms_to_us(0), 0);
        assert_eq!(ms_to_us(60), 60_000);
        assert_eq!(ms_to_us(3600), 3_600_000);
    }

    #[test]
    fn ms_to_us_saturates() {
        assert_eq!(ms_to_us(u32::MAX), u32::MAX);
    }
}
