//! Transmitter
//!
//! Pairs an [`RfTestDriver`] with a busy-wait delay. The signal operations
//! (`emit_tone`, `morse_transmit`, `jam`, `squarewave_fm`, `sin_am`) are
//! implemented next to their algorithms in [`crate::tone`], [`crate::cw`]
//! and [`crate::synth`].
//!
//! A transmitter keeps no state between calls: two identical calls produce
//! identical driver and delay sequences.

use embedded_hal::delay::DelayNs;

use crate::driver::RfTestDriver;

/// RF transmitter built from a test-mode driver and a busy-wait delay
///
/// The delay must block the calling context for the full duration; all
/// element gaps, tone lengths and synthesis steps go through it.
#[derive(Debug)]
pub struct Transmitter<R, D> {
    pub(crate) driver: R,
    pub(crate) delay: D,
}

impl<R: RfTestDriver, D: DelayNs> Transmitter<R, D> {
    /// Create a transmitter
    #[must_use]
    pub const fn new(driver: R, delay: D) -> Self {
        Self { driver, delay }
    }

    /// Initialize the RF test subsystem
    pub fn init(&mut self) {
        info!("Initializing RF test mode");
        self.driver.init();
        info!("RF test mode initialized");
    }

    /// Program the carrier frequency directly
    pub fn set_frequency(&mut self, carrier_mhz: u16, offset_khz: i32) {
        debug!("Set frequency {} MHz + {} kHz", carrier_mhz, offset_khz);
        self.driver.set_frequency(carrier_mhz, offset_khz);
    }

    /// Get the driver
    #[must_use]
    pub const fn driver(&self) -> &R {
        &self.driver
    }

    /// Get the driver mutably
    pub fn driver_mut(&mut self) -> &mut R {
        &mut self.driver
    }

    /// Take back the driver and delay
    pub fn release(self) -> (R, D) {
        (self.driver, self.delay)
    }
}
