//! Beacon Loop
//!
//! Repeats a CW identification forever: settle, initialize the RF test
//! subsystem, park the carrier, then transmit and pause in a loop.
//!
//! Two delay disciplines meet here. The transmission itself runs on the
//! transmitter's busy-wait delay and blocks the executor for its whole
//! length; the settle times and the pause between transmissions use an
//! async delay that yields to other tasks.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as YieldDelay;

use crate::config::{
    DEFAULT_ATTENUATION, DEFAULT_BEACON_TEXT, DEFAULT_CARRIER_MHZ, DEFAULT_OFFSET_KHZ,
    DEFAULT_WPM, POST_INIT_SETTLE_MS, RETRANSMIT_PAUSE_MS, STARTUP_SETTLE_MS,
};
use crate::cw::MorseReport;
use crate::driver::RfTestDriver;
use crate::error::Result;
use crate::transmitter::Transmitter;
use crate::types::Attenuation;

/// Beacon settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeaconConfig<'a> {
    /// Identification text
    pub text: &'a str,
    /// Keying speed
    pub wpm: u8,
    /// Tone attenuation
    pub attenuation: Attenuation,
    /// Carrier in MHz
    pub carrier_mhz: u16,
    /// Fine offset in kHz
    pub offset_khz: i32,
    /// Wait before initializing the RF subsystem
    pub startup_settle_ms: u32,
    /// Wait after initializing the RF subsystem
    pub post_init_settle_ms: u32,
    /// Pause after each transmission
    pub pause_ms: u32,
}

impl<'a> BeaconConfig<'a> {
    /// Default settings with a different identification text
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            wpm: DEFAULT_WPM,
            attenuation: Attenuation::new(DEFAULT_ATTENUATION),
            carrier_mhz: DEFAULT_CARRIER_MHZ,
            offset_khz: DEFAULT_OFFSET_KHZ,
            startup_settle_ms: STARTUP_SETTLE_MS,
            post_init_settle_ms: POST_INIT_SETTLE_MS,
            pause_ms: RETRANSMIT_PAUSE_MS,
        }
    }

    /// Set keying speed
    #[must_use]
    pub const fn with_wpm(mut self, wpm: u8) -> Self {
        self.wpm = wpm;
        self
    }

    /// Set tone attenuation
    #[must_use]
    pub const fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }

    /// Set carrier and fine offset
    #[must_use]
    pub const fn with_carrier(mut self, carrier_mhz: u16, offset_khz: i32) -> Self {
        self.carrier_mhz = carrier_mhz;
        self.offset_khz = offset_khz;
        self
    }

    /// Set pause between transmissions
    #[must_use]
    pub const fn with_pause_ms(mut self, pause_ms: u32) -> Self {
        self.pause_ms = pause_ms;
        self
    }
}

impl Default for BeaconConfig<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_BEACON_TEXT)
    }
}

/// Repeating CW identification beacon
pub struct Beacon<'a, R, D, Y> {
    transmitter: Transmitter<R, D>,
    pause: Y,
    config: BeaconConfig<'a>,
}

impl<'a, R, D, Y> Beacon<'a, R, D, Y>
where
    R: RfTestDriver,
    D: DelayNs,
    Y: YieldDelay,
{
    /// Create a beacon
    ///
    /// `pause` is the scheduler-yielding delay used between transmissions.
    #[must_use]
    pub const fn new(transmitter: Transmitter<R, D>, pause: Y, config: BeaconConfig<'a>) -> Self {
        Self {
            transmitter,
            pause,
            config,
        }
    }

    /// Get the settings
    #[must_use]
    pub const fn config(&self) -> &BeaconConfig<'a> {
        &self.config
    }

    /// Get the transmitter
    #[must_use]
    pub const fn transmitter(&self) -> &Transmitter<R, D> {
        &self.transmitter
    }

    /// Bring up the RF subsystem and park the carrier
    pub async fn start(&mut self) {
        info!("CW beacon starting");
        self.pause.delay_ms(self.config.startup_settle_ms).await;

        self.transmitter.init();
        self.pause.delay_ms(self.config.post_init_settle_ms).await;

        info!("Setting transmission frequency");
        self.transmitter
            .set_frequency(self.config.carrier_mhz, self.config.offset_khz);
    }

    /// Transmit the identification once, then pause
    ///
    /// The pause is taken even when the transmission fails.
    ///
    /// # Errors
    ///
    /// Whatever [`Transmitter::morse_transmit`] returns for the configured
    /// text and speed.
    pub async fn cycle(&mut self) -> Result<MorseReport> {
        info!(
            "Transmitting Morse code: \"{}\" at {} WPM",
            self.config.text,
            self.config.wpm
        );
        let result = self.transmitter.morse_transmit(
            self.config.text,
            self.config.wpm,
            self.config.attenuation,
        );

        info!(
            "Transmission finished. Waiting {} ms before retransmission",
            self.config.pause_ms
        );
        self.pause.delay_ms(self.config.pause_ms).await;

        result
    }

    /// Start, then transmit forever
    pub async fn run(&mut self) -> ! {
        self.start().await;
        loop {
            if let Err(e) = self.cycle().await {
                error!("Beacon transmission failed: {}", e);
            }
        }
    }

    /// Take back the transmitter and pause delay
    pub fn release(self) -> (Transmitter<R, D>, Y) {
        (self.transmitter, self.pause)
    }
}
