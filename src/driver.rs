//! RF Driver Interface
//!
//! The core only ever talks to the radio through [`RfTestDriver`]: a
//! frequency-set primitive, a key switch and two tone-enable paths. The
//! driver's registers are a single process-wide resource with
//! last-writer-wins semantics; nothing here reads them back.

#[cfg(feature = "esp-phy")]
pub mod phy;

use crate::types::Attenuation;

/// Parameters of the CW tone-start call
///
/// Mirrors the vendor call's argument list. Apart from the attenuation,
/// every field is fixed by the ABI and passed through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneParams {
    /// Tone enable (always 1)
    pub enable: u8,
    /// Reserved, always 0
    pub reserved0: i32,
    /// Tone attenuation
    pub attenuation: Attenuation,
    /// Reserved, always 0
    pub reserved1: u8,
    /// Reserved, always 0
    pub reserved2: i32,
    /// Reserved, always 0
    pub reserved3: u8,
}

impl ToneParams {
    /// Parameters for a single-carrier CW tone at the given attenuation
    #[must_use]
    pub const fn cw(attenuation: Attenuation) -> Self {
        Self {
            enable: 1,
            reserved0: 0,
            attenuation,
            reserved1: 0,
            reserved2: 0,
            reserved3: 0,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ToneParams {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Tone({})", self.attenuation);
    }
}

/// Parameter block of the full-power continuous-wave enable path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CwOutParams {
    /// 1 to enable the output
    pub enable: u32,
    /// Channel number
    pub channel: u32,
    /// Attenuation in quarter-dB steps
    pub attenuation: u32,
}

impl CwOutParams {
    /// Full-power output on the given channel
    #[must_use]
    pub const fn full_power(channel: u32) -> Self {
        Self {
            enable: 1,
            channel,
            attenuation: 0,
        }
    }

    /// Raw parameter block in ABI order
    #[must_use]
    pub const fn to_raw(self) -> [u32; 3] {
        [self.enable, self.channel, self.attenuation]
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for CwOutParams {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CwOut(en={}, ch={}, att={})",
            self.enable,
            self.channel,
            self.attenuation
        );
    }
}

/// Low-level RF test-mode driver
///
/// All calls are synchronous and assumed to take effect immediately.
pub trait RfTestDriver {
    /// One-time initialization of the RF test subsystem
    ///
    /// Must run before any frequency-set or key operation.
    fn init(&mut self);

    /// Program the transmitted frequency as `carrier_mhz` plus a fine offset
    fn set_frequency(&mut self, carrier_mhz: u16, offset_khz: i32);

    /// Enable or disable carrier transmission
    fn force_tx(&mut self, on: bool);

    /// Start a CW tone
    fn start_tx_tone(&mut self, params: ToneParams);

    /// Full-power continuous output, used only by the jam generator
    fn cw_out(&mut self, params: &CwOutParams);
}

impl<T: RfTestDriver + ?Sized> RfTestDriver for &mut T {
    fn init(&mut self) {
        T::init(self);
    }

    fn set_frequency(&mut self, carrier_mhz: u16, offset_khz: i32) {
        T::set_frequency(self, carrier_mhz, offset_khz);
    }

    fn force_tx(&mut self, on: bool) {
        T::force_tx(self, on);
    }

    fn start_tx_tone(&mut self, params: ToneParams) {
        T::start_tx_tone(self, params);
    }

    fn cw_out(&mut self, params: &CwOutParams) {
        T::cw_out(self, params);
    }
}
