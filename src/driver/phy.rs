//! Vendor PHY Test-Mode Driver
//!
//! Binds [`RfTestDriver`] to the undocumented RF test symbols exported by
//! the vendor PHY library. All unsafe code of the crate lives here.

#![allow(unsafe_code)]

use core::ffi::c_uint;
use core::sync::atomic::{AtomicBool, Ordering};

use super::{CwOutParams, RfTestDriver, ToneParams};

mod ffi {
    use core::ffi::{c_int, c_uint};

    extern "C" {
        pub fn rftest_init();
        pub fn phy_set_freq(freq_mhz: c_uint, freq_khz: c_int);
        pub fn start_tx_tone(p1: u8, p2: c_int, att: u8, p4: u8, p5: c_int, p6: u8);
        pub fn force_txon(onoff: u8);
        pub fn wifiscwout(param: *mut u32);
    }
}

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Handle to the PHY test-mode interface
///
/// The PHY registers are process-wide, so only one handle can exist.
#[derive(Debug)]
pub struct PhyDriver {
    _private: (),
}

impl PhyDriver {
    /// Take the driver handle; returns None if it was already taken
    #[must_use]
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self { _private: () })
        }
    }
}

impl Drop for PhyDriver {
    fn drop(&mut self) {
        TAKEN.store(false, Ordering::Release);
    }
}

impl RfTestDriver for PhyDriver {
    fn init(&mut self) {
        // SAFETY: no arguments; the PHY library is linked by build.rs.
        unsafe { ffi::rftest_init() }
    }

    fn set_frequency(&mut self, carrier_mhz: u16, offset_khz: i32) {
        // SAFETY: plain integer arguments; exclusive access via `take`.
        unsafe { ffi::phy_set_freq(c_uint::from(carrier_mhz), offset_khz) }
    }

    fn force_tx(&mut self, on: bool) {
        // SAFETY: plain integer argument.
        unsafe { ffi::force_txon(u8::from(on)) }
    }

    fn start_tx_tone(&mut self, params: ToneParams) {
        // SAFETY: plain integer arguments in ABI order.
        unsafe {
            ffi::start_tx_tone(
                params.enable,
                params.reserved0,
                params.attenuation.raw(),
                params.reserved1,
                params.reserved2,
                params.reserved3,
            );
        }
    }

    fn cw_out(&mut self, params: &CwOutParams) {
        let mut raw = params.to_raw();
        // SAFETY: `raw` outlives the call and holds the three words the
        // function reads.
        unsafe { ffi::wifiscwout(raw.as_mut_ptr()) }
    }
}
