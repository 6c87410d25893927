//! Frequency-hop jam generator
//!
//! Full-power carrier whose frequency walks the 256-entry sine table
//! around `centre + 500`. There is no delay in the loop: one register write
//! is the step time.

use embedded_hal::delay::DelayNs;

use super::lut::{JAM_LUT, JAM_LUT_LEN};
use crate::config::{JAM_BASE_OFFSET_KHZ, JAM_CHANNEL, LOOP_OVERHEAD_US};
use crate::driver::{CwOutParams, RfTestDriver};
use crate::tone::ms_to_us;
use crate::transmitter::Transmitter;

/// Microseconds one full table sweep is assumed to take
#[allow(clippy::cast_possible_truncation)]
const SWEEP_US: u32 = LOOP_OVERHEAD_US * JAM_LUT_LEN as u32;

/// Iteration count of a jam run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JamPlan {
    /// Full table sweeps
    pub repeat: u32,
}

impl JamPlan {
    /// Plan a run of `duration_ms`
    ///
    /// `repeat = (duration_ms * 1000) / (266 * 256)`. Anything shorter than
    /// one sweep (about 68 ms) plans zero sweeps.
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            repeat: ms_to_us(duration_ms) / SWEEP_US,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for JamPlan {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Jam(repeat={})", self.repeat);
    }
}

impl<R: RfTestDriver, D: DelayNs> Transmitter<R, D> {
    /// Sweep a full-power carrier around `center_mhz` for `duration_ms`
    ///
    /// Full power is enabled even when the plan has zero sweeps.
    pub fn jam(&mut self, center_mhz: u16, duration_ms: u32) -> JamPlan {
        let plan = JamPlan::new(duration_ms);
        info!(
            "Jam around {} MHz for {} ms: {} sweeps",
            center_mhz,
            duration_ms,
            plan.repeat
        );

        self.driver.cw_out(&CwOutParams::full_power(JAM_CHANNEL));

        for _ in 0..plan.repeat {
            for &sample in &JAM_LUT {
                self.driver
                    .set_frequency(center_mhz, JAM_BASE_OFFSET_KHZ + i32::from(sample));
            }
        }

        plan
    }
}
