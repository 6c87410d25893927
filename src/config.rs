//! Calibration constants and beacon defaults
//!
//! The timing constants in this module were measured on the target radio
//! and are part of its timing contract. Keep them bit-for-bit; the
//! generators divide by them in a fixed order.

/// Estimated cost of one frequency-register write cycle, in microseconds
pub const LOOP_OVERHEAD_US: u32 = 266;

/// Estimated cost of one tone-attenuation write, in microseconds
pub const SAMPLE_WRITE_OVERHEAD_US: u32 = 2;

/// One second in microseconds
pub const MICROS_PER_SECOND: u32 = 1_000_000;

/// Dot duration at 1 WPM in milliseconds (PARIS standard)
pub const MS_PER_DOT_AT_1WPM: f64 = 1200.0;

/// Centre offset of the jam sweep, in driver offset units (kHz)
pub const JAM_BASE_OFFSET_KHZ: i32 = 500;

/// Channel passed to the full-power enable path
pub const JAM_CHANNEL: u32 = 6;

/// Frequency offset used for the "high" half of the square-wave FM cycle
pub const FM_DEVIATION_KHZ: i32 = 100;

/// Attenuation around which the AM sine table swings
pub const AM_CARRIER_ATTENUATION: i16 = 127 - 27;

/// Number of skipped characters kept in a transmission report
pub const MAX_SKIPPED_CHARS: usize = 16;

/// Default beacon text
pub const DEFAULT_BEACON_TEXT: &str = "TEST TEST DE HB9BLA";

/// Default keying speed
pub const DEFAULT_WPM: u8 = 10;

/// Default attenuation (0 = maximum power)
pub const DEFAULT_ATTENUATION: u8 = 0;

/// Default carrier in MHz
pub const DEFAULT_CARRIER_MHZ: u16 = 2400;

/// Default fine offset in kHz
pub const DEFAULT_OFFSET_KHZ: i32 = 50;

/// Settle time before the RF subsystem is initialized
pub const STARTUP_SETTLE_MS: u32 = 500;

/// Settle time after the RF subsystem is initialized
pub const POST_INIT_SETTLE_MS: u32 = 100;

/// Pause between beacon transmissions
pub const RETRANSMIT_PAUSE_MS: u32 = 5000;
