//! Waveform sample tables
//!
//! One sine cycle each, evaluated at compile time:
//!
//! - [`JAM_LUT`]: 256 frequency offsets, amplitude 1000
//! - [`AM_LUT`]: 64 attenuation deltas, amplitude 32
//!
//! Index 0 = 0°, N/4 = 90°, N/2 = 180°, 3N/4 = 270°.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

/// Number of entries in the jam table
pub const JAM_LUT_LEN: usize = 256;

/// Number of entries in the AM table
pub const AM_LUT_LEN: usize = 64;

/// Sweep offsets for the jam generator
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub static JAM_LUT: [i16; JAM_LUT_LEN] = {
    let mut table = [0i16; JAM_LUT_LEN];
    let mut i = 0;
    while i < JAM_LUT_LEN {
        let angle = (i as f64) * TAU / (JAM_LUT_LEN as f64);
        table[i] = round_i32(const_sin(angle) * 1000.0) as i16;
        i += 1;
    }
    table
};

/// Attenuation deltas for the AM generator
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub static AM_LUT: [i8; AM_LUT_LEN] = {
    let mut table = [0i8; AM_LUT_LEN];
    let mut i = 0;
    while i < AM_LUT_LEN {
        let angle = (i as f64) * TAU / (AM_LUT_LEN as f64);
        table[i] = round_i32(const_sin(angle) * 32.0) as i8;
        i += 1;
    }
    table
};

/// Const-compatible sine, Taylor series on [-π/2, π/2]
const fn const_sin(x: f64) -> f64 {
    let mut x = x;
    while x > PI {
        x -= TAU;
    }
    while x < -PI {
        x += TAU;
    }

    // Fold into [-π/2, π/2] where the series converges quickly
    if x > FRAC_PI_2 {
        x = PI - x;
    } else if x < -FRAC_PI_2 {
        x = -PI - x;
    }

    let x2 = x * x;
    let x3 = x2 * x;
    let x5 = x3 * x2;
    let x7 = x5 * x2;
    let x9 = x7 * x2;
    let x11 = x9 * x2;

    x - x3 / 6.0 + x5 / 120.0 - x7 / 5040.0 + x9 / 362_880.0 - x11 / 39_916_800.0
}

/// Round half away from zero
#[allow(clippy::cast_possible_truncation)]
const fn round_i32(x: f64) -> i32 {
    if x >= 0.0 {
        (x + 0.5) as i32
    } else {
        (x - 0.5) as i32
    }
}
