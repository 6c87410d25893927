//! Error types
//!
//! Every check runs before the first driver call, so an `Err` always means
//! nothing was keyed.

use core::fmt;

/// Result alias for transmitter operations
pub type Result<T> = core::result::Result<T, Error>;

/// Input that failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    /// Keying speed of zero words per minute
    Wpm,
    /// Modulation frequency of zero hertz
    SignalHz,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wpm => f.write_str("wpm must be non-zero"),
            Self::SignalHz => f.write_str("signal frequency must be non-zero"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Parameter {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Wpm => defmt::write!(f, "wpm must be non-zero"),
            Self::SignalHz => defmt::write!(f, "signal frequency must be non-zero"),
        }
    }
}

/// Transmitter error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A parameter would divide by zero
    InvalidParameter(Parameter),
    /// Working storage for a message could not be obtained
    ///
    /// Morse text is encoded straight from the borrowed input, so nothing
    /// in this crate returns this today; drivers that copy text may.
    AllocationFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(p) => write!(f, "invalid parameter: {p}"),
            Self::AllocationFailure => f.write_str("message storage allocation failed"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidParameter(p) => defmt::write!(f, "invalid parameter: {}", p),
            Self::AllocationFailure => defmt::write!(f, "message storage allocation failed"),
        }
    }
}

impl core::error::Error for Error {}
