//! Shared types used across the beacon library
//!
//! Newtypes that carry a validation step, so the division by WPM in the
//! timing code can never see a zero.

use core::fmt;
use core::num::NonZeroU8;

use crate::error::{Error, Parameter};

/// Keying speed in words per minute
///
/// Always non-zero.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wpm(NonZeroU8);

impl Wpm {
    /// Create a keying speed, returns None for zero
    #[must_use]
    pub const fn new(wpm: u8) -> Option<Self> {
        match NonZeroU8::new(wpm) {
            Some(wpm) => Some(Self(wpm)),
            None => None,
        }
    }

    /// Get the speed as a plain integer
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Wpm {
    type Error = Error;

    fn try_from(wpm: u8) -> Result<Self, Self::Error> {
        Self::new(wpm).ok_or(Error::InvalidParameter(Parameter::Wpm))
    }
}

impl fmt::Debug for Wpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wpm({})", self.0)
    }
}

impl fmt::Display for Wpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} WPM", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Wpm {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} WPM", self.0.get());
    }
}

/// Tone attenuation level
///
/// Lower values mean more output power; 0 is full power. The driver
/// clamps values outside its own valid range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Attenuation(u8);

impl Attenuation {
    /// Full output power
    pub const FULL_POWER: Self = Self(0);

    /// Create from a raw driver value
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw driver value
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for Attenuation {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Attenuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "att {}", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Attenuation {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "att {}", self.0);
    }
}
