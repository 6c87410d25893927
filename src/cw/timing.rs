//! Morse element timing
//!
//! PARIS standard: one dot lasts `1200 / WPM` milliseconds and every other
//! element is a whole multiple of it. Each duration is recomputed from the
//! floating-point dot length and truncated where it is used, so the
//! truncation error never accumulates over a message.

use crate::config::MS_PER_DOT_AT_1WPM;
use crate::types::Wpm;

/// One step of a Morse keying schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// Dot (1 unit, key down)
    Dit,
    /// Dash (3 units, key down)
    Dah,
    /// Gap between symbols of one character (1 unit)
    ElementGap,
    /// Gap between characters of one word (3 units)
    CharGap,
    /// Gap between words (7 units)
    WordGap,
}

impl Element {
    /// Get duration in dot units
    #[must_use]
    pub const fn units(&self) -> u32 {
        match self {
            Self::Dit | Self::ElementGap => 1,
            Self::Dah | Self::CharGap => 3,
            Self::WordGap => 7,
        }
    }

    /// Check if this element produces a tone
    #[must_use]
    pub const fn is_tone(&self) -> bool {
        matches!(self, Self::Dit | Self::Dah)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Element {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Dit => defmt::write!(f, "."),
            Self::Dah => defmt::write!(f, "-"),
            Self::ElementGap => defmt::write!(f, "_"),
            Self::CharGap => defmt::write!(f, "___"),
            Self::WordGap => defmt::write!(f, "_______"),
        }
    }
}

/// Element durations derived from a keying speed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotTiming {
    dot_ms: f64,
}

impl DotTiming {
    /// Timing for the given speed
    #[must_use]
    pub fn new(wpm: Wpm) -> Self {
        Self {
            dot_ms: MS_PER_DOT_AT_1WPM / f64::from(wpm.get()),
        }
    }

    /// Dot duration in milliseconds (not truncated)
    #[must_use]
    pub const fn dot_ms(&self) -> f64 {
        self.dot_ms
    }

    /// Key-down time of a tone element, truncated to whole milliseconds
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tone_ms(&self, element: Element) -> u32 {
        (f64::from(element.units()) * self.dot_ms) as u32
    }

    /// Silence of a gap element, truncated to whole microseconds
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn gap_us(&self, element: Element) -> u32 {
        (f64::from(element.units()) * self.dot_ms * 1000.0) as u32
    }

    /// Timed step for an element
    #[must_use]
    pub fn step(&self, element: Element) -> Step {
        if element.is_tone() {
            Step::Tone {
                duration_ms: self.tone_ms(element),
            }
        } else {
            Step::Gap {
                duration_us: self.gap_us(element),
            }
        }
    }
}

/// A timed keying step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Key down for whole milliseconds
    Tone {
        /// Tone length
        duration_ms: u32,
    },
    /// Silence for whole microseconds
    Gap {
        /// Gap length
        duration_us: u32,
    },
}

impl Step {
    /// Step length in microseconds
    #[must_use]
    pub fn duration_us(self) -> u64 {
        match self {
            Self::Tone { duration_ms } => u64::from(duration_ms) * 1000,
            Self::Gap { duration_us } => u64::from(duration_us),
        }
    }
}
