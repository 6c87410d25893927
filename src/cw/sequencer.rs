//! Morse playback
//!
//! Keys an element stream on a [`Transmitter`] as it is produced: tones
//! through `emit_tone` at the requested attenuation, gaps through the
//! busy-wait delay.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use super::encoder::{encode, Encoder};
use super::timing::{DotTiming, Element, Step};
use crate::config::MAX_SKIPPED_CHARS;
use crate::driver::RfTestDriver;
use crate::error::Result;
use crate::transmitter::Transmitter;
use crate::types::{Attenuation, Wpm};

/// Summary of a completed Morse transmission
#[derive(Clone, Debug, PartialEq)]
pub struct MorseReport {
    /// Dot duration in milliseconds
    pub dot_ms: f64,
    /// Number of elements keyed (tones and gaps)
    pub elements: usize,
    /// Total on-air time in microseconds
    pub duration_us: u64,
    /// Characters skipped for lack of a mapping (first few)
    pub skipped: Vec<char, MAX_SKIPPED_CHARS>,
    /// Number of characters skipped
    pub skipped_total: usize,
}

impl MorseReport {
    fn new(timing: DotTiming) -> Self {
        Self {
            dot_ms: timing.dot_ms(),
            elements: 0,
            duration_us: 0,
            skipped: Vec::new(),
            skipped_total: 0,
        }
    }

    fn record(&mut self, step: Step) {
        self.elements += 1;
        self.duration_us += step.duration_us();
    }

    fn finish(mut self, encoder: &Encoder<'_>) -> Self {
        self.skipped = encoder.skipped().iter().copied().collect();
        self.skipped_total = encoder.skipped_total();
        self
    }
}

impl<R: RfTestDriver, D: DelayNs> Transmitter<R, D> {
    /// Transmit `text` as Morse code
    ///
    /// Blocks until the last element has been keyed. Characters outside
    /// A-Z and 0-9 are skipped and listed in the report. Elements are
    /// produced on the fly, so message length is not limited.
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`](crate::Error::InvalidParameter) if `wpm` is 0.
    /// Nothing is keyed in that case.
    pub fn morse_transmit(
        &mut self,
        text: &str,
        wpm: u8,
        attenuation: Attenuation,
    ) -> Result<MorseReport> {
        let wpm = Wpm::try_from(wpm)?;
        let timing = DotTiming::new(wpm);
        info!(
            "Starting Morse transmission at {} WPM, dot {} ms",
            wpm.get(),
            timing.dot_ms()
        );

        let mut encoder = encode(text);
        let report = self
            .play(encoder.by_ref(), timing, attenuation)
            .finish(&encoder);

        info!(
            "Morse transmission complete: {} elements, {} us",
            report.elements,
            report.duration_us
        );
        Ok(report)
    }

    /// Key a sequence of elements
    ///
    /// The returned report counts what was keyed; it lists no skipped
    /// characters.
    pub fn play<I>(
        &mut self,
        elements: I,
        timing: DotTiming,
        attenuation: Attenuation,
    ) -> MorseReport
    where
        I: IntoIterator<Item = Element>,
    {
        let mut report = MorseReport::new(timing);
        for element in elements {
            let step = timing.step(element);
            match step {
                Step::Tone { duration_ms } => self.emit_tone(attenuation, duration_ms),
                Step::Gap { duration_us } => self.delay.delay_us(duration_us),
            }
            report.record(step);
        }
        report
    }
}
