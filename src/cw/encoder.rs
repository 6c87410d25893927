//! Morse element stream
//!
//! Turns text into keying elements one at a time, straight from the
//! borrowed input. Words are separated by single spaces; runs of spaces
//! produce empty tokens, which are dropped.

use core::iter::Peekable;
use core::str::{Bytes, Chars, Split};

use heapless::Vec;

use super::table;
use super::timing::Element;
use crate::config::MAX_SKIPPED_CHARS;

/// Lazy Morse encoder over a message
///
/// Yields the elements of the message in keying order. Characters without a
/// mapping are skipped and recorded as the stream reaches them, so the skip
/// report is complete once the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Encoder<'a> {
    words: Split<'a, char>,
    letters: Peekable<Chars<'a>>,
    marks: Peekable<Bytes<'static>>,
    pending_gap: Option<Element>,
    started: bool,
    skipped: Vec<char, MAX_SKIPPED_CHARS>,
    skipped_total: usize,
}

impl<'a> Encoder<'a> {
    /// Create an encoder for `text`
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            words: text.split(' '),
            letters: "".chars().peekable(),
            marks: "".bytes().peekable(),
            pending_gap: None,
            started: false,
            skipped: Vec::new(),
            skipped_total: 0,
        }
    }

    /// Characters that had no Morse mapping so far
    ///
    /// Holds at most [`MAX_SKIPPED_CHARS`]; see [`Self::skipped_total`].
    #[must_use]
    pub fn skipped(&self) -> &[char] {
        &self.skipped
    }

    /// Number of characters skipped so far, including any beyond the report
    /// buffer
    #[must_use]
    pub const fn skipped_total(&self) -> usize {
        self.skipped_total
    }

    fn skip(&mut self, c: char) {
        // Overflow only drops the character from the report
        let _ = self.skipped.push(c);
        self.skipped_total += 1;
    }

    fn next_word(&mut self) -> Option<&'a str> {
        self.words.find(|w| !w.is_empty())
    }
}

impl Iterator for Encoder<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        loop {
            if let Some(gap) = self.pending_gap.take() {
                return Some(gap);
            }

            if let Some(mark) = self.marks.next() {
                // The gap after a character depends on its position in the
                // word, not on whether the next character is mapped
                if self.marks.peek().is_some() {
                    self.pending_gap = Some(Element::ElementGap);
                } else if self.letters.peek().is_some() {
                    self.pending_gap = Some(Element::CharGap);
                }

                return Some(if mark == b'-' {
                    Element::Dah
                } else {
                    Element::Dit
                });
            }

            if let Some(letter) = self.letters.next() {
                trace!("Sending letter: {}", letter);
                match table::lookup(letter) {
                    Some(code) => {
                        trace!("Morse for {}: {}", letter, code);
                        self.marks = code.bytes().peekable();
                    }
                    None => {
                        warn!("No Morse mapping for character: {}", letter);
                        self.skip(letter);
                    }
                }
                continue;
            }

            let word = self.next_word()?;
            debug!("Sending word: {}", word);
            self.letters = word.chars().peekable();

            if self.started {
                return Some(Element::WordGap);
            }
            self.started = true;
        }
    }
}

/// Encode `text` as a stream of Morse elements
///
/// Characters without a mapping are skipped and reported; they add no
/// silence of their own. The gap after a character is decided by its
/// position in the word, so a mapped character followed only by skipped
/// ones still gets its letter gap.
#[must_use]
pub fn encode(text: &str) -> Encoder<'_> {
    Encoder::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cw::timing::{DotTiming, Step};
    use crate::types::Wpm;
    use Element::{CharGap, Dah, Dit, ElementGap, WordGap};

    type Elements = Vec<Element, 64>;

    fn elements(text: &str) -> Elements {
        encode(text).collect()
    }

    #[test]
    fn single_letter() {
        let mut enc = encode("A");
        assert_eq!(enc.by_ref().collect::<Elements>(), [Dit, ElementGap, Dah]);
        assert!(enc.skipped().is_empty());
    }

    #[test]
    fn sos() {
        assert_eq!(
            elements("SOS"),
            [
                Dit, ElementGap, Dit, ElementGap, Dit, CharGap, Dah, ElementGap, Dah, ElementGap,
                Dah, CharGap, Dit, ElementGap, Dit, ElementGap, Dit,
            ]
        );
    }

    #[test]
    fn word_gap_between_words_only() {
        assert_eq!(elements("E T"), [Dit, WordGap, Dah]);
    }

    #[test]
    fn repeated_spaces_are_one_separator() {
        assert_eq!(elements("  E   T "), elements("E T"));
    }

    #[test]
    fn only_spaces_split_words() {
        // A tab is an unmapped character inside the word, not a separator
        let mut enc = encode("E\tT");
        assert_eq!(enc.by_ref().collect::<Elements>(), [Dit, CharGap, Dah]);
        assert_eq!(enc.skipped(), &['\t']);
    }

    #[test]
    fn unmapped_character_is_skipped() {
        let mut enc = encode("A!B");
        assert_eq!(
            enc.by_ref().collect::<Elements>(),
            [
                Dit, ElementGap, Dah, CharGap, Dah, ElementGap, Dit, ElementGap, Dit, ElementGap,
                Dit,
            ]
        );
        assert_eq!(enc.skipped(), &['!']);
        assert_eq!(enc.skipped_total(), 1);
    }

    #[test]
    fn trailing_unmapped_keeps_letter_gap() {
        assert_eq!(elements("E!"), [Dit, CharGap]);
    }

    #[test]
    fn unmapped_first_word_still_counts_as_a_word() {
        let mut enc = encode("?? E");
        assert_eq!(enc.by_ref().collect::<Elements>(), [WordGap, Dit]);
        assert_eq!(enc.skipped_total(), 2);
    }

    #[test]
    fn lowercase_matches_uppercase() {
        assert_eq!(elements("hb9bla"), elements("HB9BLA"));
    }

    #[test]
    fn empty_text() {
        assert_eq!(encode("").next(), None);
        assert_eq!(encode("   ").next(), None);
    }

    #[test]
    fn skipped_report_is_bounded() {
        let text = "!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!";
        let mut enc = encode(text);
        assert_eq!(enc.next(), None);
        assert_eq!(enc.skipped().len(), MAX_SKIPPED_CHARS);
        assert_eq!(enc.skipped_total(), text.len());
    }

    #[test]
    fn long_message_has_no_length_limit() {
        // Each '0' yields 10 elements including its letter gap
        let mut text: heapless::String<2000> = heapless::String::new();
        for _ in 0..2000 {
            text.push('0').unwrap();
        }
        assert_eq!(encode(&text).count(), 2000 * 10 - 1);
    }

    #[test]
    fn sos_steps_at_20_wpm() {
        let timing = DotTiming::new(Wpm::new(20).unwrap());
        let mut steps = encode("SOS").map(|e| timing.step(e));
        assert_eq!(steps.next(), Some(Step::Tone { duration_ms: 60 }));
        assert_eq!(steps.next(), Some(Step::Gap { duration_us: 60_000 }));
        let total: u64 = encode("SOS").map(|e| timing.step(e).duration_us()).sum();
        assert_eq!(total, 1_620_000);
    }
}
