//! Morse code table
//!
//! Letters A-Z and digits 0-9. Punctuation and whitespace have no mapping.

/// Character to code, `.` for a dot and `-` for a dash
pub static MORSE_TABLE: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Look up the Morse code for a character (case-insensitive)
#[must_use]
pub fn lookup(c: char) -> Option<&'static str> {
    let c = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, code)| *code)
}
