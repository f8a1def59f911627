//! Character <-> Morse code symbol table.
//!
//! Built once from a declarative pair list and treated as read-only global
//! state afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Source of truth for the table: uppercase letters, digits, and the common
/// ITU punctuation subset. Both lookup maps are derived from this list.
pub(crate) const PAIRS: &[(char, &str)] = &[
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
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static CHAR_TO_CODE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| PAIRS.iter().copied().collect());

static CODE_TO_CHAR: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| PAIRS.iter().map(|&(ch, code)| (code, ch)).collect());

/// Forward lookup: character to Morse code.
pub fn code_for(ch: char) -> Option<&'static str> {
    CHAR_TO_CODE.get(&ch).copied()
}

/// Backward lookup: Morse code to character.
pub fn char_for(code: &str) -> Option<char> {
    CODE_TO_CHAR.get(code).copied()
}
