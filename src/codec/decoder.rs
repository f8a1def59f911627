//! Morse to text conversion.
//!
//! The decoder tolerates sloppy input: wide gaps typed instead of `/`,
//! doubled separators, and unrecognized tokens. It never fails; malformed
//! tokens degrade to `?` in the output.

use once_cell::sync::Lazy;
use regex::Regex;

use super::table;

// Runs of three or more spaces are the common way word breaks get typed
// without an explicit separator.
static WIDE_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r" {3,}").unwrap());

/// Converts a Morse message back to text.
///
/// Words are split on `/` (or gaps of three or more spaces), tokens within a
/// word on whitespace. Unknown tokens decode to `?`. Empty or whitespace-only
/// input yields the empty string.
pub fn decode(morse: &str) -> String {
    let normalized = WIDE_GAP.replace_all(morse.trim(), " / ");

    normalized
        .split('/')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.split_whitespace()
                .map(|token| table::char_for(token).unwrap_or('?'))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
