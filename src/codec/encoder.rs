//! Text to Morse conversion.

use super::table;

/// Converts text to a Morse message.
///
/// Encoding is case-insensitive. Spaces become the `/` word separator and
/// characters without a Morse representation are dropped. The result contains
/// only `.`, `-`, `/`, and single spaces.
pub fn encode(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter_map(|ch| {
            if ch == ' ' {
                Some("/")
            } else {
                table::code_for(ch)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello_world() {
        assert_eq!(
            encode("HELLO WORLD"),
            ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
        );
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        assert_eq!(encode("sos"), "... --- ...");
        assert_eq!(encode("SOS"), "... --- ...");
    }

    #[test]
    fn test_encode_drops_unmappable_characters() {
        assert_eq!(encode("A€B"), encode("AB"));
        assert_eq!(encode("你好"), "");
    }

    #[test]
    fn test_encode_empty_input() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_encode_digits_and_punctuation() {
        assert_eq!(encode("73"), "--... ...--");
        assert_eq!(encode("E."), ". .-.-.-");
    }

    // Pins the pass-through behavior: edge and doubled spaces become extra
    // `/` tokens rather than being trimmed.
    #[test]
    fn test_encode_preserves_edge_spaces() {
        assert_eq!(encode(" A"), "/ .-");
        assert_eq!(encode("A "), ".- /");
        assert_eq!(encode("A  B"), ".- / / -...");
    }
}
