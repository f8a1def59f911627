//! Bidirectional Morse codec.
//!
//! Pure, synchronous text transformations between English text and Morse
//! messages. A Morse message is a sequence of `.`/`-` tokens separated by
//! single spaces, with `/` between words. The codec holds no per-call state
//! and is safe to use from any number of callers concurrently.

pub mod decoder;
pub mod encoder;
pub mod table;

pub use decoder::decode;
pub use encoder::encode;

#[cfg(test)]
mod tests {
    use super::*;

    // Round trip over text built from supported characters with single
    // inter-word spaces.
    #[test]
    fn test_round_trip_supported_text() {
        for input in [
            "HELLO WORLD",
            "SOS",
            "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789",
            "CQ CQ DE K7ABC",
            "READY? YES, GO!",
        ] {
            assert_eq!(decode(&encode(input)), input);
        }
    }

    #[test]
    fn test_round_trip_uppercases_input() {
        let input = "hello world";
        assert_eq!(decode(&encode(input)), input.to_uppercase());
    }
}
