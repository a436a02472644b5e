//! URL-safe base64 codec.
//!
//! # Responsibilities
//! - Encode raw digests for the wire (URL-safe alphabet, padded)
//! - Decode key material from configuration
//! - Answer "is this valid base64?" for request validation
//!
//! # Design Decisions
//! - URL-safe alphabet so signatures survive URLs and config files
//!   (no '+' or '/')
//! - Decoding accepts both padded and unpadded input; validity is
//!   decodability, nothing more

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};

/// URL-safe engine that emits padding but tolerates its absence on decode.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as a URL-safe base64 string.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

/// Decode a URL-safe base64 byte sequence back into raw bytes.
pub fn decode(text: &[u8]) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE.decode(text)
}

/// Whether the input decodes cleanly as base64.
pub fn is_valid(bytes: &[u8]) -> bool {
    decode(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_bytes() {
        let input = b"arbitrary bytes \x00\xff\x10";
        let encoded = encode(input);
        assert_eq!(decode(encoded.as_bytes()).unwrap(), input);
    }

    #[test]
    fn encoding_is_url_safe() {
        // 0xfb 0xff encodes to "+/" in the standard alphabet
        let encoded = encode(&[0xfb, 0xff]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn accepts_padded_and_unpadded_input() {
        assert_eq!(decode(b"dGVzdA==").unwrap(), b"test");
        assert_eq!(decode(b"dGVzdA").unwrap(), b"test");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(!is_valid(b"@@@"));
        assert!(is_valid(b"dGVzdC1zZWNyZXQ="));
        assert!(is_valid(b""));
    }
}
