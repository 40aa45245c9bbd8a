//! Whitespace-tolerant hex string decoding for search patterns.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A chunk of hex input that could not be decoded and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedHex {
    /// Position of the chunk among the non-whitespace characters.
    pub position: usize,
    pub text: String,
}

/// Result of decoding a hex pattern string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexDecoded {
    pub bytes: Vec<u8>,
    pub malformed: Vec<MalformedHex>,
}

impl HexDecoded {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Decodes `text` as pairs of hex digits.
///
/// Whitespace anywhere is ignored and digits are case-insensitive. A pair
/// containing a non-hex character is skipped, as is a trailing lone nibble;
/// both are recorded in [`HexDecoded::malformed`].
pub fn decode_hex(text: &str) -> HexDecoded {
    let digits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut out = HexDecoded::default();
    for (i, pair) in digits.chunks(2).enumerate() {
        let position = i * 2;
        let chunk: String = pair.iter().collect();
        if pair.len() < 2 {
            warn!(position, "Dropping trailing hex nibble");
            out.malformed.push(MalformedHex {
                position,
                text: chunk,
            });
            continue;
        }
        let mut byte = [0u8; 1];
        // a non-ASCII char makes the chunk longer than two bytes and fails here
        match hex::decode_to_slice(chunk.as_bytes(), &mut byte) {
            Ok(()) => out.bytes.push(byte[0]),
            Err(e) => {
                warn!(position, pair = %chunk, error = %e, "Skipping invalid hex pair");
                out.malformed.push(MalformedHex {
                    position,
                    text: chunk,
                });
            }
        }
    }
    out
}

/// Decodes `text` to bytes, silently dropping malformed pairs.
pub fn decode_hex_string(text: &str) -> Vec<u8> {
    decode_hex(text).bytes
}
