//! Search pattern inputs and labelled results.

use super::hex::{decode_hex, MalformedHex};
use serde::{Deserialize, Serialize};

/// How the user supplied a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PatternInput {
    /// Pairs of hex digits, e.g. `DE AD BE EF`.
    Hex(String),
    /// Literal text, searched byte for byte.
    Text(String),
}

impl PatternInput {
    /// Label used in console output and the report, numbered from 1.
    pub fn label(&self, index: usize) -> String {
        match self {
            PatternInput::Hex(_) => format!("Hex Pattern #{}", index),
            PatternInput::Text(_) => format!("String Pattern #{}", index),
        }
    }

    /// Resolves the input to the bytes to search for.
    pub fn resolve(&self, index: usize) -> Pattern {
        let label = self.label(index);
        match self {
            PatternInput::Hex(text) => {
                let decoded = decode_hex(text);
                Pattern {
                    label,
                    bytes: decoded.bytes,
                    malformed: decoded.malformed,
                }
            }
            PatternInput::Text(text) => Pattern {
                label,
                bytes: text.as_bytes().to_vec(),
                malformed: Vec::new(),
            },
        }
    }
}

/// A resolved, labelled search pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub label: String,
    pub bytes: Vec<u8>,
    /// Hex input that was skipped while decoding.
    pub malformed: Vec<MalformedHex>,
}

/// Offsets at which a labelled pattern was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatches {
    pub label: String,
    pub pattern: Vec<u8>,
    pub offsets: Vec<usize>,
    /// Hex input skipped while resolving the pattern.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub malformed: Vec<MalformedHex>,
}

impl PatternMatches {
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
