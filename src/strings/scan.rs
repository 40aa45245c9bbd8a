//! Linear scanner for runs of printable ASCII.

use serde::{Deserialize, Serialize};

/// A run of printable characters and where it starts in the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedString {
    pub offset: usize,
    pub text: String,
}

impl ExtractedString {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Printable in the C-locale sense: space through tilde.
///
/// Tab, carriage return and line feed are control bytes and end a run.
#[inline]
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Lazy iterator over the printable runs of a byte slice, in offset order.
#[derive(Debug, Clone)]
pub struct StringScanner<'a> {
    data: &'a [u8],
    pos: usize,
    min_length: usize,
}

impl<'a> StringScanner<'a> {
    pub fn new(data: &'a [u8], min_length: usize) -> Self {
        Self {
            data,
            pos: 0,
            min_length: min_length.max(1),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Iterator for StringScanner<'_> {
    type Item = ExtractedString;

    fn next(&mut self) -> Option<ExtractedString> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let Some(skip) = rest.iter().position(|&b| is_printable(b)) else {
                self.pos = self.data.len();
                return None;
            };
            let start = self.pos + skip;
            let run_len = self.data[start..]
                .iter()
                .position(|&b| !is_printable(b))
                .unwrap_or(self.data.len() - start);
            // a run touching the buffer end is flushed like any other
            self.pos = start + run_len;

            if run_len >= self.min_length {
                let text = self.data[start..self.pos]
                    .iter()
                    .map(|&b| b as char)
                    .collect();
                return Some(ExtractedString {
                    offset: start,
                    text,
                });
            }
        }
        None
    }
}

impl std::iter::FusedIterator for StringScanner<'_> {}

/// Extracts printable runs of at least `min_length` bytes (treated as 1 when 0).
pub fn extract_strings(data: &[u8], min_length: usize) -> StringScanner<'_> {
    tracing::debug!(len = data.len(), min_length, "Extracting strings");
    StringScanner::new(data, min_length)
}
