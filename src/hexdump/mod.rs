//! Hex + ASCII dump rendering.
//!
//! Rows hold 16 bytes. The hex column has a one-space gap after the eighth
//! byte and short rows are padded so the ASCII column lines up on every row:
//!
//! ```text
//! 00000000  7F 45 4C 46 02 01 01 00  00 00 00 00 00 00 00 00   .ELF............
//! 00000010  03 00 3E 00                                        ..>.
//! ```

use crate::error::{BinscopeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use tracing::debug;

/// Bytes per row.
pub const ROW_WIDTH: usize = 16;

/// Column header matching [`HexDumpRow`]'s `Display` layout.
pub const HEADER: &str =
    "Offset    00 01 02 03 04 05 06 07  08 09 0A 0B 0C 0D 0E 0F   ASCII";
/// Separator printed under [`HEADER`].
pub const RULE: &str =
    "--------  ------------------------------------------------   ----------------";

/// One rendered line of a hex dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexDumpRow {
    /// Offset of the first byte of the row.
    pub address: usize,
    /// Up to [`ROW_WIDTH`] raw bytes.
    pub bytes: Vec<u8>,
}

impl HexDumpRow {
    /// Each byte as itself when printable, otherwise `.`.
    pub fn ascii(&self) -> String {
        self.bytes
            .iter()
            .map(|&b| if crate::strings::is_printable(b) { b as char } else { '.' })
            .collect()
    }

    /// The padded hex column, always the same width.
    pub fn hex_column(&self) -> String {
        let mut out = String::with_capacity(ROW_WIDTH * 3 + 1);
        for i in 0..ROW_WIDTH {
            if i == 8 {
                out.push(' ');
            }
            match self.bytes.get(i) {
                // writing into a String cannot fail
                Some(b) => {
                    let _ = write!(out, "{:02X} ", b);
                }
                None => out.push_str("   "),
            }
        }
        out
    }
}

impl fmt::Display for HexDumpRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}  {}  {}", self.address, self.hex_column(), self.ascii())
    }
}

/// Lazy iterator over the rows covering a range of a buffer.
#[derive(Debug, Clone)]
pub struct HexDump<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> HexDump<'a> {
    /// Byte range `[start, end)` this dump covers.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.pos..self.end
    }
}

impl Iterator for HexDump<'_> {
    type Item = HexDumpRow;

    fn next(&mut self) -> Option<HexDumpRow> {
        if self.pos >= self.end {
            return None;
        }
        let row_end = (self.pos + ROW_WIDTH).min(self.end);
        let row = HexDumpRow {
            address: self.pos,
            bytes: self.data[self.pos..row_end].to_vec(),
        };
        self.pos = row_end;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rows = (self.end - self.pos).div_ceil(ROW_WIDTH);
        (rows, Some(rows))
    }
}

impl ExactSizeIterator for HexDump<'_> {}

impl std::iter::FusedIterator for HexDump<'_> {}

/// Dumps `length` bytes from `start` (0 means to the end of the buffer).
///
/// The range is clamped to the buffer end. A start at or beyond the end is
/// a [`BinscopeError::Range`].
pub fn render_hex_dump(data: &[u8], start: usize, length: usize) -> Result<HexDump<'_>> {
    if start >= data.len() {
        return Err(BinscopeError::Range {
            start,
            len: data.len(),
        });
    }
    let end = if length == 0 {
        data.len()
    } else {
        start.saturating_add(length).min(data.len())
    };
    debug!(start, end, "Rendering hex dump");
    Ok(HexDump {
        data,
        pos: start,
        end,
    })
}
