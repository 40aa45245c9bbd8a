//! Immutable byte buffer shared by all analysis engines.

use bytes::Bytes;
use std::fmt;
use std::ops::Deref;

/// Read-only view over the contents of the analyzed file.
///
/// Backed by [`Bytes`], so clones share the same allocation. The length is
/// fixed at construction and equals the size of the source in bytes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    source: String,
    data: Bytes,
}

impl ByteBuffer {
    /// Wraps raw bytes with an anonymous source name.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_source("<memory>", data)
    }

    /// Wraps raw bytes, recording where they came from.
    pub fn with_source(source: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            source: source.into(),
            data: data.into(),
        }
    }

    /// Name of the file (or other origin) the bytes were loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for ByteBuffer {
    fn from(data: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(data))
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("source", &self.source)
            .field("len", &self.data.len())
            .finish()
    }
}
