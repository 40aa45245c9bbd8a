//! Bounded file loading.
//!
//! This module provides a `SafeReader` that memory-maps the input file and
//! copies it into an immutable [`ByteBuffer`]. A size limit guards against
//! accidentally loading something that will not fit comfortably in memory.

pub mod error;

use crate::core::ByteBuffer;
use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Defines the resource limits for loading an input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 512 * 1024 * 1024, // 512MB
        }
    }
}

/// A bounded file reader that uses memory-mapping for efficient access.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens a file and memory-maps it.
    ///
    /// Fails if the file does not exist, is not a regular file, or exceeds
    /// `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound {
                path: path.to_path_buf(),
            },
            _ => IoError::StdIo(e),
        })?;
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(IoError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        let file_size = metadata.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening file for safe reading"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: The file is backed by a real file on disk and we only request a read-only map.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a slice of the file at a given offset, clamped to the file end.
    pub fn read_at(&self, offset: u64, len: u64) -> Bytes {
        let map = match &self.mmap {
            Some(m) => m,
            None => return Bytes::new(),
        };

        let offset = offset as usize;
        if offset >= map.len() {
            return Bytes::new();
        }
        let end = std::cmp::min(offset.saturating_add(len as usize), map.len());

        trace!(
            path = %self.path.display(),
            offset = offset,
            len = end - offset,
            "Performed read"
        );

        Bytes::copy_from_slice(&map[offset..end])
    }

    /// Copies the whole file into an owned, immutable buffer.
    pub fn into_buffer(self) -> ByteBuffer {
        let data = self.read_at(0, self.file_size);
        ByteBuffer::with_source(self.path.display().to_string(), data)
    }
}

/// Loads a file into a [`ByteBuffer`] under the given limits.
pub fn load_buffer<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<ByteBuffer> {
    let reader = SafeReader::open(path, limits)?;
    let buffer = reader.into_buffer();
    info!(source = buffer.source(), size = buffer.len(), "File loaded");
    Ok(buffer)
}
