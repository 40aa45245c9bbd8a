//! Common test utilities and helpers.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `content` to a fresh temporary file.
pub fn temp_file_with(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Synthetic test inputs shaped like the formats the signature table knows.
pub mod test_data {
    /// Minimal ELF64 header prefix followed by loader strings.
    pub fn elf_like() -> Vec<u8> {
        let mut data = vec![0x7F, b'E', b'L', b'F', 0x02, 0x01, 0x01, 0x00];
        data.extend_from_slice(&[0u8; 8]);
        data.extend_from_slice(&[0x03, 0x00, 0x3E, 0x00]);
        data.extend_from_slice(b"\x00/lib64/ld-linux-x86-64.so.2\x00");
        data.extend_from_slice(b"GLIBC_2.34\x00main\x00puts\x00");
        data
    }

    /// DOS stub prefix of a PE image.
    pub fn pe_like() -> Vec<u8> {
        let mut data = b"MZ\x90\x00\x03\x00\x00\x00".to_vec();
        data.extend_from_slice(&[0u8; 56]);
        data.extend_from_slice(b"This program cannot be run in DOS mode.\r\n$");
        data
    }

    /// Every byte value exactly `copies` times.
    pub fn uniform(copies: usize) -> Vec<u8> {
        (0..copies).flat_map(|_| 0u8..=255).collect()
    }
}
