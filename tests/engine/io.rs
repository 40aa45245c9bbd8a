use crate::common::{temp_file_with, test_data};
use binscope::error::BinscopeError;
use binscope::io::error::IoError;
use binscope::io::{load_buffer, IOLimits, SafeReader};

#[test]
fn load_buffer_matches_file_contents() {
    let data = test_data::elf_like();
    let file = temp_file_with(&data);
    let buffer = load_buffer(file.path(), &IOLimits::default()).unwrap();
    assert_eq!(buffer.len(), data.len());
    assert_eq!(buffer.as_slice(), &data[..]);
    assert_eq!(buffer.source(), file.path().display().to_string());
}

#[test]
fn load_empty_file() {
    let file = temp_file_with(b"");
    let buffer = load_buffer(file.path(), &IOLimits::default()).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn missing_file_is_input_error() {
    let err = load_buffer("/no/such/dir/input.bin", &IOLimits::default()).unwrap_err();
    assert!(matches!(err, IoError::NotFound { .. }));
    let wrapped = BinscopeError::from(err);
    assert!(!wrapped.is_recoverable());
    assert!(wrapped.to_string().starts_with("Input error:"));
}

#[test]
fn oversized_file_rejected() {
    let file = temp_file_with(&[0u8; 64]);
    let limits = IOLimits { max_file_size: 16 };
    match SafeReader::open(file.path(), &limits) {
        Err(IoError::FileTooLarge { limit, found }) => {
            assert_eq!(limit, 16);
            assert_eq!(found, 64);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("oversized file was accepted"),
    }
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_buffer(dir.path(), &IOLimits::default()).unwrap_err();
    assert!(matches!(err, IoError::NotAFile { .. } | IoError::StdIo(_)));
}
