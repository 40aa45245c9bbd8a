#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let decoded = binscope::search::decode_hex(text);
        assert!(decoded.bytes.len() <= text.len() / 2);
    }
});
