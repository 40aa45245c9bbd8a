#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let min = data.first().map(|&b| (b % 16) as usize).unwrap_or(4);
    for s in binscope::strings::extract_strings(data, min) {
        assert!(s.offset + s.text.len() <= data.len());
    }
});
