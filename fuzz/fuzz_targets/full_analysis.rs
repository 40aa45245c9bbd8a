#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let buffer = binscope::ByteBuffer::new(data.to_vec());
    let _ = binscope::analyze(&buffer, &binscope::AnalyzerConfig::default());
});
