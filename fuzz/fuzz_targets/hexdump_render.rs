#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let start = data[0] as usize;
    let length = data[1] as usize;
    if let Ok(dump) = binscope::hexdump::render_hex_dump(data, start, length) {
        for row in dump {
            let _ = row.to_string();
        }
    }
});
