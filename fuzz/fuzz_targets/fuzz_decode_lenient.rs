#![no_main]

use libfuzzer_sys::fuzz_target;
use toon_codec::DecodeOptions;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = toon_codec::decode(s, &DecodeOptions::default().lenient());
    }
});
