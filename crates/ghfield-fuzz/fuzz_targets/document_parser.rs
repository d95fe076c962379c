#![no_main]
use ghfield_core::{parse_document, Selector};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as stdin; every selector must fail cleanly or succeed
    if let Ok(doc) = parse_document(data) {
        for selector in Selector::ALL {
            let _ = selector.extract(&doc).map(|v| v.to_string());
        }
    }
});
