#![no_main]
use ghfield_core::extract::date::epoch_seconds;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(secs) = epoch_seconds(s) {
            // Accepted inputs always have the fixed 20-byte layout
            assert_eq!(s.len(), 20);
            assert!(s.ends_with('Z'));
            let _ = secs;
        }
    }
});
