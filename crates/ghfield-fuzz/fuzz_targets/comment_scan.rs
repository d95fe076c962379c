#![no_main]
use ghfield_core::{latest_comment_with_marker, BUILD_MARKER};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // First line is the marker, the rest become comment bodies
        let mut lines = text.lines();
        let marker = lines.next().unwrap_or(BUILD_MARKER);
        let comments: Vec<serde_json::Value> = lines
            .map(|body| serde_json::json!({ "body": body }))
            .collect();
        let doc = serde_json::Value::Array(comments);

        if let Ok(Some(body)) = latest_comment_with_marker(&doc, marker) {
            assert!(body.contains(marker));
        }
    }
});
