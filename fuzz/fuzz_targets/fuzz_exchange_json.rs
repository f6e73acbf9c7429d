#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything that parses must render back and parse to the same document
        if let Ok(doc) = stitch::Stitch::from_json(content) {
            if let Ok(json) = doc.to_json() {
                let again = stitch::Stitch::from_json(&json).expect("rendered JSON must parse");
                assert_eq!(again.labels, doc.labels);
                assert_eq!(again.containers, doc.containers);
            }
        }
    }
});
