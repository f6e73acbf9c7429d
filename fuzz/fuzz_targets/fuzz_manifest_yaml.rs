#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use stitch::{Manifest, ManifestFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz YAML manifest parsing - this should never panic
        let _ = Manifest::parse(content, ManifestFormat::Yaml, Path::new("fuzz.yaml"));
    }
});
