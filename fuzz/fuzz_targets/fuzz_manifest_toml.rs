#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use stitch::{BuildSession, DeploymentOptions, Manifest, ManifestFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing, building and exporting may fail but must never panic
        if let Ok(manifest) = Manifest::parse(content, ManifestFormat::Toml, Path::new("fuzz.toml")) {
            let session = BuildSession::new();
            if let Ok(deployment) = manifest.build(&session, DeploymentOptions::default()) {
                let _ = deployment.export();
            }
        }
    }
});
