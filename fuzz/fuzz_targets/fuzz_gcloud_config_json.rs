#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // Fuzz `gcloud config list --format=json` parsing - this should never panic
        let _ = appengine_deploy::infrastructure::cloud_sdk::parse_project(json);
    }
});
