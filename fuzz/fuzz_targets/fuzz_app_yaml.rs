#![no_main]

use libfuzzer_sys::fuzz_target;

use appengine_deploy::domain::entities::AppYaml;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        // Fuzz app.yaml parsing - this should never panic
        if let Ok(manifest) = AppYaml::parse(yaml) {
            let _ = manifest.is_custom_runtime();
        }
    }
});
