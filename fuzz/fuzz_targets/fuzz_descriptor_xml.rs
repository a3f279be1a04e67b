#![no_main]

use libfuzzer_sys::fuzz_target;

use appengine_deploy::domain::entities::AppEngineDescriptor;

fuzz_target!(|data: &[u8]| {
    if let Ok(xml) = std::str::from_utf8(data) {
        // Fuzz appengine-web.xml parsing - this should never panic
        if let Ok(descriptor) = AppEngineDescriptor::parse(xml) {
            let _ = descriptor.project_id();
            let _ = descriptor.version();
            let _ = descriptor.is_vm();
        }
    }
});
