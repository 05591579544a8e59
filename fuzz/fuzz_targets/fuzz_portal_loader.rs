#![no_main]

use central_site::config::{check_portal, parse_portal};
use central_site::manuals::ManualRegistry;
use central_site::portal::Portal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(yaml_str) = std::str::from_utf8(data) else {
        return;
    };

    // Any portal file that parses must also validate and render.
    if let Ok(config) = parse_portal(yaml_str) {
        let _ = check_portal(&config);
        let _ = Portal::new(&config, ManualRegistry::default()).render_for_year(2026);
    }
});
