#![no_main]

use std::path::Component;

use central_site::serve::public_relative_path;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };

    // Accepted paths never climb out of the public directory.
    if let Some(relative) = public_relative_path(path) {
        assert!(
            relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
        );
    }
});
