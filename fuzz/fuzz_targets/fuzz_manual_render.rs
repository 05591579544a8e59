#![no_main]

use central_site::config::PortalConfig;
use central_site::manuals::{ManualRegistry, manual_key};
use central_site::portal::{Portal, escape_html};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Some(key) = manual_key(text) {
        assert!(!key.is_empty());
    }

    let escaped = escape_html(text);
    assert!(!escaped.contains('<'));

    let manuals: ManualRegistry = [("bmi-calculator", text)].into_iter().collect();
    let mut portal = Portal::new(&PortalConfig::default(), manuals);
    for card in portal.cards_mut() {
        card.toggle_manual();
    }
    let page = portal.render_for_year(2026);
    if !text.is_empty() {
        assert!(page.contains(&escaped));
    }
});
