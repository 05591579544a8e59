//! Soft checks on portal descriptors.
//!
//! A descriptor is never rejected. These checks flag the cases that render
//! but are probably configuration slips: a card with no buttons, or a
//! manual key that can never match a scanned file.

use crate::config::loader::LoadWarning;
use crate::config::schema::PortalConfig;

/// Check every descriptor and return the warnings found.
#[must_use]
pub fn check_portal(config: &PortalConfig) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    if config.apps.is_empty() {
        warnings.push(LoadWarning {
            message: "portal lists no applications".to_string(),
            location: Some("apps".to_string()),
        });
    }

    for (index, app) in config.apps.iter().enumerate() {
        if app.title.trim().is_empty() {
            warnings.push(LoadWarning {
                message: "application has an empty title".to_string(),
                location: Some(format!("apps[{index}].title")),
            });
        }

        if app.link_href.is_none() && app.download_href.is_none() {
            warnings.push(LoadWarning {
                message: format!("'{}' has neither link_href nor download_href", app.title),
                location: Some(format!("apps[{index}]")),
            });
        }

        // Scanned keys are always lowercase, so anything else cannot match.
        if app.manual_key != app.manual_key.to_lowercase() {
            warnings.push(LoadWarning {
                message: format!(
                    "manual_key '{}' is not lowercase and will never match a manual",
                    app.manual_key
                ),
                location: Some(format!("apps[{index}].manual_key")),
            });
        }
    }

    warnings
}
