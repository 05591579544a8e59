//! Portal configuration schema.
//!
//! The default value of [`PortalConfig`] is the deployed portal: three
//! internal applications under the IT department's page chrome. A YAML file
//! with the same shape can replace it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Everything the page needs besides the manuals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PortalConfig {
    /// Page chrome (title, subtitle, footer)
    #[serde(default)]
    pub site: SiteConfig,

    /// Applications listed on the page, in display order
    #[serde(default)]
    pub apps: Vec<AppDescriptor>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            apps: vec![
                AppDescriptor {
                    title: "Employee Monitoring Board System".to_string(),
                    description: "Track employee activity and board-wide status in real time."
                        .to_string(),
                    link_href: Some("https://creotec-embs.vercel.app".to_string()),
                    download_href: None,
                    badge: DEFAULT_BADGE.to_string(),
                    manual_key: "employee-monitoring-board-system".to_string(),
                },
                AppDescriptor {
                    title: "BMI Calculator".to_string(),
                    description: "Calculate Body Mass Index with healthy range guidance."
                        .to_string(),
                    link_href: None,
                    download_href: Some("/BMICalculator.apk".to_string()),
                    badge: DEFAULT_BADGE.to_string(),
                    manual_key: "bmi-calculator".to_string(),
                },
                AppDescriptor {
                    title: "Payroll Calculator (PRC)".to_string(),
                    description: "Compute salaries, taxes, and deductions efficiently.".to_string(),
                    link_href: Some("https://creotec-prc.vercel.app".to_string()),
                    download_href: None,
                    badge: DEFAULT_BADGE.to_string(),
                    manual_key: "payroll-calculator-prc".to_string(),
                },
            ],
        }
    }
}

/// Badge shown on every built-in application.
pub const DEFAULT_BADGE: &str = "Available";

// ============================================================================
// Site Chrome
// ============================================================================

/// Page-level text around the cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SiteConfig {
    /// Main heading and document title
    pub title: String,

    /// Line under the heading
    pub subtitle: String,

    /// Glyph shown in the logo tile next to the heading
    pub logo: String,

    /// Name shown after the year in the footer
    pub footer: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "EMS Application Portal".to_string(),
            subtitle: "Quick access to the IT Department's built tools and their documentation."
                .to_string(),
            logo: "∑".to_string(),
            footer: "Central Site".to_string(),
        }
    }
}

// ============================================================================
// Application Descriptor
// ============================================================================

/// One application card.
///
/// `link_href` and `download_href` are opaque strings; nothing checks that
/// they resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppDescriptor {
    /// Display name
    pub title: String,

    /// One-line summary
    #[serde(default)]
    pub description: String,

    /// External launch target; absent means no launch button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_href: Option<String>,

    /// Download path; absent means no download button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,

    /// Status label; empty means no badge
    #[serde(default)]
    pub badge: String,

    /// Manual registry key (lowercased manual file stem)
    pub manual_key: String,
}
