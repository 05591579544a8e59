//! Application card: data, toggle state and markup.
//!
//! A card is built from one [`AppDescriptor`] plus the manual text looked up
//! in the registry. Optional descriptor fields map one-to-one onto optional
//! page elements; a missing field removes its element and nothing else.

use crate::config::schema::AppDescriptor;
use crate::manuals::ManualRegistry;
use crate::portal::escape::escape_html;

/// Text shown in the manual panel when no manual was found for the card.
pub const MANUAL_FALLBACK: &str = "No manual found. Add a .md file to the manuals directory.";

/// Summary line of the collapsible manual panel.
pub const MANUAL_SUMMARY: &str = "Users' Manual (Markdown)";

/// Label of the launch button.
pub const LAUNCH_LABEL: &str = "Open App";

/// Label of the download button.
pub const DOWNLOAD_LABEL: &str = "Download APK";

/// A button in the card's button bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction<'a> {
    /// Open the application in a new browsing context.
    Launch(&'a str),
    /// Download a file in a new browsing context.
    Download(&'a str),
}

impl CardAction<'_> {
    /// Button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Launch(_) => LAUNCH_LABEL,
            Self::Download(_) => DOWNLOAD_LABEL,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Launch(href) => format!(
                "<a class=\"button button-primary\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
                escape_html(href),
                self.label()
            ),
            Self::Download(href) => format!(
                "<a class=\"button button-secondary\" href=\"{}\" download target=\"_blank\" rel=\"noreferrer\">{}</a>",
                escape_html(href),
                self.label()
            ),
        }
    }
}

/// One rendered application.
///
/// Owns its manual text and the open/closed flag of its manual panel. No
/// state is shared between cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    title: String,
    description: String,
    badge: Option<String>,
    link_href: Option<String>,
    download_href: Option<String>,
    manual_key: String,
    manual: Option<String>,
    manual_open: bool,
}

impl Card {
    /// Build a card for `app`, taking its manual from `manuals`.
    ///
    /// An empty manual file is treated the same as a missing one.
    #[must_use]
    pub fn new(app: &AppDescriptor, manuals: &ManualRegistry) -> Self {
        let manual = manuals
            .get(&app.manual_key)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Self {
            title: app.title.clone(),
            description: app.description.clone(),
            badge: Some(app.badge.clone()).filter(|badge| !badge.is_empty()),
            link_href: app.link_href.clone(),
            download_href: app.download_href.clone(),
            manual_key: app.manual_key.clone(),
            manual,
            manual_open: false,
        }
    }

    /// Display name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Registry key the manual was looked up with.
    #[must_use]
    pub fn manual_key(&self) -> &str {
        &self.manual_key
    }

    /// Returns `true` if a manual was found for this card.
    #[must_use]
    pub const fn has_manual(&self) -> bool {
        self.manual.is_some()
    }

    /// Text shown in the manual panel: the manual, or [`MANUAL_FALLBACK`].
    #[must_use]
    pub fn manual_text(&self) -> &str {
        self.manual.as_deref().unwrap_or(MANUAL_FALLBACK)
    }

    /// Whether the manual panel is expanded.
    #[must_use]
    pub const fn is_manual_open(&self) -> bool {
        self.manual_open
    }

    /// Flip the manual panel between collapsed and expanded.
    pub const fn toggle_manual(&mut self) {
        self.manual_open = !self.manual_open;
    }

    /// Buttons in display order: launch first, then download.
    #[must_use]
    pub fn actions(&self) -> Vec<CardAction<'_>> {
        let mut actions = Vec::with_capacity(2);
        if let Some(ref href) = self.link_href {
            actions.push(CardAction::Launch(href));
        }
        if let Some(ref href) = self.download_href {
            actions.push(CardAction::Download(href));
        }
        actions
    }

    /// Render the card markup.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push("<div class=\"card\">".to_string());
        if let Some(ref badge) = self.badge {
            lines.push(format!("  <span class=\"badge\">{}</span>", escape_html(badge)));
        }
        lines.push(format!(
            "  <h3 class=\"card-title\">{}</h3>",
            escape_html(&self.title)
        ));
        lines.push(format!(
            "  <p class=\"card-description\">{}</p>",
            escape_html(&self.description)
        ));

        lines.push("  <div class=\"button-bar\">".to_string());
        for action in self.actions() {
            lines.push(format!("    {}", action.render()));
        }
        lines.push("  </div>".to_string());

        if self.manual_open {
            lines.push("  <details class=\"manual\" open>".to_string());
        } else {
            lines.push("  <details class=\"manual\">".to_string());
        }
        lines.push(format!("    <summary>{}</summary>", escape_html(MANUAL_SUMMARY)));
        lines.push("    <div class=\"manual-body\">".to_string());
        lines.push("      <label class=\"manual-label\">Loaded from file:</label>".to_string());
        // Parsers drop one newline directly after <pre>; emit it so the
        // manual's own leading newline survives.
        lines.push(format!(
            "      <pre class=\"manual-text\">\n{}</pre>",
            escape_html(self.manual_text())
        ));
        lines.push("    </div>".to_string());
        lines.push("  </details>".to_string());
        lines.push("</div>".to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(link: Option<&str>, download: Option<&str>) -> AppDescriptor {
        AppDescriptor {
            title: "BMI Calculator".to_string(),
            description: "Calculate Body Mass Index with healthy range guidance.".to_string(),
            link_href: link.map(str::to_string),
            download_href: download.map(str::to_string),
            badge: "Available".to_string(),
            manual_key: "bmi-calculator".to_string(),
        }
    }

    fn bmi_manuals() -> ManualRegistry {
        [("bmi-calculator", "# BMI\nEnter height and weight.")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_manual_found_is_shown_verbatim() {
        let mut card = Card::new(&descriptor(None, Some("/x.apk")), &bmi_manuals());
        card.toggle_manual();

        assert!(card.has_manual());
        assert_eq!(card.manual_text(), "# BMI\nEnter height and weight.");
        assert!(
            card.render()
                .contains("<pre class=\"manual-text\">\n# BMI\nEnter height and weight.</pre>")
        );
    }

    #[test]
    fn test_missing_manual_uses_fallback() {
        let card = Card::new(&descriptor(None, None), &ManualRegistry::default());
        assert!(!card.has_manual());
        assert_eq!(card.manual_text(), MANUAL_FALLBACK);
        assert!(card.render().contains(MANUAL_FALLBACK));
    }

    #[test]
    fn test_empty_manual_uses_fallback() {
        let manuals: ManualRegistry = [("bmi-calculator", "")].into_iter().collect();
        let card = Card::new(&descriptor(None, None), &manuals);
        assert_eq!(card.manual_text(), MANUAL_FALLBACK);
    }

    #[test]
    fn test_link_only_renders_single_launch_button() {
        let card = Card::new(
            &descriptor(Some("https://app.example"), None),
            &ManualRegistry::default(),
        );

        assert_eq!(card.actions(), vec![CardAction::Launch("https://app.example")]);
        let html = card.render();
        assert_eq!(html.matches("class=\"button ").count(), 1);
        assert!(html.contains(LAUNCH_LABEL));
        assert!(!html.contains(DOWNLOAD_LABEL));
        assert!(html.contains("target=\"_blank\""));
        assert!(!html.contains(" download "));
    }

    #[test]
    fn test_download_only_renders_single_download_button() {
        let card = Card::new(
            &descriptor(None, Some("/BMICalculator.apk")),
            &ManualRegistry::default(),
        );

        let html = card.render();
        assert_eq!(html.matches("class=\"button ").count(), 1);
        assert!(html.contains("button-secondary"));
        assert!(!html.contains("button-primary"));
        assert!(html.contains("href=\"/BMICalculator.apk\" download target=\"_blank\""));
        assert!(html.contains(DOWNLOAD_LABEL));
    }

    #[test]
    fn test_both_actions_in_order() {
        let card = Card::new(
            &descriptor(Some("https://app.example"), Some("/app.apk")),
            &ManualRegistry::default(),
        );
        let labels: Vec<&str> = card.actions().iter().map(CardAction::label).collect();
        assert_eq!(labels, vec![LAUNCH_LABEL, DOWNLOAD_LABEL]);
    }

    #[test]
    fn test_no_actions_renders_empty_button_bar() {
        let card = Card::new(&descriptor(None, None), &ManualRegistry::default());
        let html = card.render();
        assert!(card.actions().is_empty());
        assert!(html.contains("<div class=\"button-bar\">\n  </div>"));
        assert!(!html.contains("class=\"button "));
    }

    #[test]
    fn test_empty_badge_is_omitted() {
        let mut app = descriptor(None, None);
        app.badge = String::new();
        let html = Card::new(&app, &ManualRegistry::default()).render();
        assert!(!html.contains("class=\"badge\""));
    }

    #[test]
    fn test_badge_rendered() {
        let html = Card::new(&descriptor(None, None), &ManualRegistry::default()).render();
        assert!(html.contains("<span class=\"badge\">Available</span>"));
    }

    #[test]
    fn test_panel_starts_collapsed() {
        let card = Card::new(&descriptor(None, None), &bmi_manuals());
        assert!(!card.is_manual_open());
        assert!(card.render().contains("<details class=\"manual\">"));
    }

    #[test]
    fn test_toggle_pair_restores_initial_state() {
        let original = Card::new(&descriptor(None, None), &bmi_manuals());
        let mut card = original.clone();

        card.toggle_manual();
        assert!(card.is_manual_open());
        assert!(card.render().contains("<details class=\"manual\" open>"));

        card.toggle_manual();
        assert!(!card.is_manual_open());
        assert_eq!(card, original);
        assert_eq!(card.render(), original.render());
    }

    #[test]
    fn test_text_is_escaped() {
        let mut app = descriptor(Some("https://x.example/?a=1&b=\"2\""), None);
        app.title = "<b>Bold</b>".to_string();
        let manuals: ManualRegistry = [("bmi-calculator", "<script>x</script> & more")]
            .into_iter()
            .collect();

        let html = Card::new(&app, &manuals).render();
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt; &amp; more"));
        assert!(html.contains("href=\"https://x.example/?a=1&amp;b=&quot;2&quot;\""));
        assert!(!html.contains("<script>"));
    }
}
