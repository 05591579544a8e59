//! Whole-page assembly.
//!
//! [`Portal`] is the view's initialization step: it takes the manual registry
//! by value, resolves every card's manual once, and drops the registry. The
//! page is a single self-contained HTML document with the stylesheet inlined.

use chrono::Datelike;

use crate::config::schema::{PortalConfig, SiteConfig};
use crate::manuals::ManualRegistry;
use crate::portal::card::Card;
use crate::portal::escape::escape_html;

/// Stylesheet compiled into the binary.
pub const STYLESHEET: &str = include_str!("assets/portal.css");

/// The portal view: page chrome plus one card per application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portal {
    site: SiteConfig,
    cards: Vec<Card>,
}

impl Portal {
    /// Build the view from the configuration and the scanned manuals.
    #[must_use]
    pub fn new(config: &PortalConfig, manuals: ManualRegistry) -> Self {
        let cards = config
            .apps
            .iter()
            .map(|app| Card::new(app, &manuals))
            .collect();

        Self {
            site: config.site.clone(),
            cards,
        }
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable access to the cards, e.g. to pre-expand a manual panel.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Render the page with the footer year taken from the local clock.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_for_year(chrono::Local::now().year())
    }

    /// Render the page with an explicit footer year.
    #[must_use]
    pub fn render_for_year(&self, year: i32) -> String {
        let title = escape_html(&self.site.title);
        let mut sections = Vec::new();

        sections.push("<!DOCTYPE html>".to_string());
        sections.push("<html lang=\"en\">".to_string());
        sections.push("<head>".to_string());
        sections.push("<meta charset=\"utf-8\">".to_string());
        sections.push(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
        );
        sections.push(format!("<title>{title}</title>"));
        sections.push("<style>".to_string());
        sections.push(STYLESHEET.trim_end().to_string());
        sections.push("</style>".to_string());
        sections.push("</head>".to_string());
        sections.push("<body>".to_string());
        sections.push("<div class=\"page\">".to_string());
        sections.push("<div class=\"shell\">".to_string());
        sections.push("<div class=\"panel\">".to_string());

        sections.push("<div class=\"title-row\">".to_string());
        sections.push(format!(
            "<div class=\"logo\">{}</div>",
            escape_html(&self.site.logo)
        ));
        sections.push(format!("<h1 class=\"site-title\">{title}</h1>"));
        sections.push("</div>".to_string());
        sections.push(format!(
            "<p class=\"subtitle\">{}</p>",
            escape_html(&self.site.subtitle)
        ));

        sections.push("<div class=\"cards\">".to_string());
        for card in &self.cards {
            sections.push(card.render());
        }
        sections.push("</div>".to_string());

        sections.push(format!(
            "<div class=\"footer\">© {year} {}</div>",
            escape_html(&self.site.footer)
        ));

        sections.push("</div>".to_string());
        sections.push("</div>".to_string());
        sections.push("</div>".to_string());
        sections.push("</body>".to_string());
        sections.push("</html>".to_string());
        sections.push(String::new());

        sections.join("\n")
    }
}
