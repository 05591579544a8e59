//! Portal view
//!
//! Renders the application cards and their manual panels into a single HTML
//! page. Rendering is a pure function of the configuration, the manuals and
//! the footer year.

pub mod card;
pub mod escape;
pub mod page;

pub use card::{Card, CardAction, MANUAL_FALLBACK};
pub use escape::escape_html;
pub use page::{Portal, STYLESHEET};
