//! HTML escaping for text and attribute values.
//!
//! Everything on the page comes from configuration or manual files, so all of
//! it passes through here before it is written into markup.

/// Escape text for use inside an element or a double-quoted attribute.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character references. Whitespace
/// and line breaks are left untouched so `<pre>` content keeps its layout.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
