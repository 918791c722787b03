//! HTML helper functions

use super::text::dateify;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag; `html` is inserted as is
///
/// # Examples
/// ```ignore
/// link_to("/posts/hello/", "Hello") // -> <a href="/posts/hello/">Hello</a>
/// ```
pub fn link_to(href: &str, html: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, html_escape(href), html)
}

/// Generate a <time> element showing the date part of a timestamp
pub fn time_tag(date: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        html_escape(date),
        html_escape(&dateify(date))
    )
}
