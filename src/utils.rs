//! Common utility functions shared across the codebase.

use std::path::Path;

/// Escape text for inclusion in HTML content or attribute values.
///
/// # Examples
///
/// ```
/// use formgen::utils::escape_html;
///
/// assert_eq!(
///     escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&#34;Tom&#34; &amp; &#39;Jerry&#39;&lt;/b&gt;"
/// );
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// File name without directory and extension, e.g. `data/metadata.json` -> `metadata`.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
