//! HTML escaping.

/// Escape HTML special characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character references. The
/// result is safe both as text content and inside a quoted attribute, and
/// decoding the references yields the input unchanged.
///
/// ```
/// use slidev_html::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a value and wrap it in double quotes for use as an attribute value.
///
/// ```
/// use slidev_html::attr_value;
///
/// assert_eq!(attr_value("a<b"), "\"a&lt;b\"");
/// ```
pub fn attr_value(s: &str) -> String {
    format!("\"{}\"", escape_html(s))
}
