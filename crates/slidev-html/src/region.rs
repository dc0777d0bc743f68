//! Delimited region extraction.

/// Extract the content of the first `<tag>...</tag>` region.
///
/// Matching is ASCII case-insensitive and non-greedy: the region ends at
/// the first closing tag after the opening one. Only the bare opening tag
/// is recognized, so `<head lang="en">` does not start a region. Returns
/// `None` when either delimiter is missing.
///
/// ```
/// use slidev_html::extract_region;
///
/// let html = "<HEAD><title>x</title></Head><body>y</body>";
/// assert_eq!(extract_region(html, "head"), Some("<title>x</title>"));
/// assert_eq!(extract_region(html, "footer"), None);
/// ```
pub fn extract_region<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = find_ignore_ascii_case(text, &open, 0)? + open.len();
    let end = find_ignore_ascii_case(text, &close, start)?;
    Some(&text[start..end])
}

/// Find `needle` in `haystack` at or after byte offset `from`, ignoring ASCII case.
///
/// Returned offsets always fall on a char boundary since `needle` starts
/// with an ASCII `<`.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }

    (from..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_head_and_body() {
        let html = "<html><head>\n<meta a>\n</head><body><div id=\"x\"></div></body></html>";
        assert_eq!(extract_region(html, "head"), Some("\n<meta a>\n"));
        assert_eq!(extract_region(html, "body"), Some("<div id=\"x\"></div>"));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(extract_region("<HEAD>a</HEAD>", "head"), Some("a"));
        assert_eq!(extract_region("<Body>b</bOdY>", "body"), Some("b"));
    }

    #[test]
    fn non_greedy() {
        let html = "<body>first</body><body>second</body>";
        assert_eq!(extract_region(html, "body"), Some("first"));
    }

    #[test]
    fn empty_region() {
        assert_eq!(extract_region("<head></head>", "head"), Some(""));
    }

    #[test]
    fn missing_open_or_close() {
        assert_eq!(extract_region("no tags here", "head"), None);
        assert_eq!(extract_region("<head>unterminated", "head"), None);
        assert_eq!(extract_region("</head><head>", "head"), None);
    }

    #[test]
    fn attributes_on_open_tag_not_matched() {
        assert_eq!(extract_region("<body class=\"x\">y</body>", "body"), None);
    }

    #[test]
    fn multibyte_content_preserved() {
        let html = "<p>ü</p><head>ünïcode ✓</head>";
        assert_eq!(extract_region(html, "head"), Some("ünïcode ✓"));
    }
}
