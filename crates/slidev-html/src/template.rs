//! Base template and final document assembly.
//!
//! The base template is the client root's `index.html`. It carries three
//! placeholders, each exactly once: the entry module path, the head
//! insertion point and the body insertion point.

/// Replaced by the entry module URL.
pub const ENTRY_PLACEHOLDER: &str = "__ENTRY__";
/// Replaced by the merged head content.
pub const HEAD_PLACEHOLDER: &str = "<!-- head -->";
/// Replaced by the merged body content.
pub const BODY_PLACEHOLDER: &str = "<!-- body -->";

/// Error in the base template.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Base template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
    #[error("Base template contains the {0} placeholder more than once")]
    DuplicatePlaceholder(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Entry,
    Head,
    Body,
}

/// Validated base template.
#[derive(Debug, Clone)]
pub struct BaseTemplate {
    text: String,
    /// Placeholder positions sorted by offset.
    slots: [(usize, Slot, &'static str); 3],
}

impl BaseTemplate {
    /// Validate a template's placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] unless each placeholder occurs exactly once.
    pub fn parse(text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        let mut slots = [
            (locate(&text, ENTRY_PLACEHOLDER)?, Slot::Entry, ENTRY_PLACEHOLDER),
            (locate(&text, HEAD_PLACEHOLDER)?, Slot::Head, HEAD_PLACEHOLDER),
            (locate(&text, BODY_PLACEHOLDER)?, Slot::Body, BODY_PLACEHOLDER),
        ];
        slots.sort_by_key(|&(offset, ..)| offset);
        Ok(Self { text, slots })
    }

    /// Substitute the placeholders.
    ///
    /// Substitution is positional: placeholder-like text inside the inserted
    /// content is left untouched.
    #[must_use]
    pub fn assemble(&self, entry_url: &str, head: &str, body: &str) -> String {
        let mut html =
            String::with_capacity(self.text.len() + entry_url.len() + head.len() + body.len());
        let mut cursor = 0;
        for &(offset, slot, placeholder) in &self.slots {
            html.push_str(&self.text[cursor..offset]);
            html.push_str(match slot {
                Slot::Entry => entry_url,
                Slot::Head => head,
                Slot::Body => body,
            });
            cursor = offset + placeholder.len();
        }
        html.push_str(&self.text[cursor..]);
        html
    }
}

/// Offset of the single occurrence of `placeholder` in `text`.
fn locate(text: &str, placeholder: &'static str) -> Result<usize, TemplateError> {
    let offset = text
        .find(placeholder)
        .ok_or(TemplateError::MissingPlaceholder(placeholder))?;
    if text[offset + placeholder.len()..].contains(placeholder) {
        return Err(TemplateError::DuplicatePlaceholder(placeholder));
    }
    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n<head>\n<!-- head -->\n</head>\n<body>\n<div id=\"app\"></div>\n<script type=\"module\" src=\"__ENTRY__\"></script>\n<!-- body -->\n</body>\n</html>\n";

    #[test]
    fn assemble_replaces_all_placeholders() {
        let template = BaseTemplate::parse(TEMPLATE).unwrap();
        let html = template.assemble("/@fs/client/main.ts", "<title>T</title>", "<p>B</p>");
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n<title>T</title>\n</head>\n<body>\n<div id=\"app\"></div>\n<script type=\"module\" src=\"/@fs/client/main.ts\"></script>\n<p>B</p>\n</body>\n</html>\n"
        );
        assert!(!html.contains(ENTRY_PLACEHOLDER));
        assert!(!html.contains(HEAD_PLACEHOLDER));
        assert!(!html.contains(BODY_PLACEHOLDER));
    }

    #[test]
    fn placeholder_order_does_not_matter() {
        let template = BaseTemplate::parse("<!-- body -->|__ENTRY__|<!-- head -->").unwrap();
        assert_eq!(template.assemble("E", "H", "B"), "B|E|H");
    }

    #[test]
    fn inserted_content_is_not_rescanned() {
        let template = BaseTemplate::parse(TEMPLATE).unwrap();
        let html = template.assemble("/main.ts", "<!-- body -->", "__ENTRY__");
        assert!(html.contains("<head>\n<!-- body -->\n</head>"));
        assert!(html.contains("<body>\n<div id=\"app\"></div>\n<script type=\"module\" src=\"/main.ts\"></script>\n__ENTRY__\n</body>"));
    }

    #[test]
    fn missing_placeholder_is_error() {
        let err = BaseTemplate::parse("<head><!-- head --></head><body><!-- body --></body>")
            .unwrap_err();
        assert_eq!(err, TemplateError::MissingPlaceholder(ENTRY_PLACEHOLDER));
    }

    #[test]
    fn duplicate_placeholder_is_error() {
        let err = BaseTemplate::parse("__ENTRY__ <!-- head --> <!-- body --> <!-- head -->")
            .unwrap_err();
        assert_eq!(err, TemplateError::DuplicatePlaceholder(HEAD_PLACEHOLDER));
    }
}
