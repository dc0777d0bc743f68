//! Optional features detected from slide source.

/// Feature flags controlling optional content injection.
///
/// Either detected from the slide source with [`Features::detect`] or
/// constructed explicitly by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Embedded tweets (`<Tweet>` component).
    pub tweet: bool,
    /// `KaTeX` math.
    pub katex: bool,
    /// Monaco editor code blocks.
    pub monaco: bool,
    /// Mermaid diagrams.
    pub mermaid: bool,
}

impl Features {
    /// Detect features used by the slide source.
    ///
    /// Detection is a plain substring scan and may over-report; a false
    /// positive only costs an unused script tag.
    #[must_use]
    pub fn detect(source: &str) -> Self {
        Self {
            tweet: source.contains("<Tweet"),
            katex: source.contains('$'),
            monaco: source.contains("{monaco"),
            mermaid: source.contains("```mermaid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_nothing() {
        assert_eq!(Features::detect("# Hello\n\nPlain slide."), Features::default());
    }

    #[test]
    fn test_detect_tweet() {
        let features = Features::detect("<Tweet id=\"20\" />");
        assert!(features.tweet);
        assert!(!features.mermaid);
    }

    #[test]
    fn test_detect_all() {
        let source = "<Tweet id=\"1\" />\n$x^2$\n```ts {monaco}\nlet a\n```\n```mermaid\ngraph TD\n```";
        let features = Features::detect(source);
        assert!(features.tweet);
        assert!(features.katex);
        assert!(features.monaco);
        assert!(features.mermaid);
    }
}
