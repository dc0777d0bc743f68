//! Presentation data and resolved configuration.

use std::path::Path;

use crate::ConfigError;
use crate::features::Features;
use crate::fonts::ResolvedFonts;
use crate::headmatter::{Headmatter, split_frontmatter};

/// Title used when the headmatter has none.
pub const DEFAULT_TITLE: &str = "Slidev";

/// Title template used when the headmatter has none.
pub const DEFAULT_TITLE_TEMPLATE: &str = "%s - Slidev";

/// Favicon used when the headmatter has none.
pub const DEFAULT_FAVICON: &str = "https://cdn.jsdelivr.net/gh/slidevjs/slidev/assets/favicon.png";

/// Configuration resolved from headmatter with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidevConfig {
    pub title: String,
    pub title_template: String,
    pub favicon: String,
    pub fonts: ResolvedFonts,
}

impl Default for SlidevConfig {
    fn default() -> Self {
        Self::resolve(&Headmatter::default())
    }
}

impl SlidevConfig {
    /// Resolve configuration from headmatter.
    #[must_use]
    pub fn resolve(headmatter: &Headmatter) -> Self {
        let non_empty = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };

        Self {
            title: non_empty(&headmatter.title, DEFAULT_TITLE),
            title_template: non_empty(&headmatter.title_template, DEFAULT_TITLE_TEMPLATE),
            favicon: non_empty(&headmatter.favicon, DEFAULT_FAVICON),
            fonts: headmatter
                .fonts
                .as_ref()
                .map(crate::fonts::FontOptions::resolve)
                .unwrap_or_default(),
        }
    }
}

/// Everything known about a presentation that the entry document needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationData {
    pub headmatter: Headmatter,
    pub config: SlidevConfig,
    pub features: Features,
}

impl PresentationData {
    /// Build presentation data from parsed headmatter and known features.
    #[must_use]
    pub fn new(headmatter: Headmatter, features: Features) -> Self {
        let config = SlidevConfig::resolve(&headmatter);
        Self {
            headmatter,
            config,
            features,
        }
    }

    /// Parse a slide deck source: headmatter plus detected features.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the headmatter is malformed.
    pub fn from_source(source: &str) -> Result<Self, ConfigError> {
        let (yaml, _) = split_frontmatter(source);
        let headmatter = Headmatter::from_yaml(yaml)?;
        Ok(Self::new(headmatter, Features::detect(source)))
    }

    /// Load and parse a slide deck file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or has malformed headmatter.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path)?;
        Self::from_source(&source)
    }

    /// Presentation title rendered through the title template.
    ///
    /// ```
    /// use slidev_config::{Headmatter, PresentationData, Features};
    ///
    /// let headmatter = Headmatter { title: Some("Talk".to_owned()), ..Headmatter::default() };
    /// let data = PresentationData::new(headmatter, Features::default());
    /// assert_eq!(data.slide_title(), "Talk - Slidev");
    /// assert_eq!(PresentationData::default().slide_title(), "Slidev");
    /// ```
    #[must_use]
    pub fn slide_title(&self) -> String {
        let title = if self.config.title.is_empty() {
            DEFAULT_TITLE
        } else {
            self.config.title.as_str()
        };
        let rendered = self.config.title_template.replace("%s", title);
        if rendered == "Slidev - Slidev" {
            DEFAULT_TITLE.to_owned()
        } else {
            rendered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SlidevConfig::default();
        assert_eq!(config.title, "Slidev");
        assert_eq!(config.title_template, "%s - Slidev");
        assert_eq!(config.favicon, DEFAULT_FAVICON);
        assert!(config.fonts.webfonts.is_empty());
    }

    #[test]
    fn test_from_source() {
        let source = "---\ntitle: Rust Talk\nfavicon: /icon.png\nfonts:\n  sans: Inter\n---\n\n<Tweet id=\"1\" />\n";
        let data = PresentationData::from_source(source).unwrap();
        assert_eq!(data.config.title, "Rust Talk");
        assert_eq!(data.config.favicon, "/icon.png");
        assert_eq!(data.config.fonts.webfonts, vec!["Inter"]);
        assert_eq!(data.config.fonts.provider, FontProvider::Google);
        assert!(data.features.tweet);
    }

    #[test]
    fn test_from_source_without_headmatter() {
        let data = PresentationData::from_source("# Hello").unwrap();
        assert_eq!(data.headmatter, Headmatter::default());
        assert_eq!(data.slide_title(), "Slidev");
    }

    #[test]
    fn test_from_source_malformed_headmatter() {
        let result = PresentationData::from_source("---\ntitle: [oops\n---\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_slide_title_custom_template() {
        let headmatter = Headmatter {
            title: Some("Talk".to_owned()),
            title_template: Some("%s | Conf 2026".to_owned()),
            ..Headmatter::default()
        };
        let data = PresentationData::new(headmatter, Features::default());
        assert_eq!(data.slide_title(), "Talk | Conf 2026");
    }

    #[test]
    fn test_empty_title_falls_back() {
        let headmatter = Headmatter {
            title: Some(String::new()),
            ..Headmatter::default()
        };
        let data = PresentationData::new(headmatter, Features::default());
        assert_eq!(data.slide_title(), "Slidev");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PresentationData::load(&dir.path().join("slides.md"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.md");
        std::fs::write(&path, "---\nauthor: Jane\n---\n# Hi\n").unwrap();
        let data = PresentationData::load(&path).unwrap();
        assert_eq!(data.headmatter.author.as_deref(), Some("Jane"));
    }
}
