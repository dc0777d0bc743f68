//! Font configuration.

use serde::Deserialize;

use crate::headmatter::string_list;

/// Default font weights requested from the webfont provider.
const DEFAULT_WEIGHTS: [&str; 3] = ["200", "400", "600"];

/// Webfont delivery provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontProvider {
    /// Google Fonts.
    #[default]
    Google,
    /// Coollabs Fonts, a privacy-friendly Google Fonts mirror.
    Coollabs,
    /// Disable automatic stylesheet injection.
    None,
}

/// Font options as written in headmatter.
///
/// Every list accepts a single comma-separated string or a YAML list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    #[serde(deserialize_with = "string_list")]
    pub sans: Option<Vec<String>>,
    #[serde(deserialize_with = "string_list")]
    pub serif: Option<Vec<String>>,
    #[serde(deserialize_with = "string_list")]
    pub mono: Option<Vec<String>>,
    /// Explicit webfont list, overrides the families derived from `sans`/`serif`/`mono`.
    #[serde(deserialize_with = "string_list")]
    pub webfonts: Option<Vec<String>>,
    pub provider: Option<FontProvider>,
    #[serde(deserialize_with = "string_list")]
    pub weights: Option<Vec<String>>,
    pub italic: Option<bool>,
    /// Families installed locally, never fetched from the provider.
    #[serde(deserialize_with = "string_list")]
    pub local: Option<Vec<String>>,
}

/// Resolved font configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub sans: Vec<String>,
    pub serif: Vec<String>,
    pub mono: Vec<String>,
    /// Families to load from the provider, in declaration order.
    pub webfonts: Vec<String>,
    pub provider: FontProvider,
    pub weights: Vec<String>,
    pub italic: bool,
    pub local: Vec<String>,
}

impl Default for ResolvedFonts {
    fn default() -> Self {
        FontOptions::default().resolve()
    }
}

impl FontOptions {
    /// Resolve options into the effective font configuration.
    ///
    /// Without an explicit `webfonts` list, webfonts are the de-duplicated
    /// `sans`, `serif` and `mono` families that are not listed in `local`.
    /// The `none` provider always yields an empty webfont list.
    #[must_use]
    pub fn resolve(&self) -> ResolvedFonts {
        let sans = self.sans.clone().unwrap_or_default();
        let serif = self.serif.clone().unwrap_or_default();
        let mono = self.mono.clone().unwrap_or_default();
        let local = self.local.clone().unwrap_or_default();
        let provider = self.provider.unwrap_or_default();

        let webfonts = if provider == FontProvider::None {
            Vec::new()
        } else if let Some(webfonts) = &self.webfonts {
            webfonts.clone()
        } else {
            let mut families: Vec<String> = Vec::new();
            for family in sans.iter().chain(&serif).chain(&mono) {
                if !local.contains(family) && !families.contains(family) {
                    families.push(family.clone());
                }
            }
            families
        };

        let weights = match &self.weights {
            Some(weights) if !weights.is_empty() => weights.clone(),
            _ => DEFAULT_WEIGHTS.iter().map(|&w| w.to_owned()).collect(),
        };

        ResolvedFonts {
            sans,
            serif,
            mono,
            webfonts,
            provider,
            weights,
            italic: self.italic.unwrap_or(false),
            local,
        }
    }
}
