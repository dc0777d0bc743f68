//! Webfont stylesheet URLs.

use slidev_config::{FontProvider, ResolvedFonts};

const GOOGLE_CSS_URL: &str = "https://fonts.googleapis.com/css2";
const COOLLABS_CSS_URL: &str = "https://api.fonts.coollabs.io/css2";

/// Stylesheet URL loading all configured webfonts.
///
/// Returns `None` when there is nothing to load or the provider is `none`.
pub fn webfont_url(fonts: &ResolvedFonts) -> Option<String> {
    let base = match fonts.provider {
        FontProvider::Google => GOOGLE_CSS_URL,
        FontProvider::Coollabs => COOLLABS_CSS_URL,
        FontProvider::None => return None,
    };
    if fonts.webfonts.is_empty() {
        return None;
    }

    let mut weights: Vec<String> = fonts
        .weights
        .iter()
        .flat_map(|w| {
            if fonts.italic {
                vec![format!("0,{w}"), format!("1,{w}")]
            } else {
                vec![w.clone()]
            }
        })
        .collect();
    weights.sort();
    let weights = weights.join(";");
    let axes = if fonts.italic { "ital,wght" } else { "wght" };

    let families = fonts
        .webfonts
        .iter()
        .map(|family| format!("family={}:{axes}@{weights}", family_param(family)))
        .collect::<Vec<_>>()
        .join("&");

    Some(format!("{base}?{families}&display=swap"))
}

/// Strip surrounding quotes and join words with `+`.
fn family_param(family: &str) -> String {
    let family = family.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| family.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(family);
    unquoted.split_whitespace().collect::<Vec<_>>().join("+")
}
