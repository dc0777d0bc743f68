//! Feature-dependent trailing head and body content.

use std::fmt::Write;

use slidev_config::{FontProvider, PresentationData};

use crate::escape::attr_value;
use crate::fonts::webfont_url;

/// Script loading the tweet embed widget.
pub const TWEET_SCRIPT: &str =
    "<script async src=\"https://platform.twitter.com/widgets.js\"></script>";

/// Append content for enabled features after all root fragments.
pub fn inject_features(data: &PresentationData, head: &mut String, body: &mut String) {
    if data.features.tweet {
        body.push('\n');
        body.push_str(TWEET_SCRIPT);
    }

    let fonts = &data.config.fonts;
    if !fonts.webfonts.is_empty()
        && fonts.provider != FontProvider::None
        && let Some(url) = webfont_url(fonts)
    {
        let _ = write!(
            head,
            "\n<link rel=\"stylesheet\" href={} type=\"text/css\">",
            attr_value(&url)
        );
    }
}
