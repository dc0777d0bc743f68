//! Head tags derived from presentation metadata.

use slidev_config::{BuildContext, Mode};

use crate::escape::{attr_value, escape_html};
use crate::url::slash;

/// Build the head tags for a presentation, in document order.
///
/// Order: version marker, entry marker (dev mode only), favicon, title,
/// then description, author and keywords meta tags. Tags whose value is
/// absent or empty are omitted. Free-form headmatter text is always
/// attribute-escaped.
pub fn head_tags(ctx: &BuildContext, version: &str) -> Vec<String> {
    let data = ctx.data();
    let headmatter = &data.headmatter;
    let keywords = headmatter.keywords.as_ref().map(slidev_config::Keywords::joined);
    let title = data.slide_title();

    let candidates = [
        Some(format!("<meta name=\"slidev:version\" content={}>", attr_value(version))),
        (ctx.mode() == Mode::Dev).then(|| {
            format!(
                "<meta charset=\"slidev:entry\" content={}>",
                attr_value(&slash(ctx.entry()))
            )
        }),
        non_empty(&data.config.favicon)
            .map(|favicon| format!("<link rel=\"icon\" href={}>", attr_value(favicon))),
        Some(format!("<title>{}</title>", escape_html(&title))),
        non_empty_opt(headmatter.info.as_deref())
            .map(|info| format!("<meta name=\"description\" content={}>", attr_value(info))),
        non_empty_opt(headmatter.author.as_deref())
            .map(|author| format!("<meta name=\"author\" content={}>", attr_value(author))),
        non_empty_opt(keywords.as_deref())
            .map(|keywords| format!("<meta name=\"keywords\" content={}>", attr_value(keywords))),
    ];

    candidates.into_iter().flatten().collect()
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn non_empty_opt(value: Option<&str>) -> Option<&str> {
    value.and_then(non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slidev_config::{Features, Headmatter, Keywords, PresentationData};
    use std::path::PathBuf;

    fn context(mode: Mode, headmatter: Headmatter) -> BuildContext {
        BuildContext::new(
            mode,
            "/deck/slides.md",
            "/client",
            "/deck",
            vec![PathBuf::from("/deck")],
            PresentationData::new(headmatter, Features::default()),
        )
        .unwrap()
    }

    #[test]
    fn minimal_build_mode_tags() {
        let headmatter = Headmatter {
            favicon: Some("/favicon.svg".to_owned()),
            ..Headmatter::default()
        };
        let tags = head_tags(&context(Mode::Build, headmatter), "1.2.3");
        assert_eq!(
            tags,
            vec![
                "<meta name=\"slidev:version\" content=\"1.2.3\">",
                "<link rel=\"icon\" href=\"/favicon.svg\">",
                "<title>Slidev</title>",
            ]
        );
    }

    #[test]
    fn dev_mode_adds_entry_marker_after_version() {
        let tags = head_tags(&context(Mode::Dev, Headmatter::default()), "1.2.3");
        assert_eq!(tags[1], "<meta charset=\"slidev:entry\" content=\"/deck/slides.md\">");
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn full_metadata_in_fixed_order() {
        let headmatter = Headmatter {
            title: Some("Deck".to_owned()),
            info: Some("About".to_owned()),
            author: Some("Jane".to_owned()),
            keywords: Some(Keywords::One("rust".to_owned())),
            ..Headmatter::default()
        };
        let tags = head_tags(&context(Mode::Build, headmatter), "1.0.0");
        assert_eq!(tags.len(), 6);
        assert_eq!(tags[2], "<title>Deck - Slidev</title>");
        assert_eq!(tags[3], "<meta name=\"description\" content=\"About\">");
        assert_eq!(tags[4], "<meta name=\"author\" content=\"Jane\">");
        assert_eq!(tags[5], "<meta name=\"keywords\" content=\"rust\">");
    }

    #[test]
    fn free_form_text_is_escaped() {
        let headmatter = Headmatter {
            title: Some("A <b> title".to_owned()),
            info: Some("Say \"hi\" & <script>".to_owned()),
            author: Some("O'Brien".to_owned()),
            ..Headmatter::default()
        };
        let tags = head_tags(&context(Mode::Build, headmatter), "1.0.0");
        assert!(tags.contains(&"<title>A &lt;b&gt; title - Slidev</title>".to_owned()));
        assert!(tags.contains(
            &"<meta name=\"description\" content=\"Say &quot;hi&quot; &amp; &lt;script&gt;\">"
                .to_owned()
        ));
        assert!(tags.contains(&"<meta name=\"author\" content=\"O&#39;Brien\">".to_owned()));
    }

    #[test]
    fn keyword_list_is_joined_then_escaped() {
        let headmatter = Headmatter {
            keywords: Some(Keywords::Many(vec![
                "a".to_owned(),
                "b".to_owned(),
                "c".to_owned(),
            ])),
            ..Headmatter::default()
        };
        let tags = head_tags(&context(Mode::Build, headmatter), "1.0.0");
        assert_eq!(
            tags.last().map(String::as_str),
            Some("<meta name=\"keywords\" content=\"a, b, c\">")
        );
    }

    #[test]
    fn empty_values_are_omitted() {
        let headmatter = Headmatter {
            info: Some(String::new()),
            author: Some(String::new()),
            keywords: Some(Keywords::Many(Vec::new())),
            ..Headmatter::default()
        };
        let tags = head_tags(&context(Mode::Build, headmatter), "1.0.0");
        assert!(tags.iter().all(|tag| !tag.contains("name=\"description\"")));
        assert!(tags.iter().all(|tag| !tag.contains("name=\"author\"")));
        assert!(tags.iter().all(|tag| !tag.contains("name=\"keywords\"")));
    }

    #[test]
    fn default_favicon_present() {
        let tags = head_tags(&context(Mode::Build, Headmatter::default()), "1.0.0");
        assert!(tags[1].starts_with("<link rel=\"icon\" href=\"https://cdn.jsdelivr.net/"));
    }
}
