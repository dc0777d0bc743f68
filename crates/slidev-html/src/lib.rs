//! Entry document assembly for Slidev.
//!
//! Builds the single `index.html` handed to the dev server and bundler:
//!
//! 1. Head tags from presentation metadata ([`head_tags`])
//! 2. `<head>`/`<body>` fragments from every root, in root order ([`load_fragment`])
//! 3. Feature-dependent trailing content ([`inject_features`])
//! 4. Placeholder substitution in the base template ([`BaseTemplate`])
//!
//! # Example
//!
//! ```ignore
//! use slidev_html::{FsFragments, setup_index_html};
//!
//! let index = setup_index_html(&ctx, "0.1.0", &FsFragments)?;
//! std::fs::write("index.html", index.html)?;
//! ```

mod escape;
mod fonts;
mod fragment;
mod inject;
mod meta;
mod region;
mod template;
mod url;

pub use escape::{attr_value, escape_html};
pub use fonts::webfont_url;
#[cfg(feature = "mock")]
pub use fragment::MemoryFragments;
pub use fragment::{
    Fragment, FragmentError, FragmentSource, FsFragments, INDEX_FILENAME, LoadedFragment,
    load_fragment,
};
pub use inject::{TWEET_SCRIPT, inject_features};
pub use meta::head_tags;
pub use region::extract_region;
pub use template::{
    BODY_PLACEHOLDER, BaseTemplate, ENTRY_PLACEHOLDER, HEAD_PLACEHOLDER, TemplateError,
};
pub use url::{module_url, slash};

use std::path::PathBuf;

use slidev_config::BuildContext;

/// Client module booting the presentation, relative to the client root.
pub const CLIENT_ENTRY: &str = "main.ts";

/// Error building the entry document.
#[derive(Debug, thiserror::Error)]
pub enum IndexHtmlError {
    /// The client root has no `index.html`.
    #[error("Base template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
    #[error("{0}")]
    Template(#[from] TemplateError),
    /// Reading the base template or a root fragment failed.
    #[error("{0}")]
    Fragment(#[from] FragmentError),
}

/// The assembled entry document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHtml {
    /// Final HTML.
    pub html: String,
    /// User root fragments skipped because they contain a doctype declaration.
    pub ignored: Vec<PathBuf>,
}

/// Assemble the entry document for `ctx`.
///
/// Reads the base template from the client root and one optional fragment
/// per root through `source`. `version` is written to the version meta tag.
///
/// # Errors
///
/// Returns an error if the base template is missing or invalid, or if any
/// existing fragment cannot be read.
pub fn setup_index_html(
    ctx: &BuildContext,
    version: &str,
    source: &dyn FragmentSource,
) -> Result<IndexHtml, IndexHtmlError> {
    let template = source
        .read_index(ctx.client_root())?
        .ok_or_else(|| IndexHtmlError::TemplateNotFound(ctx.client_root().join(INDEX_FILENAME)))?;
    let template = BaseTemplate::parse(template)?;

    let mut head = head_tags(ctx, version).join("\n");
    let mut body = String::new();
    let mut ignored = Vec::new();

    for root in ctx.roots() {
        match load_fragment(source, root, ctx.is_user_root(root))? {
            LoadedFragment::Missing => {}
            LoadedFragment::Ignored(path) => ignored.push(path),
            LoadedFragment::Contributed(fragment) => {
                head.push('\n');
                head.push_str(&fragment.head);
                body.push('\n');
                body.push_str(&fragment.body);
            }
        }
    }

    inject_features(ctx.data(), &mut head, &mut body);

    let entry_url = module_url(&ctx.client_root().join(CLIENT_ENTRY));
    let html = template.assemble(&entry_url, &head, &body);
    tracing::debug!(
        mode = %ctx.mode(),
        roots = ctx.roots().len(),
        bytes = html.len(),
        "Assembled index.html"
    );

    Ok(IndexHtml { html, ignored })
}
