//! CLI command implementations.

pub(crate) mod index_html;

pub(crate) use index_html::IndexHtmlArgs;
