//! CLI error types.

use slidev_config::ConfigError;
use slidev_html::IndexHtmlError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    IndexHtml(#[from] IndexHtmlError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
