//! Presentation data model for Slidev.
//!
//! Parses the YAML headmatter of a slide deck with serde and resolves it
//! into the configuration consumed by the entry document builder:
//!
//! - [`Headmatter`]: user-authored metadata (`title`, `info`, `author`, `keywords`, ...)
//! - [`SlidevConfig`]: resolved configuration with defaults applied
//! - [`Features`]: optional features detected from the slide source
//! - [`BuildContext`]: immutable input bundle for one build
//!
//! ## Headmatter
//!
//! The headmatter is the first `---` fenced YAML block of `slides.md`:
//!
//! ```yaml
//! ---
//! title: Quarterly Review
//! info: Numbers & plans
//! keywords: [finance, q3]
//! fonts:
//!   sans: Inter
//! ---
//! ```

mod context;
mod data;
mod features;
mod fonts;
mod headmatter;

pub use context::{BuildContext, Mode};
pub use data::{DEFAULT_FAVICON, DEFAULT_TITLE, DEFAULT_TITLE_TEMPLATE, PresentationData, SlidevConfig};
pub use features::Features;
pub use fonts::{FontOptions, FontProvider, ResolvedFonts};
pub use headmatter::{Headmatter, Keywords, split_frontmatter};

use std::path::PathBuf;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Slide deck not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML headmatter parsing error.
    #[error("Headmatter parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}
