//! Build context: the immutable input bundle for one entry document build.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ConfigError;
use crate::data::PresentationData;

/// Operating mode of the tool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Dev server.
    #[default]
    Dev,
    /// Production bundle.
    Build,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => f.write_str("dev"),
            Self::Build => f.write_str("build"),
        }
    }
}

/// Inputs for building the entry document.
///
/// Root order is significant: fragments are merged in this order.
#[derive(Debug, Clone)]
pub struct BuildContext {
    mode: Mode,
    entry: PathBuf,
    client_root: PathBuf,
    user_root: PathBuf,
    roots: Vec<PathBuf>,
    data: PresentationData,
}

impl BuildContext {
    /// Create a build context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] unless `user_root` occurs exactly once in `roots`.
    pub fn new(
        mode: Mode,
        entry: impl Into<PathBuf>,
        client_root: impl Into<PathBuf>,
        user_root: impl Into<PathBuf>,
        roots: Vec<PathBuf>,
        data: PresentationData,
    ) -> Result<Self, ConfigError> {
        let user_root = user_root.into();
        let occurrences = roots.iter().filter(|root| **root == user_root).count();
        if occurrences != 1 {
            return Err(ConfigError::Validation(format!(
                "user root {} must appear exactly once in roots (found {occurrences})",
                user_root.display()
            )));
        }

        Ok(Self {
            mode,
            entry: entry.into(),
            client_root: client_root.into(),
            user_root,
            roots,
            data,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Path of the slide deck entry file.
    #[must_use]
    pub fn entry(&self) -> &Path {
        &self.entry
    }

    /// Root of the tool's own client files, holding the base template.
    #[must_use]
    pub fn client_root(&self) -> &Path {
        &self.client_root
    }

    /// All roots in merge order.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    #[must_use]
    pub fn data(&self) -> &PresentationData {
        &self.data
    }

    /// Whether `root` is the user's project root.
    #[must_use]
    pub fn is_user_root(&self, root: &Path) -> bool {
        root == self.user_root
    }
}
