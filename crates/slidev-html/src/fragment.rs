//! Per-root `index.html` fragments.
//!
//! Every root may carry an `index.html` whose `<head>` and `<body>` regions
//! are merged into the entry document. Reading goes through the
//! [`FragmentSource`] trait so the merge logic can be tested without disk.

use std::io;
use std::path::{Path, PathBuf};

use crate::region::extract_region;

/// File name of a root's fragment.
pub const INDEX_FILENAME: &str = "index.html";

/// Marker of a generated full document, invalid in the user's root.
const DOCTYPE_MARKER: &str = "<!DOCTYPE";

/// Error reading a root's `index.html`.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read {}: {source}", .path.display())]
pub struct FragmentError {
    /// Path of the file that could not be read.
    pub path: PathBuf,
    #[source]
    source: io::Error,
}

impl FragmentError {
    /// Create an error for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Source of `index.html` files by root.
pub trait FragmentSource {
    /// Read `<root>/index.html`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError`] for any other read failure.
    fn read_index(&self, root: &Path) -> Result<Option<String>, FragmentError>;
}

/// Reads fragments from the local filesystem.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFragments;

impl FragmentSource for FsFragments {
    fn read_index(&self, root: &Path) -> Result<Option<String>, FragmentError> {
        let path = root.join(INDEX_FILENAME);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FragmentError::new(path, e)),
        }
    }
}

/// Head and body content contributed by one root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub head: String,
    pub body: String,
}

impl Fragment {
    /// Extract trimmed head and body regions. Missing regions are empty.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let region = |tag: &str| extract_region(html, tag).unwrap_or_default().trim().to_owned();
        Self {
            head: region("head"),
            body: region("body"),
        }
    }
}

/// Outcome of loading one root's fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedFragment {
    /// The root has no `index.html`.
    Missing,
    /// The user root's `index.html` is a generated document and was skipped.
    Ignored(PathBuf),
    /// Content to merge.
    Contributed(Fragment),
}

/// Load the fragment of `root`.
///
/// A user root fragment containing a doctype declaration is most likely a
/// build artifact; it is skipped with a warning.
///
/// # Errors
///
/// Returns [`FragmentError`] if the file exists but cannot be read.
pub fn load_fragment(
    source: &dyn FragmentSource,
    root: &Path,
    is_user_root: bool,
) -> Result<LoadedFragment, FragmentError> {
    let Some(index) = source.read_index(root)? else {
        return Ok(LoadedFragment::Missing);
    };

    let path = root.join(INDEX_FILENAME);
    if is_user_root && index.contains(DOCTYPE_MARKER) {
        tracing::warn!(
            path = %path.display(),
            "Ignored provided index.html with doctype declaration. \
             This file may be generated by Slidev, please remove it from your project."
        );
        return Ok(LoadedFragment::Ignored(path));
    }

    let fragment = Fragment::parse(&index);
    tracing::debug!(
        path = %path.display(),
        head_len = fragment.head.len(),
        body_len = fragment.body.len(),
        "Loaded index.html fragment"
    );
    Ok(LoadedFragment::Contributed(fragment))
}

/// In-memory fragment source for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct MemoryFragments {
    files: std::collections::HashMap<PathBuf, Result<String, io::ErrorKind>>,
}

#[cfg(any(test, feature = "mock"))]
impl MemoryFragments {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an `index.html` for `root`.
    #[must_use]
    pub fn with_index(mut self, root: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(root.into(), Ok(content.into()));
        self
    }

    /// Make reading `root`'s `index.html` fail with `kind`.
    #[must_use]
    pub fn with_error(mut self, root: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.files.insert(root.into(), Err(kind));
        self
    }
}

#[cfg(any(test, feature = "mock"))]
impl FragmentSource for MemoryFragments {
    fn read_index(&self, root: &Path) -> Result<Option<String>, FragmentError> {
        match self.files.get(root) {
            None => Ok(None),
            Some(Ok(content)) => Ok(Some(content.clone())),
            Some(Err(io::ErrorKind::NotFound)) => Ok(None),
            Some(Err(kind)) => Err(FragmentError::new(
                root.join(INDEX_FILENAME),
                io::Error::from(*kind),
            )),
        }
    }
}
