//! Path to module URL conversion.

use std::path::Path;

/// Dev server prefix for modules addressed by absolute filesystem path.
const FS_PREFIX: &str = "/@fs";

/// Render a path with forward slashes.
///
/// ```
/// use std::path::Path;
/// use slidev_html::slash;
///
/// assert_eq!(slash(Path::new(r"C:\deck\slides.md")), "C:/deck/slides.md");
/// ```
pub fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Module URL the dev server and bundler resolve to the file at `path`.
///
/// ```
/// use std::path::Path;
/// use slidev_html::module_url;
///
/// assert_eq!(module_url(Path::new("/app/client/main.ts")), "/@fs/app/client/main.ts");
/// assert_eq!(module_url(Path::new(r"C:\client\main.ts")), "/@fs/C:/client/main.ts");
/// ```
pub fn module_url(path: &Path) -> String {
    let slashed = slash(path);
    if slashed.starts_with('/') {
        format!("{FS_PREFIX}{slashed}")
    } else {
        format!("{FS_PREFIX}/{slashed}")
    }
}
