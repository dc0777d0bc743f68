//! `slidev index-html` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use slidev_config::{BuildContext, Mode, PresentationData};
use slidev_html::{FsFragments, setup_index_html};

use crate::error::CliError;
use crate::output::Output;

/// Default slide deck file name inside the user root.
const DEFAULT_ENTRY: &str = "slides.md";

/// Operating mode argument.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum ModeArg {
    #[default]
    Dev,
    Build,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Dev => Mode::Dev,
            ModeArg::Build => Mode::Build,
        }
    }
}

/// Arguments for the index-html command.
#[derive(Args)]
pub(crate) struct IndexHtmlArgs {
    /// Slide deck entry file (default: <user-root>/slides.md).
    #[arg(short, long)]
    entry: Option<PathBuf>,

    /// Root of the Slidev client files holding the base index.html.
    #[arg(long, env = "SLIDEV_CLIENT_ROOT")]
    client_root: PathBuf,

    /// Project root (default: current directory).
    #[arg(short, long, default_value = ".")]
    user_root: PathBuf,

    /// Theme root, merged before addons (repeatable).
    #[arg(long = "theme")]
    themes: Vec<PathBuf>,

    /// Addon root, merged in the given order (repeatable).
    #[arg(long = "addon")]
    addons: Vec<PathBuf>,

    /// Operating mode.
    #[arg(short, long, value_enum, default_value_t)]
    mode: ModeArg,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl IndexHtmlArgs {
    /// Execute the index-html command.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be parsed or the document cannot be assembled.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let entry = self
            .entry
            .unwrap_or_else(|| self.user_root.join(DEFAULT_ENTRY));
        let data = PresentationData::load(&entry)?;
        let roots = merge_order(&self.themes, &self.addons, &self.user_root);

        tracing::info!(entry = %entry.display(), roots = roots.len(), "Building index.html");

        let ctx = BuildContext::new(
            self.mode.into(),
            entry,
            self.client_root,
            self.user_root,
            roots,
            data,
        )?;
        let index = setup_index_html(&ctx, version, &FsFragments)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &index.html)?;
                output.success(&format!("Wrote {}", path.display()));
                for ignored in &index.ignored {
                    output.detail(&format!("  skipped {}", ignored.display()));
                }
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(index.html.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Roots in merge order: themes, then addons, then the user root once.
fn merge_order(themes: &[PathBuf], addons: &[PathBuf], user_root: &Path) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::with_capacity(themes.len() + addons.len() + 1);
    for root in themes.iter().chain(addons) {
        if root != user_root && !roots.contains(root) {
            roots.push(root.clone());
        }
    }
    roots.push(user_root.to_path_buf());
    roots
}
