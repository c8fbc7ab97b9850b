use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "resource-checkr",
    about = "Scan a static site repository for external resources and draft an allowlist request",
    version
)]
pub struct Cli {
    /// Repository root to scan [default: two levels above the executable]
    pub path: Option<PathBuf>,

    /// Config file [default: <root>/.resource-checkr/config.toml, fallback ~/.config/resource-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also print an artifact to stdout
    #[arg(long, value_name = "FORMAT")]
    pub stdout: Option<StdoutFormat>,

    /// List every URL with its category and where it was found
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StdoutFormat {
    Json,
    Markdown,
}

impl Cli {
    /// The repository root: the given path, or two levels above the running executable.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = match &self.path {
            Some(path) => path.clone(),
            None => {
                let exe = std::env::current_exe().context("cannot locate the running executable")?;
                default_root(&exe)
                    .with_context(|| format!("no project root above {}", exe.display()))?
            }
        };

        Ok(root.canonicalize().unwrap_or(root))
    }
}

/// `<root>/scripts/resource-checkr` → `<root>`.
fn default_root(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}
