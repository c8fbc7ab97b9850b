use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.resource-checkr/config.toml`.
///
/// Every section and field has a default, so a partial file only overrides what it names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub project: ProjectConfig,
    pub scan: ScanConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Identity of the site being scanned.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host substrings treated as the site itself; matching URLs are never reported.
    pub own_domains: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            own_domains: vec!["chatala1.github.io".to_string(), "localhost".to_string()],
        }
    }
}

/// Declarative project metadata. Printed into the report and the allowlist
/// request verbatim; nothing here is inferred from the scan.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub repository: String,
    pub hosting_url: String,
    pub purpose: String,
    pub repository_type: String,
    pub hosting_platform: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            name: "ICS Advisory Dashboard".to_string(),
            repository: "https://github.com/chatala1/ICS-Advisory-Dashboard".to_string(),
            hosting_url: "https://chatala1.github.io/ICS-Advisory-Dashboard".to_string(),
            purpose: "Open-source initiative to visualize DHS CISA ICS Advisories as interactive dashboards"
                .to_string(),
            repository_type: "Jekyll Static Site".to_string(),
            hosting_platform: "GitHub Pages".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names the walker does not descend into. Empty walks the whole tree.
    pub exclude_dirs: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// How many URLs are listed per government domain in the allowlist request.
    pub max_urls_per_government_domain: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_urls_per_government_domain: 3,
        }
    }
}

/// Output locations, relative to the repository root.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub report_file: String,
    pub allowlist_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: "docs".to_string(),
            report_file: "external_resources_analysis.json".to_string(),
            allowlist_file: "ALLOWLIST_REQUEST.md".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn report_path(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.directory).join(&self.report_file)
    }

    pub fn allowlist_path(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.directory).join(&self.allowlist_file)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<repo_root>/.resource-checkr/config.toml`
/// 3. `~/.config/resource-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(repo_root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = repo_root.join(".resource-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("resource-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
