use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::OutputConfig;
use crate::models::Report;

/// Where the two artifacts were written.
#[derive(Debug)]
pub struct WrittenArtifacts {
    pub report_path: PathBuf,
    pub allowlist_path: PathBuf,
}

/// Write the JSON report and the allowlist document under `repo_root`.
///
/// The output directory is created if missing. Any failure here is fatal.
pub fn write_artifacts(
    repo_root: &Path,
    output: &OutputConfig,
    report: &Report,
    allowlist: &str,
) -> Result<WrittenArtifacts> {
    let dir = repo_root.join(&output.directory);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let report_path = output.report_path(repo_root);
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&report_path, json)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    let allowlist_path = output.allowlist_path(repo_root);
    std::fs::write(&allowlist_path, allowlist)
        .with_context(|| format!("failed to write {}", allowlist_path.display()))?;

    Ok(WrittenArtifacts {
        report_path,
        allowlist_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::scan_repository;
    use crate::category::classifier::classify;
    use crate::config::{Config, ProjectConfig};
    use crate::report::allowlist::AllowlistRenderer;
    use crate::report::builder::build;
    use std::collections::BTreeSet;

    fn run_pipeline(root: &Path, config: &Config) -> Report {
        let session = scan_repository(root, config, true);
        let report = build(&classify(&session.urls()), &config.project);
        let allowlist = AllowlistRenderer::new(
            &config.project,
            config.render.max_urls_per_government_domain,
        )
        .render(&report);
        write_artifacts(root, &config.output, &report, &allowlist).unwrap();
        report
    }

    #[test]
    fn test_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let urls: BTreeSet<String> = ["https://www.cisa.gov/advisories".to_string()].into();
        let report = build(&classify(&urls), &ProjectConfig::default());

        let written =
            write_artifacts(dir.path(), &OutputConfig::default(), &report, "# Allowlist\n").unwrap();

        assert_eq!(written.report_path, dir.path().join("docs/external_resources_analysis.json"));
        let parsed: Report =
            serde_json::from_str(&std::fs::read_to_string(&written.report_path).unwrap()).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(std::fs::read_to_string(&written.allowlist_path).unwrap(), "# Allowlist\n");
    }

    #[test]
    fn test_unwritable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // a file where the output directory should be
        std::fs::write(dir.path().join("docs"), "not a directory").unwrap();

        let report = build(&classify(&BTreeSet::<String>::new()), &ProjectConfig::default());
        let err = write_artifacts(dir.path(), &OutputConfig::default(), &report, "").unwrap_err();
        assert!(err.to_string().contains("failed to create output directory"));
    }

    #[test]
    fn test_rerun_ignores_own_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(
            root.join("index.html"),
            r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5/dist/js/bootstrap.min.js"></script>"#,
        )
        .unwrap();
        std::fs::write(root.join("README.md"), "https://www.cisa.gov/advisories\n").unwrap();

        let config = Config::default();
        let first = run_pipeline(root, &config);
        assert!(root.join("docs/ALLOWLIST_REQUEST.md").exists());
        let second = run_pipeline(root, &config);

        assert_eq!(first.analysis_summary, second.analysis_summary);
        assert_eq!(second.analysis_summary.total_external_urls, 2);
        assert!(second.critical_dependencies.hosting.is_empty());
        assert_eq!(first, second);
    }
}
