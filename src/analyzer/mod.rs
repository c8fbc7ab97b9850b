//! Repository scanning: file discovery, URL extraction and provenance tracking.
//!
//! - [`walker`] — lists recognized source files under the repository root.
//! - [`extractor`] — pulls external HTTPS URLs out of file content.
//!
//! [`ScanSession`] owns the accumulated state for one run.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::models::SourceKind;

pub mod extractor;
pub mod walker;

use extractor::UrlExtractor;
use walker::SourceFile;

/// Accumulates discovered URLs and where each one was found.
///
/// Constructed once per analysis, filled by [`ScanSession::scan_file`], then
/// read by the classifier. Nothing is shared between sessions.
pub struct ScanSession {
    extractor: UrlExtractor,
    /// URL → provenance tags, in the order they were found.
    locations: BTreeMap<String, Vec<String>>,
    files_scanned: usize,
    files_skipped: usize,
}

impl ScanSession {
    pub fn new(own_domains: &[String]) -> Self {
        Self {
            extractor: UrlExtractor::new(own_domains),
            locations: BTreeMap::new(),
            files_scanned: 0,
            files_skipped: 0,
        }
    }

    /// Read one file and record its URLs. Read or decode failures are logged
    /// and the file is skipped.
    pub fn scan_file(&mut self, file: &SourceFile) {
        match std::fs::read_to_string(&file.path) {
            Ok(content) => {
                let found = self.record(&content, &file.location());
                tracing::debug!("{}: {} external URLs", file.relative, found);
                self.files_scanned += 1;
            }
            Err(err) => {
                tracing::warn!("error reading {}: {}", file.path.display(), err);
                self.files_skipped += 1;
            }
        }
    }

    /// Extract URLs from `content` and append `location` to each one's provenance.
    /// Returns the number of distinct URLs found in this content.
    pub fn record(&mut self, content: &str, location: &str) -> usize {
        let urls = self.extractor.extract(content);
        let found = urls.len();
        for url in urls {
            self.locations
                .entry(url)
                .or_default()
                .push(location.to_string());
        }
        found
    }

    /// Every distinct external URL discovered so far.
    pub fn urls(&self) -> BTreeSet<String> {
        self.locations.keys().cloned().collect()
    }

    /// Provenance tags for `url`, empty if it was never seen.
    pub fn locations(&self, url: &str) -> &[String] {
        self.locations.get(url).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn files_skipped(&self) -> usize {
        self.files_skipped
    }
}

/// Scan every recognized file under `root` and return the populated session.
///
/// Announces per-kind file counts and shows a progress bar unless `quiet`.
pub fn scan_repository(root: &Path, config: &Config, quiet: bool) -> ScanSession {
    let artifacts = [
        config.output.report_path(root),
        config.output.allowlist_path(root),
    ];
    let files = walker::discover(root, &config.scan.exclude_dirs, &artifacts);
    let mut session = ScanSession::new(&config.site.own_domains);

    // Group by kind, keeping lexical order within each group.
    let mut by_kind: BTreeMap<SourceKind, Vec<&SourceFile>> = BTreeMap::new();
    for file in &files {
        by_kind.entry(file.kind).or_default().push(file);
    }

    if !quiet {
        for kind in SourceKind::ALL {
            let count = by_kind.get(&kind).map_or(0, Vec::len);
            eprintln!("  {} Scanning {} {} files...", "→".cyan(), count, kind);
        }
    }

    let pb = if !quiet {
        let pb = ProgressBar::new(files.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    } else {
        None
    };

    for kind in SourceKind::ALL {
        for file in by_kind.get(&kind).into_iter().flatten() {
            session.scan_file(file);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    tracing::info!(
        "scanned {} files ({} skipped), {} external URLs",
        session.files_scanned(),
        session.files_skipped(),
        session.locations.len()
    );

    session
}
