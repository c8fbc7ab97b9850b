//! `resource-checkr` — find every external URL a static site depends on and draft an allowlist request.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and resolve the repository root.
//! 2. Load config ([`config::load_config`]).
//! 3. Walk the tree and extract external URLs with provenance ([`analyzer`]).
//! 4. Classify each URL by purpose ([`category`]).
//! 5. Build the tiered report ([`report::builder`]).
//! 6. Render the allowlist request ([`report::allowlist`]).
//! 7. Write both artifacts ([`report::output`]) and print a summary ([`report::terminal`]).
//!
//! Unreadable input files are skipped; failing to write an artifact exits non-zero.

mod analyzer;
mod category;
mod cli;
mod config;
mod detector;
mod logging;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use analyzer::scan_repository;
use category::classifier::classify;
use cli::{Cli, StdoutFormat};
use config::load_config;
use report::allowlist::AllowlistRenderer;
use report::output::write_artifacts;
use report::terminal::RunSummary;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let root = cli.resolve_root()?;
    let config = load_config(&root, cli.config.as_deref())?;

    if !cli.quiet {
        eprintln!(
            "{} Analyzing {} for external resources...",
            "🔍".cyan(),
            root.display()
        );
    }

    let session = scan_repository(&root, &config, cli.quiet);

    let partition = classify(&session.urls());
    let report = report::builder::build(&partition, &config.project);

    let allowlist = AllowlistRenderer::new(
        &config.project,
        config.render.max_urls_per_government_domain,
    )
    .render(&report);

    let written = write_artifacts(&root, &config.output, &report, &allowlist)?;
    tracing::info!(
        "wrote {} and {}",
        written.report_path.display(),
        written.allowlist_path.display()
    );

    report::terminal::render(
        &RunSummary {
            root: &root,
            report: &report,
            partition: &partition,
            session: &session,
            written: &written,
        },
        cli.verbose,
        cli.quiet,
    );

    match cli.stdout {
        Some(StdoutFormat::Json) => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(StdoutFormat::Markdown) => print!("{}", allowlist),
        None => {}
    }

    Ok(())
}
