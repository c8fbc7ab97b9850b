use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::analyzer::ScanSession;
use crate::category::classifier::Partition;
use crate::models::{Category, Report};
use crate::report::output::WrittenArtifacts;

/// Everything the console summary needs from one run.
pub struct RunSummary<'a> {
    pub root: &'a Path,
    pub report: &'a Report,
    pub partition: &'a Partition,
    pub session: &'a ScanSession,
    pub written: &'a WrittenArtifacts,
}

/// Print the run summary to stderr.
pub fn render(run: &RunSummary<'_>, verbose: bool, quiet: bool) {
    let report = run.report;
    let total = report.analysis_summary.total_external_urls;

    if quiet {
        eprintln!(
            "Total URLs: {}  CDN: {}  Data sources: {}  Vendor: {}",
            total,
            report.critical_dependencies.cdn_resources.len().to_string().cyan(),
            report.external_data_sources.government_apis.len().to_string().green(),
            report.optional_resources.vendor_resources.len().to_string().yellow(),
        );
        return;
    }

    eprintln!(
        "\n {} v{}",
        "resource-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!(" Scanned: {}", run.root.display());
    eprintln!(
        " Files: {} read, {} skipped\n",
        run.session.files_scanned(),
        run.session.files_skipped()
    );

    eprintln!(" {} External resources analysis:\n", "✓".green().bold());
    eprintln!("{}", tier_table(report));

    if verbose && total > 0 {
        eprintln!("\n {} Where each URL was found:\n", "[URLS]".cyan().bold());
        eprintln!("{}", provenance_table(run.partition, run.session));
    }

    eprintln!("\n Generated files:");
    eprintln!("   - Detailed analysis: {}", run.written.report_path.display());
    eprintln!("   - Allowlist request: {}\n", run.written.allowlist_path.display());
}

fn tier_table(report: &Report) -> Table {
    let critical = &report.critical_dependencies;
    let data = &report.external_data_sources;
    let optional = &report.optional_resources;

    let rows = [
        ("Critical", "CDN resources", critical.cdn_resources.len(), Color::Red),
        ("Critical", "Hosting", critical.hosting.len(), Color::Red),
        ("Data source", "Government", data.government_apis.len(), Color::Green),
        ("Data source", "Other", data.other_data_sources.len(), Color::Green),
        ("Data source", "API endpoints", data.api_endpoints.len(), Color::Green),
        ("Optional", "Vendor", optional.vendor_resources.len(), Color::Yellow),
        ("Optional", "Social media", optional.social_media.len(), Color::Yellow),
        ("Optional", "Documentation", optional.documentation.len(), Color::Yellow),
    ];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Tier").add_attribute(Attribute::Bold),
            Cell::new("Resources").add_attribute(Attribute::Bold),
            Cell::new("URLs").add_attribute(Attribute::Bold),
        ]);

    for (tier, name, count, color) in rows {
        table.add_row(vec![
            Cell::new(tier).fg(color),
            Cell::new(name),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{} categories", report.analysis_summary.categories_found)),
        Cell::new(report.analysis_summary.total_external_urls)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);

    table
}

fn provenance_table(partition: &Partition, session: &ScanSession) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("URL").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Found in").add_attribute(Attribute::Bold),
        ]);

    for (category, urls) in partition {
        for url in urls {
            table.add_row(vec![
                Cell::new(url),
                Cell::new(category.to_string()).fg(category_color(*category)),
                Cell::new(session.locations(url).join("\n")),
            ]);
        }
    }

    table
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Cdn | Category::Hosting => Color::Red,
        Category::DataSources | Category::Apis => Color::Green,
        Category::VendorResources | Category::Social => Color::Yellow,
        Category::Documentation => Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::classifier::classify;
    use crate::config::ProjectConfig;
    use crate::report::builder::build;

    #[test]
    fn test_tables_list_counts_and_locations() {
        let mut session = ScanSession::new(&["localhost".to_string()]);
        session.record("https://cdn.plot.ly/plotly-2.26.0.min.js https://www.cisa.gov/ics", "HTML: index.html");
        session.record("https://www.cisa.gov/ics", "MD: README.md");

        let partition = classify(&session.urls());
        let report = build(&partition, &ProjectConfig::default());

        let tiers = tier_table(&report).to_string();
        assert!(tiers.contains("CDN resources"));
        assert!(tiers.contains("2 categories"));

        let provenance = provenance_table(&partition, &session).to_string();
        assert!(provenance.contains("https://www.cisa.gov/ics"));
        assert!(provenance.contains("README.md"));
        assert!(provenance.contains("data_sources"));
    }
}
