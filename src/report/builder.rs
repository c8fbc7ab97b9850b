use std::collections::BTreeSet;

use crate::category::classifier::Partition;
use crate::category::rules::GOVERNMENT_URL_MARKERS;
use crate::config::ProjectConfig;
use crate::models::{
    AnalysisSummary, Category, CriticalDependencies, ExternalDataSources, OptionalResources,
    Report,
};

pub const SECURITY_CONSIDERATIONS: [&str; 4] = [
    "All CDN resources should be integrity-checked with SRI hashes",
    "Government data sources are generally trusted but should be rate-limited",
    "Vendor resources may have varying security standards",
    "Social media integrations should be sandboxed",
];

pub const RECOMMENDATIONS: [&str; 4] = [
    "Implement Content Security Policy (CSP) headers",
    "Use Subresource Integrity (SRI) for all CDN resources",
    "Cache external resources locally where possible",
    "Implement graceful fallbacks for external dependencies",
];

/// Group a category partition into the criticality-tiered report.
pub fn build(partition: &Partition, project: &ProjectConfig) -> Report {
    let bucket = |category: Category| -> Vec<String> {
        partition
            .get(&category)
            .map(|urls| urls.iter().cloned().collect())
            .unwrap_or_default()
    };

    let (government_apis, other_data_sources): (Vec<String>, Vec<String>) = bucket(
        Category::DataSources,
    )
    .into_iter()
    .partition(|url| is_government(url));

    let total_external_urls = partition
        .values()
        .flatten()
        .collect::<BTreeSet<_>>()
        .len();
    let categories_found = partition.values().filter(|urls| !urls.is_empty()).count();

    Report {
        analysis_summary: AnalysisSummary {
            total_external_urls,
            categories_found,
            repository_type: project.repository_type.clone(),
            hosting_platform: project.hosting_platform.clone(),
        },
        critical_dependencies: CriticalDependencies {
            cdn_resources: bucket(Category::Cdn),
            hosting: bucket(Category::Hosting),
        },
        external_data_sources: ExternalDataSources {
            government_apis,
            other_data_sources,
            api_endpoints: bucket(Category::Apis),
        },
        optional_resources: OptionalResources {
            vendor_resources: bucket(Category::VendorResources),
            social_media: bucket(Category::Social),
            documentation: bucket(Category::Documentation),
        },
        security_considerations: SECURITY_CONSIDERATIONS.iter().map(|s| s.to_string()).collect(),
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

fn is_government(url: &str) -> bool {
    GOVERNMENT_URL_MARKERS.iter().any(|m| url.contains(m))
}
