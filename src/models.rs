use serde::{Deserialize, Serialize};

/// The kind of source file a URL was found in. Determines the provenance label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Markup,
    Stylesheet,
    Script,
    Config,
    Doc,
}

impl SourceKind {
    /// All kinds, in the order the walker scans them.
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Markup,
        SourceKind::Stylesheet,
        SourceKind::Script,
        SourceKind::Config,
        SourceKind::Doc,
    ];

    /// Short label used in provenance tags (`"HTML: index.html"`).
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Markup => "HTML",
            SourceKind::Stylesheet => "CSS",
            SourceKind::Script => "JS",
            SourceKind::Config => "Config",
            SourceKind::Doc => "MD",
        }
    }
}

/// Name used in progress lines ("Scanning 3 JavaScript files"); provenance tags use [`SourceKind::label`].
impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Markup => write!(f, "HTML"),
            SourceKind::Stylesheet => write!(f, "CSS"),
            SourceKind::Script => write!(f, "JavaScript"),
            SourceKind::Config => write!(f, "configuration"),
            SourceKind::Doc => write!(f, "Markdown"),
        }
    }
}

/// Purpose bucket for a discovered URL. Every URL lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cdn,
    Apis,
    DataSources,
    VendorResources,
    Hosting,
    Social,
    Documentation,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Cdn,
        Category::Apis,
        Category::DataSources,
        Category::VendorResources,
        Category::Hosting,
        Category::Social,
        Category::Documentation,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Cdn => write!(f, "cdn"),
            Category::Apis => write!(f, "apis"),
            Category::DataSources => write!(f, "data_sources"),
            Category::VendorResources => write!(f, "vendor_resources"),
            Category::Hosting => write!(f, "hosting"),
            Category::Social => write!(f, "social"),
            Category::Documentation => write!(f, "documentation"),
        }
    }
}

/// Structured analysis report, serialized as `external_resources_analysis.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub analysis_summary: AnalysisSummary,
    pub critical_dependencies: CriticalDependencies,
    pub external_data_sources: ExternalDataSources,
    pub optional_resources: OptionalResources,
    pub security_considerations: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_external_urls: usize,
    pub categories_found: usize,
    pub repository_type: String,
    pub hosting_platform: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticalDependencies {
    pub cdn_resources: Vec<String>,
    pub hosting: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDataSources {
    /// `data_sources` URLs that match a government/standards hostname.
    pub government_apis: Vec<String>,
    /// `data_sources` URLs that fail the government filter.
    #[serde(default)]
    pub other_data_sources: Vec<String>,
    #[serde(default)]
    pub api_endpoints: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionalResources {
    pub vendor_resources: Vec<String>,
    pub social_media: Vec<String>,
    pub documentation: Vec<String>,
}

impl Report {
    /// Every URL across all tiers, in section order.
    pub fn all_urls(&self) -> impl Iterator<Item = &String> {
        self.critical_dependencies
            .cdn_resources
            .iter()
            .chain(&self.critical_dependencies.hosting)
            .chain(&self.external_data_sources.government_apis)
            .chain(&self.external_data_sources.other_data_sources)
            .chain(&self.external_data_sources.api_endpoints)
            .chain(&self.optional_resources.vendor_resources)
            .chain(&self.optional_resources.social_media)
            .chain(&self.optional_resources.documentation)
    }
}
