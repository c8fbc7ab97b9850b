use crate::models::Category;

/// Host-substring rules, evaluated top to bottom; the first group with a
/// matching substring decides the category.
pub const HOST_RULES: &[(Category, &[&str])] = &[
    (
        Category::Cdn,
        &["cdn.jsdelivr.net", "cdnjs.cloudflare.com", "unpkg.com", "cdn.plot.ly"],
    ),
    (Category::DataSources, GOVERNMENT_HOSTS),
    (Category::DataSources, &["mitre.org"]),
    (Category::Hosting, &["github.com"]),
    (Category::Social, &["twitter.com", "linkedin.com", "reddit.com"]),
    (
        Category::VendorResources,
        &[
            "siemens.com",
            "schneider",
            "rockwellautomation.com",
            "ge.com",
            "honeywell.com",
            "emerson.com",
            "abb.com",
        ],
    ),
    (
        Category::Documentation,
        &[
            "sans.org",
            "isa.org",
            "claroty.com",
            "dragos.com",
            "kaspersky.com",
            "tenable.com",
            "volatilityfoundation.org",
        ],
    ),
];

/// Cybersecurity agencies and standards bodies.
pub const GOVERNMENT_HOSTS: &[&str] = &["cisa.gov", "nvd.nist.gov", "nist.gov"];

/// Substrings that keep a `data_sources` URL in the report's government list.
pub const GOVERNMENT_URL_MARKERS: &[&str] = &["cisa.gov", "nist.gov", "mitre.org"];

/// Host marker for API subdomains.
pub const API_HOST_MARKER: &str = "api.";

/// Path marker for API endpoints.
pub const API_PATH_MARKER: &str = "/api/";

/// Category for URLs no rule claims.
pub const DEFAULT_CATEGORY: Category = Category::Documentation;
