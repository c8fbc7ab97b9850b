use std::collections::BTreeSet;

use crate::category::classifier::host_of;
use crate::config::ProjectConfig;
use crate::models::Report;

/// Descriptive blurb for a recognized CDN library.
struct LibraryTemplate {
    /// Matched against the full URL.
    needle: &'static str,
    purpose: &'static str,
    justification: &'static str,
    security: &'static str,
}

const CDN_TEMPLATES: &[LibraryTemplate] = &[
    LibraryTemplate {
        needle: "bootstrap",
        purpose: "Bootstrap CSS/JS framework for responsive design and UI components",
        justification: "Core frontend framework required for site layout and functionality",
        security: "Well-established CDN with SRI hash verification available",
    },
    LibraryTemplate {
        needle: "font-awesome",
        purpose: "Font Awesome icon library for UI icons",
        justification: "Provides standardized icons throughout the dashboard interface",
        security: "Trusted CDN with wide adoption in enterprise environments",
    },
    LibraryTemplate {
        needle: "chart.js",
        purpose: "Chart.js library for data visualization",
        justification: "Essential for rendering interactive charts and graphs of advisory data",
        security: "Open-source charting library with active security maintenance",
    },
    LibraryTemplate {
        needle: "plotly",
        purpose: "Plotly.js for advanced interactive visualizations",
        justification: "Provides sophisticated data visualization capabilities for trend analysis",
        security: "Enterprise-grade visualization library with strong security record",
    },
    LibraryTemplate {
        needle: "lucide",
        purpose: "Lucide Icons - Swift UI-style icon library",
        justification: "Modern, clean icons for enhanced user interface design",
        security: "Open-source icon library with consistent maintenance and updates",
    },
];

/// Used for CDN URLs no template recognizes, so every critical URL is listed.
const CDN_FALLBACK: LibraryTemplate = LibraryTemplate {
    needle: "",
    purpose: "Frontend asset served from a content delivery network",
    justification: "Referenced directly by the site's pages, stylesheets or scripts",
    security: "Pin the version and verify with an SRI hash before allowlisting",
};

const GOVERNMENT_DOMAINS: &[(&str, &str)] = &[
    ("cisa.gov", "DHS Cybersecurity & Infrastructure Security Agency"),
    ("nist.gov", "National Institute of Standards and Technology"),
    ("mitre.org", "MITRE Corporation - CVE Database and ATT&CK Framework"),
];

const VENDOR_DOMAINS: &[(&str, &str)] = &[
    ("siemens.com", "Siemens AG - Industrial automation security resources and advisories"),
    ("se.com", "Schneider Electric - Power management and automation security"),
    ("rockwellautomation.com", "Rockwell Automation - Industrial automation security"),
    ("ge.com", "General Electric - Digital industrial security resources"),
    ("honeywell.com", "Honeywell - Process control and safety system security"),
    ("emerson.com", "Emerson - Process automation and control security"),
];

const RESEARCH_DOMAINS: &[(&str, &str)] = &[
    ("sans.org", "SANS Institute - ICS security training and research"),
    ("isa.org", "International Society of Automation - IEC 62443 standards"),
    ("dragos.com", "Dragos Inc. - ICS threat intelligence and research"),
    ("claroty.com", "Claroty - ICS security research (Team82)"),
    ("kaspersky.com", "Kaspersky ICS-CERT - Industrial cybersecurity research"),
];

const IMPLEMENTATION_NOTES: &str = "\
1. **Content Security Policy**: Implement CSP headers to restrict resource loading to allowlisted domains
2. **Subresource Integrity**: Add SRI hashes for all CDN resources to ensure integrity
3. **Monitoring**: Monitor external resource availability and implement fallbacks where appropriate
4. **Rate Limiting**: Implement appropriate rate limiting for API calls to external data sources
";

/// Renders a [`Report`] into the Markdown allowlist request.
pub struct AllowlistRenderer<'a> {
    project: &'a ProjectConfig,
    max_urls_per_government_domain: usize,
}

impl<'a> AllowlistRenderer<'a> {
    pub fn new(project: &'a ProjectConfig, max_urls_per_government_domain: usize) -> Self {
        Self {
            project,
            max_urls_per_government_domain,
        }
    }

    /// Assemble the document. Sections with no data render as headings only.
    pub fn render(&self, report: &Report) -> String {
        let mut doc = String::new();

        self.overview(&mut doc);
        self.critical(&mut doc, report);
        self.data_sources(&mut doc, report);
        self.optional(&mut doc, report);
        self.advisories(&mut doc, report);
        self.footer(&mut doc, report);

        doc
    }

    fn overview(&self, doc: &mut String) {
        let p = self.project;
        doc.push_str(&format!(
            "# External Resource Allowlist Request for {name}\n\n\
             ## Project Overview\n\
             **Project:** {name}  \n\
             **Repository:** {repo}  \n\
             **Hosting:** {platform} ({hosting_url})  \n\
             **Purpose:** {purpose}\n\n\
             ## Request Summary\n\
             This request is for allowlisting external resources required for the {name} to function correctly. \
             The site provides critical cybersecurity intelligence for Industrial Control Systems (ICS) \
             and serves the cybersecurity community.\n\n",
            name = p.name,
            repo = p.repository,
            platform = p.hosting_platform,
            hosting_url = p.hosting_url,
            purpose = p.purpose,
        ));
    }

    fn critical(&self, doc: &mut String, report: &Report) {
        doc.push_str("## Critical Dependencies (Required for Core Functionality)\n\n");
        doc.push_str("### CDN Resources - Frontend Libraries\n");

        for url in &report.critical_dependencies.cdn_resources {
            let template = CDN_TEMPLATES
                .iter()
                .find(|t| url.contains(t.needle))
                .unwrap_or(&CDN_FALLBACK);
            doc.push_str(&format!(
                "\n**{}**\n- URL: `{}`\n- Purpose: {}\n- Justification: {}\n- Security: {}\n",
                host_of(url),
                url,
                template.purpose,
                template.justification,
                template.security,
            ));
        }

        doc.push_str(
            "\n### Hosting Platform\n\
             **GitHub (github.com)**\n\
             - Purpose: Source code repository and GitHub Pages hosting\n\
             - Justification: Industry-standard platform for open-source projects and static site hosting\n\
             - Security: Enterprise-grade security with 2FA and access controls\n",
        );
        if !report.critical_dependencies.hosting.is_empty() {
            doc.push_str(&format!(
                "- URLs: {}\n",
                code_list(&report.critical_dependencies.hosting)
            ));
        }
    }

    fn data_sources(&self, doc: &mut String, report: &Report) {
        let sources = &report.external_data_sources;

        doc.push_str("\n## External Data Sources (For Content and Intelligence)\n\n");
        doc.push_str("### Government and Standards Organizations\n");

        for (domain, description) in GOVERNMENT_DOMAINS {
            let matching: Vec<&String> = sources
                .government_apis
                .iter()
                .filter(|url| url.contains(domain))
                .take(self.max_urls_per_government_domain)
                .collect();
            if matching.is_empty() {
                continue;
            }
            doc.push_str(&format!(
                "\n**{}**\n- URLs: {}\n- Purpose: {}\n\
                 - Justification: Official government cybersecurity data sources for ICS advisories and vulnerability intelligence\n\
                 - Security: Trusted government sources with authoritative cybersecurity data\n",
                domain,
                code_list(matching),
                description,
            ));
        }

        if !sources.api_endpoints.is_empty() || !sources.other_data_sources.is_empty() {
            doc.push_str("\n### API Endpoints and Other Data Sources\n");
            for url in sources.api_endpoints.iter().chain(&sources.other_data_sources) {
                doc.push_str(&format!("\n- **{}**: `{}`\n", host_of(url), url));
            }
        }
    }

    fn optional(&self, doc: &mut String, report: &Report) {
        let optional = &report.optional_resources;

        doc.push_str("\n## Optional Resources (Enhanced Functionality)\n\n");
        doc.push_str("### ICS Vendor Security Resources\n");
        doc.push_str("These resources provide additional context and vendor-specific security information:\n");
        known_host_bullets(doc, &optional.vendor_resources, VENDOR_DOMAINS);

        doc.push_str("\n### Security Research and Documentation\n");
        known_host_bullets(doc, &optional.documentation, RESEARCH_DOMAINS);
    }

    fn advisories(&self, doc: &mut String, report: &Report) {
        doc.push_str("\n## Security Considerations\n\n");
        doc.push_str(&bullets(&report.security_considerations));
        doc.push_str("\n\n## Recommendations\n\n");
        doc.push_str(&bullets(&report.recommendations));
        doc.push_str("\n\n## Implementation Notes\n\n");
        doc.push_str(IMPLEMENTATION_NOTES);
    }

    fn footer(&self, doc: &mut String, report: &Report) {
        doc.push_str(&format!(
            "\n## Contact Information\n\n\
             - **Project Maintainer**: Available through GitHub repository issues\n\
             - **Repository**: {}\n\
             - **Purpose**: Supporting critical infrastructure cybersecurity through open-source intelligence tools\n\n\
             ---\n\n\
             **Total External Domains Requested**: {}\n\n\
             This allowlist supports critical infrastructure cybersecurity by enabling access to authoritative \
             government advisories and providing tools for vulnerability analysis in industrial control systems.\n",
            self.project.repository,
            distinct_hosts(report),
        ));
    }
}

/// Number of distinct hosts across every tier of the report.
pub fn distinct_hosts(report: &Report) -> usize {
    report
        .all_urls()
        .filter(|url| !url.is_empty())
        .map(|url| host_of(url))
        .collect::<BTreeSet<_>>()
        .len()
}

/// One bullet per distinct host (sorted) that contains a known domain key.
fn known_host_bullets(doc: &mut String, urls: &[String], known: &[(&str, &str)]) {
    let hosts: BTreeSet<String> = urls.iter().map(|url| host_of(url)).collect();

    for host in &hosts {
        if let Some((_, description)) = known.iter().find(|(key, _)| host.contains(key)) {
            doc.push_str(&format!("\n- **{}**: {}\n", host, description));
        }
    }
}

fn code_list<I, S>(urls: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .map(|url| format!("`{}`", url.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
