use std::collections::{BTreeMap, BTreeSet};

use crate::category::rules::{API_HOST_MARKER, API_PATH_MARKER, DEFAULT_CATEGORY, HOST_RULES};
use crate::models::Category;

/// Mapping from category to the URLs classified into it. Every category has an
/// entry, possibly empty.
pub type Partition = BTreeMap<Category, BTreeSet<String>>;

/// Classify a single URL.
///
/// Host rules are tried in [`HOST_RULES`] order and the first match wins;
/// then the API markers; anything left over is [`DEFAULT_CATEGORY`].
pub fn classify_url(url: &str) -> Category {
    let host = host_of(url).to_lowercase();

    for (category, needles) in HOST_RULES {
        if needles.iter().any(|n| host.contains(n)) {
            return *category;
        }
    }

    if host.contains(API_HOST_MARKER) || url.contains(API_PATH_MARKER) {
        return Category::Apis;
    }

    DEFAULT_CATEGORY
}

/// Partition a URL set into categories.
pub fn classify<'a, I>(urls: I) -> Partition
where
    I: IntoIterator<Item = &'a String>,
{
    let mut partition: Partition = Category::ALL
        .iter()
        .map(|c| (*c, BTreeSet::new()))
        .collect();

    for url in urls {
        partition
            .entry(classify_url(url))
            .or_default()
            .insert(url.clone());
    }

    partition
}

/// The authority part of a URL (`host[:port]`), as written.
///
/// Falls back to the text between `://` and the first `/`, `?` or `#` when the
/// URL does not parse, so malformed matches still get a host.
pub fn host_of(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            return match parsed.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            };
        }
    }

    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    // drop userinfo
    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_groups() {
        assert_eq!(classify_url("https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css"), Category::Cdn);
        assert_eq!(classify_url("https://www.cisa.gov/some/advisory"), Category::DataSources);
        assert_eq!(classify_url("https://nvd.nist.gov/vuln/detail/CVE-2023-0001"), Category::DataSources);
        assert_eq!(classify_url("https://attack.mitre.org/matrices/ics/"), Category::DataSources);
        assert_eq!(classify_url("https://github.com/chatala1/ICS-Advisory-Dashboard"), Category::Hosting);
        assert_eq!(classify_url("https://twitter.com/CISAgov"), Category::Social);
        assert_eq!(classify_url("https://www.se.schneider-electric.com/ww/en/"), Category::VendorResources);
        assert_eq!(classify_url("https://new.abb.com/cybersecurity"), Category::VendorResources);
        assert_eq!(classify_url("https://www.dragos.com/blog/"), Category::Documentation);
    }

    #[test]
    fn test_first_match_wins() {
        // contains "chart.js" and is on a CDN host
        assert_eq!(classify_url("https://cdn.jsdelivr.net/npm/chart.js"), Category::Cdn);
        // a GitHub-hosted MITRE page is claimed by the earlier data source rule
        assert_eq!(classify_url("https://mitre.org.github.com/x"), Category::DataSources);
        // an API subdomain on a known research org stays documentation
        assert_eq!(classify_url("https://api.tenable.com/v1/plugins"), Category::Documentation);
    }

    #[test]
    fn test_api_detection() {
        assert_eq!(classify_url("https://api.example.com/v1/feed"), Category::Apis);
        assert_eq!(classify_url("https://example.com/api/feed"), Category::Apis);
    }

    #[test]
    fn test_default_bucket() {
        assert_eq!(classify_url("https://www.example.org/about"), Category::Documentation);
        assert_eq!(classify_url("https://"), Category::Documentation);
    }

    #[test]
    fn test_host_is_lowercased_for_matching() {
        assert_eq!(classify_url("HTTPS://CDN.JSDELIVR.NET/npm/bootstrap"), Category::Cdn);
        // the path is not part of the host
        assert_eq!(classify_url("https://example.com/github.com"), Category::Documentation);
    }

    #[test]
    fn test_partition_is_total() {
        let urls: BTreeSet<String> = [
            "https://cdn.plot.ly/plotly-latest.min.js",
            "https://www.cisa.gov/ics",
            "https://github.com/x",
            "https://www.linkedin.com/company/x",
            "https://www.emerson.com/security",
            "https://www.isa.org/standards",
            "https://api.example.com/v1",
            "https://example.net/",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let partition = classify(&urls);
        assert_eq!(partition.len(), Category::ALL.len());

        let total: usize = partition.values().map(BTreeSet::len).sum();
        assert_eq!(total, urls.len());
        for url in &urls {
            let owners = partition.values().filter(|set| set.contains(url)).count();
            assert_eq!(owners, 1, "{url} must be in exactly one category");
        }
        assert_eq!(partition[&Category::Documentation].len(), 2);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let urls: Vec<String> = vec![
            "https://unpkg.com/lucide@latest".into(),
            "https://example.com/api/feed".into(),
        ];
        assert_eq!(classify(&urls), classify(&urls));
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://www.cisa.gov/advisories"), "www.cisa.gov");
        assert_eq!(host_of("https://Example.COM:8443/x"), "example.com:8443");
        assert_eq!(host_of("https://user@host.example/x"), "host.example");
        // unparsable: still yields the authority text
        assert_eq!(host_of("https://bad host.example/x"), "bad host.example");
    }
}
