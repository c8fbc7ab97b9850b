use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Syntactic contexts an external URL can appear in. Scheme and attribute
/// keywords match case-insensitively; the URL keeps its original casing.
static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // bare occurrence
        r#"(?i)https://[^\s'"<>]+"#,
        // href="..." / src="..."
        r#"(?i)href=["']https://[^"']+["']"#,
        r#"(?i)src=["']https://[^"']+["']"#,
        // CSS url(...), optionally quoted
        r#"(?i)url\(["']?https://[^"')\s]+["']?\)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid URL pattern"))
    .collect()
});

static LEADING_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^(?:href=|src=|url\()?["']?"#).expect("valid prefix pattern"));

// `;` and `,` cover unquoted `url(...)` followed by a declaration terminator,
// the backtick closes Markdown inline code.
static TRAILING_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["');,`]*$"#).expect("valid suffix pattern"));

/// Pulls external HTTPS URLs out of text, dropping the site's own hosts.
pub struct UrlExtractor {
    own_domains: Vec<String>,
}

impl UrlExtractor {
    pub fn new(own_domains: &[String]) -> Self {
        Self {
            own_domains: own_domains.to_vec(),
        }
    }

    /// Extract the distinct external URLs referenced in `content`.
    ///
    /// URLs are returned verbatim (no normalization of trailing slashes,
    /// queries or fragments) once attribute and quote syntax is stripped.
    pub fn extract(&self, content: &str) -> BTreeSet<String> {
        let mut urls = BTreeSet::new();

        for pattern in URL_PATTERNS.iter() {
            for m in pattern.find_iter(content) {
                let url = clean_match(m.as_str());
                if url.is_empty() || self.is_own(url) {
                    continue;
                }
                urls.insert(url.to_string());
            }
        }

        urls
    }

    fn is_own(&self, url: &str) -> bool {
        self.own_domains
            .iter()
            .any(|own| !own.is_empty() && url.contains(own.as_str()))
    }
}

/// Strip a leading `href=`/`src=`/`url(` prefix plus quote, and any trailing quotes,
/// `)`, `;`, `,` or backticks.
fn clean_match(raw: &str) -> &str {
    let start = LEADING_SYNTAX.find(raw).map_or(0, |m| m.end());
    let rest = &raw[start..];
    let end = TRAILING_SYNTAX.find(rest).map_or(rest.len(), |m| m.start());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> UrlExtractor {
        UrlExtractor::new(&["chatala1.github.io".to_string(), "localhost".to_string()])
    }

    #[test]
    fn test_no_urls() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("plain text, http://insecure.example.com and ftp://x").is_empty());
    }

    #[test]
    fn test_html_attributes() {
        let html = r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5/dist/css/bootstrap.min.css" rel="stylesheet">
<script src='https://cdn.plot.ly/plotly-2.26.0.min.js'></script>"#;
        let urls = extractor().extract(html);
        assert_eq!(urls.len(), 2);
        assert!(urls.contains("https://cdn.jsdelivr.net/npm/bootstrap@5/dist/css/bootstrap.min.css"));
        assert!(urls.contains("https://cdn.plot.ly/plotly-2.26.0.min.js"));
    }

    #[test]
    fn test_css_url_function() {
        let css = r#"@font-face { src: url("https://fonts.example.com/a.woff2"); }
.bg { background: url(https://img.example.com/bg.png); }"#;
        let urls = extractor().extract(css);
        assert_eq!(
            urls.into_iter().collect::<Vec<_>>(),
            vec![
                "https://fonts.example.com/a.woff2".to_string(),
                "https://img.example.com/bg.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_markdown_link_trailing_paren() {
        let md = "See [CISA](https://www.cisa.gov/advisories) for details.";
        let urls = extractor().extract(md);
        assert_eq!(urls.len(), 1);
        assert!(urls.contains("https://www.cisa.gov/advisories"));
    }

    #[test]
    fn test_markdown_inline_code() {
        let md = "- URLs: `https://www.cisa.gov/a`, `https://www.cisa.gov/b`\n- URL: `https://unpkg.com/lucide@latest`";
        let urls = extractor().extract(md);
        assert_eq!(
            urls.into_iter().collect::<Vec<_>>(),
            vec![
                "https://unpkg.com/lucide@latest".to_string(),
                "https://www.cisa.gov/a".to_string(),
                "https://www.cisa.gov/b".to_string(),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_keywords_preserve_url_case() {
        let html = r#"<A HREF="HTTPS://Example.com/Path/File.JS">x</A>"#;
        let urls = extractor().extract(html);
        assert_eq!(urls.len(), 1);
        assert!(urls.contains("HTTPS://Example.com/Path/File.JS"));
    }

    #[test]
    fn test_own_domain_excluded() {
        let text = "https://chatala1.github.io/ICS-Advisory-Dashboard/ https://localhost:4000/ https://nvd.nist.gov/";
        let urls = extractor().extract(text);
        assert_eq!(urls.len(), 1);
        assert!(urls.iter().all(|u| !u.contains("chatala1.github.io") && !u.contains("localhost")));
    }

    #[test]
    fn test_no_normalization() {
        let text = "https://example.com/a https://example.com/a/ https://example.com/a?x=1#top";
        assert_eq!(extractor().extract(text).len(), 3);
    }

    #[test]
    fn test_duplicates_collapse() {
        let text = r#"https://unpkg.com/lucide@latest <script src="https://unpkg.com/lucide@latest"></script>"#;
        assert_eq!(extractor().extract(text).len(), 1);
    }
}
