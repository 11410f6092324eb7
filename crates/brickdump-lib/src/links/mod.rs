//! Extraction of `.csv.gz` download links from the downloads page markup.

use crate::error::BrickDumpError;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_DOWNLOAD_HOST: &str = "cdn.rebrickable.com";

static DEFAULT_EXTRACTOR: LazyLock<LinkExtractor> = LazyLock::new(|| {
    LinkExtractor::new(DEFAULT_DOWNLOAD_HOST).expect("default download host pattern is valid")
});

/// Maps a compressed file name such as `colors.csv.gz` to its download URL.
pub type Links = IndexMap<String, String>;

#[derive(Clone, Debug)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Builds an extractor for quoted links of the form
    /// `"http(s)://<host>/media/downloads/<name>.csv.gz?<major>.<minor>"`.
    pub fn new(host: &str) -> Result<Self, BrickDumpError> {
        let pattern = format!(
            r#""(https?://{}/media/downloads/([a-zA-Z_\\]+\.csv\.gz)\?\d+\.\d+)""#,
            regex::escape(host)
        );
        let pattern = Regex::new(&pattern).map_err(|source| BrickDumpError::InvalidDownloadHost {
            host: host.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Scans `page_text` in order. A file name seen twice keeps the URL of its
    /// last occurrence.
    pub fn extract(&self, page_text: &str) -> Links {
        let mut links = Links::new();
        for captures in self.pattern.captures_iter(page_text) {
            let (_, [url, filename]) = captures.extract();
            links.insert(filename.to_string(), url.to_string());
        }
        links
    }
}

/// Extracts links pointing at the default download host.
pub fn extract(page_text: &str) -> Links {
    DEFAULT_EXTRACTOR.extract(page_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &str = "https://cdn.rebrickable.com/media/downloads/colors.csv.gz?1.0";
    const PARTS: &str = "https://cdn.rebrickable.com/media/downloads/parts.csv.gz?1.0";

    #[test]
    fn test_extract_no_matches_is_empty() {
        let page = r#"<html><a href="/about/">About</a><a href="https://example.com/x.csv.gz?1.0">x</a></html>"#;
        assert!(extract(page).is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_extract_distinct_files() {
        let page = format!(r#"<a href="{COLORS}">colors</a> <a href="{PARTS}">parts</a>"#);
        let links = extract(&page);

        assert_eq!(links.len(), 2);
        assert_eq!(links["colors.csv.gz"], COLORS);
        assert_eq!(links["parts.csv.gz"], PARTS);
        assert_eq!(
            links.keys().collect::<Vec<_>>(),
            vec!["colors.csv.gz", "parts.csv.gz"]
        );
    }

    #[test]
    fn test_extract_duplicate_filename_keeps_last_url() {
        let page = concat!(
            r#""https://cdn.rebrickable.com/media/downloads/sets.csv.gz?1.5" "#,
            r#""https://cdn.rebrickable.com/media/downloads/themes.csv.gz?1.5" "#,
            r#""https://cdn.rebrickable.com/media/downloads/sets.csv.gz?2.7""#,
        );
        let links = extract(page);

        assert_eq!(links.len(), 2);
        assert_eq!(
            links["sets.csv.gz"],
            "https://cdn.rebrickable.com/media/downloads/sets.csv.gz?2.7"
        );
    }

    #[test]
    fn test_extract_requires_quotes_and_version() {
        let page = concat!(
            "https://cdn.rebrickable.com/media/downloads/colors.csv.gz?1.0 ",
            r#""https://cdn.rebrickable.com/media/downloads/parts.csv.gz""#,
            r#""https://cdn.rebrickable.com/media/downloads/sets.csv?1.0""#,
        );
        assert!(extract(page).is_empty());
    }

    #[test]
    fn test_extract_accepts_underscores_and_http() {
        let page = r#""http://cdn.rebrickable.com/media/downloads/inventory_parts.csv.gz?17.42""#;
        let links = extract(page);

        assert_eq!(
            links["inventory_parts.csv.gz"],
            "http://cdn.rebrickable.com/media/downloads/inventory_parts.csv.gz?17.42"
        );
    }

    #[test]
    fn test_custom_host_is_escaped() {
        let extractor = LinkExtractor::new("127.0.0.1:8080").unwrap();
        let page = concat!(
            r#""http://127.0.0.1:8080/media/downloads/colors.csv.gz?1.0" "#,
            r#""http://127x0x0x1:8080/media/downloads/parts.csv.gz?1.0""#,
        );
        let links = extractor.extract(page);

        assert_eq!(links.len(), 1);
        assert!(links.contains_key("colors.csv.gz"));
    }
}
