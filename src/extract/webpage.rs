//! Generic webpage text extraction.

use super::ExtractedDocument;
use crate::error::{FinnError, Result};
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Fixed browser User-Agent sent with page requests. Some sites serve
/// stripped-down or empty pages to non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

/// Timeout for page loads.
const LOAD_TIMEOUT_SECS: u64 = 30;

/// Typed result of a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// A single block of page text.
    Text(String),
    /// Individual text sections (paragraphs) in document order.
    Records(Vec<String>),
    /// The page yielded no text at all.
    Empty,
}

impl PageContent {
    /// Normalize into a document for summarization.
    ///
    /// `Records` are joined with single spaces; blank content of any shape
    /// is an `UnrecognizedFormat` error.
    pub fn into_document(self) -> Result<ExtractedDocument> {
        match self {
            PageContent::Text(text) if !text.trim().is_empty() => Ok(ExtractedDocument::new(&text)),
            PageContent::Records(records) => {
                let joined = records
                    .iter()
                    .map(|r| r.trim())
                    .filter(|r| !r.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if joined.is_empty() {
                    Err(FinnError::UnrecognizedFormat(
                        "Loader returned empty or invalid document list.".to_string(),
                    ))
                } else {
                    Ok(ExtractedDocument::new(&joined))
                }
            }
            PageContent::Text(_) | PageContent::Empty => Err(FinnError::UnrecognizedFormat(
                "Loader returned empty or invalid document list.".to_string(),
            )),
        }
    }
}

/// Loads webpages and extracts their visible text.
pub struct PageLoader {
    client: reqwest::Client,
}

impl PageLoader {
    /// Create a loader with certificate verification disabled and the fixed
    /// browser User-Agent.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(LOAD_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Load a page and extract its text content.
    pub async fn load(&self, url: &Url) -> Result<PageContent> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FinnError::Extraction(format!("Failed to load {}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| FinnError::Extraction(format!("Failed to load {}: {}", url, e)))?;

        let html = response
            .text()
            .await
            .map_err(|e| FinnError::Extraction(format!("Failed to read {}: {}", url, e)))?;

        Ok(parse_page(&html))
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse page HTML into typed content.
///
/// Prefers paragraph elements; falls back to whole-body text for pages
/// without them.
pub fn parse_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let paragraph_selector = Selector::parse("p").expect("Invalid selector");
    let records: Vec<String> = document
        .select(&paragraph_selector)
        .map(|e| normalize_whitespace(&e.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect();

    if !records.is_empty() {
        return PageContent::Records(records);
    }

    let body_selector = Selector::parse("body").expect("Invalid selector");
    let body_text = document
        .select(&body_selector)
        .next()
        .map(|e| normalize_whitespace(&e.text().collect::<String>()))
        .unwrap_or_default();

    if body_text.is_empty() {
        PageContent::Empty
    } else {
        PageContent::Text(body_text)
    }
}

/// Collapse runs of whitespace into single spaces and trim.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_paragraphs_become_records() {
        let html = r#"<html><body>
            <h1>Heading</h1>
            <p>First   paragraph.</p>
            <p>Second paragraph.</p>
            <p>   </p>
        </body></html>"#;

        match parse_page(html) {
            PageContent::Records(records) => {
                assert_eq!(records, vec!["First paragraph.", "Second paragraph."]);
            }
            other => panic!("Expected Records, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_page_body_fallback() {
        let html = "<html><body><div>Plain body text only.</div></body></html>";
        match parse_page(html) {
            PageContent::Text(text) => assert_eq!(text, "Plain body text only."),
            other => panic!("Expected Text, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_page_empty() {
        assert_eq!(
            parse_page("<html><body></body></html>"),
            PageContent::Empty
        );
    }

    #[test]
    fn test_records_join_with_spaces() {
        let content = PageContent::Records(vec![
            "One sentence.".to_string(),
            "Another sentence.".to_string(),
        ]);
        let doc = content.into_document().unwrap();
        assert_eq!(doc.text, "One sentence. Another sentence.");
    }

    #[test]
    fn test_empty_content_is_unrecognized_format() {
        assert!(matches!(
            PageContent::Empty.into_document(),
            Err(FinnError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            PageContent::Records(Vec::new()).into_document(),
            Err(FinnError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            PageContent::Records(vec!["  ".to_string()]).into_document(),
            Err(FinnError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            PageContent::Text("   ".to_string()).into_document(),
            Err(FinnError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_text_content_passes_through() {
        let doc = PageContent::Text("Body text.".to_string())
            .into_document()
            .unwrap();
        assert_eq!(doc.text, "Body text.");
    }
}
