//! URL classification and content extraction.
//!
//! Turns a user-supplied URL into an [`ExtractedDocument`] ready for
//! summarization, via one of two branches: video metadata (yt-dlp) or
//! generic webpage text.

mod video;
mod webpage;

pub use video::{VideoExtractor, VideoMetadata};
pub use webpage::{PageContent, PageLoader, BROWSER_USER_AGENT};

use crate::error::{FinnError, Result};
use url::Url;

/// Kind of content behind a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// A video-hosting URL; summarized from its metadata description.
    Video,
    /// Anything else; summarized from extracted page text.
    Webpage,
}

impl UrlKind {
    /// Classify a URL by host substring only.
    pub fn classify(url: &Url) -> UrlKind {
        let host = url.host_str().unwrap_or_default();
        if host.contains("youtube.com") || host.contains("youtu.be") {
            UrlKind::Video
        } else {
            UrlKind::Webpage
        }
    }
}

/// Validate a raw URL string before any extraction is attempted.
pub fn validate_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FinnError::InvalidInput(
            "Please provide a URL to summarize.".to_string(),
        ));
    }

    let url = Url::parse(raw).map_err(|e| {
        FinnError::InvalidInput(format!(
            "Invalid URL '{}': {}. It can be a YouTube video URL or a website URL.",
            raw, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FinnError::InvalidInput(format!(
            "Unsupported URL scheme '{}'; only http and https are supported.",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(FinnError::InvalidInput(format!(
            "URL '{}' has no host.",
            raw
        )));
    }

    Ok(url)
}

/// Text extracted from a URL, ready for summarization.
///
/// Created by an extraction branch and consumed immediately by the
/// summarizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
}

impl ExtractedDocument {
    /// Wrap extracted text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            validate_url("   "),
            Err(FinnError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(matches!(
            validate_url("not a url"),
            Err(FinnError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        assert!(matches!(
            validate_url("ftp://example.com/file"),
            Err(FinnError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_accepts_https() {
        let url = validate_url("https://example.com/article").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_classify_youtube_hosts_as_video() {
        let short = validate_url("https://youtu.be/abc123").unwrap();
        assert_eq!(UrlKind::classify(&short), UrlKind::Video);

        let full = validate_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(UrlKind::classify(&full), UrlKind::Video);
    }

    #[test]
    fn test_classify_other_hosts_as_webpage() {
        let url = validate_url("https://example.com/article").unwrap();
        assert_eq!(UrlKind::classify(&url), UrlKind::Webpage);
    }

    #[test]
    fn test_classify_uses_host_not_path() {
        // "youtube.com" in the path must not route to the video branch
        let url = validate_url("https://example.com/youtube.com/watch").unwrap();
        assert_eq!(UrlKind::classify(&url), UrlKind::Webpage);
    }
}
