//! Video metadata extraction via yt-dlp.

use super::ExtractedDocument;
use crate::error::{FinnError, Result};
use url::Url;

/// Title and description of a hosted video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
}

impl VideoMetadata {
    /// The description is what gets summarized; the title is display-only.
    pub fn into_document(self) -> ExtractedDocument {
        ExtractedDocument::new(&self.description)
    }
}

/// Fetches video metadata with yt-dlp, download disabled.
pub struct VideoExtractor;

impl VideoExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Fetch title and description for a video URL.
    pub async fn fetch(&self, url: &Url) -> Result<VideoMetadata> {
        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--no-download",
                "--no-warnings",
                url.as_str(),
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FinnError::ToolNotFound("yt-dlp".to_string())
                } else {
                    FinnError::Extraction(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FinnError::Extraction(format!(
                "Failed to fetch video data for {}: {}",
                url,
                stderr.trim()
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value = serde_json::from_str(&json_str)
            .map_err(|e| FinnError::Extraction(format!("Failed to parse yt-dlp output: {}", e)))?;

        Ok(parse_metadata(&json))
    }
}

impl Default for VideoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull title and description out of a yt-dlp JSON dump.
fn parse_metadata(json: &serde_json::Value) -> VideoMetadata {
    let title = json["title"]
        .as_str()
        .unwrap_or("No Title Available")
        .to_string();

    let description = json["description"]
        .as_str()
        .unwrap_or("No Description Available")
        .to_string();

    VideoMetadata { title, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata() {
        let json = serde_json::json!({
            "title": "Intro to Ownership",
            "description": "A walkthrough of Rust's ownership model.",
            "duration": 613
        });

        let metadata = parse_metadata(&json);
        assert_eq!(metadata.title, "Intro to Ownership");
        assert_eq!(
            metadata.description,
            "A walkthrough of Rust's ownership model."
        );
    }

    #[test]
    fn test_into_document_uses_description_only() {
        let metadata = VideoMetadata {
            title: "Intro to Ownership".to_string(),
            description: "A walkthrough.".to_string(),
        };
        let doc = metadata.into_document();
        assert_eq!(doc.text, "A walkthrough.");
    }

    #[test]
    fn test_parse_metadata_defaults() {
        let json = serde_json::json!({"id": "abc123"});
        let metadata = parse_metadata(&json);
        assert_eq!(metadata.title, "No Title Available");
        assert_eq!(metadata.description, "No Description Available");
    }
}
