//! Summarize command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::error::FinnError;
use crate::extract::{validate_url, PageLoader, UrlKind, VideoExtractor};
use crate::groq;
use crate::summarize::Summarizer;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(
    url: &str,
    model: Option<String>,
    api_key: Option<String>,
    settings: Settings,
) -> Result<()> {
    // Validate inputs before touching the network
    let api_key = settings.resolve_api_key(api_key);
    if api_key.trim().is_empty() {
        let err = FinnError::Config(
            "Groq API key missing. Provide it with --api-key or GROQ_API_KEY.".to_string(),
        );
        Output::error(&err.to_string());
        return Err(err.into());
    }

    let url = match validate_url(url) {
        Ok(url) => url,
        Err(e) => {
            Output::error(&e.to_string());
            return Err(e.into());
        }
    };

    let model = model.unwrap_or_else(|| settings.summarize.model.clone());
    let prompts = Prompts::load(settings.prompts.custom_dir.as_deref())?;
    let client = groq::create_client(&api_key, &settings.groq.api_base);
    let summarizer = Summarizer::new(client, &model).with_prompts(prompts);

    let spinner = Output::spinner("Fetching content...");

    let document = match UrlKind::classify(&url) {
        UrlKind::Video => {
            if let Err(e) = preflight::check(Operation::SummarizeVideo) {
                spinner.finish_and_clear();
                Output::error(&e.to_string());
                return Err(e.into());
            }

            match VideoExtractor::new().fetch(&url).await {
                Ok(metadata) => {
                    spinner.finish_and_clear();
                    Output::kv("Video Title", &metadata.title);
                    metadata.into_document()
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    Output::error(&format!("Failed to process video URL: {}", e));
                    return Err(e.into());
                }
            }
        }

        UrlKind::Webpage => {
            let loaded = PageLoader::new()
                .load(&url)
                .await
                .and_then(|content| content.into_document());

            match loaded {
                Ok(document) => {
                    spinner.finish_and_clear();
                    document
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    Output::error(&e.to_string());
                    return Err(e.into());
                }
            }
        }
    };

    let spinner = Output::spinner("Summarizing...");

    match summarizer.summarize(&document).await {
        Ok(summary) => {
            spinner.finish_and_clear();
            Output::success("Summary:");
            println!("\n{}\n", summary);
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Exception: {}", e));
            Err(e.into())
        }
    }
}
