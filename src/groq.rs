//! Groq client configuration with sensible defaults.
//!
//! Groq exposes an OpenAI-compatible chat completions API, so the client is
//! an `async_openai::Client` pointed at the Groq API base.

use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Default Groq API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Default timeout for Groq API requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Create a Groq client with configured timeout.
pub fn create_client(api_key: &str, api_base: &str) -> Client<OpenAIConfig> {
    create_client_with_timeout(api_key, api_base, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create a Groq client with a custom timeout.
pub fn create_client_with_timeout(
    api_key: &str,
    api_base: &str,
    timeout: Duration,
) -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client");

    let config = OpenAIConfig::new()
        .with_api_base(api_base)
        .with_api_key(api_key);

    Client::with_config(config).with_http_client(http_client)
}
