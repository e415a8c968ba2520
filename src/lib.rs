//! Finn - Agentic Web Search and URL Summarization
//!
//! A CLI companion for web research, powered by Groq-hosted language models.
//!
//! The name "Finn" comes from the Norwegian/Scandinavian word for "find."
//!
//! # Overview
//!
//! Finn allows you to:
//! - Chat with an agent that can search the web, look up arXiv papers,
//!   and query Wikipedia to answer your questions
//! - Summarize a YouTube video or any webpage from its URL
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt templates
//! - `chat` - Conversation history and session state
//! - `agent` - Tool-calling reasoning agent
//! - `extract` - URL classification and content extraction
//! - `summarize` - Single-prompt ("stuff") summarization
//! - `cache` - TTL response cache
//! - `throttle` - Request spacing policy
//!
//! # Example
//!
//! ```rust,no_run
//! use finn::config::Settings;
//! use finn::extract::{validate_url, UrlKind};
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let url = validate_url("https://example.com/article")?;
//!     assert_eq!(UrlKind::classify(&url), UrlKind::Webpage);
//!     println!("summarizer model: {}", settings.summarize.model);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cache;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod groq;
pub mod summarize;
pub mod throttle;

pub use error::{FinnError, Result};
