//! Single-prompt ("stuff") summarization.
//!
//! The entire extracted document is substituted into one fixed prompt
//! template and sent as a single chat completion; there is no split/merge
//! chaining.

use crate::config::Prompts;
use crate::error::{FinnError, Result};
use crate::extract::ExtractedDocument;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Summarization engine for extracted documents.
pub struct Summarizer {
    client: async_openai::Client<OpenAIConfig>,
    model: String,
    prompts: Prompts,
}

impl Summarizer {
    /// Create a new summarizer.
    pub fn new(client: async_openai::Client<OpenAIConfig>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
            prompts: Prompts::default(),
        }
    }

    /// Set custom prompts.
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Render the summary prompt for a document.
    ///
    /// The document text is substituted verbatim; the 300-word target lives
    /// in the template, it is not enforced programmatically.
    pub fn build_prompt(&self, document: &ExtractedDocument) -> String {
        let mut vars = HashMap::new();
        vars.insert("text".to_string(), document.text.clone());
        Prompts::render(&self.prompts.summarize.template, &vars)
    }

    /// Summarize a document.
    #[instrument(skip(self, document))]
    pub async fn summarize(&self, document: &ExtractedDocument) -> Result<String> {
        let prompt = self.build_prompt(document);
        debug!("Summarizing {} chars of extracted text", document.text.len());

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| FinnError::Summarize(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| FinnError::Summarize(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| FinnError::Groq(format!("Failed to generate summary: {}", e)))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| FinnError::Summarize("Empty response from LLM".to_string()))?
            .clone();

        Ok(summary)
    }
}
