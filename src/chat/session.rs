//! Per-session chat state and request handling.

use super::{Assistant, ChatMessage};
use crate::cache::{fingerprint, QueryCache};
use crate::error::{FinnError, Result};
use crate::throttle::Throttle;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Interactive chat session.
///
/// Owns the conversation history for its lifetime. The history starts with
/// the fixed greeting and is only ever appended to; it is dropped with the
/// session.
pub struct ChatSession {
    assistant: Arc<dyn Assistant>,
    credential: String,
    greeting: String,
    history: Vec<ChatMessage>,
    cache: QueryCache,
    throttle: Throttle,
}

impl ChatSession {
    /// Create a new session seeded with the greeting message.
    pub fn new(assistant: Arc<dyn Assistant>, credential: &str, greeting: &str) -> Self {
        Self {
            assistant,
            credential: credential.to_string(),
            greeting: greeting.to_string(),
            history: vec![ChatMessage::assistant(greeting)],
            cache: QueryCache::new(100, Duration::from_secs(600)),
            throttle: Throttle::new(Duration::from_secs(2)),
        }
    }

    /// Replace the response cache.
    pub fn with_cache(mut self, cache: QueryCache) -> Self {
        self.cache = cache;
        self
    }

    /// Replace the request throttle.
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// The conversation history, greeting first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Reset the history back to just the greeting.
    pub fn clear(&mut self) {
        self.history = vec![ChatMessage::assistant(&self.greeting)];
    }

    /// Handle one user utterance.
    ///
    /// On success the history gains exactly one user entry and one assistant
    /// entry. On failure it gains only the user entry, except for the
    /// missing-credential rejection, which appends nothing.
    pub async fn send_message(&mut self, input: &str) -> Result<String> {
        if self.credential.trim().is_empty() {
            return Err(FinnError::Config(
                "Groq API key missing. Provide it with --api-key or GROQ_API_KEY.".to_string(),
            ));
        }

        self.history.push(ChatMessage::user(input));

        let key = fingerprint(input);
        if let Some(cached) = self.cache.get(&key) {
            debug!("cache hit for query fingerprint");
            self.history.push(ChatMessage::assistant(&cached));
            return Ok(cached);
        }

        self.throttle.acquire().await;

        let reply = self.assistant.reply(&self.history).await?;

        self.cache.insert(&key, &reply);
        self.history.push(ChatMessage::assistant(&reply));
        Ok(reply)
    }
}
