//! Configuration settings for Finn.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub groq: GroqSettings,
    pub agent: AgentSettings,
    pub tools: ToolSettings,
    pub cache: CacheSettings,
    pub throttle: ThrottleSettings,
    pub summarize: SummarizeSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Groq API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroqSettings {
    /// API key. Usually left unset in favor of the GROQ_API_KEY environment
    /// variable or the --api-key flag.
    pub api_key: Option<String>,
    /// API base URL (OpenAI-compatible endpoint).
    pub api_base: String,
}

impl Default for GroqSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: crate::groq::DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Reasoning agent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Model for the chat agent.
    pub model: String,
    /// Maximum tool-calling iterations per turn.
    pub max_iterations: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: "llama3-8b-8192".to_string(),
            max_iterations: 10,
        }
    }
}

/// Lookup tool settings (arXiv, Wikipedia).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Number of results per lookup.
    pub top_k_results: usize,
    /// Maximum characters of document content per result.
    pub doc_content_chars_max: usize,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            top_k_results: 1,
            doc_content_chars_max: 200,
        }
    }
}

/// Response cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum number of cached responses.
    pub capacity: usize,
    /// Time-to-live for cached responses, in seconds.
    pub ttl_seconds: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: 100,
            ttl_seconds: 600,
        }
    }
}

/// Request throttle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleSettings {
    /// Minimum spacing between agent calls, in milliseconds.
    pub min_interval_ms: u64,
}

impl Default for ThrottleSettings {
    fn default() -> Self {
        Self {
            min_interval_ms: 2000,
        }
    }
}

/// URL summarization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeSettings {
    /// Model for summary generation.
    pub model: String,
}

impl Default for SummarizeSettings {
    fn default() -> Self {
        Self {
            model: "gemma-7b-it".to_string(),
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::FinnError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("finn")
            .join("config.toml")
    }

    /// Resolve the API key: explicit value, then environment, then config.
    pub fn resolve_api_key(&self, flag: Option<String>) -> String {
        flag.or_else(|| std::env::var("GROQ_API_KEY").ok())
            .or_else(|| self.groq.api_key.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tools.top_k_results, 1);
        assert_eq!(settings.tools.doc_content_chars_max, 200);
        assert_eq!(settings.cache.capacity, 100);
        assert_eq!(settings.cache.ttl_seconds, 600);
        assert_eq!(settings.throttle.min_interval_ms, 2000);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [agent]
            model = "llama-3.1-70b-versatile"

            [cache]
            capacity = 10
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.agent.model, "llama-3.1-70b-versatile");
        assert_eq!(settings.cache.capacity, 10);
        // Untouched sections keep defaults
        assert_eq!(settings.cache.ttl_seconds, 600);
        assert_eq!(settings.summarize.model, "gemma-7b-it");
    }
}
