//! Prompt templates for Finn.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub agent: AgentPrompts,
    pub chat: ChatPrompts,
    pub summarize: SummarizePrompts,
}

/// Prompts for the tool-calling search agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentPrompts {
    pub system: String,
}

impl Default for AgentPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a helpful research assistant that answers questions using web search, academic papers, and encyclopedia lookups.

You have tools to search the web, look up papers on arXiv, and query Wikipedia.
Think step-by-step about what information you need, then use the appropriate tools.

Guidelines:
- Use 'search' for current events, facts, and general web queries
- Use 'paper_lookup' for academic and scientific topics
- Use 'wiki_lookup' for encyclopedic background on people, places, and concepts
- Tool results may be short excerpts; synthesize across them rather than quoting verbatim

When you have gathered enough information, provide your final answer in clear,
conversational prose. If the tools return nothing useful, say so honestly."#
                .to_string(),
        }
    }
}

/// Prompts for the interactive chat shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatPrompts {
    /// Fixed greeting shown as the first assistant message of every session.
    pub greeting: String,
}

impl Default for ChatPrompts {
    fn default() -> Self {
        Self {
            greeting: "Hi! I'm a chatbot that can search the web. How can I assist you today?"
                .to_string(),
        }
    }
}

/// Prompts for URL summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizePrompts {
    /// Template for the single-prompt summary. `{{text}}` is replaced with
    /// the extracted document text.
    pub template: String,
}

impl Default for SummarizePrompts {
    fn default() -> Self {
        Self {
            template: "Provide a summary of the following content in 300 words:\nContent: {{text}}"
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from defaults, with optional per-file overrides from a
    /// custom directory.
    pub fn load(custom_dir: Option<&str>) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            // Load agent prompts if file exists
            let agent_path = custom_path.join("agent.toml");
            if agent_path.exists() {
                let content = std::fs::read_to_string(&agent_path)?;
                prompts.agent = toml::from_str(&content)?;
            }

            // Load chat prompts if file exists
            let chat_path = custom_path.join("chat.toml");
            if chat_path.exists() {
                let content = std::fs::read_to_string(&chat_path)?;
                prompts.chat = toml::from_str(&content)?;
            }

            // Load summarize prompts if file exists
            let summarize_path = custom_path.join("summarize.toml");
            if summarize_path.exists() {
                let content = std::fs::read_to_string(&summarize_path)?;
                prompts.summarize = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.agent.system.is_empty());
        assert!(prompts.chat.greeting.starts_with("Hi!"));
        assert!(prompts.summarize.template.contains("300 words"));
    }

    #[test]
    fn test_render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = std::collections::HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Hello Alice, you have 5 messages.");
    }

    #[test]
    fn test_summary_template_substitution_is_verbatim() {
        let prompts = Prompts::default();
        let text = "Rust is a systems programming language. <tag> & \"quotes\" survive.";
        let mut vars = std::collections::HashMap::new();
        vars.insert("text".to_string(), text.to_string());

        let rendered = Prompts::render(&prompts.summarize.template, &vars);
        assert!(rendered.contains(text));
        assert!(!rendered.contains("{{text}}"));
    }
}
