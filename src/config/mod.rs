//! Configuration module for Finn.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{AgentPrompts, ChatPrompts, Prompts, SummarizePrompts};
pub use settings::{
    AgentSettings, CacheSettings, GeneralSettings, GroqSettings, PromptSettings, Settings,
    SummarizeSettings, ThrottleSettings, ToolSettings,
};
