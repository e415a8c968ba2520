//! CLI module for Finn.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Finn - Agentic Web Search and URL Summarization
///
/// A CLI companion for web research, powered by Groq-hosted language models.
/// The name "Finn" comes from the Norwegian/Scandinavian word for "find."
#[derive(Parser, Debug)]
#[command(name = "finn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat with the search agent
    Chat {
        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Groq API key
        #[arg(short = 'k', long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Summarize the content behind a URL (YouTube video or website)
    Summarize {
        /// The URL to summarize
        url: String,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Groq API key
        #[arg(short = 'k', long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "agent.model")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
