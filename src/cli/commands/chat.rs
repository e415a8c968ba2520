//! Interactive chat command backed by the search agent.

use crate::agent::{Agent, ToolContext};
use crate::cache::QueryCache;
use crate::chat::ChatSession;
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::error::FinnError;
use crate::groq;
use crate::throttle::Throttle;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive chat command.
pub async fn run_chat(
    model: Option<String>,
    api_key: Option<String>,
    settings: Settings,
) -> Result<()> {
    let model = model.unwrap_or_else(|| settings.agent.model.clone());
    let api_key = settings.resolve_api_key(api_key);
    let prompts = Prompts::load(settings.prompts.custom_dir.as_deref())?;

    let client = groq::create_client(&api_key, &settings.groq.api_base);
    let tools = ToolContext::new(&settings.tools);
    let agent = Agent::new(client, tools, &model)
        .with_system_prompt(&prompts.agent.system)
        .with_max_iterations(settings.agent.max_iterations);

    let mut session = ChatSession::new(Arc::new(agent), &api_key, &prompts.chat.greeting)
        .with_cache(QueryCache::new(
            settings.cache.capacity,
            Duration::from_secs(settings.cache.ttl_seconds),
        ))
        .with_throttle(Throttle::new(Duration::from_millis(
            settings.throttle.min_interval_ms,
        )));

    println!("\n{}", style("Finn Chat").bold().cyan());
    println!(
        "{}\n",
        style("Type your questions, or 'exit' to quit. Use 'clear' to reset conversation.").dim()
    );

    // The greeting opens every session
    println!("{} {}\n", style("Finn:").cyan().bold(), prompts.chat.greeting);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("clear") {
            session.clear();
            Output::info("Conversation history cleared.");
            continue;
        }

        let spinner = Output::spinner("Searching...");

        match session.send_message(input).await {
            Ok(response) => {
                spinner.finish_and_clear();

                // Delegate failures surface as Err below and never reach
                // this branch; the distinct banner is kept for rate-limit
                // notices embedded in a reply body.
                if response.contains("Ratelimit") {
                    Output::error("Rate limit exceeded. Please wait a moment and try again.");
                } else {
                    println!("\n{} {}\n", style("Finn:").cyan().bold(), response);
                }
            }
            // Input validation failures are inline errors; delegate
            // failures surface as "Error: " warnings and the session
            // continues either way.
            Err(e @ FinnError::Config(_)) => {
                spinner.finish_and_clear();
                Output::error(&e.to_string());
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::warning(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
