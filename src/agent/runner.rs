//! Agent runner with tool calling loop.

use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use crate::chat::{Assistant, ChatMessage, Role};
use crate::error::{FinnError, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, info};

/// Agent that answers questions using web search, arXiv, and Wikipedia.
pub struct Agent {
    client: async_openai::Client<OpenAIConfig>,
    model: String,
    tools: ToolContext,
    max_iterations: usize,
    system_prompt: String,
}

impl Agent {
    /// Create a new agent with the given client, tool context, and model.
    pub fn new(client: async_openai::Client<OpenAIConfig>, tools: ToolContext, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
            tools,
            max_iterations: 10,
            system_prompt: crate::config::AgentPrompts::default().system,
        }
    }

    /// Set a custom system prompt.
    pub fn with_system_prompt(mut self, prompt: &str) -> Self {
        self.system_prompt = prompt.to_string();
        self
    }

    /// Set maximum iterations for the agent loop.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Run the agent over a conversation history.
    pub async fn run(&self, history: &[ChatMessage]) -> Result<AgentResponse> {
        let mut messages = self.build_request_messages(history)?;

        let mut iterations = 0;
        let mut tool_calls_made = Vec::new();

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(FinnError::Agent(format!(
                    "Agent exceeded maximum iterations ({})",
                    self.max_iterations
                )));
            }

            debug!("Agent iteration {}", iterations);

            // Call LLM with tools
            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(messages.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| FinnError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| FinnError::Groq(format!("Agent API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| FinnError::Agent("No response from model".to_string()))?;

            // Check if LLM wants to call tools
            if let Some(ref tool_calls) = choice.message.tool_calls {
                if tool_calls.is_empty() {
                    // No tool calls, treat as final response
                    return self.build_response(&choice.message.content, tool_calls_made, iterations);
                }

                // Add assistant message with tool calls to history
                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(|e| FinnError::Agent(e.to_string()))?;
                messages.push(assistant_msg.into());

                // Execute each tool call
                for tool_call in tool_calls {
                    let record = self.execute_tool_call(tool_call).await;

                    // Add tool result to messages
                    let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(&tool_call.id)
                        .content(record.result.clone())
                        .build()
                        .map_err(|e| FinnError::Agent(e.to_string()))?;
                    messages.push(tool_msg.into());

                    tool_calls_made.push(record);
                }
            } else {
                // No tool calls - LLM is done, return final response
                return self.build_response(&choice.message.content, tool_calls_made, iterations);
            }
        }
    }

    /// Convert conversation history into API request messages.
    fn build_request_messages(
        &self,
        history: &[ChatMessage],
    ) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()
                .map_err(|e| FinnError::Agent(e.to_string()))?
                .into(),
        ];

        for message in history {
            match message.role {
                Role::User => messages.push(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(message.content.clone())
                        .build()
                        .map_err(|e| FinnError::Agent(e.to_string()))?
                        .into(),
                ),
                Role::Assistant => messages.push(
                    ChatCompletionRequestAssistantMessageArgs::default()
                        .content(message.content.clone())
                        .build()
                        .map_err(|e| FinnError::Agent(e.to_string()))?
                        .into(),
                ),
            }
        }

        Ok(messages)
    }

    /// Execute a single tool call and return a record of it.
    async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> ToolCallRecord {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Agent calling tool: {} with args: {}", name, arguments);

        // Parse and execute the tool
        let result = match parse_tool_call(name, arguments) {
            Ok(tool) => match self.tools.execute(&tool).await {
                Ok(output) => output,
                Err(e) => format!("Tool error: {}", e),
            },
            Err(e) => format!("Failed to parse tool call: {}", e),
        };

        ToolCallRecord {
            name: name.clone(),
            arguments: arguments.clone(),
            result,
        }
    }

    /// Build the final agent response.
    fn build_response(
        &self,
        content: &Option<String>,
        tool_calls: Vec<ToolCallRecord>,
        iterations: usize,
    ) -> Result<AgentResponse> {
        let content = content.clone().unwrap_or_default();

        Ok(AgentResponse {
            content,
            tool_calls,
            iterations,
        })
    }
}

#[async_trait]
impl Assistant for Agent {
    async fn reply(&self, history: &[ChatMessage]) -> Result<String> {
        let response = self.run(history).await?;
        if !response.tool_calls.is_empty() {
            info!(
                "Answered using {} tool call(s): {}",
                response.tool_calls.len(),
                response
                    .tool_calls
                    .iter()
                    .map(|r| r.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Ok(response.content)
    }
}

/// Response from an agent run.
#[derive(Debug)]
pub struct AgentResponse {
    /// The final response content from the agent.
    pub content: String,
    /// Record of all tool calls made during execution.
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of iterations (LLM calls) used.
    pub iterations: usize,
}

/// Record of a tool call made by the agent.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    /// Name of the tool called.
    pub name: String,
    /// JSON arguments passed to the tool.
    pub arguments: String,
    /// Result returned by the tool.
    pub result: String,
}

impl std::fmt::Display for ToolCallRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_call_record_display() {
        let record = ToolCallRecord {
            name: "search".to_string(),
            arguments: r#"{"query": "test"}"#.to_string(),
            result: "Found results".to_string(),
        };
        assert_eq!(format!("{}", record), r#"search({"query": "test"})"#);
    }

    #[test]
    fn test_build_request_messages_prepends_system_prompt() {
        let client = crate::groq::create_client("gsk-test", crate::groq::DEFAULT_API_BASE);
        let tools = ToolContext::new(&crate::config::ToolSettings::default());
        let agent = Agent::new(client, tools, "llama3-8b-8192").with_system_prompt("be brief");

        let history = vec![
            ChatMessage::assistant("Hi! How can I help?"),
            ChatMessage::user("what is rust?"),
        ];

        let messages = agent.build_request_messages(&history).unwrap();
        // system prompt + greeting + user turn
        assert_eq!(messages.len(), 3);
        assert!(matches!(
            messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            messages[2],
            ChatCompletionRequestMessage::User(_)
        ));
    }
}
