//! Agent system for answering questions with tool calling.
//!
//! Provides an LLM agent that can use web search, arXiv paper lookup, and
//! Wikipedia lookup to ground its answers in retrieved sources.

mod runner;
mod tools;

pub use runner::{Agent, AgentResponse, ToolCallRecord};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};
