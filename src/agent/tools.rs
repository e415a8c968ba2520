//! Tool definitions and implementations for the agent system.

use crate::config::ToolSettings;
use crate::error::{FinnError, Result};
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum web search results included in a tool response.
const MAX_SEARCH_RESULTS: usize = 5;

/// Timeout for lookup requests.
const LOOKUP_TIMEOUT_SECS: u64 = 20;

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Search the web.
    Search { query: String },

    /// Look up academic papers on arXiv.
    PaperLookup { query: String },

    /// Look up an encyclopedia entry on Wikipedia.
    WikiLookup { query: String },
}

/// A parsed web search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
}

/// A parsed arXiv entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperEntry {
    pub title: String,
    pub published: String,
    pub summary: String,
}

/// Tool execution context with the HTTP client and lookup caps.
pub struct ToolContext {
    http: reqwest::Client,
    top_k_results: usize,
    doc_content_chars_max: usize,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(settings: &ToolSettings) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .user_agent("Mozilla/5.0 (compatible; finn/0.1)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            top_k_results: settings.top_k_results,
            doc_content_chars_max: settings.doc_content_chars_max,
        }
    }

    /// Execute a tool call and return the result as a string.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::Search { query } => self.execute_search(query).await,
            ToolCall::PaperLookup { query } => self.execute_paper_lookup(query).await,
            ToolCall::WikiLookup { query } => self.execute_wiki_lookup(query).await,
        }
    }

    async fn execute_search(&self, query: &str) -> Result<String> {
        let response = self
            .http
            .get("https://html.duckduckgo.com/html/")
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FinnError::ToolFailed(format!("Web search failed: {}", e)))?;

        let body = response.text().await?;
        let hits = parse_search_results(&body, MAX_SEARCH_RESULTS);

        if hits.is_empty() {
            return Ok("No search results found.".to_string());
        }

        let formatted = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| format!("{}. {}\n   {}", i + 1, hit.title, hit.snippet))
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(format!("Found {} results:\n\n{}", hits.len(), formatted))
    }

    async fn execute_paper_lookup(&self, query: &str) -> Result<String> {
        let search_query = format!("all:{}", query);
        let max_results = self.top_k_results.to_string();
        let response = self
            .http
            .get("http://export.arxiv.org/api/query")
            .query(&[
                ("search_query", search_query.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FinnError::ToolFailed(format!("arXiv lookup failed: {}", e)))?;

        let body = response.text().await?;
        let entries = parse_paper_entries(&body, self.top_k_results);

        if entries.is_empty() {
            return Ok("No papers found.".to_string());
        }

        let formatted = entries
            .iter()
            .map(|entry| {
                format!(
                    "Published: {}\nTitle: {}\nSummary: {}",
                    entry.published,
                    entry.title,
                    truncate_chars(&entry.summary, self.doc_content_chars_max)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(formatted)
    }

    async fn execute_wiki_lookup(&self, query: &str) -> Result<String> {
        let limit = self.top_k_results.to_string();
        let response = self
            .http
            .get("https://en.wikipedia.org/w/api.php")
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("generator", "search"),
                ("gsrsearch", query),
                ("gsrlimit", limit.as_str()),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| FinnError::ToolFailed(format!("Wikipedia lookup failed: {}", e)))?;

        let json: serde_json::Value = response.json().await?;
        let pages = parse_wiki_pages(&json, self.top_k_results);

        if pages.is_empty() {
            return Ok("No encyclopedia entry found.".to_string());
        }

        let formatted = pages
            .iter()
            .map(|(title, extract)| {
                format!(
                    "Page: {}\nSummary: {}",
                    title,
                    truncate_chars(extract, self.doc_content_chars_max)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(formatted)
    }
}

/// Parse DuckDuckGo HTML results into title/snippet pairs.
pub fn parse_search_results(html: &str, limit: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let result_selector = Selector::parse("div.result").expect("Invalid selector");
    let title_selector = Selector::parse("a.result__a").expect("Invalid selector");
    let snippet_selector = Selector::parse(".result__snippet").expect("Invalid selector");

    document
        .select(&result_selector)
        .filter_map(|result| {
            let title = result
                .select(&title_selector)
                .next()
                .map(|e| collapse_whitespace(&e.text().collect::<String>()))?;
            let snippet = result
                .select(&snippet_selector)
                .next()
                .map(|e| collapse_whitespace(&e.text().collect::<String>()))
                .unwrap_or_default();

            if title.is_empty() {
                None
            } else {
                Some(SearchHit { title, snippet })
            }
        })
        .take(limit)
        .collect()
}

/// Parse arXiv Atom feed entries.
///
/// The feed is well-formed Atom; only the title, published date, and summary
/// of each entry are needed, so they are lifted with anchored patterns rather
/// than a full feed parser.
pub fn parse_paper_entries(xml: &str, limit: usize) -> Vec<PaperEntry> {
    let entry_re = Regex::new(r"(?s)<entry>(.*?)</entry>").expect("Invalid regex");
    let title_re = Regex::new(r"(?s)<title>(.*?)</title>").expect("Invalid regex");
    let published_re = Regex::new(r"<published>([^<]*)</published>").expect("Invalid regex");
    let summary_re = Regex::new(r"(?s)<summary>(.*?)</summary>").expect("Invalid regex");

    entry_re
        .captures_iter(xml)
        .take(limit)
        .filter_map(|entry| {
            let body = entry.get(1)?.as_str();
            let title = title_re
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| collapse_whitespace(&unescape_xml(m.as_str())))?;
            let published = published_re
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let summary = summary_re
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| collapse_whitespace(&unescape_xml(m.as_str())))
                .unwrap_or_default();

            Some(PaperEntry {
                title,
                published,
                summary,
            })
        })
        .collect()
}

/// Extract (title, intro extract) pairs from a MediaWiki query response.
pub fn parse_wiki_pages(json: &serde_json::Value, limit: usize) -> Vec<(String, String)> {
    let Some(pages) = json["query"]["pages"].as_object() else {
        return Vec::new();
    };

    let mut results: Vec<(u64, String, String)> = pages
        .values()
        .filter_map(|page| {
            let title = page["title"].as_str()?.to_string();
            let extract = page["extract"].as_str().unwrap_or_default().to_string();
            let index = page["index"].as_u64().unwrap_or(u64::MAX);
            Some((index, title, extract))
        })
        .collect();

    // Search relevance order, not JSON object order
    results.sort_by_key(|(index, _, _)| *index);

    results
        .into_iter()
        .take(limit)
        .map(|(_, title, extract)| (title, extract))
        .collect()
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

/// Collapse runs of whitespace into single spaces and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the standard XML entities.
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    let query_parameters = serde_json::json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "The search query"
            }
        },
        "required": ["query"]
    });

    vec![
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "search".to_string(),
                description: Some(
                    "Search the web for current information. \
                    Use this for news, facts, and general queries."
                        .to_string(),
                ),
                parameters: Some(query_parameters.clone()),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "paper_lookup".to_string(),
                description: Some(
                    "Look up academic papers on arXiv. \
                    Use this for scientific and technical topics."
                        .to_string(),
                ),
                parameters: Some(query_parameters.clone()),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "wiki_lookup".to_string(),
                description: Some(
                    "Look up an encyclopedia entry on Wikipedia. \
                    Use this for background on people, places, and concepts."
                        .to_string(),
                ),
                parameters: Some(query_parameters),
                strict: None,
            },
        },
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| FinnError::Agent(format!("Invalid tool arguments: {}", e)))?;

    let query = args["query"]
        .as_str()
        .ok_or_else(|| FinnError::Agent("Missing 'query' argument".to_string()))?
        .to_string();

    match name {
        "search" => Ok(ToolCall::Search { query }),
        "paper_lookup" => Ok(ToolCall::PaperLookup { query }),
        "wiki_lookup" => Ok(ToolCall::WikiLookup { query }),
        _ => Err(FinnError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_tool() {
        let tool = parse_tool_call("search", r#"{"query": "rust borrow checker"}"#).unwrap();
        match tool {
            ToolCall::Search { query } => assert_eq!(query, "rust borrow checker"),
            _ => panic!("Expected Search tool"),
        }
    }

    #[test]
    fn test_parse_paper_lookup_tool() {
        let tool = parse_tool_call("paper_lookup", r#"{"query": "attention is all you need"}"#)
            .unwrap();
        match tool {
            ToolCall::PaperLookup { query } => assert_eq!(query, "attention is all you need"),
            _ => panic!("Expected PaperLookup tool"),
        }
    }

    #[test]
    fn test_parse_unknown_tool_fails() {
        let err = parse_tool_call("read_file", r#"{"query": "x"}"#).unwrap_err();
        assert!(matches!(err, FinnError::Agent(_)));
    }

    #[test]
    fn test_parse_missing_query_fails() {
        let err = parse_tool_call("search", r#"{"q": "x"}"#).unwrap_err();
        assert!(matches!(err, FinnError::Agent(_)));
    }

    #[test]
    fn test_parse_search_results() {
        let html = r##"
        <html><body>
            <div class="result">
                <h2 class="result__title"><a class="result__a" href="#">Rust Language</a></h2>
                <a class="result__snippet">A language empowering   everyone.</a>
            </div>
            <div class="result">
                <h2 class="result__title"><a class="result__a" href="#">Rust Book</a></h2>
                <a class="result__snippet">Learn Rust.</a>
            </div>
        </body></html>"##;

        let hits = parse_search_results(html, 5);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Rust Language");
        assert_eq!(hits[0].snippet, "A language empowering everyone.");

        let limited = parse_search_results(html, 1);
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_parse_search_results_empty_page() {
        assert!(parse_search_results("<html><body></body></html>", 5).is_empty());
    }

    #[test]
    fn test_parse_paper_entries() {
        let xml = r#"<feed>
            <title>ArXiv Query Results</title>
            <entry>
                <title>Attention Is All
                You Need</title>
                <published>2017-06-12T17:57:34Z</published>
                <summary>The dominant sequence transduction models &amp; friends.</summary>
            </entry>
            <entry>
                <title>Second Paper</title>
                <published>2020-01-01T00:00:00Z</published>
                <summary>Another summary.</summary>
            </entry>
        </feed>"#;

        let entries = parse_paper_entries(xml, 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Attention Is All You Need");
        assert_eq!(entries[0].published, "2017-06-12T17:57:34Z");
        assert_eq!(
            entries[0].summary,
            "The dominant sequence transduction models & friends."
        );
    }

    #[test]
    fn test_parse_paper_entries_no_matches() {
        assert!(parse_paper_entries("<feed></feed>", 1).is_empty());
    }

    #[test]
    fn test_parse_wiki_pages_sorted_by_relevance() {
        let json = serde_json::json!({
            "query": {
                "pages": {
                    "123": {"title": "Less Relevant", "extract": "second", "index": 2},
                    "456": {"title": "Most Relevant", "extract": "first", "index": 1}
                }
            }
        });

        let pages = parse_wiki_pages(&json, 1);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, "Most Relevant");
        assert_eq!(pages[0].1, "first");
    }

    #[test]
    fn test_parse_wiki_pages_missing_query() {
        let json = serde_json::json!({"batchcomplete": ""});
        assert!(parse_wiki_pages(&json, 1).is_empty());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 200), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello");
        // Multi-byte characters are not split
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
