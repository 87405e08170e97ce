//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text metrics over MCP on stdio so editors and assistants can
//! ask for counts, frequencies, and scores without shelling out.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use, and each `#[tool]` method delegates to
//! `wordmeter_core` rather than computing anything itself.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use wordmeter_core::{
    Config, ReportOptions, TextReport, frequency, limits, markdown, metrics, passive, search,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Convert markdown to plain text before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Reading speed in words per minute (defaults to the configured speed).
    pub words_per_minute: Option<f64>,
    /// Number of top words to include.
    pub top_words: Option<usize>,
    /// Leave stop words out of the top words.
    pub exclude_stop_words: Option<bool>,
}

/// Parameters for the `word_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequencyParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum number of entries to return.
    pub limit: Option<usize>,
    /// Leave stop words out of the table.
    pub exclude_stop_words: Option<bool>,
}

/// Parameters for the `search_words` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchWordsParams {
    /// The text whose words are searched.
    pub text: String,
    /// Query; `*` and `?` act as wildcards, near misses match fuzzily.
    pub query: String,
    /// Maximum number of results.
    pub limit: Option<usize>,
}

/// Parameters for the `reading_time` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ReadingTimeParams {
    /// The text to measure.
    pub text: String,
    /// Reading speed in words per minute.
    pub words_per_minute: Option<f64>,
}

/// Parameters for the `passive_voice` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PassiveVoiceParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum acceptable passive voice percentage (0-100).
    pub passive_max: Option<f64>,
}

/// Parameters for the `check_limits` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckLimitsParams {
    /// The text to check.
    pub text: String,
}

#[derive(Serialize)]
struct ReadingTimeResult {
    words: usize,
    words_per_minute: f64,
    minutes: f64,
    readable: String,
}

/// MCP server exposing text metrics.
#[derive(Clone)]
pub struct ProjectServer {
    config: Config,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a server that uses `config` for defaults and the input limit.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        if let Some(max) = self.config.input_limit()
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        Ok(())
    }

    fn usable_wpm(&self, requested: Option<f64>) -> Result<f64, McpError> {
        let wpm = requested.unwrap_or(self.config.words_per_minute);
        if wpm > 0.0 && wpm.is_finite() {
            Ok(wpm)
        } else {
            Err(McpError::invalid_params(
                format!("words_per_minute must be a positive number, got {wpm}"),
                None,
            ))
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            let info = serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            });
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full report for a text.
    #[tool(
        description = "Analyze text: character, word, sentence and paragraph counts, unique and top words, reading time, averages, passive voice, and readability."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let options = ReportOptions {
            words_per_minute: self.usable_wpm(params.words_per_minute)?,
            top_words: params.top_words.unwrap_or(self.config.top_words),
            exclude_stop_words: params
                .exclude_stop_words
                .unwrap_or(self.config.exclude_stop_words),
        };
        let text = if params.strip_markdown {
            markdown::to_plain_text(&params.text)
        } else {
            params.text
        };

        let report = TextReport::analyze(&text, &options);
        tracing::info!(tool = "analyze_text", words = report.words, "MCP tool completed");
        to_json(&report)
    }

    /// Word frequency table.
    #[tool(description = "Count how often each word occurs, most frequent first.")]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn word_frequency(
        &self,
        Parameters(params): Parameters<WordFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_frequency", limit = ?params.limit, "executing MCP tool");
        self.check_size(&params.text)?;

        let mut table = frequency::frequency(&params.text);
        if params
            .exclude_stop_words
            .unwrap_or(self.config.exclude_stop_words)
        {
            table = frequency::filter_stop_words(&table);
        }
        if let Some(limit) = params.limit {
            table.truncate(limit);
        }

        to_json(&table)
    }

    /// Ranked word search.
    #[tool(
        description = "Search the words of a text. Ranks exact, prefix, substring, wildcard (* and ?), then fuzzy matches; ties go to the more frequent word."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", query = %params.query))]
    fn search_words(
        &self,
        Parameters(params): Parameters<SearchWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "search_words", query = %params.query, "executing MCP tool");
        self.check_size(&params.text)?;

        let table = frequency::frequency(&params.text);
        let results = search::search(
            &params.query,
            &table,
            params.limit.unwrap_or(self.config.search_limit),
        );

        tracing::info!(tool = "search_words", results = results.len(), "MCP tool completed");
        to_json(&results)
    }

    /// Reading time estimate.
    #[tool(description = "Estimate reading time for a text at a given words-per-minute speed.")]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn reading_time(
        &self,
        Parameters(params): Parameters<ReadingTimeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "reading_time",
            wpm = ?params.words_per_minute,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let wpm = self.usable_wpm(params.words_per_minute)?;
        to_json(&ReadingTimeResult {
            words: wordmeter_core::text::word_count(&params.text),
            words_per_minute: wpm,
            minutes: metrics::reading_time_minutes(&params.text, wpm),
            readable: metrics::reading_time_readable(&params.text, wpm),
        })
    }

    /// Passive voice report.
    #[tool(
        description = "Detect passive voice. Returns the percentage of passive sentences, a qualitative band, and the flagged sentences."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn passive_voice(
        &self,
        Parameters(params): Parameters<PassiveVoiceParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "passive_voice",
            passive_max = ?params.passive_max,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let passive_max = params.passive_max.or(self.config.passive_max_percent);
        let report = passive::check_passive_voice(&params.text, passive_max);

        tracing::info!(
            tool = "passive_voice",
            percentage = report.percentage,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Platform character limits.
    #[tool(
        description = "Compare text length against platform character limits (X, Bluesky, SMS, meta description, and more)."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn check_limits(
        &self,
        Parameters(params): Parameters<CheckLimitsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_limits", "executing MCP tool");
        self.check_size(&params.text)?;

        let usage = limits::check_limits(&params.text, Some(&self.config.platform_limits));
        to_json(&usage)
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use the tools to measure text: counts, word frequency, \
                 search, reading time, passive voice, readability, and platform limits.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const SAMPLE: &str = "The report was written by the team. The team celebrated.";

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn extract_json(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = extract_json(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn analyze_text_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: SAMPLE.to_string(),
            strip_markdown: false,
            words_per_minute: None,
            top_words: Some(2),
            exclude_stop_words: None,
        });

        let result = server.analyze_text(params).expect("analyze_text should succeed");
        let json = extract_json(&result);
        assert_eq!(json["sentences"], 2);
        assert_eq!(json["top_words"][0]["word"], "the");
        assert_eq!(json["top_words"].as_array().unwrap().len(), 2);
        assert_eq!(json["passive_voice"]["percentage"], 50.0);
    }

    #[test]
    fn analyze_text_strips_markdown() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "# Title\n\n```\ncode here\n```\n\nBody.".to_string(),
            strip_markdown: true,
            words_per_minute: None,
            top_words: None,
            exclude_stop_words: None,
        });

        let json = extract_json(&server.analyze_text(params).unwrap());
        assert_eq!(json["words"], 2);
        assert_eq!(json["paragraphs"], 2);
    }

    #[test]
    fn analyze_text_rejects_bad_speed() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: SAMPLE.to_string(),
            strip_markdown: false,
            words_per_minute: Some(0.0),
            top_words: None,
            exclude_stop_words: None,
        });

        assert!(server.analyze_text(params).is_err());
    }

    #[test]
    fn word_frequency_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(WordFrequencyParams {
            text: SAMPLE.to_string(),
            limit: Some(1),
            exclude_stop_words: Some(true),
        });

        let json = extract_json(&server.word_frequency(params).unwrap());
        assert_eq!(json[0]["word"], "team");
        assert_eq!(json[0]["count"], 2);
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[test]
    fn search_words_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(SearchWordsParams {
            text: "cat cats hat cat".to_string(),
            query: "cat".to_string(),
            limit: None,
        });

        let json = extract_json(&server.search_words(params).unwrap());
        let words: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["word"].as_str().unwrap())
            .collect();
        assert_eq!(words, vec!["cat", "cats", "hat"]);
    }

    #[test]
    fn reading_time_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(ReadingTimeParams {
            text: "word ".repeat(125),
            words_per_minute: None,
        });

        let json = extract_json(&server.reading_time(params).unwrap());
        assert_eq!(json["words"], 125);
        assert_eq!(json["readable"], "0m 30s");
    }

    #[test]
    fn passive_voice_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(PassiveVoiceParams {
            text: SAMPLE.to_string(),
            passive_max: Some(10.0),
        });

        let json = extract_json(&server.passive_voice(params).unwrap());
        assert_eq!(json["passive_count"], 1);
        assert_eq!(json["over_max"], true);
        assert_eq!(json["band"], "excessive");
    }

    #[test]
    fn check_limits_tool_uses_configured_limits() {
        let mut config = Config::default();
        config.platform_limits.insert("tagline".to_string(), 10);
        let server = ProjectServer::with_config(config);
        let params = Parameters(CheckLimitsParams {
            text: "hello world!".to_string(),
        });

        let json = extract_json(&server.check_limits(params).unwrap());
        let tagline = json
            .as_array()
            .unwrap()
            .iter()
            .find(|u| u["name"] == "tagline")
            .expect("configured platform reported");
        assert_eq!(tagline["over"], true);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let config = Config {
            max_input_bytes: Some(8),
            ..Config::default()
        };
        let server = ProjectServer::with_config(config);
        let params = Parameters(CheckLimitsParams {
            text: "more than eight bytes".to_string(),
        });

        assert!(server.check_limits(params).is_err());
    }
}
