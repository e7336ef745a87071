//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes text formatting and readability scoring over stdio so editor
//! assistants can call them as tools.
//!
//! # Architecture
//!
//! The server is a presentation layer over `readease-core`, the same library
//! the CLI commands use. Each `#[tool]` method validates its input, calls one
//! core function and serializes the result.
//!
//! # Tools
//!
//! - `get_info`: package name, version and modes
//! - `format_text`: simplify then format text for a mode
//! - `score_readability`: Flesch Reading Ease snapshot of one text
//! - `compare_readability`: before/after/change report for two texts

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use readease_core::{Mode, Passthrough, Simplifier, metrics, modes, readability};

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

/// Parameters for the `format_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FormatTextParams {
    /// The text to format.
    pub text: String,
    /// Accessibility mode: "dyslexia", "adhd" or "autism".
    pub mode: Mode,
    /// Run the configured simplifier before formatting.
    #[serde(default = "default_simplify")]
    pub simplify: bool,
}

const fn default_simplify() -> bool {
    true
}

/// Parameters for the `score_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreReadabilityParams {
    /// The text to score.
    pub text: String,
}

/// Parameters for the `compare_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareReadabilityParams {
    /// The original text.
    pub before: String,
    /// The transformed text.
    pub after: String,
}

/// MCP server exposing formatting and scoring to AI assistants.
///
/// Holds the simplifier handle built at startup; tool calls borrow it.
#[derive(Clone)]
pub struct ProjectServer {
    simplifier: Arc<dyn Simplifier>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            Arc::new(Passthrough),
            Some(readease_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server around a simplifier and an input size limit.
    pub fn new(simplifier: Arc<dyn Simplifier>, max_input_bytes: Option<usize>) -> Self {
        Self {
            simplifier,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, field: &str, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("{field} is {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and available accessibility modes")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let modes: Vec<_> = [Mode::Dyslexia, Mode::Adhd, Mode::Autism]
            .into_iter()
            .map(|m| m.as_str())
            .collect();
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "modes": modes,
            "simplifier": self.simplifier.name(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}\nModes: {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                modes.join(", "),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Simplify and format text for an accessibility mode.
    #[tool(
        description = "Format text for an accessibility mode (dyslexia, adhd, autism). Dyslexia mode splits text into short single-idea lines with hyphenated long words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", mode = %params.mode))]
    async fn format_text(
        &self,
        Parameters(params): Parameters<FormatTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "format_text",
            simplify = params.simplify,
            "executing MCP tool"
        );
        self.check_size("text", &params.text)?;

        let output = if params.simplify {
            // Simplifiers may spawn a process and wait on it.
            let simplifier = Arc::clone(&self.simplifier);
            let FormatTextParams { text, mode, .. } = params;
            tokio::task::spawn_blocking(move || {
                modes::process_text(&text, mode, simplifier.as_ref())
            })
            .await
            .map_err(|e| McpError::internal_error(format!("simplifier task failed: {e}"), None))?
            .map_err(|e| McpError::internal_error(e.to_string(), None))?
        } else {
            modes::format_for_mode(params.mode, &params.text)
        };

        tracing::info!(
            tool = "format_text",
            output_len = output.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Score readability of text.
    #[tool(
        description = "Score readability of text. Returns word count, average sentence length and Flesch Reading Ease."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_readability(
        &self,
        Parameters(params): Parameters<ScoreReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_readability", "executing MCP tool");
        self.check_size("text", &params.text)?;

        let snapshot = readability::score(&params.text).rounded();
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "score_readability",
            flesch = snapshot.flesch_reading_ease,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Compare readability of two texts.
    #[tool(
        description = "Compare readability of an original and a transformed text. Returns before, after and change."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_readability(
        &self,
        Parameters(params): Parameters<CompareReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compare_readability", "executing MCP tool");
        self.check_size("before", &params.before)?;
        self.check_size("after", &params.after)?;

        let report = metrics::compare(&params.before, &params.after);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "compare_readability",
            word_change = report.change.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
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
                "{} MCP server. Use format_text to restructure text for reading accessibility \
                 and the readability tools to measure the result.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readease_core::{SimplifyError, SimplifyResult};
    use rmcp::model::RawContent;

    struct Upper;

    impl Simplifier for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn simplify(&self, text: &str) -> SimplifyResult<String> {
            Ok(text.to_uppercase())
        }
    }

    /// Blocks the calling thread on the runtime, which panics on an async worker.
    struct BlockingUpper;

    impl Simplifier for BlockingUpper {
        fn name(&self) -> &str {
            "blocking-upper"
        }

        fn simplify(&self, text: &str) -> SimplifyResult<String> {
            let text = text.to_string();
            Ok(tokio::runtime::Handle::current().block_on(async move { text.to_uppercase() }))
        }
    }

    struct Broken;

    impl Simplifier for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn simplify(&self, _text: &str) -> SimplifyResult<String> {
            Err(SimplifyError::InvalidUtf8 {
                program: "broken".to_string(),
            })
        }
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::default();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::default();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");

        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["modes"][0], "dyslexia");
        assert_eq!(json["simplifier"], "passthrough");
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::default();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("dyslexia, adhd, autism"));
    }

    #[tokio::test]
    async fn format_text_tool_restructures_for_dyslexia() {
        let server = ProjectServer::default();
        let params = Parameters(FormatTextParams {
            text: "The cat sat on the mat and the dog slept by the door.".to_string(),
            mode: Mode::Dyslexia,
            simplify: true,
        });

        let result = server.format_text(params).await.expect("format_text should succeed");
        assert_eq!(
            extract_text(&result),
            Some("The cat sat on the mat.\n\nThe dog slept by the door.")
        );
    }

    #[tokio::test]
    async fn format_text_tool_uses_the_simplifier() {
        let server = ProjectServer::new(Arc::new(Upper), None);
        let params = Parameters(FormatTextParams {
            text: "quiet words".to_string(),
            mode: Mode::Adhd,
            simplify: true,
        });
        let result = server.format_text(params).await.expect("format_text should succeed");
        assert_eq!(
            extract_text(&result),
            Some("[ADHD Mode - Formatting coming soon]\nQUIET WORDS")
        );

        let params = Parameters(FormatTextParams {
            text: "quiet words".to_string(),
            mode: Mode::Adhd,
            simplify: false,
        });
        let result = server.format_text(params).await.expect("format_text should succeed");
        assert_eq!(
            extract_text(&result),
            Some("[ADHD Mode - Formatting coming soon]\nquiet words")
        );
    }

    #[tokio::test]
    async fn format_text_tool_reports_simplifier_failure() {
        let server = ProjectServer::new(Arc::new(Broken), None);
        let params = Parameters(FormatTextParams {
            text: "Some text here.".to_string(),
            mode: Mode::Dyslexia,
            simplify: true,
        });
        assert!(server.format_text(params).await.is_err());
    }

    #[tokio::test]
    async fn format_text_tool_runs_simplifier_off_the_async_workers() {
        let server = ProjectServer::new(Arc::new(BlockingUpper), None);
        let params = Parameters(FormatTextParams {
            text: "quiet words".to_string(),
            mode: Mode::Autism,
            simplify: true,
        });
        let result = server.format_text(params).await.expect("format_text should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.ends_with("QUIET WORDS"), "{text}");
    }

    #[test]
    fn oversized_text_is_rejected() {
        let server = ProjectServer::new(Arc::new(Passthrough), Some(8));
        let params = Parameters(ScoreReadabilityParams {
            text: "The cat sat on the mat.".to_string(),
        });
        assert!(server.score_readability(params).is_err());
    }

    #[test]
    fn score_readability_tool_works() {
        let server = ProjectServer::default();
        let params = Parameters(ScoreReadabilityParams {
            text: "The cat sat on the mat.".to_string(),
        });

        let result = server
            .score_readability(params)
            .expect("score_readability should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["word_count"], 6);
        assert_eq!(json["flesch_reading_ease"].as_f64(), Some(116.15));
    }

    #[test]
    fn compare_readability_tool_works() {
        let server = ProjectServer::default();
        let params = Parameters(CompareReadabilityParams {
            before: "The cat sat on the mat. The dog ran.".to_string(),
            after: "Cats nap.".to_string(),
        });

        let result = server
            .compare_readability(params)
            .expect("compare_readability should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["change"]["word_count"], -7);
        assert_eq!(json["before"]["word_count"], 9);
    }
}
