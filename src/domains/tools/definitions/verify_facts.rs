//! Fact verification tool definition.
//!
//! Takes two competing factual statements, loads the reference dataset,
//! and reports which statement the dataset supports. The response text is
//! exactly `"fact1"`, `"fact2"`, or `"No match found"`; dataset-load
//! failures come back as tool-level errors.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::facts::{FactStore, FileFactStore, MatchResult, Query, verify};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the fact verification tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VerifyFactsParams {
    /// The first factual statement.
    #[schemars(description = "First factual statement to check")]
    pub fact1: String,

    /// The second, competing factual statement.
    #[schemars(description = "Second factual statement to check")]
    pub fact2: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Fact verification tool - decides which of two claims the dataset supports.
pub struct VerifyFactsTool;

impl VerifyFactsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "verify_facts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Verify two competing factual statements against the reference dataset. Returns 'fact1' or 'fact2' naming the correct statement, or 'No match found' when the dataset has no sufficiently similar entry.";

    /// Execute the tool logic.
    ///
    /// The dataset is read fresh on every call; each invocation is
    /// independent and stateless.
    #[instrument(skip_all)]
    pub async fn execute(params: &VerifyFactsParams, config: &Config) -> CallToolResult {
        info!("Verifying facts: {:?} vs {:?}", params.fact1, params.fact2);

        let store = FileFactStore::new(&config.facts.dataset_path);
        let dataset = match store.load().await {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("Dataset load failed: {}", e);
                return CallToolResult::error(vec![Content::text(format!(
                    "Error loading facts dataset: {}",
                    e
                ))]);
            }
        };

        let query = Query::new(params.fact1.clone(), params.fact2.clone());
        let result = verify(&query, &dataset, config.facts.similarity_threshold);

        match &result {
            MatchResult::Exact(designation) => {
                info!("Exact match, correct statement is {}", designation)
            }
            MatchResult::Approximate { designation, score } => {
                info!(
                    "Approximate match (score {:.3}), correct statement is {}",
                    score, designation
                )
            }
            MatchResult::NoMatch => info!("No matching record in the dataset"),
        }

        CallToolResult::success(vec![Content::text(result.response_text().to_string())])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<VerifyFactsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: VerifyFactsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
