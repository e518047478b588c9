//! Tool catalogue and dispatch
//! Shared by the REST tool endpoints, the /call handshake, and the JSON-RPC MCP endpoint

use axum::http::StatusCode;
use brewery_core::{
    build_report, extract_state, fetch_breweries, generate_answer, top_breweries, BreweryReport,
    FetchError, REPORT_PAGE_SIZE, TOP_BREWERIES_LIMIT,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::app::AppState;

pub const SEARCH_TOOL: &str = "state_brewery_search";
pub const REPORT_TOOL: &str = "state_brewery_report";
pub const TOP_BREWERIES_TOOL: &str = "top_breweries";

/// Tool Definition
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tools List Response
#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolDefinition>,
}

/// Capability descriptor returned to the /call handshake
#[derive(Debug, Serialize)]
pub struct HandshakeResponse {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl From<ToolDefinition> for HandshakeResponse {
    fn from(tool: ToolDefinition) -> Self {
        Self {
            name: tool.name,
            description: tool.description,
            input_schema: tool.input_schema,
        }
    }
}

pub fn search_tool() -> ToolDefinition {
    ToolDefinition {
        name: SEARCH_TOOL.to_string(),
        description: "Answer questions about breweries in any U.S. state".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": "string",
                    "description": "A natural language query mentioning a U.S. state"
                }
            },
            "required": ["input"]
        }),
    }
}

pub fn report_tool() -> ToolDefinition {
    ToolDefinition {
        name: REPORT_TOOL.to_string(),
        description: "Get a complete list and count of all breweries in a U.S. state, with a breakdown by brewery type".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "state": {
                    "type": "string",
                    "description": "U.S. state name (e.g., California)"
                }
            },
            "required": ["state"]
        }),
    }
}

pub fn top_breweries_tool() -> ToolDefinition {
    ToolDefinition {
        name: TOP_BREWERIES_TOOL.to_string(),
        description: "List the first few breweries in the U.S. state mentioned in the query".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "A query mentioning a U.S. state (e.g., Find breweries in Oregon)"
                },
                "limit": {
                    "type": "integer",
                    "description": "How many breweries to list (optional, default 5)"
                }
            },
            "required": ["query"]
        }),
    }
}

pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![search_tool(), report_tool(), top_breweries_tool()]
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool '{0}' not found")]
    UnknownTool(String),

    #[error("Missing required field: '{0}'")]
    MissingArgument(&'static str),

    #[error("Please mention a U.S. state in your request.")]
    MissingState,

    #[error("Error retrieving data: {0}")]
    Upstream(#[from] FetchError),

    #[error("Failed to encode tool result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ToolError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
            ToolError::MissingArgument(_) | ToolError::MissingState => StatusCode::BAD_REQUEST,
            ToolError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ToolError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Full report for the state named in free text
pub async fn brewery_report(app: &AppState, text: &str) -> Result<BreweryReport, ToolError> {
    let state = extract_state(text).ok_or(ToolError::MissingState)?;
    let breweries = fetch_breweries(app.directory.as_ref(), &state, &app.report_options).await?;
    Ok(build_report(&state, breweries))
}

/// Run a tool by name and return its text result
pub async fn call_tool(
    app: &AppState,
    name: &str,
    args: &Map<String, Value>,
) -> Result<String, ToolError> {
    tracing::info!("[TOOL] Calling {}", name);

    match name {
        SEARCH_TOOL => {
            let query = string_arg(args, &["input", "query"]).unwrap_or_default();
            Ok(generate_answer(app.directory.as_ref(), &app.query_options, query).await)
        }
        REPORT_TOOL => {
            let text = string_arg(args, &["state"]).ok_or(ToolError::MissingArgument("state"))?;
            let report = brewery_report(app, text).await?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
        TOP_BREWERIES_TOOL => {
            let query = string_arg(args, &["query", "input"])
                .ok_or(ToolError::MissingArgument("query"))?;
            let limit = limit_arg(args);
            let state = extract_state(query).ok_or(ToolError::MissingState)?;
            Ok(top_breweries(app.directory.as_ref(), &state, limit).await?)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

/// `limit` for the top listing: defaults when absent or zero, capped at one report page
fn limit_arg(args: &Map<String, Value>) -> u32 {
    args.get("limit")
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .map(|n| n.min(u64::from(REPORT_PAGE_SIZE)) as u32)
        .unwrap_or(TOP_BREWERIES_LIMIT)
}

/// First present string argument among the given names
fn string_arg<'a>(args: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| args.get(*name).and_then(Value::as_str))
}
