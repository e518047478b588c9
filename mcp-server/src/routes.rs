//! HTTP handlers for the query boundary and the REST tool endpoints

use axum::{
    body::Bytes,
    extract::{Extension, Json},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use brewery_core::{generate_answer, BreweryReport};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::AppError;
use crate::tools::{self, HandshakeResponse, ToolsResponse};

pub const HANDSHAKE_HEADER: &str = "x-mcp-handshake";

/// /call request body
#[derive(Debug, Deserialize)]
pub struct CallRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct CallResponse {
    pub output: String,
}

/// /mcp/search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub answer: String,
}

/// State Report Tool Request
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub state: String,
}

/// Standard Tool Response
#[derive(Debug, Serialize)]
pub struct ToolResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ToolResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

fn tool_error(error: String) -> ToolResponse<()> {
    ToolResponse {
        success: false,
        data: None,
        error: Some(error),
    }
}

/// Liveness check
pub async fn health() -> Json<Value> {
    tracing::info!("[HEALTH] Test endpoint hit");
    Json(json!({"status": "ok", "message": "MCP server is running correctly"}))
}

/// MCP-style tool call with handshake support.
/// The body is only parsed for real calls, so a handshake may arrive without one.
pub async fn call_tool(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    tracing::info!("[CALL] Received request to /call endpoint");

    if is_handshake(&headers) {
        tracing::info!("[CALL] Responding to handshake request");
        let descriptor = HandshakeResponse::from(tools::search_tool());
        return Ok(Json(descriptor).into_response());
    }

    let request: CallRequest = serde_json::from_slice(&body)?;
    tracing::info!("[CALL] Processing query: {}", request.input);

    let output =
        generate_answer(state.directory.as_ref(), &state.query_options, &request.input).await;
    tracing::info!("[CALL] Generated result: {}", output);

    Ok(Json(CallResponse { output }).into_response())
}

/// Plain question/answer endpoint
pub async fn search(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<SearchResponse>, AppError> {
    let request: SearchRequest = serde_json::from_slice(&body)?;
    tracing::info!("[SEARCH] Query: {}", request.query);

    let answer =
        generate_answer(state.directory.as_ref(), &state.query_options, &request.query).await;
    tracing::info!("[SEARCH] Result: {}", answer);

    Ok(Json(SearchResponse { answer }))
}

/// List all available tools
pub async fn list_tools() -> Json<ToolsResponse> {
    tracing::info!("[LIST TOOLS] Received request to list available tools");
    Json(ToolsResponse {
        tools: tools::tool_definitions(),
    })
}

/// Full brewery report for one state
pub async fn state_brewery_report(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<ToolResponse<BreweryReport>>, (StatusCode, Json<ToolResponse<()>>)> {
    let req: ReportRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("[STATE-REPORT] Invalid request body: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(tool_error(format!("Invalid request body: {}", e))),
        )
    })?;
    tracing::info!("[STATE-REPORT] Tool call received: state={}", req.state);

    if req.state.trim().is_empty() {
        tracing::warn!("[STATE-REPORT] Validation failed: state is missing");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(tool_error(
                "Missing required field: 'state' (U.S. state name, e.g., California)".to_string(),
            )),
        ));
    }

    match tools::brewery_report(&state, &req.state).await {
        Ok(report) => {
            tracing::info!(
                "[STATE-REPORT] {} breweries in {}",
                report.total_breweries,
                report.state
            );
            Ok(Json(ToolResponse::ok(report)))
        }
        Err(e) => {
            tracing::warn!("[STATE-REPORT] Failed: {}", e);
            Err((e.status_code(), Json(tool_error(e.to_string()))))
        }
    }
}

fn is_handshake(headers: &HeaderMap) -> bool {
    headers
        .get(HANDSHAKE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn handshake_header_must_be_exactly_true() {
        let mut headers = HeaderMap::new();
        assert!(!is_handshake(&headers));

        headers.insert(HANDSHAKE_HEADER, HeaderValue::from_static("TRUE"));
        assert!(!is_handshake(&headers));

        headers.insert(HANDSHAKE_HEADER, HeaderValue::from_static("true"));
        assert!(is_handshake(&headers));
    }

    #[test]
    fn missing_input_defaults_to_empty() {
        let request: CallRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.input, "");
    }
}
