//! JSON-RPC 2.0 MCP endpoint: initialize, tools/list, tools/call

use axum::{
    body::Bytes,
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::app::AppState;
use crate::error::AppError;
use crate::tools::{self, ToolError};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_PARAMS: i32 = -32602;
const METHOD_NOT_FOUND: i32 = -32601;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// MCP Initialize Response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitializeResult {
    protocol_version: String,
    capabilities: Value,
    server_info: Value,
}

/// MCP Tool Call Response
#[derive(Debug, Serialize)]
struct ToolCallResult {
    content: Vec<Value>,
    #[serde(rename = "isError")]
    is_error: bool,
}

type McpReply = Result<Json<McpResponse>, (StatusCode, Json<McpResponse>)>;

fn success(id: Option<Value>, result: Value) -> McpReply {
    Ok(Json(McpResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: Some(result),
        error: None,
    }))
}

fn failure(status: StatusCode, id: Option<Value>, code: i32, message: impl Into<String>) -> McpReply {
    Err((
        status,
        Json(McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code,
                message: message.into(),
                data: None,
            }),
        }),
    ))
}

fn text_content(text: String, is_error: bool) -> Value {
    json!(ToolCallResult {
        content: vec![json!({"type": "text", "text": text})],
        is_error,
    })
}

/// Handle MCP protocol requests. A body that is not a JSON-RPC request is rendered as `{"error"}`.
pub async fn handle_mcp(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: McpRequest = serde_json::from_slice(&body)?;
    Ok(dispatch(&state, req).await.into_response())
}

async fn dispatch(state: &AppState, req: McpRequest) -> McpReply {
    tracing::info!("[MCP] Received request: method={}, id={:?}", req.method, req.id);

    match req.method.as_str() {
        "initialize" => {
            let result = InitializeResult {
                protocol_version: PROTOCOL_VERSION.to_string(),
                capabilities: json!({ "tools": {} }),
                server_info: json!({
                    "name": "brewery-mcp-server",
                    "version": env!("CARGO_PKG_VERSION")
                }),
            };
            success(req.id, json!(result))
        }

        "tools/list" => success(req.id, json!({ "tools": tools::tool_definitions() })),

        "tools/call" => {
            let Some(params) = req.params.as_ref() else {
                return failure(StatusCode::BAD_REQUEST, req.id, INVALID_PARAMS, "Invalid params");
            };

            let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
                return failure(
                    StatusCode::BAD_REQUEST,
                    req.id,
                    INVALID_PARAMS,
                    "Tool name required",
                );
            };

            let empty = Map::new();
            let tool_args = match params.get("arguments") {
                None | Some(Value::Null) => &empty,
                Some(Value::Object(args)) => args,
                Some(_) => {
                    return failure(
                        StatusCode::BAD_REQUEST,
                        req.id,
                        INVALID_PARAMS,
                        "Tool arguments must be an object",
                    );
                }
            };

            match tools::call_tool(state, tool_name, tool_args).await {
                Ok(text) => success(req.id, text_content(text, false)),
                Err(ToolError::UnknownTool(name)) => failure(
                    StatusCode::NOT_FOUND,
                    req.id,
                    METHOD_NOT_FOUND,
                    format!("Tool '{}' not found", name),
                ),
                Err(ToolError::MissingArgument(field)) => failure(
                    StatusCode::BAD_REQUEST,
                    req.id,
                    INVALID_PARAMS,
                    format!("Missing required field: '{}'", field),
                ),
                // Tool-level failures are reported in the result so the agent can read them
                Err(e) => {
                    tracing::warn!("[MCP] Tool {} failed: {}", tool_name, e);
                    success(req.id, text_content(e.to_string(), true))
                }
            }
        }

        other => failure(
            StatusCode::METHOD_NOT_ALLOWED,
            req.id,
            METHOD_NOT_FOUND,
            format!("Method '{}' not found", other),
        ),
    }
}
