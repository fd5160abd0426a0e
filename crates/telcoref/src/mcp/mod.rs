mod cli;
mod prompts;
mod resources;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use telcoref_core::catalog::Catalog;

// JSON-RPC 2.0 error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
// MCP extension
pub const RESOURCE_NOT_FOUND: i32 = -32002;

/// Everything a request handler can read. Shared behind an `Arc` by the
/// HTTP transport.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub global: crate::Global,
}

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: message.into(),
            data: None,
        }
    }

    pub fn internal(e: impl std::fmt::Display) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: format!("Internal error: {e}"),
            data: None,
        }
    }
}

/// Serialize a handler result into the JSON-RPC `result` slot.
pub fn to_result<T: Serialize>(value: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(JsonRpcError::internal)
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

pub async fn run(app: App, global: crate::Global, catalog: Catalog) -> Result<()> {
    let state = AppState { catalog, global };

    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(state).await,
        cli::Commands::Sse(options) => sse::run_sse(options, state).await,
    }
}

/// Handle one JSON-RPC message. Notifications produce no response.
pub async fn handle_request(request_str: &str, state: &AppState) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            log::warn!("rejecting malformed request: {e}");
            return Some(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: PARSE_ERROR,
                    message: format!("Parse error: {e}"),
                    data: None,
                }),
            });
        }
    };

    log::debug!("{} (id: {:?})", request.method, request.id);

    if request.method.starts_with("notifications/") {
        return None;
    }

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, state).await,
        "resources/list" => resources::handle_resources_list(state),
        "resources/read" => resources::handle_resources_read(request.params, state),
        "prompts/list" => prompts::handle_prompts_list(),
        "prompts/get" => prompts::handle_prompts_get(request.params, state),
        method => Err(JsonRpcError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
            data: None,
        }),
    };

    let response = match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => {
            log::debug!("{} failed: {} {}", request.method, error.code, error.message);
            JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id,
                result: None,
                error: Some(error),
            }
        }
    };

    Some(response)
}
