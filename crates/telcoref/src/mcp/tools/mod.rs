mod catalog;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{to_result, AppState, JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<EmptyCapability>,
    pub resources: Option<EmptyCapability>,
    pub prompts: Option<EmptyCapability>,
}

#[derive(Debug, Serialize)]
pub struct EmptyCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: None,
        }
    }

    /// A failed call the client should show to the user, not a protocol error.
    pub fn error(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: Some(true),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(EmptyCapability {}),
            resources: Some(EmptyCapability {}),
            prompts: Some(EmptyCapability {}),
        },
        server_info: ServerInfo {
            name: "telcoref".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    to_result(result)
}

fn response_format_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": "Output format: markdown for reading, json for further processing (default: markdown)",
        "enum": ["markdown", "json"]
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "search_apis".to_string(),
            description: "Search the telecom network API catalog by keyword, category and status. Results are ranked by relevance (name, slug, category, industries, description and use cases) and paginated with limit/offset. Without a query every API matching the filters is returned in name order.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Keywords to match, e.g. 'fraud' or 'location' (max 200 characters)",
                        "maxLength": 200
                    },
                    "category": {
                        "type": "string",
                        "description": "Restrict results to one category",
                        "enum": ["auth-fraud", "location", "connectivity", "device", "communication", "payments", "network-insights", "edge"]
                    },
                    "status": {
                        "type": "string",
                        "description": "Restrict results to stable or initial APIs",
                        "enum": ["stable", "initial"]
                    },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of results to return (default: 20, max: 100)",
                        "minimum": 1,
                        "maximum": 100
                    },
                    "offset": {
                        "type": "number",
                        "description": "Number of results to skip (default: 0). Use next_offset from the previous page.",
                        "minimum": 0
                    },
                    "response_format": response_format_schema()
                },
                "required": []
            }),
        },
        Tool {
            name: "get_api_details".to_string(),
            description: "Get the full reference for a stable API: versions, authentication flow, HTTP methods, key endpoints, use cases, industries and documentation links. Only stable APIs have details.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "slug": {
                        "type": "string",
                        "description": "API slug, e.g. 'sim-swap'"
                    },
                    "response_format": response_format_schema()
                },
                "required": ["slug"]
            }),
        },
        Tool {
            name: "list_categories".to_string(),
            description: "List the eight API categories with every API in each, stable APIs first.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "response_format": response_format_schema()
                },
                "required": []
            }),
        },
        Tool {
            name: "compare_apis".to_string(),
            description: "Compare 2 to 5 stable APIs side by side: version, category, authentication, HTTP methods, main industries and endpoint count. Unknown slugs are skipped; at least 2 must resolve.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "slugs": {
                        "type": "array",
                        "description": "Slugs of the APIs to compare, in display order",
                        "items": { "type": "string" },
                        "minItems": 2,
                        "maxItems": 5
                    },
                    "response_format": response_format_schema()
                },
                "required": ["slugs"]
            }),
        },
        Tool {
            name: "get_use_cases".to_string(),
            description: "List stable API use cases grouped by industry. Optionally filter industries by a case-insensitive substring.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "industry": {
                        "type": "string",
                        "description": "Industry filter, e.g. 'banking'"
                    },
                    "response_format": response_format_schema()
                },
                "required": []
            }),
        },
        Tool {
            name: "generate_code_snippet".to_string(),
            description: "Generate boilerplate client code for a stable API: token acquisition for its authentication flow followed by a call to its first key endpoint.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "slug": {
                        "type": "string",
                        "description": "API slug, e.g. 'quality-on-demand'"
                    },
                    "language": {
                        "type": "string",
                        "description": "Snippet language",
                        "enum": ["javascript", "python", "curl"]
                    }
                },
                "required": ["slug", "language"]
            }),
        },
    ];

    to_result(ToolsList { tools })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "search_apis" => catalog::handle_search_apis(params.arguments, state),
        "get_api_details" => catalog::handle_get_api_details(params.arguments, state),
        "list_categories" => catalog::handle_list_categories(params.arguments, state),
        "compare_apis" => catalog::handle_compare_apis(params.arguments, state),
        "get_use_cases" => catalog::handle_get_use_cases(params.arguments, state),
        "generate_code_snippet" => catalog::handle_generate_code_snippet(params.arguments, state),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
