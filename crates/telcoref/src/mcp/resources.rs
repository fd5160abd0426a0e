use crate::prelude::eprintln;
use serde::{Deserialize, Serialize};
use telcoref_core::resources::{
    list_resources, read_resource, ResourceDescriptor, ResourceError, JSON_MIME_TYPE,
};

use super::{to_result, AppState, JsonRpcError, RESOURCE_NOT_FOUND};

#[derive(Debug, Serialize)]
struct ResourcesList {
    resources: Vec<ResourceDescriptor>,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceContents {
    uri: String,
    mime_type: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
struct ReadResourceResult {
    contents: Vec<ResourceContents>,
}

pub fn handle_resources_list(state: &AppState) -> Result<serde_json::Value, JsonRpcError> {
    to_result(ResourcesList {
        resources: list_resources(&state.catalog),
    })
}

pub fn handle_resources_read(
    params: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: ReadResourceParams =
        serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    if state.global.verbose {
        eprintln!("Reading resource: {}", params.uri);
    }

    let text = read_resource(&state.catalog, &params.uri).map_err(|e| match e {
        ResourceError::NotFound(_) => JsonRpcError {
            code: RESOURCE_NOT_FOUND,
            message: e.to_string(),
            data: Some(serde_json::json!({ "uri": params.uri })),
        },
        ResourceError::Serialize { .. } => JsonRpcError::internal(e),
    })?;

    to_result(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: params.uri,
            mime_type: JSON_MIME_TYPE,
            text,
        }],
    })
}
