use std::collections::BTreeMap;

use crate::prelude::eprintln;
use serde::{Deserialize, Serialize};
use telcoref_core::prompts::{prompt_definitions, render_prompt, PromptDefinition};

use super::tools::Content;
use super::{to_result, AppState, JsonRpcError};

#[derive(Debug, Serialize)]
struct PromptsList {
    prompts: Vec<PromptDefinition>,
}

#[derive(Debug, Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct PromptMessage {
    role: &'static str,
    content: Content,
}

#[derive(Debug, Serialize)]
struct GetPromptResult {
    description: String,
    messages: Vec<PromptMessage>,
}

pub fn handle_prompts_list() -> Result<serde_json::Value, JsonRpcError> {
    to_result(PromptsList {
        prompts: prompt_definitions(),
    })
}

pub fn handle_prompts_get(
    params: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: GetPromptParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    if state.global.verbose {
        eprintln!(
            "Getting prompt: name={}, arguments={:?}",
            params.name, params.arguments
        );
    }

    let prompt = render_prompt(&state.catalog, &params.name, &params.arguments)
        .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;

    to_result(GetPromptResult {
        description: prompt.description,
        messages: vec![PromptMessage {
            role: "user",
            content: Content::Text { text: prompt.text },
        }],
    })
}
