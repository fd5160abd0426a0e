use crate::prelude::eprintln;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use telcoref_core::catalog::{Category, Status};
use telcoref_core::categories::list_categories;
use telcoref_core::lookup::{compare, find_api, MAX_COMPARE, MIN_COMPARE};
use telcoref_core::markdown::{
    format_api_detail, format_categories, format_comparison, format_search_page,
    format_use_cases,
};
use telcoref_core::output::{render, OutputFormat};
use telcoref_core::search::{search, SearchParams, DEFAULT_LIMIT, MAX_LIMIT, MAX_QUERY_LENGTH};
use telcoref_core::snippets::{generate_snippet, Language};
use telcoref_core::use_cases::use_cases_by_industry;

use super::{to_result, AppState, CallToolResult, JsonRpcError};

/// Deserialize tool arguments. Missing arguments are read as an empty object
/// so tools without required fields can be called bare.
fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = match arguments {
        None | Some(serde_json::Value::Null) => serde_json::json!({}),
        Some(value) => value,
    };

    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

fn rendered(text: Result<String, serde_json::Error>) -> Result<serde_json::Value, JsonRpcError> {
    let text = text.map_err(JsonRpcError::internal)?;
    to_result(CallToolResult::text(text))
}

fn tool_error(e: impl std::fmt::Display) -> Result<serde_json::Value, JsonRpcError> {
    to_result(CallToolResult::error(e.to_string()))
}

pub fn handle_search_apis(
    arguments: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchApisArgs {
        query: Option<String>,
        category: Option<Category>,
        status: Option<Status>,
        limit: Option<usize>,
        offset: Option<usize>,
        #[serde(default)]
        response_format: OutputFormat,
    }

    let args: SearchApisArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!(
            "Calling search_apis: query={:?}, category={:?}, status={:?}, limit={:?}, offset={:?}",
            args.query, args.category, args.status, args.limit, args.offset
        );
    }

    if let Some(query) = &args.query {
        if query.chars().count() > MAX_QUERY_LENGTH {
            return Err(JsonRpcError::invalid_params(format!(
                "Invalid arguments: query must be at most {MAX_QUERY_LENGTH} characters"
            )));
        }
    }

    let limit = args.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(JsonRpcError::invalid_params(format!(
            "Invalid arguments: limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let page = search(
        &state.catalog,
        &SearchParams {
            query: args.query,
            category: args.category,
            status: args.status,
            limit,
            offset: args.offset.unwrap_or(0),
        },
    );
    log::debug!("search_apis matched {} of {}", page.total, state.catalog.records().len());

    rendered(render(args.response_format, &page, format_search_page))
}

pub fn handle_get_api_details(
    arguments: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetApiDetailsArgs {
        slug: String,
        #[serde(default)]
        response_format: OutputFormat,
    }

    let args: GetApiDetailsArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling get_api_details: slug={}", args.slug);
    }

    match find_api(&state.catalog, &args.slug) {
        Ok(api) => rendered(render(args.response_format, api, format_api_detail)),
        Err(e) => tool_error(e),
    }
}

pub fn handle_list_categories(
    arguments: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ListCategoriesArgs {
        #[serde(default)]
        response_format: OutputFormat,
    }

    let args: ListCategoriesArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling list_categories");
    }

    let categories = list_categories(&state.catalog);
    rendered(render(
        args.response_format,
        categories.as_slice(),
        format_categories,
    ))
}

pub fn handle_compare_apis(
    arguments: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CompareApisArgs {
        slugs: Vec<String>,
        #[serde(default)]
        response_format: OutputFormat,
    }

    let args: CompareApisArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling compare_apis: slugs={:?}", args.slugs);
    }

    if !(MIN_COMPARE..=MAX_COMPARE).contains(&args.slugs.len()) {
        return Err(JsonRpcError::invalid_params(format!(
            "Invalid arguments: slugs must contain between {MIN_COMPARE} and {MAX_COMPARE} entries"
        )));
    }

    match compare(&state.catalog, &args.slugs) {
        Ok(comparison) => rendered(render(args.response_format, &comparison, format_comparison)),
        Err(e) => tool_error(e),
    }
}

pub fn handle_get_use_cases(
    arguments: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetUseCasesArgs {
        industry: Option<String>,
        #[serde(default)]
        response_format: OutputFormat,
    }

    let args: GetUseCasesArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!("Calling get_use_cases: industry={:?}", args.industry);
    }

    match use_cases_by_industry(&state.catalog, args.industry.as_deref()) {
        Ok(index) => rendered(render(args.response_format, &index, format_use_cases)),
        Err(e) => tool_error(e),
    }
}

pub fn handle_generate_code_snippet(
    arguments: Option<serde_json::Value>,
    state: &AppState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GenerateCodeSnippetArgs {
        slug: String,
        language: Language,
    }

    let args: GenerateCodeSnippetArgs = parse_arguments(arguments)?;

    if state.global.verbose {
        eprintln!(
            "Calling generate_code_snippet: slug={}, language={}",
            args.slug, args.language
        );
    }

    let api = match find_api(&state.catalog, &args.slug) {
        Ok(api) => api,
        Err(e) => return tool_error(e),
    };

    let snippet = generate_snippet(api, args.language);
    let text = format!(
        "# {} client ({})\n\nAuthentication: {}\nEndpoint: {}\n\n```{}\n{}```\n",
        api.name,
        snippet.language,
        api.auth_flow,
        snippet.endpoint,
        snippet.language.fence(),
        snippet.code
    );

    to_result(CallToolResult::text(text))
}
