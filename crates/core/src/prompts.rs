//! Prompt templates exposed through `prompts/list` and `prompts/get`
//!
//! Each prompt is rendered to a single user message. Catalog data is
//! embedded in the text so the model does not need a follow-up tool call to
//! get started.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, StableApi};
use crate::lookup::{find_api, LookupError};
use crate::search::{search, SearchParams};
use crate::snippets::{AuthKind, Language, ParseLanguageError};
use crate::use_cases::use_cases_by_industry;

pub const INTEGRATE_API: &str = "integrate-api";
pub const CHOOSE_API: &str = "choose-api";

/// Number of search matches embedded in the `choose-api` prompt.
const CHOOSE_API_MATCHES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub description: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("Unknown prompt '{0}'. Valid prompts: integrate-api, choose-api")]
    UnknownPrompt(String),

    #[error("Prompt '{prompt}' requires the '{argument}' argument")]
    MissingArgument {
        prompt: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Language(#[from] ParseLanguageError),
}

/// Every prompt this server offers.
pub fn prompt_definitions() -> Vec<PromptDefinition> {
    vec![
        PromptDefinition {
            name: INTEGRATE_API,
            description: "Step-by-step integration guide for one stable API",
            arguments: vec![
                PromptArgument {
                    name: "slug",
                    description: "Slug of a stable API, e.g. sim-swap",
                    required: true,
                },
                PromptArgument {
                    name: "language",
                    description: "Client language: javascript, python or curl",
                    required: false,
                },
            ],
        },
        PromptDefinition {
            name: CHOOSE_API,
            description: "Recommend catalog APIs for a business use case",
            arguments: vec![
                PromptArgument {
                    name: "use_case",
                    description: "What the application needs to do",
                    required: true,
                },
                PromptArgument {
                    name: "industry",
                    description: "Industry to focus the recommendation on",
                    required: false,
                },
            ],
        },
    ]
}

fn argument<'a>(args: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    args.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Render a prompt by name with its string arguments.
pub fn render_prompt(
    catalog: &Catalog,
    name: &str,
    args: &BTreeMap<String, String>,
) -> Result<RenderedPrompt, PromptError> {
    match name {
        INTEGRATE_API => {
            let slug = argument(args, "slug").ok_or(PromptError::MissingArgument {
                prompt: INTEGRATE_API,
                argument: "slug",
            })?;
            let language = argument(args, "language")
                .map(str::parse::<Language>)
                .transpose()?;
            let api = find_api(catalog, slug)?;

            Ok(RenderedPrompt {
                description: format!("Integrate {}", api.name),
                text: integrate_api_prompt(api, language),
            })
        }
        CHOOSE_API => {
            let use_case = argument(args, "use_case").ok_or(PromptError::MissingArgument {
                prompt: CHOOSE_API,
                argument: "use_case",
            })?;
            let industry = argument(args, "industry");

            Ok(RenderedPrompt {
                description: format!("Choose APIs for: {use_case}"),
                text: choose_api_prompt(catalog, use_case, industry),
            })
        }
        other => Err(PromptError::UnknownPrompt(other.to_string())),
    }
}

fn auth_instructions(kind: AuthKind) -> &'static str {
    match kind {
        AuthKind::ClientCredentials => {
            "Obtain a two-legged access token with the OAuth 2.0 client credentials grant."
        }
        AuthKind::AuthorizationCode => {
            "Send the user through the OpenID Connect authorization code flow so they consent on their own device, then exchange the code for a three-legged access token."
        }
        AuthKind::Ciba => {
            "Start a CIBA backchannel authentication request with the subscriber's phone number as login hint, then poll the token endpoint for a three-legged access token."
        }
    }
}

/// Integration guide prompt for one stable API.
pub fn integrate_api_prompt(api: &StableApi, language: Option<Language>) -> String {
    let mut parts = Vec::new();

    let target = match language {
        Some(language) => format!(" using {language}"),
        None => String::new(),
    };
    parts.push(format!(
        "Help me integrate the {} API (version {}){target}.",
        api.name, api.version
    ));
    parts.push(format!("About the API: {}", api.description));
    parts.push(format!(
        "Authentication: {}\n{}",
        api.auth_flow,
        auth_instructions(AuthKind::from_label(&api.auth_flow))
    ));
    parts.push(format!(
        "Key endpoints:\n{}",
        api.key_endpoints
            .iter()
            .map(|e| format!("- {e}"))
            .collect::<Vec<_>>()
            .join("\n")
    ));
    if !api.use_cases.is_empty() {
        parts.push(format!(
            "Typical use cases:\n{}",
            api.use_cases
                .iter()
                .map(|u| format!("- {u}"))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    }
    parts.push(format!("Documentation: {}", api.documentation_url));
    parts.push(
        "Walk me through obtaining credentials, getting an access token, calling the first endpoint and handling errors, step by step."
            .to_string(),
    );

    parts.join("\n\n")
}

/// Recommendation prompt embedding the best search matches for a use case.
pub fn choose_api_prompt(catalog: &Catalog, use_case: &str, industry: Option<&str>) -> String {
    let mut parts = Vec::new();

    let scope = match industry {
        Some(industry) => format!(" in the {industry} industry"),
        None => String::new(),
    };
    parts.push(format!(
        "I am building an application{scope} and need to: {use_case}"
    ));

    let page = search(
        catalog,
        &SearchParams {
            query: Some(use_case.to_string()),
            limit: CHOOSE_API_MATCHES,
            ..SearchParams::default()
        },
    );
    if page.results.is_empty() {
        parts.push("No catalog API matched the use case directly.".to_string());
    } else {
        parts.push(format!(
            "Candidate APIs from the catalog:\n{}",
            page.results
                .iter()
                .map(|r| format!("- {} (`{}`, {} v{}): {}", r.name, r.slug, r.status, r.version, r.description))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    }

    if let Some(Ok(index)) = industry.map(|i| use_cases_by_industry(catalog, Some(i))) {
        let apis: Vec<String> = index
            .industries
            .iter()
            .flat_map(|g| g.apis.iter().map(|a| format!("- {} (`{}`)", a.name, a.slug)))
            .collect();
        parts.push(format!("APIs commonly used in this industry:\n{}", apis.join("\n")));
    }

    parts.push(
        "Recommend which APIs fit best, explain the trade-offs and note any that are still at initial status."
            .to_string(),
    );

    parts.join("\n\n")
}
