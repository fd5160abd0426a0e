//! Boilerplate client code for stable APIs
//!
//! Snippets are filled from fixed templates: a token acquisition step that
//! matches the API's auth flow, followed by a call to its first key endpoint.
//! Placeholders use the `{{name}}` form so they never collide with the
//! braces of the target languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::StableApi;

const API_HOST: &str = "https://api.operator.example";
const AUTH_HOST: &str = "https://auth.operator.example";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Python,
    Curl,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Curl => "curl",
        }
    }

    /// Info string for a fenced markdown code block.
    pub fn fence(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Curl => "bash",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language '{0}'. Valid languages: javascript, python, curl")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "javascript" | "js" => Ok(Language::Javascript),
            "python" | "py" => Ok(Language::Python),
            "curl" => Ok(Language::Curl),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

/// OAuth grant implied by an API's auth flow label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthKind {
    ClientCredentials,
    AuthorizationCode,
    Ciba,
}

impl AuthKind {
    /// Authorization Code wins when a label offers several flows, since it
    /// is the one that needs the most client code.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Authorization Code") {
            AuthKind::AuthorizationCode
        } else if label.contains("CIBA") {
            AuthKind::Ciba
        } else {
            AuthKind::ClientCredentials
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub slug: String,
    pub language: Language,
    pub auth: AuthKind,
    pub endpoint: String,
    pub code: String,
}

/// Method and path of a key endpoint such as `"POST /check - description"`.
fn parse_endpoint(endpoint: &str) -> (&str, &str) {
    let signature = endpoint
        .split_once(" - ")
        .map_or(endpoint, |(signature, _)| signature);

    match signature.trim().split_once(' ') {
        Some((method, path)) => (method, path.trim()),
        None => ("POST", "/"),
    }
}

/// Base path segment for a version: `v2` for 2.x, `v0.3` for 0.3.x.
fn version_segment(version: &str) -> String {
    let mut parts = version.trim_start_matches('v').split('.');
    let major = parts.next().unwrap_or("0");
    match major {
        "0" => format!("v0.{}", parts.next().unwrap_or("0")),
        major => format!("v{major}"),
    }
}

/// Turn `/retrieve-date` or `/sessions/{sessionId}` into `retrieveDate` / `sessions`.
fn function_name(path: &str) -> String {
    let mut name = String::new();
    let mut upper = false;

    for c in path.chars() {
        match c {
            '{' => break,
            '/' | '-' | '_' => upper = !name.is_empty(),
            c if c.is_ascii_alphanumeric() => {
                if upper {
                    name.push(c.to_ascii_uppercase());
                    upper = false;
                } else {
                    name.push(c);
                }
            }
            _ => {}
        }
    }

    if name.is_empty() {
        "callApi".to_string()
    } else {
        name
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::new();
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

const JS_CLIENT_CREDENTIALS: &str = r#"async function getAccessToken() {
  const response = await fetch("{{auth_host}}/oauth2/token", {
    method: "POST",
    headers: { "Content-Type": "application/x-www-form-urlencoded" },
    body: new URLSearchParams({
      grant_type: "client_credentials",
      client_id: process.env.CLIENT_ID,
      client_secret: process.env.CLIENT_SECRET,
      scope: "{{scope}}",
    }),
  });
  const { access_token } = await response.json();
  return access_token;
}
"#;

const JS_CIBA: &str = r#"async function getAccessToken(phoneNumber) {
  const credentials = {
    client_id: process.env.CLIENT_ID,
    client_secret: process.env.CLIENT_SECRET,
  };

  // Backchannel authentication request for the subscriber
  const authorize = await fetch("{{auth_host}}/bc-authorize", {
    method: "POST",
    headers: { "Content-Type": "application/x-www-form-urlencoded" },
    body: new URLSearchParams({
      ...credentials,
      login_hint: `tel:${phoneNumber}`,
      scope: "{{scope}}",
    }),
  });
  const { auth_req_id } = await authorize.json();

  const response = await fetch("{{auth_host}}/oauth2/token", {
    method: "POST",
    headers: { "Content-Type": "application/x-www-form-urlencoded" },
    body: new URLSearchParams({
      ...credentials,
      grant_type: "urn:openid:params:grant-type:ciba",
      auth_req_id,
    }),
  });
  const { access_token } = await response.json();
  return access_token;
}
"#;

const JS_AUTHORIZATION_CODE: &str = r#"// Step 1: send the user's browser to
//   {{auth_host}}/authorize?response_type=code&client_id=CLIENT_ID
//     &redirect_uri=REDIRECT_URI&scope={{scope}}
// Step 2: exchange the code received on REDIRECT_URI for a token.
async function getAccessToken(code) {
  const response = await fetch("{{auth_host}}/oauth2/token", {
    method: "POST",
    headers: { "Content-Type": "application/x-www-form-urlencoded" },
    body: new URLSearchParams({
      grant_type: "authorization_code",
      code,
      redirect_uri: process.env.REDIRECT_URI,
      client_id: process.env.CLIENT_ID,
      client_secret: process.env.CLIENT_SECRET,
    }),
  });
  const { access_token } = await response.json();
  return access_token;
}
"#;

const JS_CALL: &str = r#"
async function {{function}}(accessToken, phoneNumber) {
  const response = await fetch(`${BASE_URL}{{path}}`, {
    method: "{{method}}",
    headers: {
      Authorization: `Bearer ${accessToken}`,
      "Content-Type": "application/json",
    },{{js_body}}
  });
  if (!response.ok) {
    throw new Error(`{{name}} request failed: ${response.status}`);
  }
  return response.json();
}
"#;

const PY_CLIENT_CREDENTIALS: &str = r#"def get_access_token():
    response = requests.post(
        "{{auth_host}}/oauth2/token",
        data={
            "grant_type": "client_credentials",
            "client_id": os.environ["CLIENT_ID"],
            "client_secret": os.environ["CLIENT_SECRET"],
            "scope": "{{scope}}",
        },
    )
    response.raise_for_status()
    return response.json()["access_token"]
"#;

const PY_CIBA: &str = r#"def get_access_token(phone_number):
    credentials = {
        "client_id": os.environ["CLIENT_ID"],
        "client_secret": os.environ["CLIENT_SECRET"],
    }

    # Backchannel authentication request for the subscriber
    authorize = requests.post(
        "{{auth_host}}/bc-authorize",
        data={**credentials, "login_hint": f"tel:{phone_number}", "scope": "{{scope}}"},
    )
    authorize.raise_for_status()

    response = requests.post(
        "{{auth_host}}/oauth2/token",
        data={
            **credentials,
            "grant_type": "urn:openid:params:grant-type:ciba",
            "auth_req_id": authorize.json()["auth_req_id"],
        },
    )
    response.raise_for_status()
    return response.json()["access_token"]
"#;

const PY_AUTHORIZATION_CODE: &str = r#"# Step 1: send the user's browser to
#   {{auth_host}}/authorize?response_type=code&client_id=CLIENT_ID
#     &redirect_uri=REDIRECT_URI&scope={{scope}}
# Step 2: exchange the code received on REDIRECT_URI for a token.
def get_access_token(code):
    response = requests.post(
        "{{auth_host}}/oauth2/token",
        data={
            "grant_type": "authorization_code",
            "code": code,
            "redirect_uri": os.environ["REDIRECT_URI"],
            "client_id": os.environ["CLIENT_ID"],
            "client_secret": os.environ["CLIENT_SECRET"],
        },
    )
    response.raise_for_status()
    return response.json()["access_token"]
"#;

const PY_CALL: &str = r#"

def {{function}}(access_token, phone_number):
    response = requests.request(
        "{{method}}",
        f"{BASE_URL}{{path}}",
        headers={"Authorization": f"Bearer {access_token}"},{{py_body}}
    )
    response.raise_for_status()
    return response.json()
"#;

const CURL_CLIENT_CREDENTIALS: &str = r#"ACCESS_TOKEN=$(curl -s -X POST "{{auth_host}}/oauth2/token" \
  -d grant_type=client_credentials \
  -d client_id="$CLIENT_ID" \
  -d client_secret="$CLIENT_SECRET" \
  -d scope="{{scope}}" | jq -r .access_token)
"#;

const CURL_CIBA: &str = r#"AUTH_REQ_ID=$(curl -s -X POST "{{auth_host}}/bc-authorize" \
  -d client_id="$CLIENT_ID" \
  -d client_secret="$CLIENT_SECRET" \
  -d login_hint="tel:$PHONE_NUMBER" \
  -d scope="{{scope}}" | jq -r .auth_req_id)

ACCESS_TOKEN=$(curl -s -X POST "{{auth_host}}/oauth2/token" \
  -d client_id="$CLIENT_ID" \
  -d client_secret="$CLIENT_SECRET" \
  -d grant_type=urn:openid:params:grant-type:ciba \
  -d auth_req_id="$AUTH_REQ_ID" | jq -r .access_token)
"#;

const CURL_AUTHORIZATION_CODE: &str = r#"# Step 1: send the user's browser to
#   {{auth_host}}/authorize?response_type=code&client_id=$CLIENT_ID&redirect_uri=$REDIRECT_URI&scope={{scope}}
# Step 2: exchange the code received on REDIRECT_URI for a token.
ACCESS_TOKEN=$(curl -s -X POST "{{auth_host}}/oauth2/token" \
  -d grant_type=authorization_code \
  -d code="$AUTH_CODE" \
  -d redirect_uri="$REDIRECT_URI" \
  -d client_id="$CLIENT_ID" \
  -d client_secret="$CLIENT_SECRET" | jq -r .access_token)
"#;

const CURL_CALL: &str = r#"
curl -s -X {{method}} "$BASE_URL{{path}}" \
  -H "Authorization: Bearer $ACCESS_TOKEN"{{curl_body}}
"#;

fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{{{key}}}}}"), value)
        })
}

/// Generate a client snippet for a stable API.
pub fn generate_snippet(api: &StableApi, language: Language) -> Snippet {
    let auth = AuthKind::from_label(&api.auth_flow);
    let endpoint = api.key_endpoints.first().map(String::as_str).unwrap_or("POST /");
    let (method, path) = parse_endpoint(endpoint);
    let base_url = format!("{API_HOST}/{}/{}", api.slug, version_segment(&api.version));
    let scope = format!("{}:{}", api.slug, function_name(path));
    let js_function = function_name(path);
    let py_function = snake_case(&js_function);
    let has_body = method != "GET" && method != "DELETE";

    let js_body = if has_body {
        "\n    body: JSON.stringify({ phoneNumber }),"
    } else {
        ""
    };
    let py_body = if has_body {
        "\n        json={\"phoneNumber\": phone_number},"
    } else {
        ""
    };
    let curl_body = if has_body {
        " \\\n  -H \"Content-Type: application/json\" \\\n  -d \"{\\\"phoneNumber\\\": \\\"$PHONE_NUMBER\\\"}\""
    } else {
        ""
    };

    let values: Vec<(&str, &str)> = vec![
        ("auth_host", AUTH_HOST),
        ("scope", scope.as_str()),
        ("method", method),
        ("path", path),
        ("name", api.name.as_str()),
        ("js_body", js_body),
        ("py_body", py_body),
        ("curl_body", curl_body),
    ];

    let (auth_template, call_template) = match (language, auth) {
        (Language::Javascript, AuthKind::ClientCredentials) => (JS_CLIENT_CREDENTIALS, JS_CALL),
        (Language::Javascript, AuthKind::Ciba) => (JS_CIBA, JS_CALL),
        (Language::Javascript, AuthKind::AuthorizationCode) => (JS_AUTHORIZATION_CODE, JS_CALL),
        (Language::Python, AuthKind::ClientCredentials) => (PY_CLIENT_CREDENTIALS, PY_CALL),
        (Language::Python, AuthKind::Ciba) => (PY_CIBA, PY_CALL),
        (Language::Python, AuthKind::AuthorizationCode) => (PY_AUTHORIZATION_CODE, PY_CALL),
        (Language::Curl, AuthKind::ClientCredentials) => (CURL_CLIENT_CREDENTIALS, CURL_CALL),
        (Language::Curl, AuthKind::Ciba) => (CURL_CIBA, CURL_CALL),
        (Language::Curl, AuthKind::AuthorizationCode) => (CURL_AUTHORIZATION_CODE, CURL_CALL),
    };

    let header = match language {
        Language::Javascript => format!(
            "// {} v{}\n// Auth: {}\n\nconst BASE_URL = \"{base_url}\";\n\n",
            api.name, api.version, api.auth_flow
        ),
        Language::Python => format!(
            "# {} v{}\n# Auth: {}\nimport os\n\nimport requests\n\nBASE_URL = \"{base_url}\"\n\n\n",
            api.name, api.version, api.auth_flow
        ),
        Language::Curl => format!(
            "#!/usr/bin/env bash\n# {} v{}\n# Auth: {}\nset -euo pipefail\n\nBASE_URL=\"{base_url}\"\nPHONE_NUMBER=\"${{PHONE_NUMBER:-+34600000000}}\"\n\n",
            api.name, api.version, api.auth_flow
        ),
    };

    let function = match language {
        Language::Python => py_function.as_str(),
        _ => js_function.as_str(),
    };

    let mut code = header;
    code.push_str(&fill(auth_template, &values));
    code.push_str(&fill(call_template, &[("function", function)]));
    let code = fill(&code, &values);

    Snippet {
        slug: api.slug.clone(),
        language,
        auth,
        endpoint: endpoint.to_string(),
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::lookup::get_api;

    fn builtin_snippet(slug: &str, language: Language) -> Snippet {
        let catalog = Catalog::builtin();
        let api = get_api(&catalog, slug).unwrap();
        generate_snippet(api, language)
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("javascript".parse::<Language>(), Ok(Language::Javascript));
        assert_eq!("py".parse::<Language>(), Ok(Language::Python));
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn test_auth_kind_from_label() {
        assert_eq!(
            AuthKind::from_label("OAuth 2.0 Client Credentials"),
            AuthKind::ClientCredentials
        );
        assert_eq!(
            AuthKind::from_label("OpenID Connect CIBA (Client-Initiated Backchannel Authentication)"),
            AuthKind::Ciba
        );
        assert_eq!(
            AuthKind::from_label("OpenID Connect Authorization Code or CIBA"),
            AuthKind::AuthorizationCode
        );
    }

    #[test]
    fn test_parse_endpoint() {
        assert_eq!(
            parse_endpoint("POST /retrieve-date - get the timestamp"),
            ("POST", "/retrieve-date")
        );
        assert_eq!(
            parse_endpoint("GET /sessions/{sessionId}"),
            ("GET", "/sessions/{sessionId}")
        );
    }

    #[test]
    fn test_version_segment() {
        assert_eq!(version_segment("2.0.0"), "v2");
        assert_eq!(version_segment("0.3.1"), "v0.3");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("/retrieve-date"), "retrieveDate");
        assert_eq!(function_name("/sessions/{sessionId}"), "sessions");
        assert_eq!(function_name("/"), "callApi");
        assert_eq!(snake_case("retrieveDate"), "retrieve_date");
    }

    #[test]
    fn test_client_credentials_snippet_has_no_user_step() {
        let snippet = builtin_snippet("quality-on-demand", Language::Javascript);

        assert_eq!(snippet.auth, AuthKind::ClientCredentials);
        assert!(snippet.code.contains("grant_type: \"client_credentials\""));
        assert!(!snippet.code.contains("/authorize"));
        assert!(snippet
            .code
            .contains("const BASE_URL = \"https://api.operator.example/quality-on-demand/v1\";"));
        assert!(snippet.code.contains("async function sessions(accessToken, phoneNumber)"));
        assert!(!snippet.code.contains("{{"));
    }

    #[test]
    fn test_authorization_code_snippet_mentions_authorize_step() {
        let snippet = builtin_snippet("location-verification", Language::Python);

        assert_eq!(snippet.auth, AuthKind::AuthorizationCode);
        assert!(snippet.code.contains("/authorize?response_type=code"));
        assert!(snippet.code.contains("\"grant_type\": \"authorization_code\""));
        assert!(snippet.code.contains("def verify(access_token, phone_number):"));
        assert!(snippet.code.contains("f\"{BASE_URL}/verify\""));
        assert!(!snippet.code.contains("{{"));
    }

    #[test]
    fn test_ciba_curl_snippet() {
        let snippet = builtin_snippet("sim-swap", Language::Curl);

        assert_eq!(snippet.auth, AuthKind::Ciba);
        assert_eq!(snippet.endpoint, "POST /check - check whether a SIM swap happened within the last N hours");
        assert!(snippet.code.starts_with("#!/usr/bin/env bash\n# SIM Swap v2.0.0"));
        assert!(snippet.code.contains("/bc-authorize"));
        assert!(snippet.code.contains("curl -s -X POST \"$BASE_URL/check\""));
        assert!(snippet.code.contains("scope=\"sim-swap:check\""));
    }

    #[test]
    fn test_snippet_is_deterministic() {
        let a = builtin_snippet("carrier-billing", Language::Javascript);
        let b = builtin_snippet("carrier-billing", Language::Javascript);
        assert_eq!(a, b);
    }
}
