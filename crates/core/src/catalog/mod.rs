//! Catalog domain model
//!
//! The catalog is an immutable list of [`ApiRecord`]s. Each record is either a
//! fully documented stable API or a summary-only API still in its initial
//! phase. The built-in data lives in [`data`] and is constructed once with
//! [`Catalog::builtin`]; callers pass `&Catalog` into every operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod data;
mod validate;
pub mod version;

pub use validate::CatalogError;

/// The eight fixed top-level groupings of the catalog.
///
/// Declaration order is the order used by category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AuthFraud,
    Location,
    Connectivity,
    Device,
    Communication,
    Payments,
    NetworkInsights,
    Edge,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::AuthFraud,
        Category::Location,
        Category::Connectivity,
        Category::Device,
        Category::Communication,
        Category::Payments,
        Category::NetworkInsights,
        Category::Edge,
    ];

    /// Stable external identifier (e.g. `auth-fraud`).
    pub fn id(&self) -> &'static str {
        match self {
            Category::AuthFraud => "auth-fraud",
            Category::Location => "location",
            Category::Connectivity => "connectivity",
            Category::Device => "device",
            Category::Communication => "communication",
            Category::Payments => "payments",
            Category::NetworkInsights => "network-insights",
            Category::Edge => "edge",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::AuthFraud => "Authentication & Fraud Prevention",
            Category::Location => "Location Services",
            Category::Connectivity => "Connectivity & Quality of Service",
            Category::Device => "Device Status & Information",
            Category::Communication => "Communication Services",
            Category::Payments => "Payments & Billing",
            Category::NetworkInsights => "Network Insights & Analytics",
            Category::Edge => "Edge Computing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::AuthFraud => {
                "Verify subscriber identity and detect fraud signals such as SIM or device swaps."
            }
            Category::Location => {
                "Verify or retrieve the network-derived location of a device, and get notified when it moves."
            }
            Category::Connectivity => {
                "Request stable latency and throughput for a session, or inspect expected network quality."
            }
            Category::Device => "Query reachability, roaming state and identifiers of a device.",
            Category::Communication => {
                "Inspect call handling settings and embed operator-grade voice and messaging."
            }
            Category::Payments => "Charge purchases to the mobile phone bill of a subscriber.",
            Category::NetworkInsights => {
                "Aggregated, anonymised analytics derived from network data."
            }
            Category::Edge => {
                "Discover the closest edge cloud zone and steer application traffic to it."
            }
        }
    }

    /// Comma separated list of every identifier, for error messages.
    pub fn valid_ids() -> String {
        Category::ALL
            .iter()
            .map(|c| c.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'. Valid categories: {valid}", valid = Category::valid_ids())]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Maturity tier of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Stable,
    Initial,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Stable => "stable",
            Status::Initial => "initial",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown status '{0}'. Valid statuses: stable, initial")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Status::Stable),
            "initial" => Ok(Status::Initial),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A fully documented API that has reached a stable release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StableApi {
    pub name: String,
    pub slug: String,
    pub category: Category,
    pub description: String,
    pub version: String,
    /// Prior releases, most recent first.
    pub previous_versions: Vec<String>,
    pub use_cases: Vec<String>,
    pub industries: Vec<String>,
    pub auth_flow: String,
    pub http_methods: Vec<String>,
    pub key_endpoints: Vec<String>,
    pub documentation_url: String,
    pub repository_url: String,
}

/// An API in its initial phase. Only summary information is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialApi {
    pub name: String,
    pub slug: String,
    pub category: Category,
    pub description: String,
    pub version: String,
}

/// One catalog entry, tagged by maturity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiRecord {
    Stable(StableApi),
    Initial(InitialApi),
}

impl ApiRecord {
    pub fn name(&self) -> &str {
        match self {
            ApiRecord::Stable(api) => &api.name,
            ApiRecord::Initial(api) => &api.name,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ApiRecord::Stable(api) => &api.slug,
            ApiRecord::Initial(api) => &api.slug,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ApiRecord::Stable(api) => api.category,
            ApiRecord::Initial(api) => api.category,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ApiRecord::Stable(api) => &api.description,
            ApiRecord::Initial(api) => &api.description,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            ApiRecord::Stable(api) => &api.version,
            ApiRecord::Initial(api) => &api.version,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiRecord::Stable(_) => Status::Stable,
            ApiRecord::Initial(_) => Status::Initial,
        }
    }

    pub fn as_stable(&self) -> Option<&StableApi> {
        match self {
            ApiRecord::Stable(api) => Some(api),
            ApiRecord::Initial(_) => None,
        }
    }
}

/// The complete, read-only set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    apis: Vec<ApiRecord>,
}

impl Catalog {
    pub fn new(apis: Vec<ApiRecord>) -> Self {
        Self { apis }
    }

    /// The hand-curated catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(data::builtin_records())
    }

    pub fn records(&self) -> &[ApiRecord] {
        &self.apis
    }

    pub fn stable(&self) -> impl Iterator<Item = &StableApi> + '_ {
        self.apis.iter().filter_map(ApiRecord::as_stable)
    }

    pub fn initial(&self) -> impl Iterator<Item = &InitialApi> + '_ {
        self.apis.iter().filter_map(|record| match record {
            ApiRecord::Initial(api) => Some(api),
            ApiRecord::Stable(_) => None,
        })
    }

    /// Slugs of every stable API, in catalog order.
    pub fn stable_slugs(&self) -> Vec<&str> {
        self.stable().map(|api| api.slug.as_str()).collect()
    }

    /// Checks the structural invariants of the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate::validate(self)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn stable(name: &str, slug: &str, category: Category) -> StableApi {
        StableApi {
            name: name.to_string(),
            slug: slug.to_string(),
            category,
            description: format!("{name} description"),
            version: "1.0.0".to_string(),
            previous_versions: vec!["0.2.0".to_string(), "0.1.0".to_string()],
            use_cases: vec![],
            industries: vec![],
            auth_flow: "OAuth 2.0 Client Credentials".to_string(),
            http_methods: vec!["POST".to_string()],
            key_endpoints: vec!["POST /check - run the check".to_string()],
            documentation_url: format!("https://docs.example.com/{slug}"),
            repository_url: format!("https://github.com/example/{slug}"),
        }
    }

    pub fn initial(name: &str, slug: &str, category: Category) -> InitialApi {
        InitialApi {
            name: name.to_string(),
            slug: slug.to_string(),
            category,
            description: format!("{name} description"),
            version: "0.1.0".to_string(),
        }
    }
}
