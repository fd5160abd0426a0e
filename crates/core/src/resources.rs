//! The `telcoref://` resource scheme
//!
//! Two static resources cover the whole catalog and the category listing.
//! Each stable API also gets its own resource at `telcoref://apis/{slug}`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::categories::list_categories;
use crate::lookup::get_api;

pub const SCHEME: &str = "telcoref://";
pub const CATALOG_URI: &str = "telcoref://catalog";
pub const CATEGORIES_URI: &str = "telcoref://categories";
pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Catalog,
    Categories,
    Api(String),
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceUri::Catalog => f.write_str(CATALOG_URI),
            ResourceUri::Categories => f.write_str(CATEGORIES_URI),
            ResourceUri::Api(slug) => write!(f, "{SCHEME}apis/{slug}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Failed to serialize resource {uri}: {message}")]
    Serialize { uri: String, message: String },
}

impl ResourceUri {
    /// Parse a URI of this scheme. Only the shape is checked here; whether an
    /// API slug exists is decided by [`read_resource`].
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        let not_found = || ResourceError::NotFound(uri.to_string());
        let path = uri.strip_prefix(SCHEME).ok_or_else(not_found)?;

        match path {
            "catalog" => Ok(ResourceUri::Catalog),
            "categories" => Ok(ResourceUri::Categories),
            _ => match path.strip_prefix("apis/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Ok(ResourceUri::Api(slug.to_string()))
                }
                _ => Err(not_found()),
            },
        }
    }
}

/// Entry of `resources/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: &'static str,
}

/// Static resources first, then one per stable API in catalog order.
pub fn list_resources(catalog: &Catalog) -> Vec<ResourceDescriptor> {
    let mut resources = vec![
        ResourceDescriptor {
            uri: CATALOG_URI.to_string(),
            name: "API catalog".to_string(),
            description: "Every catalog record, stable and initial".to_string(),
            mime_type: JSON_MIME_TYPE,
        },
        ResourceDescriptor {
            uri: CATEGORIES_URI.to_string(),
            name: "API categories".to_string(),
            description: "The eight categories with the APIs in each".to_string(),
            mime_type: JSON_MIME_TYPE,
        },
    ];

    resources.extend(catalog.stable().map(|api| ResourceDescriptor {
        uri: ResourceUri::Api(api.slug.clone()).to_string(),
        name: api.name.clone(),
        description: format!("{} v{} details", api.name, api.version),
        mime_type: JSON_MIME_TYPE,
    }));

    resources
}

/// Read a resource as pretty JSON.
pub fn read_resource(catalog: &Catalog, uri: &str) -> Result<String, ResourceError> {
    match ResourceUri::parse(uri)? {
        ResourceUri::Catalog => to_json(uri, catalog),
        ResourceUri::Categories => to_json(uri, &list_categories(catalog)),
        ResourceUri::Api(slug) => {
            let api = get_api(catalog, &slug)
                .ok_or_else(|| ResourceError::NotFound(uri.to_string()))?;
            to_json(uri, api)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(uri: &str, value: &T) -> Result<String, ResourceError> {
    serde_json::to_string_pretty(value).map_err(|e| ResourceError::Serialize {
        uri: uri.to_string(),
        message: e.to_string(),
    })
}
