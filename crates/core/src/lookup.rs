//! Detail lookup and side-by-side comparison of stable APIs
//!
//! Only stable APIs expose full detail. Lookups are exact, case-sensitive
//! slug matches.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, Category, StableApi};

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 5;

/// Number of industries shown per API in a comparison.
const COMPARE_INDUSTRIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("API '{slug}' not found. Available APIs: {}", .valid_slugs.join(", "))]
    NotFound {
        slug: String,
        valid_slugs: Vec<String>,
    },

    #[error(
        "Need at least 2 valid slugs to compare, found {found}. Available APIs: {}",
        .valid_slugs.join(", ")
    )]
    NotEnoughToCompare {
        found: usize,
        valid_slugs: Vec<String>,
    },
}

fn valid_slugs(catalog: &Catalog) -> Vec<String> {
    catalog
        .stable_slugs()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Find a stable API by slug.
pub fn get_api<'a>(catalog: &'a Catalog, slug: &str) -> Option<&'a StableApi> {
    catalog.stable().find(|api| api.slug == slug)
}

/// Like [`get_api`], but reports the valid slugs when nothing matches.
pub fn find_api<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a StableApi, LookupError> {
    get_api(catalog, slug).ok_or_else(|| LookupError::NotFound {
        slug: slug.to_string(),
        valid_slugs: valid_slugs(catalog),
    })
}

/// Structural projection of one API in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub version: &'a str,
    pub category: Category,
    pub auth_flow: &'a str,
    pub http_methods: &'a [String],
    pub industries: &'a [String],
    pub endpoint_count: usize,
}

impl<'a> From<&'a StableApi> for ComparisonEntry<'a> {
    fn from(api: &'a StableApi) -> Self {
        let industries = &api.industries[..api.industries.len().min(COMPARE_INDUSTRIES)];

        Self {
            name: &api.name,
            slug: &api.slug,
            version: &api.version,
            category: api.category,
            auth_flow: &api.auth_flow,
            http_methods: &api.http_methods,
            industries,
            endpoint_count: api.key_endpoints.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<'a> {
    pub apis: Vec<ComparisonEntry<'a>>,
}

/// Compare stable APIs side by side.
///
/// Unknown slugs are dropped; at least [`MIN_COMPARE`] must resolve. Only the
/// first [`MAX_COMPARE`] slugs are considered. Found APIs keep the requested
/// order.
pub fn compare<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    slugs: &[S],
) -> Result<Comparison<'a>, LookupError> {
    let apis: Vec<ComparisonEntry<'a>> = slugs
        .iter()
        .take(MAX_COMPARE)
        .filter_map(|slug| get_api(catalog, slug.as_ref()))
        .map(ComparisonEntry::from)
        .collect();

    if apis.len() < MIN_COMPARE {
        return Err(LookupError::NotEnoughToCompare {
            found: apis.len(),
            valid_slugs: valid_slugs(catalog),
        });
    }

    Ok(Comparison { apis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{initial, stable};
    use crate::catalog::ApiRecord;

    fn sample_catalog() -> Catalog {
        let mut wide = stable("Wide", "wide", Category::Device);
        wide.industries = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();

        Catalog::new(vec![
            ApiRecord::Stable(stable("One", "one", Category::AuthFraud)),
            ApiRecord::Stable(stable("Two", "two", Category::Location)),
            ApiRecord::Stable(wide),
            ApiRecord::Initial(initial("Draft", "draft", Category::Edge)),
        ])
    }

    #[test]
    fn test_get_api_found() {
        let catalog = sample_catalog();
        assert_eq!(get_api(&catalog, "two").map(|a| a.name.as_str()), Some("Two"));
    }

    #[test]
    fn test_get_api_is_exact_match() {
        let catalog = sample_catalog();
        assert!(get_api(&catalog, "Two").is_none());
        assert!(get_api(&catalog, "tw").is_none());
    }

    #[test]
    fn test_get_api_ignores_initial_records() {
        let catalog = sample_catalog();
        assert!(get_api(&catalog, "draft").is_none());
    }

    #[test]
    fn test_find_api_not_found_lists_valid_slugs() {
        let catalog = sample_catalog();
        let err = find_api(&catalog, "draft").unwrap_err();

        assert_eq!(
            err,
            LookupError::NotFound {
                slug: "draft".to_string(),
                valid_slugs: vec!["one".to_string(), "two".to_string(), "wide".to_string()],
            }
        );
        assert!(err.to_string().contains("one, two, wide"));
    }

    #[test]
    fn test_compare_preserves_requested_order() {
        let catalog = sample_catalog();
        let comparison = compare(&catalog, &["two", "one"]).unwrap();

        let slugs: Vec<_> = comparison.apis.iter().map(|a| a.slug).collect();
        assert_eq!(slugs, vec!["two", "one"]);
    }

    #[test]
    fn test_compare_drops_unknown_slugs() {
        let catalog = sample_catalog();
        let comparison = compare(&catalog, &["one", "nope", "draft", "wide"]).unwrap();

        let slugs: Vec<_> = comparison.apis.iter().map(|a| a.slug).collect();
        assert_eq!(slugs, vec!["one", "wide"]);
    }

    #[test]
    fn test_compare_needs_two_resolved() {
        let catalog = sample_catalog();
        let err = compare(&catalog, &["one", "not-a-real-slug"]).unwrap_err();

        assert!(matches!(err, LookupError::NotEnoughToCompare { found: 1, .. }));
        assert!(err.to_string().contains("Need at least 2 valid slugs"));
    }

    #[test]
    fn test_compare_truncates_industries() {
        let catalog = sample_catalog();
        let comparison = compare(&catalog, &["wide", "one"]).unwrap();

        assert_eq!(comparison.apis[0].industries, ["A", "B", "C"]);
        assert_eq!(comparison.apis[0].endpoint_count, 1);
    }

    #[test]
    fn test_compare_builtin_sim_and_device_swap() {
        let catalog = Catalog::builtin();
        let comparison = compare(&catalog, &["sim-swap", "device-swap"]).unwrap();

        assert_eq!(comparison.apis.len(), 2);
        assert_eq!(comparison.apis[0].slug, "sim-swap");
        assert_eq!(comparison.apis[1].slug, "device-swap");
    }

    #[test]
    fn test_builtin_location_verification_uses_authorization_code() {
        let catalog = Catalog::builtin();
        let api = find_api(&catalog, "location-verification").unwrap();
        assert!(api.auth_flow.contains("Authorization Code"));
    }

    #[test]
    fn test_builtin_every_stable_search_hit_has_detail() {
        use crate::catalog::Status;
        use crate::search::{search, SearchParams};

        let catalog = Catalog::builtin();
        let page = search(
            &catalog,
            &SearchParams {
                status: Some(Status::Stable),
                limit: 100,
                ..SearchParams::default()
            },
        );

        for result in page.results {
            assert!(get_api(&catalog, result.slug).is_some(), "{}", result.slug);
        }
    }
}
