use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::version::compare_versions;
use super::{ApiRecord, Catalog};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid slug '{0}': use lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    #[error("{slug}: previous version {previous} is not older than current version {current}")]
    PreviousVersionNotOlder {
        slug: String,
        current: String,
        previous: String,
    },

    #[error("{slug}: previous versions must be listed most recent first ({first} before {second})")]
    PreviousVersionsOutOfOrder {
        slug: String,
        first: String,
        second: String,
    },
}

fn slug_regex() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"))
}

pub(super) fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for record in catalog.records() {
        let slug = record.slug();

        if !slug_regex().is_match(slug) {
            return Err(CatalogError::InvalidSlug(slug.to_string()));
        }

        if !seen.insert(slug) {
            return Err(CatalogError::DuplicateSlug(slug.to_string()));
        }

        if let ApiRecord::Stable(api) = record {
            if let Some(latest) = api.previous_versions.first() {
                if compare_versions(latest, &api.version) != Ordering::Less {
                    return Err(CatalogError::PreviousVersionNotOlder {
                        slug: api.slug.clone(),
                        current: api.version.clone(),
                        previous: latest.clone(),
                    });
                }
            }

            for pair in api.previous_versions.windows(2) {
                if compare_versions(&pair[0], &pair[1]) != Ordering::Greater {
                    return Err(CatalogError::PreviousVersionsOutOfOrder {
                        slug: api.slug.clone(),
                        first: pair[0].clone(),
                        second: pair[1].clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{initial, stable};
    use crate::catalog::Category;

    #[test]
    fn test_validate_ok() {
        let catalog = Catalog::new(vec![
            ApiRecord::Stable(stable("SIM Swap", "sim-swap", Category::AuthFraud)),
            ApiRecord::Initial(initial("WebRTC", "webrtc", Category::Communication)),
        ]);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn test_validate_duplicate_slug_across_variants() {
        let catalog = Catalog::new(vec![
            ApiRecord::Stable(stable("SIM Swap", "sim-swap", Category::AuthFraud)),
            ApiRecord::Initial(initial("SIM Swap Next", "sim-swap", Category::AuthFraud)),
        ]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateSlug("sim-swap".to_string()))
        );
    }

    #[test]
    fn test_validate_invalid_slug() {
        for slug in ["Sim-Swap", "sim_swap", "sim--swap", "-sim", ""] {
            let catalog = Catalog::new(vec![ApiRecord::Initial(initial(
                "x",
                slug,
                Category::Edge,
            ))]);
            assert_eq!(
                catalog.validate(),
                Err(CatalogError::InvalidSlug(slug.to_string())),
                "slug {slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_previous_versions_out_of_order() {
        let mut api = stable("SIM Swap", "sim-swap", Category::AuthFraud);
        api.previous_versions = vec!["0.1.0".to_string(), "0.2.0".to_string()];
        let catalog = Catalog::new(vec![ApiRecord::Stable(api)]);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::PreviousVersionsOutOfOrder { .. })
        ));
    }

    #[test]
    fn test_validate_previous_version_not_older() {
        let mut api = stable("SIM Swap", "sim-swap", Category::AuthFraud);
        api.previous_versions = vec!["1.0.0".to_string()];
        let catalog = Catalog::new(vec![ApiRecord::Stable(api)]);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::PreviousVersionNotOlder { .. })
        ));
    }

    #[test]
    fn test_validate_empty_previous_versions() {
        let mut api = stable("SIM Swap", "sim-swap", Category::AuthFraud);
        api.previous_versions.clear();
        let catalog = Catalog::new(vec![ApiRecord::Stable(api)]);
        assert_eq!(catalog.validate(), Ok(()));
    }
}
