use serde::Serialize;

use crate::catalog::{Catalog, Category, Status};

/// Short summary of an API nested under its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSummary<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub status: Status,
    pub version: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing<'a> {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub api_count: usize,
    pub apis: Vec<ApiSummary<'a>>,
}

/// List all categories in declaration order with their APIs.
///
/// Within a category, stable APIs come before initial ones and each group
/// is sorted by name.
pub fn list_categories(catalog: &Catalog) -> Vec<CategoryListing<'_>> {
    Category::ALL
        .iter()
        .map(|category| {
            let mut apis: Vec<ApiSummary<'_>> = catalog
                .records()
                .iter()
                .filter(|record| record.category() == *category)
                .map(|record| ApiSummary {
                    name: record.name(),
                    slug: record.slug(),
                    status: record.status(),
                    version: record.version(),
                })
                .collect();

            apis.sort_by(|a, b| {
                let rank = |s: Status| match s {
                    Status::Stable => 0,
                    Status::Initial => 1,
                };
                rank(a.status)
                    .cmp(&rank(b.status))
                    .then_with(|| a.name.cmp(b.name))
            });

            CategoryListing {
                id: category.id(),
                name: category.display_name(),
                description: category.description(),
                api_count: apis.len(),
                apis,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{initial, stable};
    use crate::catalog::ApiRecord;

    #[test]
    fn test_list_categories_has_all_eight_in_order() {
        let catalog = Catalog::new(vec![]);
        let listing = list_categories(&catalog);

        let ids: Vec<_> = listing.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "auth-fraud",
                "location",
                "connectivity",
                "device",
                "communication",
                "payments",
                "network-insights",
                "edge"
            ]
        );
        assert!(listing.iter().all(|c| c.apis.is_empty() && c.api_count == 0));
    }

    #[test]
    fn test_list_categories_stable_before_initial() {
        let catalog = Catalog::new(vec![
            ApiRecord::Initial(initial("Aardvark", "aardvark", Category::Edge)),
            ApiRecord::Stable(stable("Zebra", "zebra", Category::Edge)),
            ApiRecord::Stable(stable("Mole", "mole", Category::Edge)),
        ]);
        let listing = list_categories(&catalog);
        let edge = listing.iter().find(|c| c.id == "edge").unwrap();

        let slugs: Vec<_> = edge.apis.iter().map(|a| a.slug).collect();
        assert_eq!(slugs, vec!["mole", "zebra", "aardvark"]);
        assert_eq!(edge.api_count, 3);
    }

    #[test]
    fn test_list_categories_builtin_accounts_for_every_record() {
        let catalog = Catalog::builtin();
        let listing = list_categories(&catalog);

        let total: usize = listing.iter().map(|c| c.api_count).sum();
        assert_eq!(total, catalog.records().len());
    }
}
