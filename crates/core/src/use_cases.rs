//! Use cases grouped by industry
//!
//! Industry labels are grouped exactly as written in the catalog. Two
//! records spelling the same industry differently ("Banking" and "banking")
//! produce two groups.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryApi<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub use_cases: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryGroup<'a> {
    pub industry: &'a str,
    pub apis: Vec<IndustryApi<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseIndex<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub industries: Vec<IndustryGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No industries match '{filter}'. Available industries: {}", .available_industries.join(", "))]
pub struct NoIndustryMatch {
    pub filter: String,
    pub available_industries: Vec<String>,
}

/// Every distinct industry label, in order of first appearance.
pub fn industries(catalog: &Catalog) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for api in catalog.stable() {
        for industry in &api.industries {
            if !labels.contains(&industry.as_str()) {
                labels.push(industry);
            }
        }
    }
    labels
}

/// Group stable APIs' use cases by industry.
///
/// `industry` is a case-insensitive substring filter on the label. A missing
/// or blank filter returns every industry; a filter that matches nothing is
/// an error carrying the available labels.
pub fn use_cases_by_industry<'a>(
    catalog: &'a Catalog,
    industry: Option<&str>,
) -> Result<UseCaseIndex<'a>, NoIndustryMatch> {
    let filter = industry.map(str::trim).filter(|f| !f.is_empty());
    let needle = filter.map(str::to_lowercase);

    let mut groups: Vec<IndustryGroup<'a>> = Vec::new();

    for api in catalog.stable() {
        for label in &api.industries {
            if let Some(needle) = &needle {
                if !label.to_lowercase().contains(needle.as_str()) {
                    continue;
                }
            }

            let entry = IndustryApi {
                name: &api.name,
                slug: &api.slug,
                use_cases: &api.use_cases,
            };

            match groups.iter().position(|g| g.industry == label.as_str()) {
                Some(i) => groups[i].apis.push(entry),
                None => groups.push(IndustryGroup {
                    industry: label,
                    apis: vec![entry],
                }),
            }
        }
    }

    if let Some(filter) = filter.filter(|_| groups.is_empty()) {
        return Err(NoIndustryMatch {
            filter: filter.to_string(),
            available_industries: industries(catalog)
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    Ok(UseCaseIndex {
        filter: filter.map(str::to_string),
        industries: groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::stable;
    use crate::catalog::{ApiRecord, Category};

    fn sample_catalog() -> Catalog {
        let mut a = stable("Alpha", "alpha", Category::AuthFraud);
        a.industries = vec!["Banking".to_string(), "Retail".to_string()];
        a.use_cases = vec!["Stop fraud".to_string()];

        let mut b = stable("Beta", "beta", Category::Location);
        b.industries = vec!["banking".to_string(), "Logistics".to_string()];
        b.use_cases = vec!["Track parcels".to_string()];

        let mut c = stable("Gamma", "gamma", Category::Device);
        c.industries = vec!["Retail".to_string()];
        c.use_cases = vec!["Loyalty".to_string()];

        Catalog::new(vec![
            ApiRecord::Stable(a),
            ApiRecord::Stable(b),
            ApiRecord::Stable(c),
        ])
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let catalog = sample_catalog();
        let index = use_cases_by_industry(&catalog, None).unwrap();

        let labels: Vec<_> = index.industries.iter().map(|g| g.industry).collect();
        assert_eq!(labels, vec!["Banking", "Retail", "banking", "Logistics"]);

        let retail = &index.industries[1];
        let slugs: Vec<_> = retail.apis.iter().map(|a| a.slug).collect();
        assert_eq!(slugs, vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_case_variants_stay_separate() {
        let catalog = sample_catalog();
        let index = use_cases_by_industry(&catalog, Some("BANK")).unwrap();

        let labels: Vec<_> = index.industries.iter().map(|g| g.industry).collect();
        assert_eq!(labels, vec!["Banking", "banking"]);
        assert_eq!(index.filter.as_deref(), Some("BANK"));
    }

    #[test]
    fn test_blank_filter_returns_everything() {
        let catalog = sample_catalog();
        let index = use_cases_by_industry(&catalog, Some("  ")).unwrap();

        assert_eq!(index.industries.len(), 4);
        assert_eq!(index.filter, None);
    }

    #[test]
    fn test_no_match_lists_available_industries() {
        let catalog = sample_catalog();
        let err = use_cases_by_industry(&catalog, Some("aerospace")).unwrap_err();

        assert_eq!(err.filter, "aerospace");
        assert_eq!(
            err.available_industries,
            vec!["Banking", "Retail", "banking", "Logistics"]
        );
        assert!(err.to_string().contains("No industries match 'aerospace'"));
    }

    #[test]
    fn test_builtin_banking() {
        let catalog = Catalog::builtin();
        let index = use_cases_by_industry(&catalog, Some("banking")).unwrap();

        assert_eq!(index.industries.len(), 1);
        let slugs: Vec<_> = index.industries[0].apis.iter().map(|a| a.slug).collect();
        assert!(slugs.contains(&"sim-swap"));
        assert!(slugs.contains(&"location-verification"));
    }
}
