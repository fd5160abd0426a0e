//! Search, rank and paginate the catalog
//!
//! Scoring is a weighted, case-insensitive substring match over several
//! fields. Every matching field contributes its weight once; for list fields
//! (industries, use cases) the first matching entry stops the scan. Records
//! that score zero against a non-empty query are dropped.
//!
//! Ordering is score descending, then name ascending using ordinal byte
//! comparison (`str::cmp`). Names are not folded or locale-collated, so
//! non-ASCII names sort by their UTF-8 bytes.

use serde::Serialize;

use crate::catalog::{ApiRecord, Catalog, Category, Status};

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;
pub const MAX_QUERY_LENGTH: usize = 200;

const NAME_WEIGHT: u32 = 10;
const SLUG_WEIGHT: u32 = 8;
const CATEGORY_WEIGHT: u32 = 5;
const INDUSTRY_WEIGHT: u32 = 4;
const DESCRIPTION_WEIGHT: u32 = 3;
const USE_CASE_WEIGHT: u32 = 2;

/// Filters and window for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            status: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// One ranked catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub category: Category,
    pub status: Status,
    pub version: &'a str,
    pub description: &'a str,
    pub score: u32,
}

/// A window over the ranked results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub total: usize,
    pub count: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,
    pub results: Vec<SearchResult<'a>>,
}

/// Only the empty string counts as no query. Whitespace is part of the
/// substring, so `" swap"` and `"swap"` score differently.
fn present_query(query: Option<&str>) -> Option<&str> {
    query.filter(|q| !q.is_empty())
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Relevance of a record against an already lowercased query.
pub fn score(record: &ApiRecord, query: &str) -> u32 {
    let mut score = 0;

    if contains(record.name(), query) {
        score += NAME_WEIGHT;
    }
    if contains(record.slug(), query) {
        score += SLUG_WEIGHT;
    }
    if contains(record.category().id(), query) {
        score += CATEGORY_WEIGHT;
    }
    if contains(record.description(), query) {
        score += DESCRIPTION_WEIGHT;
    }

    if let ApiRecord::Stable(api) = record {
        if api.industries.iter().any(|i| contains(i, query)) {
            score += INDUSTRY_WEIGHT;
        }
        if api.use_cases.iter().any(|u| contains(u, query)) {
            score += USE_CASE_WEIGHT;
        }
    }

    score
}

fn matches_filters(record: &ApiRecord, category: Option<Category>, status: Option<Status>) -> bool {
    category.map_or(true, |c| record.category() == c)
        && status.map_or(true, |s| record.status() == s)
}

/// Run a search over the catalog.
///
/// `limit` is clamped to `1..=MAX_LIMIT`. An offset past the end yields an
/// empty page, not an error.
pub fn search<'a>(catalog: &'a Catalog, params: &SearchParams) -> SearchPage<'a> {
    let query = present_query(params.query.as_deref()).map(str::to_lowercase);
    let limit = params.limit.clamp(1, MAX_LIMIT);
    let offset = params.offset;

    let mut ranked: Vec<SearchResult<'a>> = catalog
        .records()
        .iter()
        .filter(|record| matches_filters(record, params.category, params.status))
        .filter_map(|record| {
            let score = match &query {
                Some(q) => match score(record, q) {
                    0 => return None,
                    s => s,
                },
                None => 0,
            };

            Some(SearchResult {
                name: record.name(),
                slug: record.slug(),
                category: record.category(),
                status: record.status(),
                version: record.version(),
                description: record.description(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(b.name)));

    let total = ranked.len();
    let start = offset.min(total);
    let end = start.saturating_add(limit).min(total);
    let results: Vec<SearchResult<'a>> = ranked.drain(start..end).collect();
    let count = results.len();
    let has_more = offset.saturating_add(count) < total;

    SearchPage {
        query: present_query(params.query.as_deref()).map(str::to_string),
        category: params.category,
        status: params.status,
        total,
        count,
        offset,
        limit,
        has_more,
        next_offset: has_more.then(|| offset + count),
        results,
    }
}
