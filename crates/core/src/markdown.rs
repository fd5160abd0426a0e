//! Markdown rendering for catalog responses
//!
//! Every formatter is deterministic: the same input always renders the same
//! text, so responses can be compared and cached by clients.

use std::fmt::Write;

use crate::catalog::StableApi;
use crate::categories::CategoryListing;
use crate::lookup::Comparison;
use crate::search::SearchPage;
use crate::use_cases::UseCaseIndex;

/// Formats a page of search results.
pub fn format_search_page(page: &SearchPage<'_>) -> String {
    let mut output = String::from("# API Search Results\n\n");

    let mut filters = Vec::new();
    if let Some(query) = &page.query {
        filters.push(format!("query: `{query}`"));
    }
    if let Some(category) = page.category {
        filters.push(format!("category: `{category}`"));
    }
    if let Some(status) = page.status {
        filters.push(format!("status: `{status}`"));
    }
    if !filters.is_empty() {
        let _ = writeln!(output, "Filters: {}\n", filters.join(", "));
    }

    if page.results.is_empty() {
        output.push_str("No APIs found matching the given criteria.\n");
        if page.total > 0 {
            let _ = writeln!(
                output,
                "\nOffset {} is past the end of {} matching APIs.",
                page.offset, page.total
            );
        }
        return output;
    }

    let _ = writeln!(
        output,
        "Showing {}-{} of {} APIs\n",
        page.offset + 1,
        page.offset + page.count,
        page.total
    );

    for result in &page.results {
        let _ = writeln!(output, "## {} (`{}`)\n", result.name, result.slug);
        let _ = writeln!(
            output,
            "- **Category:** {}\n- **Status:** {}\n- **Version:** {}",
            result.category, result.status, result.version
        );
        if page.query.is_some() {
            let _ = writeln!(output, "- **Relevance:** {}", result.score);
        }
        let _ = writeln!(output, "\n{}\n", result.description);
    }

    match page.next_offset {
        Some(next) => {
            let _ = writeln!(
                output,
                "---\nMore results available. Use `offset: {next}` to see the next page."
            );
        }
        None => output.push_str("---\nEnd of results.\n"),
    }

    output
}

fn bullet_list(output: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
}

/// Formats the full detail of a stable API.
pub fn format_api_detail(api: &StableApi) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}\n", api.name);
    let _ = writeln!(output, "{}\n", api.description);
    let _ = writeln!(output, "- **Slug:** `{}`", api.slug);
    let _ = writeln!(output, "- **Category:** {}", api.category);
    let _ = writeln!(output, "- **Status:** stable");
    let _ = writeln!(output, "- **Version:** {}", api.version);
    if !api.previous_versions.is_empty() {
        let _ = writeln!(
            output,
            "- **Previous versions:** {}",
            api.previous_versions.join(", ")
        );
    }
    let _ = writeln!(output, "- **Authentication:** {}", api.auth_flow);
    let _ = writeln!(output, "- **HTTP methods:** {}", api.http_methods.join(", "));

    output.push_str("\n## Key Endpoints\n\n");
    bullet_list(&mut output, &api.key_endpoints);

    if !api.use_cases.is_empty() {
        output.push_str("\n## Use Cases\n\n");
        bullet_list(&mut output, &api.use_cases);
    }

    if !api.industries.is_empty() {
        let _ = writeln!(output, "\n## Industries\n\n{}", api.industries.join(", "));
    }

    let _ = writeln!(
        output,
        "\n## Links\n\n- Documentation: {}\n- Repository: {}",
        api.documentation_url, api.repository_url
    );

    output
}

/// Formats every category with its nested API summaries.
pub fn format_categories(categories: &[CategoryListing<'_>]) -> String {
    let mut output = String::from("# API Categories\n");

    for category in categories {
        let _ = writeln!(
            output,
            "\n## {} (`{}`)\n\n{}\n",
            category.name, category.id, category.description
        );

        if category.apis.is_empty() {
            output.push_str("_No APIs in this category yet._\n");
            continue;
        }

        for api in &category.apis {
            let _ = writeln!(
                output,
                "- **{}** (`{}`) {} v{}",
                api.name, api.slug, api.status, api.version
            );
        }
    }

    output
}

fn table_row(output: &mut String, label: &str, cells: Vec<String>) {
    let _ = writeln!(output, "| {label} | {} |", cells.join(" | "));
}

/// Formats a comparison as a markdown table, one column per API.
pub fn format_comparison(comparison: &Comparison<'_>) -> String {
    let mut output = String::from("# API Comparison\n\n");

    let header: Vec<&str> = comparison.apis.iter().map(|a| a.name).collect();
    let _ = writeln!(output, "| Attribute | {} |", header.join(" | "));
    let _ = writeln!(output, "|---|{}", "---|".repeat(comparison.apis.len()));

    let apis = &comparison.apis;
    table_row(&mut output, "Slug", apis.iter().map(|a| format!("`{}`", a.slug)).collect());
    table_row(&mut output, "Version", apis.iter().map(|a| a.version.to_string()).collect());
    table_row(&mut output, "Category", apis.iter().map(|a| a.category.to_string()).collect());
    table_row(
        &mut output,
        "Authentication",
        apis.iter().map(|a| a.auth_flow.to_string()).collect(),
    );
    table_row(
        &mut output,
        "HTTP methods",
        apis.iter().map(|a| a.http_methods.join(", ")).collect(),
    );
    table_row(
        &mut output,
        "Industries",
        apis.iter().map(|a| a.industries.join(", ")).collect(),
    );
    table_row(
        &mut output,
        "Endpoints",
        apis.iter().map(|a| a.endpoint_count.to_string()).collect(),
    );

    output
}

/// Formats use cases grouped by industry.
pub fn format_use_cases(index: &UseCaseIndex<'_>) -> String {
    let mut output = match &index.filter {
        Some(filter) => format!("# Use Cases for industries matching \"{filter}\"\n"),
        None => String::from("# Use Cases by Industry\n"),
    };

    for group in &index.industries {
        let _ = writeln!(output, "\n## {}\n", group.industry);
        for api in &group.apis {
            let _ = writeln!(output, "### {} (`{}`)\n", api.name, api.slug);
            bullet_list(&mut output, api.use_cases);
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::categories::list_categories;
    use crate::lookup::{compare, get_api};
    use crate::search::{search, SearchParams};
    use crate::use_cases::use_cases_by_industry;

    #[test]
    fn test_format_search_page_with_next_offset() {
        let catalog = Catalog::builtin();
        let page = search(
            &catalog,
            &SearchParams {
                query: Some("swap".to_string()),
                limit: 1,
                ..SearchParams::default()
            },
        );
        let text = format_search_page(&page);

        assert!(text.starts_with("# API Search Results"));
        assert!(text.contains("Filters: query: `swap`"));
        assert!(text.contains("Showing 1-1 of 2 APIs"));
        assert!(text.contains("**Relevance:**"));
        assert!(text.contains("Use `offset: 1` to see the next page."));
    }

    #[test]
    fn test_format_search_page_empty() {
        let catalog = Catalog::builtin();
        let page = search(
            &catalog,
            &SearchParams {
                query: Some("satellite".to_string()),
                ..SearchParams::default()
            },
        );
        let text = format_search_page(&page);

        assert!(text.contains("No APIs found matching the given criteria."));
        assert!(!text.contains("past the end"));
    }

    #[test]
    fn test_format_search_page_without_query_hides_relevance() {
        let catalog = Catalog::builtin();
        let page = search(&catalog, &SearchParams::default());
        let text = format_search_page(&page);

        assert!(!text.contains("Filters:"));
        assert!(!text.contains("**Relevance:**"));
    }

    #[test]
    fn test_format_search_page_offset_past_end() {
        let catalog = Catalog::builtin();
        let page = search(
            &catalog,
            &SearchParams {
                offset: 500,
                ..SearchParams::default()
            },
        );
        let text = format_search_page(&page);

        assert!(text.contains("Offset 500 is past the end"));
    }

    #[test]
    fn test_format_api_detail() {
        let catalog = Catalog::builtin();
        let api = get_api(&catalog, "sim-swap").unwrap();
        let text = format_api_detail(api);

        assert!(text.starts_with("# SIM Swap\n"));
        assert!(text.contains("- **Slug:** `sim-swap`"));
        assert!(text.contains("- **Previous versions:** 1.0.0, 0.4.0"));
        assert!(text.contains("## Key Endpoints"));
        assert!(text.contains("- POST /check"));
        assert!(text.contains("Repository: https://github.com/camaraproject/SimSwap"));
    }

    #[test]
    fn test_format_categories() {
        let catalog = Catalog::builtin();
        let text = format_categories(&list_categories(&catalog));

        assert!(text.contains("## Authentication & Fraud Prevention (`auth-fraud`)"));
        assert!(text.contains("- **SIM Swap** (`sim-swap`) stable v2.0.0"));
        assert!(text.contains("- **WebRTC** (`webrtc`) initial v0.2.0"));
    }

    #[test]
    fn test_format_comparison_table() {
        let catalog = Catalog::builtin();
        let comparison = compare(&catalog, &["sim-swap", "quality-on-demand"]).unwrap();
        let text = format_comparison(&comparison);

        assert!(text.contains("| Attribute | SIM Swap | Quality on Demand |"));
        assert!(text.contains("|---|---|---|"));
        assert!(text.contains("| Slug | `sim-swap` | `quality-on-demand` |"));
        assert!(text.contains("| Endpoints | 2 | 4 |"));
    }

    #[test]
    fn test_format_use_cases_with_filter() {
        let catalog = Catalog::builtin();
        let index = use_cases_by_industry(&catalog, Some("gaming")).unwrap();
        let text = format_use_cases(&index);

        assert!(text.starts_with("# Use Cases for industries matching \"gaming\""));
        assert!(text.contains("## Gaming"));
        assert!(text.contains("### Quality on Demand (`quality-on-demand`)"));
    }

    #[test]
    fn test_formatters_are_deterministic() {
        let catalog = Catalog::builtin();
        let a = format_categories(&list_categories(&catalog));
        let b = format_categories(&list_categories(&catalog));
        assert_eq!(a, b);
    }
}
