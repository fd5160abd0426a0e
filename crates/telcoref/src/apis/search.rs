use crate::prelude::{print, *};
use colored::Colorize;
use telcoref_core::catalog::{Catalog, Category, Status};
use telcoref_core::search::{search, SearchPage, SearchParams, MAX_LIMIT, MAX_QUERY_LENGTH};

use super::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Keywords to match against name, slug, category, industries, description and use cases
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Only APIs in this category
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Only stable or initial APIs
    #[arg(short, long)]
    pub status: Option<Status>,

    /// Number of results per page
    #[arg(short, long, env = "TELCOREF_LIMIT", default_value = "20")]
    pub limit: usize,

    /// Number of results to skip
    #[arg(short, long, default_value = "0")]
    pub offset: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: SearchOptions, catalog: &Catalog) -> Result<()> {
    if let Some(query) = &options.query {
        if query.chars().count() > MAX_QUERY_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "query must be at most {MAX_QUERY_LENGTH} characters"
            ))
            .into());
        }
    }
    if !(1..=MAX_LIMIT).contains(&options.limit) {
        return Err(
            Error::InvalidArgument(format!("limit must be between 1 and {MAX_LIMIT}")).into(),
        );
    }

    let page = search(
        catalog,
        &SearchParams {
            query: options.query.clone(),
            category: options.category,
            status: options.status,
            limit: options.limit,
            offset: options.offset,
        },
    );

    if options.json {
        output_json(&page)
    } else {
        print!("{}", format_search_text(&page, &options));
        Ok(())
    }
}

/// Command line that repeats this search at another offset.
fn search_command(options: &SearchOptions, offset: usize) -> String {
    let mut command = String::from("telcoref apis search");
    if let Some(query) = &options.query {
        command.push_str(&format!(" '{query}'"));
    }
    if let Some(category) = options.category {
        command.push_str(&format!(" --category {category}"));
    }
    if let Some(status) = options.status {
        command.push_str(&format!(" --status {status}"));
    }
    command.push_str(&format!(" --limit {} --offset {offset}", options.limit));
    command
}

fn format_search_text(page: &SearchPage<'_>, options: &SearchOptions) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("API SEARCH ({} matching)", page.total).bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if page.results.is_empty() {
        result.push_str(&format!("\n{}\n", "No APIs found matching the given criteria.".yellow()));
        return result;
    }

    for (idx, api) in page.results.iter().enumerate() {
        result.push_str(&format!(
            "\n{} {} {}\n",
            format!("[{}]", page.offset + idx + 1).yellow().bold(),
            api.name.white().bold(),
            format!("({})", api.slug).bright_black()
        ));
        result.push_str(&format!(
            "    {}: {} | {}: {} | {}: {}",
            "Category".green(),
            api.category.to_string().bright_white(),
            "Status".green(),
            api.status.to_string().bright_magenta(),
            "Version".green(),
            api.version.bright_white()
        ));
        if page.query.is_some() {
            result.push_str(&format!(
                " | {}: {}",
                "Score".green(),
                api.score.to_string().bright_yellow()
            ));
        }
        result.push('\n');
        result.push_str(&format!("    {}\n", api.description));
    }

    result.push_str(&format!(
        "\n{} {}-{} {} {}\n",
        "Showing".bright_white(),
        page.offset + 1,
        page.offset + page.count,
        "of".bright_white(),
        page.total.to_string().bright_cyan().bold()
    ));

    if let Some(next) = page.next_offset {
        result.push_str(&format!(
            "  {}: {}\n",
            "Next page".green(),
            search_command(options, next).cyan()
        ));
    }
    if let Some(first) = page.results.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Details".green(),
            format!("telcoref apis get {}", first.slug).cyan()
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(query: Option<&str>, limit: usize) -> SearchOptions {
        SearchOptions {
            query: query.map(str::to_string),
            category: None,
            status: None,
            limit,
            offset: 0,
            json: false,
        }
    }

    #[test]
    fn test_search_command() {
        let mut opts = options(Some("fraud"), 5);
        opts.status = Some(Status::Stable);

        assert_eq!(
            search_command(&opts, 5),
            "telcoref apis search 'fraud' --status stable --limit 5 --offset 5"
        );
    }

    #[test]
    fn test_format_search_text_lists_results_and_next_page() {
        let catalog = Catalog::builtin();
        let opts = options(Some("swap"), 1);
        let page = search(
            &catalog,
            &SearchParams {
                query: opts.query.clone(),
                limit: 1,
                ..SearchParams::default()
            },
        );

        let formatted = format_search_text(&page, &opts);

        assert!(formatted.contains("API SEARCH (2 matching)"));
        assert!(formatted.contains("Score"));
        assert!(formatted.contains("telcoref apis search 'swap' --limit 1 --offset 1"));
    }

    #[test]
    fn test_format_search_text_empty() {
        let catalog = Catalog::builtin();
        let opts = options(Some("satellite"), 20);
        let page = search(
            &catalog,
            &SearchParams {
                query: opts.query.clone(),
                ..SearchParams::default()
            },
        );

        let formatted = format_search_text(&page, &opts);
        assert!(formatted.contains("No APIs found matching the given criteria."));
    }

    #[test]
    fn test_run_rejects_limit_out_of_range() {
        let catalog = Catalog::builtin();
        let err = run(options(None, 0), &catalog).unwrap_err();
        assert!(err.to_string().contains("limit must be between 1 and 100"));
    }
}
