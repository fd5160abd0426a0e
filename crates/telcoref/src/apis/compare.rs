use crate::prelude::*;
use prettytable::{Cell, Row, Table};
use telcoref_core::catalog::Catalog;
use telcoref_core::lookup::{compare, Comparison, MAX_COMPARE, MIN_COMPARE};

use super::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct CompareOptions {
    /// Slugs of the APIs to compare
    #[arg(value_name = "SLUG", required = true)]
    pub slugs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: CompareOptions, catalog: &Catalog) -> Result<()> {
    if !(MIN_COMPARE..=MAX_COMPARE).contains(&options.slugs.len()) {
        return Err(Error::InvalidArgument(format!(
            "compare takes between {MIN_COMPARE} and {MAX_COMPARE} slugs, got {}",
            options.slugs.len()
        ))
        .into());
    }

    let comparison = compare(catalog, &options.slugs)?;

    if options.json {
        output_json(&comparison)
    } else {
        comparison_table(&comparison).printstd();
        Ok(())
    }
}

fn row(label: &str, cells: impl Iterator<Item = String>) -> Row {
    let mut row = Row::new(vec![Cell::new(label)]);
    for cell in cells {
        row.add_cell(Cell::new(&cell));
    }
    row
}

/// One column per API, one row per compared attribute.
fn comparison_table(comparison: &Comparison<'_>) -> Table {
    let apis = &comparison.apis;
    let mut table = crate::prelude::new_table();

    table.add_row(row("", apis.iter().map(|a| a.name.to_string())));
    table.add_row(row("Slug", apis.iter().map(|a| a.slug.to_string())));
    table.add_row(row("Version", apis.iter().map(|a| a.version.to_string())));
    table.add_row(row("Category", apis.iter().map(|a| a.category.to_string())));
    table.add_row(row("Authentication", apis.iter().map(|a| a.auth_flow.to_string())));
    table.add_row(row("HTTP methods", apis.iter().map(|a| a.http_methods.join(", "))));
    table.add_row(row("Industries", apis.iter().map(|a| a.industries.join(", "))));
    table.add_row(row("Endpoints", apis.iter().map(|a| a.endpoint_count.to_string())));

    table
}
