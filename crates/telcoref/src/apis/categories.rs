use crate::prelude::{println, *};
use colored::Colorize;
use telcoref_core::catalog::Catalog;
use telcoref_core::categories::{list_categories, CategoryListing};

use super::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct CategoriesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: CategoriesOptions, catalog: &Catalog) -> Result<()> {
    let categories = list_categories(catalog);

    if options.json {
        return output_json(&categories);
    }

    for category in &categories {
        print_category(category);
    }

    Ok(())
}

fn print_category(category: &CategoryListing<'_>) {
    println!(
        "\n{} {} {}",
        category.name.bright_cyan().bold(),
        format!("({})", category.id).bright_black(),
        format!("{} APIs", category.api_count).yellow()
    );
    println!("{}", category.description);

    if category.apis.is_empty() {
        println!("{}", "No APIs in this category yet.".yellow());
        return;
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Name", "Slug", "Status", "Version"]);
    for api in &category.apis {
        table.add_row(prettytable::row![api.name, api.slug, api.status, api.version]);
    }
    table.printstd();
}
