use crate::prelude::{println, *};
use telcoref_core::catalog::Catalog;

pub mod categories;
pub mod compare;
pub mod get;
pub mod search;
pub mod snippet;
pub mod use_cases;

#[derive(Debug, clap::Parser)]
#[command(name = "apis")]
#[command(about = "Query the telecom network API catalog")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search APIs by keyword, category and status
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Show the full reference of a stable API
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// List categories and the APIs in each
    #[clap(name = "categories")]
    Categories(categories::CategoriesOptions),

    /// Compare 2 to 5 stable APIs side by side
    #[clap(name = "compare")]
    Compare(compare::CompareOptions),

    /// Show use cases grouped by industry
    #[clap(name = "use-cases")]
    UseCases(use_cases::UseCasesOptions),

    /// Generate a client code snippet for a stable API
    #[clap(name = "snippet")]
    Snippet(snippet::SnippetOptions),
}

pub fn run(app: App, global: crate::Global, catalog: &Catalog) -> Result<()> {
    if global.verbose {
        println!(
            "Catalog: {} stable and {} initial APIs",
            catalog.stable().count(),
            catalog.initial().count()
        );
        println!();
    }

    match app.command {
        Commands::Search(options) => search::run(options, catalog),
        Commands::Get(options) => get::run(options, catalog),
        Commands::Categories(options) => categories::run(options, catalog),
        Commands::Compare(options) => compare::run(options, catalog),
        Commands::UseCases(options) => use_cases::run(options, catalog),
        Commands::Snippet(options) => snippet::run(options, catalog),
    }
}

/// Print any serializable value as pretty JSON.
pub fn output_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}
