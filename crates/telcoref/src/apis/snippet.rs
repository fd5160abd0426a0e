use crate::prelude::{eprintln, print, *};
use colored::Colorize;
use telcoref_core::catalog::Catalog;
use telcoref_core::lookup::find_api;
use telcoref_core::snippets::{generate_snippet, Language};

use super::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct SnippetOptions {
    /// API slug, e.g. quality-on-demand
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Snippet language: javascript, python or curl
    #[arg(short, long, default_value = "javascript")]
    pub language: Language,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: SnippetOptions, catalog: &Catalog) -> Result<()> {
    let api = find_api(catalog, &options.slug)?;
    let snippet = generate_snippet(api, options.language);

    if options.json {
        return output_json(&snippet);
    }

    // Banner on stderr, stdout carries only the code.
    eprintln!(
        "{} {} {}",
        api.name.bright_cyan().bold(),
        format!("({})", snippet.language).bright_black(),
        format!("auth: {}", api.auth_flow).yellow()
    );
    print!("{}", snippet.code);

    Ok(())
}
