use crate::prelude::{print, *};
use colored::Colorize;
use telcoref_core::catalog::{Catalog, StableApi};
use telcoref_core::lookup::find_api;

use super::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// API slug, e.g. sim-swap
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: GetOptions, catalog: &Catalog) -> Result<()> {
    let api = find_api(catalog, &options.slug)?;

    if options.json {
        output_json(api)
    } else {
        print!("{}", format_detail_text(api));
        Ok(())
    }
}

fn section(result: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    result.push_str(&format!("\n{}\n", title.bright_yellow().bold()));
    for item in items {
        result.push_str(&format!("  - {}\n", item));
    }
}

fn format_detail_text(api: &StableApi) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{} {}\n",
        api.name.bright_cyan().bold(),
        format!("v{}", api.version).bright_white()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!("\n{}\n\n", api.description));
    result.push_str(&format!("  {}: {}\n", "Slug".green(), api.slug));
    result.push_str(&format!("  {}: {}\n", "Category".green(), api.category));
    if !api.previous_versions.is_empty() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Previous versions".green(),
            api.previous_versions.join(", ")
        ));
    }
    result.push_str(&format!("  {}: {}\n", "Authentication".green(), api.auth_flow));
    result.push_str(&format!(
        "  {}: {}\n",
        "HTTP methods".green(),
        api.http_methods.join(", ")
    ));

    section(&mut result, "Key endpoints", &api.key_endpoints);
    section(&mut result, "Use cases", &api.use_cases);
    section(&mut result, "Industries", &api.industries);

    result.push_str(&format!("\n{}\n", "Links".bright_yellow().bold()));
    result.push_str(&format!(
        "  {}: {}\n",
        "Documentation".green(),
        api.documentation_url.cyan().underline()
    ));
    result.push_str(&format!(
        "  {}: {}\n",
        "Repository".green(),
        api.repository_url.cyan().underline()
    ));

    result.push_str(&format!(
        "\n  {}: {}\n\n",
        "Snippet".green(),
        format!("telcoref apis snippet {} --language curl", api.slug).cyan()
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use telcoref_core::lookup::get_api;

    #[test]
    fn test_format_detail_text() {
        let catalog = Catalog::builtin();
        let api = get_api(&catalog, "quality-on-demand").unwrap();

        let formatted = format_detail_text(api);

        assert!(formatted.contains("Quality on Demand"));
        assert!(formatted.contains("POST /sessions - create a QoS session"));
        assert!(formatted.contains("telcoref apis snippet quality-on-demand --language curl"));
    }

    #[test]
    fn test_run_unknown_slug_lists_valid_slugs() {
        let catalog = Catalog::builtin();
        let err = run(
            GetOptions {
                slug: "webrtc".to_string(),
                json: false,
            },
            &catalog,
        )
        .unwrap_err();

        assert!(err.to_string().contains("API 'webrtc' not found"));
        assert!(err.to_string().contains("sim-swap"));
    }
}
