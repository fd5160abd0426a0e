use crate::prelude::{print, *};
use colored::Colorize;
use telcoref_core::catalog::Catalog;
use telcoref_core::use_cases::{use_cases_by_industry, UseCaseIndex};

use super::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct UseCasesOptions {
    /// Only industries containing this text (case-insensitive)
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: UseCasesOptions, catalog: &Catalog) -> Result<()> {
    let index = use_cases_by_industry(catalog, options.industry.as_deref())?;

    if options.json {
        output_json(&index)
    } else {
        print!("{}", format_use_cases_text(&index));
        Ok(())
    }
}

fn format_use_cases_text(index: &UseCaseIndex<'_>) -> String {
    let mut result = String::new();

    for group in &index.industries {
        result.push_str(&format!(
            "\n{} {}\n",
            group.industry.bright_cyan().bold(),
            format!("({} APIs)", group.apis.len()).bright_black()
        ));
        for api in &group.apis {
            result.push_str(&format!(
                "  {} {}\n",
                api.name.white().bold(),
                format!("({})", api.slug).bright_black()
            ));
            for use_case in api.use_cases {
                result.push_str(&format!("    - {}\n", use_case));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_use_cases_text() {
        let catalog = Catalog::builtin();
        let index = use_cases_by_industry(&catalog, Some("gaming")).unwrap();

        let formatted = format_use_cases_text(&index);

        assert!(formatted.contains("Gaming"));
        assert!(formatted.contains("Quality on Demand"));
    }

    #[test]
    fn test_run_unknown_industry() {
        let catalog = Catalog::builtin();
        let err = run(
            UseCasesOptions {
                industry: Some("aerospace".to_string()),
                json: false,
            },
            &catalog,
        )
        .unwrap_err();

        assert!(err.to_string().contains("No industries match 'aerospace'"));
    }
}
