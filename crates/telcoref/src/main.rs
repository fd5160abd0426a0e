use crate::prelude::*;
use clap::Parser;
use telcoref_core::catalog::Catalog;

mod apis;
mod error;
mod mcp;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Developer reference for telecom network APIs, served over MCP or queried from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TELCOREF_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Model Context Protocol server
    MCP(crate::mcp::App),

    /// Query the API catalog from the terminal
    Apis(crate::apis::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let catalog = Catalog::builtin();
    catalog.validate().map_err(Error::InvalidCatalog)?;
    log::debug!("loaded catalog with {} records", catalog.records().len());

    match app.command {
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global, catalog).await,
        SubCommands::Apis(sub_app) => crate::apis::run(sub_app, app.global, &catalog),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
