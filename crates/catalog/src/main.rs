use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod prelude;
mod products;
mod source;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse a paginated, filterable product catalog from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Products API base URL (overrides CATALOG_BASE_URL)
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "CATALOG_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Product catalog operations
    Products(crate::products::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Products(sub_app) => crate::products::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
