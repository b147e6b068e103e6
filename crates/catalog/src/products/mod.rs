use crate::prelude::{println, *};
use catalog_core::controller::{Applied, Controller, FetchRequest};

use crate::config::CatalogConfig;
use crate::source::{HttpProductSource, ProductSource};

pub mod browse;
pub mod categories;
#[cfg(test)]
pub mod fake;
pub mod list;
pub mod view;

#[derive(Debug, clap::Parser)]
#[command(name = "products")]
#[command(about = "Browse the product catalog")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch and print a single page of products
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Page through products interactively
    #[clap(name = "browse")]
    Browse(browse::BrowseOptions),

    /// List the category tabs
    #[clap(name = "categories")]
    Categories(categories::CategoriesOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = CatalogConfig::from_env().with_overrides(global.base_url.clone());

    if global.verbose {
        println!("Catalog API Base: {}", config.api_base());
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, &config, global).await,
        Commands::Browse(options) => browse::run(options, &config, global).await,
        Commands::Categories(options) => categories::run(options),
    }
}

pub fn create_source(config: &CatalogConfig) -> Result<HttpProductSource> {
    HttpProductSource::new(config)
}

/// Execute a request and hand the outcome to the controller
///
/// Fetch failures are logged and leave the previous results in place.
pub async fn execute<S>(source: &S, controller: &mut Controller, request: FetchRequest) -> Applied
where
    S: ProductSource + ?Sized,
{
    let result = source.fetch(&request.query).await;
    let applied = controller.apply(request.id, result);

    match &applied {
        Applied::Updated => log::debug!(
            "request {} applied: {} products",
            request.id.value(),
            controller.results().len()
        ),
        Applied::Failed(err) => log::error!("{err}"),
        Applied::Stale => log::debug!("request {} superseded", request.id.value()),
    }

    applied
}
