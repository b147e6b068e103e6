use crate::prelude::{println, *};
use catalog_core::category::CategoryFilter;
use catalog_core::controller::{Applied, Controller};
use catalog_core::page::{skip_for_page, validate_page_size, PageState, DEFAULT_PAGE_SIZE};
use catalog_core::render::{render_view, CatalogView};
use colored::Colorize;

use super::view::{format_view_json, format_view_text};
use super::{create_source, execute};
use crate::config::CatalogConfig;
use crate::source::ProductSource;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # First page of every product:
  catalog products list

  # Third page of furniture, 20 per page:
  catalog products list --category furniture --page 3

  # Bigger pages, as JSON:
  catalog products list --limit 100 --json")]
pub struct ListOptions {
    /// Category: all, furniture, fragrances, womens-bags, sports-accessories
    #[arg(short, long, env = "CATALOG_CATEGORY", default_value = "all")]
    pub category: String,

    /// Number of products per page
    #[arg(short, long, env = "CATALOG_LIMIT", default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, config: &CatalogConfig, global: crate::Global) -> Result<()> {
    let source = create_source(config)?;

    if global.verbose {
        println!("Fetching {} products...", options.category);
    }

    let view = list_products_data(&source, &options.category, options.limit, options.page).await?;

    if options.json {
        println!("{}", format_view_json(&view)?);
    } else {
        print!("{}", format_list_text(&view, &options));
    }

    Ok(())
}

/// Fetches a single page of products and returns the rendered view
pub async fn list_products_data<S>(
    source: &S,
    category: &str,
    limit: u32,
    page: u32,
) -> Result<CatalogView>
where
    S: ProductSource + ?Sized,
{
    let limit = validate_page_size(limit)?;
    let mut controller = Controller::new(
        CategoryFilter::from_slug(category),
        PageState {
            total: 0,
            skip: skip_for_page(page, limit),
            limit,
        },
    );

    let request = controller.start();
    match execute(source, &mut controller, request).await {
        Applied::Failed(err) => Err(eyre!("Failed to list products: {err}")),
        _ => Ok(render_view(&controller)),
    }
}

/// Catalog screen followed by the commands that move around it
fn format_list_text(view: &CatalogView, options: &ListOptions) -> String {
    let mut result = format_view_text(view);
    let bar = &view.pagination;
    let base = f!(
        "catalog products list --category {} --limit {}",
        view.category,
        bar.limit
    );

    result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
    if bar.next_enabled {
        result.push_str(&f!(
            "  {}: {}\n",
            "Next page".green(),
            f!("{base} --page {}", bar.current_page + 1).cyan()
        ));
    }
    if bar.prev_enabled {
        result.push_str(&f!(
            "  {}: {}\n",
            "Previous page".green(),
            f!("{base} --page {}", bar.current_page - 1).cyan()
        ));
    }

    result.push_str(&f!(
        "\n{}:\n",
        "To change page size".bright_white().bold()
    ));
    result.push_str(&f!(
        "  {}\n",
        f!(
            "catalog products list --category {} --limit <20|60|100>",
            options.category
        )
        .cyan()
    ));

    result.push_str(&f!(
        "\n{}:\n",
        "To browse interactively".bright_white().bold()
    ));
    result.push_str(&f!(
        "  {}\n",
        f!("catalog products browse --category {}", view.category).cyan()
    ));

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::fake::FakeSource;

    fn options(category: &str, page: u32, limit: u32) -> ListOptions {
        ListOptions {
            category: category.to_string(),
            limit,
            page,
            json: false,
        }
    }

    #[tokio::test]
    async fn test_list_products_data_first_page() {
        let source = FakeSource::with_products(95);

        let view = list_products_data(&source, "all", 20, 1).await.unwrap();

        assert_eq!(view.cards.len(), 20);
        assert_eq!(view.pagination.total_pages, 5);
        assert!(!view.loading);
        assert_eq!(source.queries.lock().unwrap()[0].path(), "/products");
    }

    #[tokio::test]
    async fn test_list_products_data_page_maps_to_skip() {
        let source = FakeSource::with_products(95);

        let view = list_products_data(&source, "furniture", 20, 3).await.unwrap();

        let queries = source.queries.lock().unwrap();
        assert_eq!(queries[0].skip, 40);
        assert_eq!(queries[0].path(), "/products/category/furniture");
        assert_eq!(view.pagination.current_page, 3);
        assert_eq!(view.cards[0].id, 41);
    }

    #[tokio::test]
    async fn test_list_products_data_failure() {
        let source = FakeSource::failing();

        let result = list_products_data(&source, "all", 20, 1).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_products_data_zero_limit() {
        let source = FakeSource::with_products(5);

        let result = list_products_data(&source, "all", 0, 1).await;

        assert!(result.is_err());
        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_format_list_text_middle_page() {
        let source = FakeSource::with_products(95);
        let view = list_products_data(&source, "all", 20, 2).await.unwrap();

        let formatted = format_list_text(&view, &options("all", 2, 20));

        assert!(formatted.contains("catalog products list --category all --limit 20 --page 3"));
        assert!(formatted.contains("catalog products list --category all --limit 20 --page 1"));
        assert!(formatted.contains("To change page size"));
        assert!(formatted.contains("catalog products browse --category all"));
    }

    #[tokio::test]
    async fn test_format_list_text_last_page() {
        let source = FakeSource::with_products(95);
        let view = list_products_data(&source, "all", 20, 5).await.unwrap();

        let formatted = format_list_text(&view, &options("all", 5, 20));

        assert!(!formatted.contains("Next page"));
        assert!(formatted.contains("Previous page"));
        assert!(formatted.contains("Page 5 of 5"));
    }

    #[tokio::test]
    async fn test_format_list_text_single_page() {
        let source = FakeSource::with_products(5);
        let view = list_products_data(&source, "all", 20, 1).await.unwrap();

        let formatted = format_list_text(&view, &options("all", 1, 20));

        assert!(!formatted.contains("Next page"));
        assert!(!formatted.contains("Previous page"));
    }
}
