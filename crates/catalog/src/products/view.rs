use crate::prelude::*;
use catalog_core::render::{CatalogView, ProductCard};
use colored::Colorize;

/// Convert a catalog view to a pretty JSON string
pub fn format_view_json(view: &CatalogView) -> Result<String> {
    serde_json::to_string_pretty(view).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

pub fn format_price(amount: f64) -> String {
    f!("${amount:.2}")
}

fn format_tabs(view: &CatalogView) -> String {
    view.tabs
        .iter()
        .map(|tab| {
            if tab.selected {
                f!("[{}]", tab.slug).bright_yellow().bold().to_string()
            } else {
                tab.slug.bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_page_sizes(view: &CatalogView) -> String {
    view.page_sizes
        .iter()
        .map(|option| {
            let label = f!("{} / items", option.size);
            if option.selected {
                f!("[{label}]").bright_yellow().bold().to_string()
            } else {
                label.bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_card(number: u32, card: &ProductCard) -> String {
    let mut result = String::new();

    result.push_str(&f!(
        "\n{} {}\n",
        f!("[{number}]").yellow().bold(),
        card.title.white().bold()
    ));
    result.push_str(&f!(
        "    {}: {} {}\n",
        "Price".green(),
        format_price(card.price).bright_green().bold(),
        format_price(card.reference_price).bright_black().strikethrough()
    ));
    result.push_str(&f!(
        "    {}: {}\n",
        "Image".green(),
        card.thumbnail.cyan().underline()
    ));
    result.push_str(&f!(
        "    {}: {} | {}: {}\n",
        "ID".green(),
        card.id.to_string().bright_white(),
        "Link".green(),
        card.link.cyan()
    ));

    result
}

/// Render the catalog screen as colored text
pub fn format_view_text(view: &CatalogView) -> String {
    let mut result = String::new();
    let bar = &view.pagination;

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!(
            "PRODUCTS: {} (Page {} of {})",
            view.category.to_uppercase(),
            bar.current_page,
            bar.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&f!("\n{}: {}\n", "Categories".green(), format_tabs(view)));
    result.push_str(&f!("{}: {}\n", "Page size".green(), format_page_sizes(view)));

    for (idx, card) in view.cards.iter().enumerate() {
        result.push_str(&format_card(bar.skip + idx as u32 + 1, card));
    }

    if view.loading {
        result.push_str(&f!("\n{}\n", "Loading products...".yellow()));
    } else if view.cards.is_empty() {
        result.push_str(&f!("\n{}\n", "No products on this page.".yellow()));
    }

    // Pagination bar
    let prev = if bar.prev_enabled {
        "< Previous".bright_white().bold()
    } else {
        "< Previous".bright_black().dimmed()
    };
    let next = if bar.next_enabled {
        "Next >".bright_white().bold()
    } else {
        "Next >".bright_black().dimmed()
    };

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&f!(
        "{}   {}   {}\n",
        prev,
        f!("Page {} of {}", bar.current_page, bar.total_pages).bright_cyan(),
        next
    ));
    result.push_str(&f!(
        "{}\n",
        f!("{} products total", bar.total).bright_black()
    ));

    result
}
