use crate::prelude::{println, *};
use catalog_core::category::{CategoryFilter, CATEGORY_TABS};
use catalog_core::page::DEFAULT_PAGE_SIZE;
use catalog_core::product::ProductQuery;
use prettytable::{Cell, Row};
use serde::Serialize;

#[derive(Debug, clap::Args, Serialize, serde::Deserialize, Clone)]
pub struct CategoriesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A category tab and the request path it selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub number: usize,
    pub slug: String,
    pub path: String,
}

pub fn run(options: CategoriesOptions) -> Result<()> {
    let entries = categories_data();

    if options.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        format_categories_table(&entries).printstd();
    }

    Ok(())
}

pub fn categories_data() -> Vec<CategoryEntry> {
    CATEGORY_TABS
        .iter()
        .enumerate()
        .map(|(idx, tab)| CategoryEntry {
            number: idx + 1,
            slug: tab.to_string(),
            path: ProductQuery {
                category: CategoryFilter::from_slug(tab),
                limit: DEFAULT_PAGE_SIZE,
                skip: 0,
            }
            .path(),
        })
        .collect()
}

fn format_categories_table(entries: &[CategoryEntry]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(Row::new(vec![
        Cell::new("#").style_spec("b"),
        Cell::new("CATEGORY").style_spec("b"),
        Cell::new("REQUEST PATH").style_spec("b"),
    ]));
    for entry in entries {
        table.add_row(Row::new(vec![
            Cell::new(&entry.number.to_string()),
            Cell::new(&entry.slug),
            Cell::new(&entry.path),
        ]));
    }
    table
}
