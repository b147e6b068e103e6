use crate::prelude::{eprintln, println, *};
use catalog_core::category::{CategoryFilter, CATEGORY_TABS};
use catalog_core::controller::{Applied, Controller, FetchRequest};
use catalog_core::page::{validate_page_size, PageState, DEFAULT_PAGE_SIZE};
use catalog_core::render::{render_view, CatalogView};
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::view::format_view_text;
use super::{create_source, execute};
use crate::config::CatalogConfig;
use crate::source::ProductSource;

const HELP: &str = "\
Commands:
  n, next              Next page
  p, prev              Previous page
  c, category <name>   Select a category tab by name or number (all clears the filter)
  s, size <n>          Change the page size (20, 60, 100)
  r, refresh           Fetch the current page again
  h, help              Show this help
  q, quit              Leave the catalog";

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BrowseOptions {
    /// Initial category: all, furniture, fragrances, womens-bags, sports-accessories
    #[arg(short, long, env = "CATALOG_CATEGORY", default_value = "all")]
    pub category: String,

    /// Initial number of products per page
    #[arg(short, long, env = "CATALOG_LIMIT", default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,
}

/// A single keyboard command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Category(String),
    PageSize(u32),
    Refresh,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, Error> {
    let mut parts = input.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    match (name.as_str(), arg) {
        ("n" | "next", None) => Ok(Command::Next),
        ("p" | "prev" | "previous", None) => Ok(Command::Prev),
        ("r" | "refresh", None) => Ok(Command::Refresh),
        ("h" | "help" | "?", None) => Ok(Command::Help),
        ("q" | "quit" | "exit", None) => Ok(Command::Quit),
        ("c" | "category", Some(category)) => Ok(Command::Category(tab_slug(category))),
        ("s" | "size", Some(size)) => size
            .parse::<u32>()
            .map(Command::PageSize)
            .map_err(|_| Error::Generic(f!("Invalid page size: {size}"))),
        _ => Err(Error::InvalidCommand(input.to_string())),
    }
}

/// Resolve a 1-indexed tab number to its slug; anything else is taken verbatim
fn tab_slug(arg: &str) -> String {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| CATEGORY_TABS.get(idx))
        .map(|tab| tab.to_string())
        .unwrap_or_else(|| arg.to_lowercase())
}

/// Interactive session: a controller plus the source it fetches from
pub struct Session<S> {
    source: S,
    controller: Controller,
}

impl<S: ProductSource> Session<S> {
    pub fn new(source: S, controller: Controller) -> Self {
        Self { source, controller }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn view(&self) -> CatalogView {
        render_view(self.controller())
    }

    /// Load the initial page
    pub async fn start(&mut self) -> Applied {
        let request = self.controller.start();
        self.execute(request).await
    }

    /// Apply a command to the controller, returning the request it requires
    fn plan(&mut self, command: &Command) -> Result<Option<FetchRequest>> {
        let request = match command {
            Command::Next => self.controller.next(),
            Command::Prev => self.controller.prev(),
            Command::Category(category) => self.controller.select_category(category),
            Command::PageSize(size) => self.controller.set_page_size(*size)?,
            Command::Refresh => Some(self.controller.refresh()),
            Command::Help | Command::Quit => None,
        };
        Ok(request)
    }

    async fn execute(&mut self, request: FetchRequest) -> Applied {
        execute(&self.source, &mut self.controller, request).await
    }

    /// Plan and execute a command. `None` when the command was a no-op.
    pub async fn dispatch(&mut self, command: &Command) -> Result<Option<Applied>> {
        match self.plan(command)? {
            Some(request) => Ok(Some(self.execute(request).await)),
            None => Ok(None),
        }
    }
}

pub async fn run(options: BrowseOptions, config: &CatalogConfig, global: crate::Global) -> Result<()> {
    let source = create_source(config)?;
    let controller = Controller::new(
        CategoryFilter::from_slug(&options.category),
        PageState {
            limit: validate_page_size(options.limit)?,
            ..PageState::default()
        },
    );
    let mut session = Session::new(source, controller);

    println!("{}", "Loading products...".yellow());
    session.start().await;
    print!("{}", format_view_text(&session.view()));
    println!("{}", "Type `help` for commands.".bright_black());

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = match parse_command(trimmed) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            _ => {}
        }

        match session.dispatch(&command).await {
            Ok(Some(_)) => print!("{}", format_view_text(&session.view())),
            Ok(None) => {
                if global.verbose {
                    println!("{}", "Nothing to do.".bright_black());
                }
            }
            Err(err) => eprintln!("{}", err.to_string().red()),
        }
    }

    Ok(())
}
