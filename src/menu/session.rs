//! The interactive menu loop.

use super::prompt::{ask_parsed, parse_rating, parse_year, Prompter};
use super::render::{render_table, EMPTY_CATALOG};
use crate::catalog::{Catalog, Listing, MovieRecord};
use crate::config::MenuConfig;
use crate::error::CatalogError;
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, info};

const MENU: &str = "\n--- Filmkatalog ---\n\
1. Add movie\n\
2. List movies\n\
3. Search movies\n\
4. Remove movie\n\
5. Exit";

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    List,
    Search,
    Remove,
    Exit,
}

impl MenuAction {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::Add),
            "2" => Some(MenuAction::List),
            "3" => Some(MenuAction::Search),
            "4" => Some(MenuAction::Remove),
            "5" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose exit.
    Exit,
    /// The input source closed.
    InputClosed,
}

/// Menu session over a borrowed catalog. Loading before and saving after the
/// session is the caller's job.
pub struct MenuSession<'a, P, W> {
    catalog: &'a mut Catalog,
    prompter: P,
    out: W,
    config: MenuConfig,
}

impl<'a, P: Prompter, W: Write> MenuSession<'a, P, W> {
    pub fn new(catalog: &'a mut Catalog, prompter: P, out: W, config: MenuConfig) -> Self {
        Self {
            catalog,
            prompter,
            out,
            config,
        }
    }

    /// Run until the user exits or input closes. Only output failures are
    /// returned as errors.
    pub fn run(&mut self) -> Result<SessionEnd, CatalogError> {
        loop {
            self.say(MENU)?;
            let choice = match self.prompter.ask("Your choice") {
                Ok(choice) => choice,
                Err(CatalogError::Input(reason)) => {
                    info!(%reason, "Input closed, leaving menu");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            };

            let Some(action) = MenuAction::parse(&choice) else {
                self.error(format!("Invalid choice '{}'. Please enter 1-5.", choice.trim()))?;
                continue;
            };
            debug!(?action, "Menu action");

            let result = match action {
                MenuAction::Add => self.add(),
                MenuAction::List => self.list(),
                MenuAction::Search => self.search(),
                MenuAction::Remove => self.remove(),
                MenuAction::Exit => return Ok(SessionEnd::Exit),
            };

            match result {
                Ok(()) => {}
                Err(CatalogError::Input(reason)) => {
                    info!(%reason, "Input closed, leaving menu");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e @ CatalogError::Output(_)) => return Err(e),
                Err(e) => self.error(e)?,
            }
        }
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    fn add(&mut self) -> Result<(), CatalogError> {
        let title = self.prompter.ask("Title")?.trim().to_string();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if self.catalog.contains(&title) {
            return Err(CatalogError::AlreadyExists(title));
        }
        let director = self.prompter.ask("Director")?.trim().to_string();
        let year = self.ask_number("Year", parse_year)?;
        let genre = self.prompter.ask("Genre")?.trim().to_string();
        let rating = self.ask_number("Rating (1-5)", parse_rating)?;

        self.catalog
            .add(title.clone(), MovieRecord::new(director, year, genre, rating))?;
        self.success(format!("'{}' was added to the catalog.", title))
    }

    fn list(&mut self) -> Result<(), CatalogError> {
        let rendered = match self.catalog.list() {
            Listing::Empty => EMPTY_CATALOG.to_string(),
            Listing::Entries(entries) => render_table(&entries),
        };
        self.say(rendered)
    }

    fn search(&mut self) -> Result<(), CatalogError> {
        let query = self.prompter.ask("Search title")?;
        let query = query.trim();
        let hits = self.catalog.search(query);
        let rendered = if hits.is_empty() {
            format!("No movies found matching '{}'.", query)
        } else {
            render_table(&hits)
        };
        self.say(rendered)
    }

    fn remove(&mut self) -> Result<(), CatalogError> {
        let title = self.prompter.ask("Title to remove")?.trim().to_string();
        self.catalog.remove(&title)?;
        self.success(format!("'{}' was removed from the catalog.", title))
    }

    fn ask_number<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, String>,
    ) -> Result<T, CatalogError> {
        ask_parsed(
            &mut self.prompter,
            &mut self.out,
            prompt,
            self.config.max_attempts,
            parse,
        )
    }

    fn say(&mut self, line: impl Display) -> Result<(), CatalogError> {
        writeln!(self.out, "{}", line).map_err(|e| CatalogError::Output(e.to_string()))
    }

    fn success(&mut self, line: String) -> Result<(), CatalogError> {
        if self.config.color {
            let colored = line.green().to_string();
            self.say(colored)
        } else {
            self.say(line)
        }
    }

    fn error(&mut self, line: impl Display) -> Result<(), CatalogError> {
        if self.config.color {
            let colored = line.to_string().red().to_string();
            self.say(colored)
        } else {
            self.say(line)
        }
    }
}
