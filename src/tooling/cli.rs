//! CLI Tooling
//!
//! Command-line interface for the catalog. Without a subcommand the
//! interactive menu runs; the subcommands run a single operation against the
//! catalog file.

use crate::catalog::{Catalog, Listing, LoadOutcome, MovieRecord, Rating};
use crate::config::{ConfigLoader, FilmkatalogConfig};
use crate::error::CatalogError;
use crate::menu::render::{render_json, render_table, EMPTY_CATALOG};
use crate::menu::{MenuSession, Prompter, SessionEnd, TerminalPrompter};
use crate::storage::{CatalogStorage, JsonFileStorage};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Filmkatalog - keep track of the movies you have seen
#[derive(Parser, Debug)]
#[command(name = "filmkatalog")]
#[command(about = "Single-user movie catalog with a text menu and JSON persistence")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (overrides catalog.file from configuration)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colored menu output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// List all movies
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Search movies by title (case-insensitive substring)
    Search {
        /// Part of the title to look for
        query: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Add a movie
    Add {
        /// Movie title
        title: String,
        /// Director
        #[arg(long, default_value = "")]
        director: String,
        /// Release year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        /// Genre
        #[arg(long, default_value = "")]
        genre: String,
        /// Rating from 1 to 5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// Remove a movie by exact title
    Remove {
        /// Movie title
        title: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Load configuration (from `--config` or the standard sources) and apply
    /// the flag overrides on top.
    pub fn resolve_config(&self, working_dir: &Path) -> Result<FilmkatalogConfig, CatalogError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(working_dir)?,
        };
        self.apply_overrides(&mut config);
        config.validate().map_err(CatalogError::ConfigError)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut FilmkatalogConfig) {
        if let Some(file) = &self.file {
            config.catalog.file = file.clone();
        }
        if self.no_color {
            config.menu.color = false;
            config.logging.color = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

/// Executes commands against one catalog storage.
pub struct CliContext {
    config: FilmkatalogConfig,
    storage: Arc<dyn CatalogStorage>,
}

impl CliContext {
    /// Context backed by the configured catalog file, resolved against
    /// `working_dir`.
    pub fn new(config: FilmkatalogConfig, working_dir: &Path) -> Self {
        let path = config.catalog.resolve_file(working_dir);
        Self::with_storage(config, Arc::new(JsonFileStorage::new(path)))
    }

    pub fn with_storage(config: FilmkatalogConfig, storage: Arc<dyn CatalogStorage>) -> Self {
        Self { config, storage }
    }

    pub fn storage(&self) -> &dyn CatalogStorage {
        self.storage.as_ref()
    }

    /// Execute a command and return the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, CatalogError> {
        match command {
            Commands::Menu => self.run_menu(TerminalPrompter::new(), std::io::stdout()),
            Commands::List { format } => self.handle_list(*format),
            Commands::Search { query, format } => self.handle_search(query, *format),
            Commands::Add {
                title,
                director,
                year,
                genre,
                rating,
            } => self.handle_add(title, director, *year, genre, *rating),
            Commands::Remove { title } => self.handle_remove(title),
        }
    }

    /// Load, run the menu until exit, then save.
    ///
    /// A failed load is reported and the session starts empty. When the load
    /// lost data (unreadable file, rejected records) the stored document is
    /// moved aside first, so the exit save cannot replace it; if that move
    /// fails the menu does not start. The catalog is saved even when the
    /// session ends with an output error.
    pub fn run_menu<P: Prompter, W: Write>(
        &self,
        prompter: P,
        mut out: W,
    ) -> Result<String, CatalogError> {
        let mut catalog = Catalog::new();
        let outcome = catalog.load(self.storage());
        writeln!(out, "{}", outcome.message()).map_err(|e| CatalogError::Output(e.to_string()))?;
        if outcome.is_lossy() {
            if let Some(kept) = self.storage.quarantine()? {
                warn!(location = %self.storage.location(), kept = %kept, "Kept unreadable catalog");
                writeln!(out, "The previous catalog was kept as {}.", kept)
                    .map_err(|e| CatalogError::Output(e.to_string()))?;
            }
        }

        let ended = MenuSession::new(&mut catalog, prompter, out, self.config.menu.clone()).run();
        let saved = catalog.save(self.storage());

        let end = ended?;
        if end == SessionEnd::InputClosed {
            info!("Menu input closed; saving and exiting");
        }
        let count = saved?;
        Ok(format!(
            "Saved {} movie(s) to {}.",
            count,
            self.storage.location()
        ))
    }

    fn handle_list(&self, format: OutputFormat) -> Result<String, CatalogError> {
        let catalog = self.load_for_read()?;
        match (catalog.list(), format) {
            (Listing::Empty, OutputFormat::Text) => Ok(EMPTY_CATALOG.to_string()),
            (Listing::Empty, OutputFormat::Json) => to_json(&[]),
            (Listing::Entries(entries), OutputFormat::Text) => Ok(render_table(&entries)),
            (Listing::Entries(entries), OutputFormat::Json) => to_json(&entries),
        }
    }

    fn handle_search(&self, query: &str, format: OutputFormat) -> Result<String, CatalogError> {
        let catalog = self.load_for_read()?;
        let hits = catalog.search(query);
        match format {
            OutputFormat::Json => to_json(&hits),
            OutputFormat::Text if hits.is_empty() => {
                Ok(format!("No movies found matching '{}'.", query))
            }
            OutputFormat::Text => Ok(render_table(&hits)),
        }
    }

    fn handle_add(
        &self,
        title: &str,
        director: &str,
        year: i32,
        genre: &str,
        rating: u8,
    ) -> Result<String, CatalogError> {
        let mut catalog = self.load_for_write()?;
        let rating = Rating::new(i64::from(rating))?;
        catalog.add(title.trim(), MovieRecord::new(director, year, genre, rating))?;
        catalog.save(self.storage())?;
        Ok(format!("'{}' was added to the catalog.", title.trim()))
    }

    fn handle_remove(&self, title: &str) -> Result<String, CatalogError> {
        let title = title.trim();
        let mut catalog = self.load_for_write()?;
        catalog.remove(title)?;
        catalog.save(self.storage())?;
        Ok(format!("'{}' was removed from the catalog.", title))
    }

    fn load_for_read(&self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new();
        match catalog.load(self.storage()) {
            LoadOutcome::Failed(e) => Err(e),
            LoadOutcome::Loaded { .. } | LoadOutcome::Missing => Ok(catalog),
        }
    }

    /// Like `load_for_read`, but also refuses a file with rejected records,
    /// since saving would drop them.
    fn load_for_write(&self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new();
        match catalog.load(self.storage()) {
            LoadOutcome::Failed(e) => Err(e),
            LoadOutcome::Loaded { rejected, .. } if !rejected.is_empty() => {
                Err(CatalogError::LoadFailed {
                    location: self.storage.location(),
                    reason: format!(
                        "{} invalid record(s) would be dropped by saving (first: '{}': {})",
                        rejected.len(),
                        rejected[0].title,
                        rejected[0].reason
                    ),
                })
            }
            LoadOutcome::Loaded { .. } | LoadOutcome::Missing => Ok(catalog),
        }
    }
}

fn to_json(entries: &[&crate::catalog::CatalogEntry]) -> Result<String, CatalogError> {
    render_json(entries).map_err(|e| CatalogError::Output(format!("Failed to encode JSON: {}", e)))
}
