//! Filmkatalog CLI Binary
//!
//! Interactive movie catalog; see `filmkatalog --help` for the one-shot commands.

use clap::Parser;
use filmkatalog::logging;
use filmkatalog::tooling::cli::{Cli, CliContext, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error determining working directory: {}", e);
            process::exit(1);
        }
    };

    let config = match cli.resolve_config(&working_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let context = CliContext::new(config, &working_dir);
    let command = cli.command.clone().unwrap_or(Commands::Menu);

    match context.execute(&command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
