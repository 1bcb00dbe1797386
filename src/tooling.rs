//! Tooling & Integration Layer
//!
//! Command-line entry points for the catalog.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, OutputFormat};
