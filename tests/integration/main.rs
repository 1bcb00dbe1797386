//! Integration tests for the movie catalog

mod cli_contracts;
mod config_loading;
mod support;
