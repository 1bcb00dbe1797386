//! Text menu
//!
//! The interactive front end of the catalog: prompts, bounded validation of
//! numeric answers and table rendering.

pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use session::{MenuAction, MenuSession, SessionEnd};
