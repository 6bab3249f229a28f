//! Cybot Common - content tables and lookup logic for the awareness bot
//!
//! Pure logic only: no terminal I/O lives here. The `cybot` binary renders
//! whatever these modules decide. Everything is loaded once at startup and
//! immutable afterwards, except the command history.

pub mod content;
pub mod defaults;
pub mod history;
pub mod resolver;
pub mod settings;

#[cfg(test)]
mod content_tests;

pub use content::{ContentError, ContentSources, ContentStore};
pub use history::CommandHistory;
pub use resolver::{resolve, Command, Resolution};
pub use settings::AppSettings;
