//! Cybot - terminal client for the cybersecurity awareness bot.
//!
//! Owns everything that touches the terminal: the typing-animation
//! renderer, the interactive line editor, startup, and the session loop.
//! The lookup logic itself lives in `cybot_common`.

pub mod bootstrap;
pub mod errors;
pub mod reader;
pub mod session;
pub mod typist;
pub mod ui;
