//! Strictly Grid terminal front end
//!
//! Thin shell around [`strictly_grid`]: reads settings and answers from the
//! terminal, prints the board, and appends every move to a log file.
//!
//! # Architecture
//!
//! - **Settings**: CLI flags over an optional TOML file
//! - **Prompter**: line-based questions with retry loops
//! - **Orchestrator**: the turn loop
//! - **MoveLog**: append-only plaintext record of moves

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod move_log;
mod orchestrator;
mod prompt;
mod settings;
mod setup;

pub use cli::Cli;
pub use move_log::MoveLog;
pub use orchestrator::Orchestrator;
pub use prompt::{Prompter, parse_coordinates};
pub use settings::{DEFAULT_LOG_FILE, Settings, SettingsError};
pub use setup::configure;
