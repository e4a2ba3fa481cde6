//! Subcommand implementations.
//!
//! Each command writes to the `Write` it is handed so the menu and the
//! tests can drive them without a terminal.

pub mod add;
pub mod fast;
pub mod generate;
pub mod list;
pub mod menu;
pub mod order;
pub mod output;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;
