//! Helpers shared by the CLI commands.

pub mod table;
