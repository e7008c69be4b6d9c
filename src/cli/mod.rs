//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod config;
mod logging;
mod resources;
mod version;

pub use config::{handle_config_command, ConfigSubcommand};
pub use logging::*;
pub use resources::{delete, inspect, list};
pub use version::display_version;
