//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod ledger;

pub use entry::{handle_add_command, handle_check_command, EntryInput};
pub use ledger::{handle_config_command, handle_init_command, handle_list_command};
