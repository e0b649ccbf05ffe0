//! Configuration module for expense-ledger
//!
//! This module provides configuration management including:
//! - Path resolution (env override, then platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
