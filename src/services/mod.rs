//! Business logic layer
//!
//! Services sit between the CLI and the parser/storage layers.

pub mod intake;

pub use intake::{ExpenseIntake, IntakeReport, SaveStatus};
