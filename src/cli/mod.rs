//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the store and
//! storage layers.

pub mod expense;

pub use expense::{handle_expense_command, ExpenseCommands};
