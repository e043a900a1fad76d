//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! expense entries, date groups, ids, and money amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{DateGroup, Expense};
pub use ids::ExpenseId;
pub use money::{Money, CURRENCY};
