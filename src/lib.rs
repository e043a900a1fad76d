//! Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the expenses CLI: an
//! in-memory store of dated expense entries with multi-select, summation,
//! and bulk deletion, persisted wholesale to a single JSON file after every
//! mutation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, date groups, ids, money)
//! - `store`: The in-memory expense store
//! - `storage`: JSON file storage layer
//! - `display`: Terminal formatting and date labels
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use error::{ExpenseError, ExpenseResult};
pub use store::ExpenseStore;
