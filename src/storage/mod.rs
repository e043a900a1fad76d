//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and whole-file rewrites:
//! the entire in-memory store is serialized after every mutating change.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
