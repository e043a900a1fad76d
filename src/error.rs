//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (empty title, bad price, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A bulk operation was requested with nothing selected
    #[error("No expenses selected")]
    NoSelection,

    /// Expense lookup by id failed
    #[error("Expense not found: {identifier}")]
    NotFound { identifier: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a "not found" error for an expense id
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a "nothing selected" error
    pub fn is_no_selection(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Validation("title must not be empty".into());
        assert_eq!(err.to_string(), "Validation error: title must not be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_not_found("abc123");
        assert_eq!(err.to_string(), "Expense not found: abc123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_no_selection_error() {
        let err = ExpenseError::NoSelection;
        assert_eq!(err.to_string(), "No expenses selected");
        assert!(err.is_no_selection());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let expense_err: ExpenseError = io_err.into();
        assert!(matches!(expense_err, ExpenseError::Io(_)));
    }
}
