//! Expense and date-group models
//!
//! An expense is a titled price attached to a date label. Expenses sharing a
//! label form a `DateGroup`, rendered together under one heading. The
//! `selected` flag is session-only state for bulk sum/delete and is never
//! persisted.

use super::ids::ExpenseId;
use super::money::Money;

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Unique identifier, generated at creation and persisted
    pub id: ExpenseId,

    /// Expense title (non-empty)
    pub title: String,

    /// Price, non-negative
    pub price: Money,

    /// Transient selection flag for bulk operations
    pub selected: bool,
}

impl Expense {
    /// Create a new unselected expense with a fresh id
    pub fn new(title: impl Into<String>, price: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            price,
            selected: false,
        }
    }

    /// Recreate an expense loaded from storage; loaded entries are never selected
    pub fn from_parts(id: ExpenseId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            selected: false,
        }
    }
}

/// All expenses sharing one date label, in append order
///
/// Invariant: a group with zero entries must not exist. The store drops a
/// group as soon as its last entry is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    /// Grouping key, e.g. "13 июня"
    pub label: String,

    /// Entries in append order
    pub entries: Vec<Expense>,
}

impl DateGroup {
    /// Create a group with a single first entry
    pub fn new(label: impl Into<String>, first: Expense) -> Self {
        Self {
            label: label.into(),
            entries: vec![first],
        }
    }
}
