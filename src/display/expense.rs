//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display:
//! a grouped listing with date headings and single-entry rows.

use crate::models::Expense;
use crate::store::ExpenseStore;

/// Format a single expense for display (listing row)
pub fn format_expense_row(expense: &Expense) -> String {
    let marker = if expense.selected { "*" } else { " " };
    format!(
        "{} {}  {:30} {:>10}",
        marker,
        expense.id.short(),
        truncate(&expense.title, 30),
        expense.price.format_with_currency()
    )
}

/// Format the whole store as a grouped listing
pub fn format_expense_list(store: &ExpenseStore) -> String {
    if store.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    for group in store.groups() {
        output.push_str(&format!("--- {} ---\n", group.label));
        for expense in &group.entries {
            output.push_str(&format_expense_row(expense));
            output.push('\n');
        }
    }

    output
}

/// Truncate a string to a maximum display length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
