//! Display formatting for terminal output

pub mod date;
pub mod expense;

pub use date::{date_label, today_label};
pub use expense::{format_expense_list, format_expense_row};
