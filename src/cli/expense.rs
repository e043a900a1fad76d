//! Expense CLI commands
//!
//! Bridges clap argument parsing with the expense store. Every mutating
//! command ends with a whole-store save; a failed save is reported as a
//! warning and the in-memory result still counts for this invocation.

use clap::Subcommand;

use crate::config::ExpensePaths;
use crate::display::{format_expense_list, format_expense_row, today_label};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseId;
use crate::storage::ExpenseRepository;
use crate::store::ExpenseStore;

/// Expense tracker subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense title
        title: String,
        /// Price (e.g. "3.50" or "3")
        price: String,
        /// Date label to file the expense under (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all expenses grouped by date
    List,
    /// Sum the given expenses (full ids or unique prefixes)
    Sum {
        /// Expense ids to include
        ids: Vec<String>,
        /// Sum every expense
        #[arg(short, long)]
        all: bool,
    },
    /// Remove expenses by id
    Remove {
        /// Expense ids to remove
        ids: Vec<String>,
        /// Remove every expense
        #[arg(short, long)]
        all: bool,
    },
    /// Show the resolved data paths
    Config,
}

/// Handle an expense command against a loaded store
pub fn handle_expense_command(
    paths: &ExpensePaths,
    repo: &ExpenseRepository,
    store: &mut ExpenseStore,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add { title, price, date } => {
            let label = date.unwrap_or_else(today_label);
            let id = store.add(&title, &price, &label)?;
            save_with_warning(repo, store);

            println!("Added under {}:", label);
            if let Some(expense) = store.get(id) {
                println!("{}", format_expense_row(expense));
            }
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(store));
        }

        ExpenseCommands::Sum { ids, all } => {
            select(store, &ids, all)?;
            let count = store.iter().filter(|e| e.selected).count();
            let total = store.sum_selected()?;
            println!(
                "Sum of {} selected expense{}: {}",
                count,
                if count == 1 { "" } else { "s" },
                total.format_with_currency()
            );
        }

        ExpenseCommands::Remove { ids, all } => {
            if ids.len() == 1 && !all {
                // Single removal goes straight through; unknown ids are
                // still reported to the user.
                let expense = store
                    .find_by_id_str(&ids[0])
                    .cloned()
                    .ok_or_else(|| ExpenseError::expense_not_found(&ids[0]))?;
                store.remove(expense.id);
                save_with_warning(repo, store);
                println!("Removed:");
                println!("{}", format_expense_row(&expense));
            } else {
                select(store, &ids, all)?;
                let removed = store.remove_selected()?;
                save_with_warning(repo, store);
                println!("Removed {} expense{}:", removed.len(), if removed.len() == 1 { "" } else { "s" });
                for expense in &removed {
                    println!("{}", format_expense_row(expense));
                }
            }
        }

        ExpenseCommands::Config => {
            println!("Expense tracker configuration");
            println!("==============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Data file:      {}", repo.path().display());
        }
    }

    Ok(())
}

/// Apply a selection: every expense with `--all`, otherwise the named ids
fn select(store: &mut ExpenseStore, ids: &[String], all: bool) -> ExpenseResult<()> {
    if all {
        if !store.all_selected() {
            store.toggle_select_all();
        }
        return Ok(());
    }

    if ids.is_empty() {
        return Err(ExpenseError::Validation(
            "Specify expense ids or pass --all".into(),
        ));
    }

    for raw in ids {
        let id = resolve_id(store, raw)?;
        store.set_selected(id, true);
    }
    Ok(())
}

/// Resolve a full or prefix id string to a stored expense id
fn resolve_id(store: &ExpenseStore, raw: &str) -> ExpenseResult<ExpenseId> {
    store
        .find_by_id_str(raw)
        .map(|e| e.id)
        .ok_or_else(|| ExpenseError::expense_not_found(raw))
}

/// Persist the store, downgrading failure to a warning
///
/// The in-memory store stays the source of truth for this invocation even
/// when the file cannot be written.
fn save_with_warning(repo: &ExpenseRepository, store: &ExpenseStore) {
    if let Err(err) = repo.save(store) {
        eprintln!("Warning: could not save expense data: {}", err);
    }
}
