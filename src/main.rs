use anyhow::Result;
use clap::Parser;

use expenses_cli::cli::{handle_expense_command, ExpenseCommands};
use expenses_cli::config::ExpensePaths;
use expenses_cli::storage::ExpenseRepository;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "A single-user expense tracker: dated entries with \
                  multi-select, summation, and deletion, persisted to a \
                  flat JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;

    let repo = ExpenseRepository::new(paths.expenses_file());
    let mut store = repo.load_or_empty();

    match cli.command {
        Some(cmd) => handle_expense_command(&paths, &repo, &mut store, cmd)?,
        None => {
            println!("expenses - terminal-based personal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses list' to see recorded expenses.");
        }
    }

    Ok(())
}
