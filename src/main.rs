use anyhow::Result;
use clap::Parser;

use outlay::tui::run_tui;
use outlay::Ledger;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based expense tracker",
    long_about = "Outlay is a terminal-based expense tracker for a single \
                  sitting. Record what you spent, slice it by category or \
                  by day, and export the session to CSV before you close it."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Everything lives in memory for the lifetime of the session.
    let mut ledger = Ledger::new();
    run_tui(&mut ledger)
}
