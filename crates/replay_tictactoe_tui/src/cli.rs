//! Command-line interface for the TUI.

use clap::Parser;
use replay_tictactoe::ListOrder;
use std::path::PathBuf;

/// Rewindable tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "replay_tictactoe_tui")]
#[command(about = "Two players, one keyboard, full time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show the move list newest entry first.
    #[arg(long)]
    pub descending: bool,

    /// Log file path (logging is kept out of the terminal UI).
    #[arg(long, default_value = "replay_tictactoe_tui.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Initial move-list order.
    pub fn initial_order(&self) -> ListOrder {
        if self.descending {
            ListOrder::Descending
        } else {
            ListOrder::Ascending
        }
    }
}
