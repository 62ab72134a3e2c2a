//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with time-travel move history.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show the move list newest-first on startup.
    #[arg(long)]
    pub descending: bool,

    /// Log file path (the TUI owns the terminal, so logs go to a file).
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: PathBuf,
}
