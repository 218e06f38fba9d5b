//! Command-line interface for uttt.

use clap::{Parser, Subcommand};
use ultimate_tictactoe::{DEFAULT_DEPTH, Evaluation, MatchMode, SearchMode};

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "uttt")]
#[command(about = "Ultimate tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match on stdin/stdout
    Play {
        /// Match mode (overrides the config file)
        #[arg(short, long)]
        mode: Option<MatchMode>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "uttt.toml")]
        config: std::path::PathBuf,

        /// Search depth for the hard computer (overrides the config file)
        #[arg(short, long)]
        depth: Option<u32>,

        /// Seed for the computer (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Leaf evaluation for the hard computer (overrides the config file)
        #[arg(long)]
        evaluation: Option<Evaluation>,

        /// Refresh sub-board outcomes during look-ahead
        #[arg(long)]
        track_outcomes: bool,
    },

    /// Let two computer players play each other
    Selfplay {
        /// Strategy for X
        #[arg(long, default_value = "heuristic")]
        x: SearchMode,

        /// Strategy for O
        #[arg(long, default_value = "random")]
        o: SearchMode,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Search depth for heuristic players
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// Base seed; O uses seed + 1
        #[arg(long)]
        seed: Option<u64>,

        /// Leaf evaluation for heuristic players
        #[arg(long, default_value = "fixed")]
        evaluation: Evaluation,

        /// Refresh sub-board outcomes during look-ahead
        #[arg(long)]
        track_outcomes: bool,
    },

    /// List the legal moves of a new game
    Moves {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
