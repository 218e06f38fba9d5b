//! uttt - ultimate tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_tictactoe::{
    AppConfig, ComputerPlayer, Evaluation, GameResult, GameState, HumanPlayer, Match, MoveSearch,
    Participant, Player, SearchMode,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            depth,
            seed,
            evaluation,
            track_outcomes,
        } => {
            let mut app = AppConfig::load_or_default(&config)?;
            if let Some(mode) = mode {
                app = app.with_mode(mode);
            }
            if let Some(depth) = depth {
                app = app.with_search_depth(depth);
            }
            if let Some(seed) = seed {
                app = app.with_seed(seed);
            }
            if let Some(evaluation) = evaluation {
                app = app.with_evaluation(evaluation);
            }
            if track_outcomes {
                app = app.with_track_outcomes(true);
            }
            run_play(&app)
        }
        Command::Selfplay {
            x,
            o,
            games,
            depth,
            seed,
            evaluation,
            track_outcomes,
        } => {
            let search = SearchSettings {
                depth,
                seed,
                evaluation,
                track_outcomes,
            };
            run_selfplay(x, o, games, search)
        }
        Command::Moves { json } => run_moves(json),
    }
}

/// Computer settings shared by both seats.
#[derive(Debug, Clone, Copy)]
struct SearchSettings {
    depth: u32,
    seed: Option<u64>,
    evaluation: Evaluation,
    track_outcomes: bool,
}

impl SearchSettings {
    fn from_config(config: &AppConfig, round: u64) -> Self {
        Self {
            depth: *config.search_depth(),
            seed: config.seed().map(|seed| seed.wrapping_add(round)),
            evaluation: *config.evaluation(),
            track_outcomes: *config.track_outcomes(),
        }
    }

    fn computer(self, strategy: SearchMode) -> MoveSearch {
        let search = MoveSearch::new(strategy)
            .with_depth(self.depth)
            .with_evaluation(self.evaluation)
            .with_outcome_tracking(self.track_outcomes);
        match self.seed {
            Some(seed) => search.with_seed(seed),
            None => search,
        }
    }
}

/// Interactive matches until the user declines another one.
#[instrument(skip(config), fields(mode = %config.mode()))]
fn run_play(config: &AppConfig) -> Result<()> {
    for round in 0u64.. {
        let mut game = match config.mode().computer() {
            None => Match::hot_seat(human("Player")),
            Some(strategy) => {
                let settings = SearchSettings::from_config(config, round);
                let computer = ComputerPlayer::new("Computer", settings.computer(strategy));
                Match::new(human("You"), Box::new(computer))
            }
        };
        let summary = game.run()?;

        println!("\n{}\n", game.game());
        match summary.result {
            Some(GameResult::WonBy(player)) => println!("Player {} wins!", player),
            Some(GameResult::Draw) => println!("It's a draw!"),
            None => {
                println!("Match stopped after {} moves.", summary.moves);
                return Ok(());
            }
        }
        // Releases the stdin lock held by the human player.
        drop(game);

        if !ask("Play again? [y/N] ")? {
            break;
        }
    }
    Ok(())
}

fn human(name: &str) -> Box<dyn Participant> {
    let player = HumanPlayer::new(name, std::io::stdin().lock(), std::io::stdout());
    Box::new(player)
}

fn ask(question: &str) -> Result<bool> {
    print!("{}", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Computer against computer, printing each result and a tally.
#[instrument]
fn run_selfplay(x: SearchMode, o: SearchMode, games: u32, search: SearchSettings) -> Result<()> {
    let o_search = SearchSettings {
        seed: search.seed.map(|seed| seed.wrapping_add(1)),
        ..search
    };
    let player_x = ComputerPlayer::new(format!("X ({})", x), search.computer(x));
    let player_o = ComputerPlayer::new(format!("O ({})", o), o_search.computer(o));
    let mut game = Match::new(Box::new(player_x), Box::new(player_o));

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for index in 1..=games {
        game.restart();
        let summary = game.run()?;
        match summary.result {
            Some(GameResult::WonBy(Player::X)) => x_wins += 1,
            Some(GameResult::WonBy(Player::O)) => o_wins += 1,
            Some(GameResult::Draw) => draws += 1,
            None => {}
        }
        let result = match summary.result {
            Some(result) => result.to_string(),
            None => "unfinished".to_string(),
        };
        println!("game {}: {} after {} moves", index, result, summary.moves);
    }

    info!(x_wins, o_wins, draws, "Selfplay finished");
    println!(
        "X ({}) {} - O ({}) {} - draws {}",
        x, x_wins, o, o_wins, draws
    );
    Ok(())
}

/// Legal moves of a new game, one per line or as JSON.
fn run_moves(json: bool) -> Result<()> {
    let moves = GameState::new().legal_moves();
    if json {
        let tuples: Vec<_> = moves.iter().map(|mv| mv.as_tuple()).collect();
        println!("{}", serde_json::to_string(&tuples)?);
    } else {
        for mv in moves {
            println!("{}", mv);
        }
    }
    Ok(())
}
