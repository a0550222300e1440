//! Othello4: a 4x4 Othello rules engine.
//!
//! ## Usage
//!
//! - `othello4` - Start the text front end on stdin/stdout
//! - `othello4 play` - Same as above
//! - `othello4 demo` - Play seeded random games and print the results

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};

use othello4::engine::{GameEngine, Winner};
use othello4::playout::random_playout;
use othello4::protocol::Session;

/// Othello4: a 4x4 Othello rules engine
#[derive(Parser)]
#[command(name = "othello4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Report moves and game events on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Play,
    /// Play random games to the end and report the results
    Demo {
        /// Number of games to play
        #[arg(short, long, default_value_t = 5)]
        games: usize,
        /// Seed for the random move picker
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { games, seed }) => run_demo(games, seed, cli.verbose),
        Some(Commands::Play) | None => {
            let mut session = Session::with_verbose(cli.verbose);
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("text front end I/O failed")
        }
    }
}

fn run_demo(games: usize, seed: Option<u64>, verbose: bool) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let (mut black, mut white, mut draws) = (0, 0, 0);

    for game in 1..=games {
        let mut engine = GameEngine::new();
        let playout = random_playout(&mut engine, &mut rng, verbose)
            .with_context(|| format!("playout {game} failed"))?;

        println!(
            "=== Game {game}: {} ({} - {}, {} moves, {} passes) ===",
            playout.winner,
            playout.score.black,
            playout.score.white,
            playout.moves.len(),
            playout.passes()
        );
        println!("{}", engine.board());

        match playout.winner {
            Winner::Black => black += 1,
            Winner::White => white += 1,
            Winner::Draw => draws += 1,
        }
    }

    println!("Black {black}, White {white}, Draw {draws}");
    Ok(())
}
