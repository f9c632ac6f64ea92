//! Headless self-play driver.
//!
//! Pits two engines against each other from the initial position and prints
//! the board after every move. Set `RUST_LOG=debug` to see search summaries.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mailbox_chess::errors::ChessResult;
use mailbox_chess::game::game_config::GameConfig;
use mailbox_chess::game::game_session::{Game, GameStatus, MoveOutcome};
use mailbox_chess::utils::render_game_state::render_position;

#[derive(Parser, Debug)]
#[command(name = "mailbox_chess", about = "Engine self-play from the initial position")]
struct Cli {
    /// White engine difficulty (0 = random, 1..=4 = search depth)
    #[arg(long, default_value_t = 2)]
    white: u8,

    /// Black engine difficulty (0 = random, 1..=4 = search depth)
    #[arg(long, default_value_t = 1)]
    black: u8,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Only print the final board and result
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> ChessResult<()> {
    let mut config = GameConfig::self_play(cli.white, cli.black);
    config.seed = cli.seed;
    let mut game = Game::new(config)?;
    info!(white = cli.white, black = cli.black, seed = ?cli.seed, "starting self-play");

    let mut plies = 0u32;
    while game.is_computer_turn() && plies < cli.max_plies {
        let outcome = game.play_computer_turn()?;
        plies += 1;
        if !cli.quiet {
            if let MoveOutcome::Played { mv, .. } = outcome {
                println!("{plies}. {mv}");
            }
            println!("{}\n", render_position(game.position()));
        }
    }

    if cli.quiet {
        println!("{}\n", render_position(game.position()));
    }
    match game.status() {
        GameStatus::Checkmate { winner } => println!("Checkmate, {winner:?} wins after {plies} plies"),
        GameStatus::Stalemate => println!("Stalemate after {plies} plies"),
        _ => println!("Stopped after {plies} plies"),
    }
    Ok(())
}
