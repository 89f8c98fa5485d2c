use crate::game_state::{Deck, GameState};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::time::{SystemTime, UNIX_EPOCH};

mod cards;
mod draw;
mod error;
mod game_logic;
mod game_state;
mod input;
mod layout;
mod message;
mod selection;
mod tui;

/// Logging goes to a file, and only when asked for: stderr belongs to the
/// final report and stdout to the game screen.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match OpenOptions::new()
        .create(true)
        .append(true)
        .open("accordion.log")
    {
        Ok(log_file) => env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init(),
        Err(e) => eprintln!("could not open accordion.log: {e}"),
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() {
    init_logging();

    let seed = seed();
    let mut deck = Deck::init();
    deck.shuffle(&mut StdRng::seed_from_u64(seed));
    info!("dealt deck with seed {seed}");

    let mut game_state = GameState::init(deck);
    // The terminal is back in cooked mode by the time run_ui returns.
    match tui::run_ui(&mut game_state) {
        Ok(outcome) => eprintln!("{outcome}"),
        Err(e @ error::Error::ScreenTooNarrow { .. }) => eprintln!("{e}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
