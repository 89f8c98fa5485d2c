use crate::draw::Draw;
use crate::error::Result;
use crate::game_logic::{self, Outcome};
use crate::game_state::GameState;
use crate::input::{self, Action, Response};
use crate::layout::Layout;
use log::info;
use std::io::{self, stdin, stdout, Write};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;

pub struct Ui<W: Write> {
    draw: Draw<W>,
}

impl<W: Write> Ui<W> {
    pub fn new(stdout: W) -> Self {
        Self {
            draw: Draw::new(stdout),
        }
    }

    /// Plays until the game is over or the player quits. `width` is asked for
    /// the live terminal width once per frame. Running out of keys counts as
    /// quitting.
    pub fn run<K, F>(
        &mut self,
        game_state: &mut GameState,
        keys: K,
        mut width: F,
    ) -> Result<Outcome>
    where
        K: IntoIterator<Item = io::Result<Key>>,
        F: FnMut() -> io::Result<u16>,
    {
        let columns = width()?;
        let mut cards_per_row = Layout::cards_per_row(columns)?;
        self.draw.set_up_terminal()?;
        self.draw.display_tableau(game_state, cards_per_row, columns)?;
        self.draw.flush()?;

        let mut keys = keys.into_iter();
        while !game_logic::is_game_over(&game_state.deck) {
            let Some(key) = keys.next() else {
                return Ok(Outcome::Quit(game_state.deck.len()));
            };
            let key = key?;

            let columns = width()?;
            cards_per_row = Layout::cards_per_row(columns)?;
            if self.draw.needs_relayout(cards_per_row) {
                self.draw.display_tableau(game_state, cards_per_row, columns)?;
            }

            let previous = game_state.cursor;
            let response = input::dispatch(game_state, Action::from_key(key), cards_per_row);
            match &response {
                Response::Quit(outcome) => return Ok(*outcome),
                Response::Redraw => {
                    self.draw.display_tableau(game_state, cards_per_row, columns)?
                }
                Response::Collapsed { position, n } => {
                    self.draw
                        .display_collapse(game_state, *position, *n, cards_per_row)?
                }
                Response::CursorMoved
                | Response::Stayed
                | Response::Rejected(_)
                | Response::UnknownKey(_) => {}
            }
            if let Some(text) = response.message(game_state.deck.len()) {
                self.draw.show_message(&text)?;
            }
            self.draw.display_cursor(game_state, previous, cards_per_row)?;
            self.draw.flush()?;
        }

        let outcome = game_logic::outcome(&game_state.deck);
        info!("game over: {outcome}");
        Ok(outcome)
    }
}

/// Runs a game on the real terminal in raw mode. Raw mode and the screen are
/// restored before this returns, whatever the result.
pub fn run_ui(game_state: &mut GameState) -> Result<Outcome> {
    let mut ui = Ui::new(stdout().into_raw_mode()?);
    ui.run(game_state, stdin().keys(), || {
        termion::terminal_size().map(|(width, _)| width)
    })
}
