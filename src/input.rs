//! Key presses to game actions, and game actions to their effect on the game.

use crate::game_logic::{self, MoveError, Outcome};
use crate::game_state::GameState;
use crate::selection::Direction;
use log::{debug, info};
use termion::event::Key;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Cursor(Direction),
    Redraw,
    /// Move the pile at the cursor back this many places.
    MoveBack(usize),
    Quit,
    Unknown(Key),
}

impl Action {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Char('h') | Key::Left => Self::Cursor(Direction::Left),
            Key::Char('l') | Key::Right => Self::Cursor(Direction::Right),
            Key::Char('k') | Key::Up => Self::Cursor(Direction::Up),
            Key::Char('j') | Key::Down => Self::Cursor(Direction::Down),
            Key::Char('r') => Self::Redraw,
            Key::Char('1') => Self::MoveBack(1),
            Key::Char('3') => Self::MoveBack(3),
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => Self::Quit,
            other => Self::Unknown(other),
        }
    }
}

/// What the screen needs to show after an action.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Response {
    CursorMoved,
    /// Out-of-range cursor step; nothing changes.
    Stayed,
    Redraw,
    /// The pile that was at `position + n` now sits at `position`.
    Collapsed { position: usize, n: usize },
    Rejected(MoveError),
    Quit(Outcome),
    UnknownKey(String),
}

impl Response {
    /// Status line text, given the number of piles left after the action.
    pub fn message(&self, piles: usize) -> Option<String> {
        match self {
            Self::CursorMoved | Self::Collapsed { .. } => {
                Some(format!("{piles} piles remaining"))
            }
            Self::Rejected(e) => Some(format!("Invalid move: {e}")),
            Self::UnknownKey(label) => Some(format!("Invalid key: {label}")),
            Self::Stayed | Self::Redraw | Self::Quit(_) => None,
        }
    }
}

/// Readable name for a key that has no action.
pub fn key_label(key: Key) -> String {
    match key {
        Key::Char('\n') => "Enter".to_string(),
        Key::Char('\t') => "Tab".to_string(),
        Key::Char(' ') => "Space".to_string(),
        Key::Char(c) => c.to_string(),
        Key::Ctrl(c) => format!("Ctrl+{c}"),
        Key::Alt(c) => format!("Alt+{c}"),
        Key::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

/// Applies one action to the game.
pub fn dispatch(game_state: &mut GameState, action: Action, cards_per_row: usize) -> Response {
    match action {
        Action::Cursor(direction) => {
            if game_state.move_cursor(direction, cards_per_row) {
                Response::CursorMoved
            } else {
                Response::Stayed
            }
        }
        Action::Redraw => Response::Redraw,
        Action::MoveBack(n) => {
            match game_logic::try_move(&mut game_state.deck, game_state.cursor, n) {
                Ok(position) => {
                    game_state.cursor = position;
                    Response::Collapsed { position, n }
                }
                Err(e) => {
                    debug!("rejected move of {n} from {}: {e}", game_state.cursor);
                    Response::Rejected(e)
                }
            }
        }
        Action::Quit => {
            info!("player quit with {} piles", game_state.deck.len());
            Response::Quit(Outcome::Quit(game_state.deck.len()))
        }
        Action::Unknown(key) => Response::UnknownKey(key_label(key)),
    }
}
