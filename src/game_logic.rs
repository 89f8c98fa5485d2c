use crate::cards::Card;
use crate::game_state::Deck;
use log::debug;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Why a pile could not be moved back.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveError {
    #[error("not enough cards behind cursor")]
    NotEnoughCards,
    #[error("{moving} does not match {target}")]
    NoMatch { moving: Card, target: Card },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Loss(usize),
    Quit(usize),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "You won!"),
            Self::Loss(piles) => write!(f, "You lost with {piles} piles remaining."),
            Self::Quit(piles) => write!(f, "You quit with {piles} piles."),
        }
    }
}

/// Can `a` be put on top of `b`?
pub fn matches(a: Card, b: Card) -> bool {
    a.rank == b.rank || a.suit == b.suit
}

pub fn can_move_back(deck: &Deck, position: usize, n: usize) -> bool {
    let Some(target) = position.checked_sub(n) else {
        return false;
    };
    match (deck.get(position), deck.get(target)) {
        (Some(moving), Some(target)) => matches(moving, target),
        _ => false,
    }
}

/// Moves the pile at `position` onto the pile `n` places to its left, if
/// legal. On success returns the new position of the moved pile. On failure
/// the deck is untouched.
pub fn try_move(deck: &mut Deck, position: usize, n: usize) -> Result<usize, MoveError> {
    let target = position.checked_sub(n).ok_or(MoveError::NotEnoughCards)?;
    let (Some(moving), Some(covered)) = (deck.get(position), deck.get(target)) else {
        return Err(MoveError::NotEnoughCards);
    };
    if !matches(moving, covered) {
        return Err(MoveError::NoMatch {
            moving,
            target: covered,
        });
    }

    deck.collapse(position, target);
    debug!("moved {moving} onto {covered}; {} piles remain", deck.len());
    Ok(target)
}

pub fn is_game_over(deck: &Deck) -> bool {
    !(0..deck.len()).any(|i| can_move_back(deck, i, 1) || can_move_back(deck, i, 3))
}

/// Classifies a finished game.
pub fn outcome(deck: &Deck) -> Outcome {
    if deck.len() == 1 {
        Outcome::Win
    } else {
        Outcome::Loss(deck.len())
    }
}
