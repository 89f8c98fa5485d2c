use crate::game_state::GameState;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Candidate cursor index one step from `cursor`, or None if it would be
    /// negative.
    fn step_from(self, cursor: usize, cards_per_row: usize) -> Option<usize> {
        match self {
            Self::Left => cursor.checked_sub(1),
            Self::Right => cursor.checked_add(1),
            Self::Up => cursor.checked_sub(cards_per_row),
            Self::Down => cursor.checked_add(cards_per_row),
        }
    }
}

impl GameState {
    /// Moves the cursor one step. A step that leaves the live piles (including
    /// off the right end of the last row) is dropped and the cursor stays put.
    /// Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction, cards_per_row: usize) -> bool {
        match direction.step_from(self.cursor, cards_per_row) {
            Some(next) if next < self.deck.len() => {
                self.cursor = next;
                true
            }
            _ => false,
        }
    }
}
