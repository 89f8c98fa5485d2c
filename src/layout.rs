//! Grid placement of the tableau. Everything here is a pure function of the
//! terminal width and the pile index; coordinates are 0-based `(col, row)`.

use crate::error::{Error, Result};

pub struct Layout;

impl Layout {
    pub const CARD_WIDTH: u16 = 2;
    pub const CARD_SPACING: u16 = 2;
    pub const LINE_SPACING: u16 = 1;
    pub const TOP_MARGIN: u16 = 3;
    pub const LEFT_MARGIN: u16 = 4;
    pub const RIGHT_MARGIN: u16 = 4;

    /// Narrowest terminal that can show a single card.
    const MIN_COLUMNS: u16 = Self::LEFT_MARGIN + Self::CARD_WIDTH + Self::RIGHT_MARGIN;

    /// Largest `n >= 1` with
    /// `LEFT_MARGIN + n*CARD_WIDTH + (n-1)*CARD_SPACING + RIGHT_MARGIN < width`.
    pub fn cards_per_row(width: u16) -> Result<usize> {
        if Self::MIN_COLUMNS >= width {
            return Err(Error::ScreenTooNarrow {
                width,
                needed: Self::MIN_COLUMNS,
            });
        }
        let spare = width - Self::MIN_COLUMNS - 1;
        let per_card = Self::CARD_WIDTH + Self::CARD_SPACING;
        Ok(1 + (spare / per_card) as usize)
    }

    /// Screen position of the pile at `index`.
    pub fn position_of(index: usize, cards_per_row: usize) -> (u16, u16) {
        let column = (index % cards_per_row) as u16;
        let row = (index / cards_per_row) as u16;
        (
            Self::LEFT_MARGIN + column * (Self::CARD_WIDTH + Self::CARD_SPACING),
            Self::TOP_MARGIN + row * (1 + Self::LINE_SPACING),
        )
    }

    /// Where transient status messages start.
    pub fn message_position() -> (u16, u16) {
        (Self::RIGHT_MARGIN, Self::TOP_MARGIN / 2)
    }
}
