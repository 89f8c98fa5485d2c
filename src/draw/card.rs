//! Draws a card.

use super::Draw;
use crate::cards::Card;
use crate::layout::Layout;
use std::io::Write;

impl<W: Write> Draw<W> {
    pub(crate) fn display_card(
        &mut self,
        card: Card,
        highlighted: bool,
        col: u16,
        row: u16,
    ) -> std::io::Result<()> {
        use termion::color::*;
        match (card.suit.is_red(), highlighted) {
            (true, false) => self.set_colors(Red, White)?,
            (false, false) => self.set_colors(Black, White)?,
            (true, true) => self.set_colors(Red, LightGreen)?,
            (false, true) => self.set_colors(Black, LightGreen)?,
        }
        self.draw_text(col, row, card.to_string().as_str())?;
        self.set_colors(Self::default_fg(), Self::default_bg())
    }

    /// Blanks a card-sized slot.
    pub(crate) fn clear_card(&mut self, col: u16, row: u16) -> std::io::Result<()> {
        self.set_colors(Self::default_fg(), Self::default_bg())?;
        let blank = " ".repeat(Layout::CARD_WIDTH as usize);
        self.draw_text(col, row, blank.as_str())
    }
}
