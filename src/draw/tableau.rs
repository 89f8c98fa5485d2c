//! Draws the tableau and the cursor.

use super::Draw;
use crate::game_state::GameState;
use crate::layout::Layout;
use std::io::Write;
use termion::color;

impl<W: Write> Draw<W> {
    const TITLE: &'static str = "Accordion";
    const HELP: &'static str = "hjkl/arrows: Move  1/3: Collapse  r: Redraw  q: Quit";

    /// Clears the screen and draws every live pile.
    pub fn display_tableau(
        &mut self,
        game_state: &GameState,
        cards_per_row: usize,
        width: u16,
    ) -> std::io::Result<()> {
        self.clear_screen()?;
        self.display_info(width)?;
        for (index, card) in game_state.deck.cards().iter().enumerate() {
            let (col, row) = Layout::position_of(index, cards_per_row);
            self.display_card(*card, index == game_state.cursor, col, row)?;
        }
        self.laid_out_for = Some(cards_per_row);
        Ok(())
    }

    /// Redraws what a collapse onto `position` from `n` places right changed:
    /// the destination pile, every pile that shifted left, and the slot the
    /// last pile left empty.
    pub fn display_collapse(
        &mut self,
        game_state: &GameState,
        position: usize,
        n: usize,
        cards_per_row: usize,
    ) -> std::io::Result<()> {
        let cards = game_state.deck.cards();
        let shifted = (position + n).min(cards.len())..cards.len();
        for index in std::iter::once(position).chain(shifted) {
            let (col, row) = Layout::position_of(index, cards_per_row);
            self.display_card(cards[index], index == game_state.cursor, col, row)?;
        }
        let (col, row) = Layout::position_of(cards.len(), cards_per_row);
        self.clear_card(col, row)
    }

    /// Moves the highlight from `previous` to the cursor.
    pub fn display_cursor(
        &mut self,
        game_state: &GameState,
        previous: usize,
        cards_per_row: usize,
    ) -> std::io::Result<()> {
        if let Some(card) = game_state.deck.get(previous) {
            let (col, row) = Layout::position_of(previous, cards_per_row);
            self.display_card(card, previous == game_state.cursor, col, row)?;
        }
        if let Some(card) = game_state.deck.get(game_state.cursor) {
            let (col, row) = Layout::position_of(game_state.cursor, cards_per_row);
            self.display_card(card, true, col, row)?;
        }
        Ok(())
    }

    fn display_info(&mut self, width: u16) -> std::io::Result<()> {
        let col = Layout::LEFT_MARGIN;
        let title_end = col + Self::TITLE.len() as u16;
        if title_end >= width {
            return Ok(());
        }
        self.set_colors(color::LightYellow, Self::default_bg())?;
        self.draw_text(col, 0, Self::TITLE)?;

        let help_col = title_end + 2;
        if help_col + (Self::HELP.len() as u16) < width {
            self.set_colors(color::LightBlack, Self::default_bg())?;
            self.draw_text(help_col, 0, Self::HELP)?;
        }
        self.set_colors(Self::default_fg(), Self::default_bg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::tests::cards;
    use crate::game_state::Deck;
    use termion::cursor::Goto;

    fn draw() -> Draw<Vec<u8>> {
        Draw::new(Vec::new())
    }

    fn text(draw: &Draw<Vec<u8>>) -> String {
        String::from_utf8(draw.output().clone()).unwrap()
    }

    fn at(index: usize, cards_per_row: usize, s: &str) -> String {
        let (col, row) = Layout::position_of(index, cards_per_row);
        format!("{}{}", Goto(col + 1, row + 1), s)
    }

    #[test]
    fn test_display_tableau_draws_every_pile() {
        let game_state = GameState::init(Deck::from_cards(cards("AC 9D KS 2H TC")));
        let mut d = draw();
        d.display_tableau(&game_state, 2, 80).unwrap();
        let out = text(&d);

        for (index, code) in ["AC", "9D", "KS", "2H", "TC"].iter().enumerate() {
            assert!(out.contains(&at(index, 2, code)), "{code} missing");
        }
        assert!(out.contains("Accordion"));
        assert!(!d.needs_relayout(2));
        assert!(d.needs_relayout(3));
    }

    #[test]
    fn test_title_skipped_on_narrow_screen() {
        let game_state = GameState::init(Deck::from_cards(cards("AC")));
        let mut d = draw();
        d.display_tableau(&game_state, 1, 12).unwrap();
        assert!(!text(&d).contains("Accordion"));
    }

    #[test]
    fn test_display_collapse_redraws_shifted_piles_and_blanks_tail() {
        // was: AC 2D 3H 4C 5S 6S, moved 4C back 3
        let mut game_state = GameState::init(Deck::from_cards(cards("4C 2D 3H 5S 6S")));
        game_state.cursor = 0;
        let mut d = draw();
        d.display_collapse(&game_state, 0, 3, 10).unwrap();
        let out = text(&d);

        assert!(out.contains(&at(0, 10, "4C")));
        assert!(!out.contains("2D"));
        assert!(!out.contains("3H"));
        assert!(out.contains(&at(3, 10, "5S")));
        assert!(out.contains(&at(4, 10, "6S")));
        assert!(out.contains(&at(5, 10, "  ")));
    }

    #[test]
    fn test_display_cursor_moves_highlight() {
        let mut game_state = GameState::init(Deck::from_cards(cards("AC 9D")));
        game_state.cursor = 1;
        let mut d = draw();
        d.display_cursor(&game_state, 0, 10).unwrap();
        let out = text(&d);
        let highlighted = format!(
            "{}{}{}",
            color::Fg(color::Red),
            color::Bg(color::LightGreen),
            at(1, 10, "9D")
        );
        let plain = format!(
            "{}{}{}",
            color::Fg(color::Black),
            color::Bg(color::White),
            at(0, 10, "AC")
        );
        assert!(out.contains(&highlighted));
        assert!(out.contains(&plain));
    }
}
