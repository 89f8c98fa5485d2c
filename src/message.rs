use crate::layout::Layout;
use std::io::{self, Write};
use termion::cursor;

/// The one-line status area in the top margin.
#[derive(Debug, Default)]
pub struct MessageArea {
    /// Length of the text currently on screen, so a shorter message can blank
    /// out the leftovers.
    last_len: usize,
}

impl MessageArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `text` over the previous message.
    pub fn show<W: Write>(&mut self, out: &mut W, text: &str) -> io::Result<()> {
        let (col, row) = Layout::message_position();
        let len = text.chars().count();
        let padding = self.last_len.saturating_sub(len);
        write!(
            out,
            "{}{}{}{}",
            cursor::Save,
            cursor::Goto(col + 1, row + 1),
            text,
            " ".repeat(padding)
        )?;
        write!(out, "{}", cursor::Restore)?;
        self.last_len = len;
        Ok(())
    }

    /// Forget what is on screen, e.g. after the screen was cleared.
    pub fn reset(&mut self) {
        self.last_len = 0;
    }
}
