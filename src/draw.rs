//! Terminal rendering of the tableau.

mod card;
mod common;
mod tableau;

use crate::message::MessageArea;
use std::io::Write;
use termion::{clear, color, cursor};

/// Rendering context. Owns the output stream and everything the screen
/// currently remembers; restores the terminal when dropped.
pub struct Draw<W: Write> {
    stdout: W,
    message: MessageArea,
    /// Cards per row of the last full render, if any.
    laid_out_for: Option<usize>,
}

impl<W: Write> Draw<W> {
    pub fn new(stdout: W) -> Self {
        Self {
            stdout,
            message: MessageArea::new(),
            laid_out_for: None,
        }
    }

    /// Did the grid change shape since the last full render?
    pub fn needs_relayout(&self, cards_per_row: usize) -> bool {
        self.laid_out_for != Some(cards_per_row)
    }

    pub fn show_message(&mut self, text: &str) -> std::io::Result<()> {
        self.message.show(&mut self.stdout, text)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.stdout
    }
}

impl<W: Write> Drop for Draw<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore_terminal() {
            log::warn!("could not restore terminal: {e}");
        }
    }
}
