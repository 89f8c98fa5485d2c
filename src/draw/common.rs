//! Common drawing code.

use super::*;

impl<W: Write> Draw<W> {
    pub(crate) fn clear_screen(&mut self) -> std::io::Result<()> {
        write!(self.stdout, "{}", clear::All)?;
        self.message.reset();
        Ok(())
    }

    pub(crate) fn default_bg() -> impl color::Color {
        color::Black
    }
    pub(crate) fn default_fg() -> impl color::Color {
        color::LightWhite
    }

    pub(crate) fn set_colors(
        &mut self,
        foreground: impl color::Color,
        background: impl color::Color,
    ) -> std::io::Result<()> {
        write!(
            self.stdout,
            "{}{}",
            color::Fg(foreground),
            color::Bg(background),
        )
    }

    /// `col` and `row` are 0-based.
    pub fn draw_text(&mut self, col: u16, row: u16, text: &str) -> std::io::Result<()> {
        write!(self.stdout, "{}{}", cursor::Goto(col + 1, row + 1), text)
    }

    pub fn set_up_terminal(&mut self) -> std::io::Result<()> {
        write!(
            self.stdout,
            "{}{}{}{}{}",
            color::Fg(Self::default_fg()),
            color::Bg(Self::default_bg()),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Hide,
        )?;
        self.message.reset();
        self.stdout.flush()
    }

    pub fn restore_terminal(&mut self) -> std::io::Result<()> {
        write!(
            self.stdout,
            "{}{}{}{}{}",
            color::Fg(color::Reset),
            color::Bg(color::Reset),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Show,
        )?;
        self.stdout.flush()
    }
}
