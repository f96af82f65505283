//! Terminal surface: renders event lines to a terminal writer.

use super::surface::Surface;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A display surface backed by a terminal writer.
///
/// Lines are queued as crossterm commands and flushed per append so the
/// display stays current even without a render loop. Lines wider than the
/// terminal are truncated by display width, never split mid-grapheme.
pub struct TerminalSurface<W: Write + Send> {
    /// Output writer.
    out: W,
    /// Column budget per line, if known.
    width: Option<u16>,
}

impl TerminalSurface<Stdout> {
    /// Create a surface on stdout, taking the column budget from the
    /// current terminal size.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn stdout() -> io::Result<Self> {
        let (width, _) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            width: Some(width),
        })
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    /// Create a surface over an arbitrary writer.
    ///
    /// With `width` of `None`, lines are written untruncated.
    pub const fn with_writer(out: W, width: Option<u16>) -> Self {
        Self { out, width }
    }

    /// Truncate a line to the column budget, grapheme by grapheme.
    fn fit(&self, line: &str) -> String {
        let Some(width) = self.width else {
            return line.to_string();
        };
        let budget = width as usize;

        let mut used = 0;
        let mut fitted = String::new();
        for grapheme in line.graphemes(true) {
            let cols = UnicodeWidthStr::width(grapheme);
            if used + cols > budget {
                break;
            }
            fitted.push_str(grapheme);
            used += cols;
        }
        fitted
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        let fitted = self.fit(line);
        self.out.queue(Print(fitted))?.queue(Print("\n"))?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.out
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?;
        self.out.flush()
    }
}
