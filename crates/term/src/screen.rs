//! Screen: one-shot frame output to a real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use owlfetch_types::{FALLBACK_COLUMNS, FALLBACK_ROWS};

/// Owns stdout for the lifetime of one frame.
///
/// Commands are queued into a staging buffer and written in a single
/// syscall, so a slow terminal never shows a half-painted frame.
pub struct Screen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Terminal dimensions as `(columns, rows)`, assuming 80x24 when the
    /// query fails (pipes, dumb terminals).
    pub fn size_or_default() -> (u16, u16) {
        terminal::size().unwrap_or((FALLBACK_COLUMNS, FALLBACK_ROWS))
    }

    /// Clear the screen and draw the frame top to bottom.
    pub fn draw(&mut self, rows: &[String]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        for row in rows {
            self.buf.queue(Print(row))?;
            self.buf.queue(Print("\n"))?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
