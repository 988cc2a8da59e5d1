//! A block of pre-styled lines, measured by visible width.

use crate::ansi::visible_width;

/// An ordered set of styled lines forming one column of the frame.
///
/// Two blocks exist per render (logo and info panel). A block is built fresh
/// from collaborator data, treated as immutable once handed to the
/// compositor, and discarded after the frame is printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Append one line during construction.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, if the block is that tall.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines, top to bottom.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Widest visible line in the block; 0 when empty.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| visible_width(line))
            .max()
            .unwrap_or(0)
    }
}

impl From<Vec<String>> for Block {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}
