//! Styled-text measurement module - pure, deterministic, and testable
//!
//! Lines in this tool carry their styling inline as SGR control spans, so
//! every width decision has to see through the escape sequences. This crate
//! is the single place that scans them; nothing else in the workspace is
//! allowed to parse `ESC [ ... m` by hand.
//!
//! Goals:
//! - Keep width arithmetic exact in the presence of embedded color spans
//! - Guarantee truncation never splits a span or leaks color state
//! - Stay I/O-free so every property is unit-testable
//!
//! # Example
//!
//! ```
//! use owlfetch_text::{visible_width, truncate_to_width};
//!
//! let line = "\x1b[1;34mowl\x1b[0m";
//! assert_eq!(visible_width(line), 3);
//! assert_eq!(truncate_to_width(line, 10), line);
//! ```

pub mod ansi;
pub mod block;

pub use ansi::{truncate_to_width, visible_width};
pub use block::Block;
