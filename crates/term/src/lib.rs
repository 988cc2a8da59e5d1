//! Terminal frame assembly.
//!
//! This crate decides what the final frame looks like and gets it onto the
//! screen. Everything except [`screen`] is pure: layout picks the logo
//! variant and column widths from the terminal size, compose zips two
//! blocks into printable rows, and both can be tested against plain
//! strings with no terminal attached.

pub mod compose;
pub mod layout;
pub mod screen;

pub use compose::compose;
pub use layout::{choose_variant, text_column_width};
pub use screen::Screen;
