//! Row-by-row combination of the logo and info blocks.

use owlfetch_text::{visible_width, Block};
use owlfetch_types::{GUTTER_WIDTH, NARROW_BREAKPOINT};

/// Zip two blocks into printable frame rows.
///
/// Below [`NARROW_BREAKPOINT`] columns the logo is dropped and the info
/// block stands alone. Otherwise the blocks sit side by side for as many
/// rows as the taller one needs: each row pads the logo cell with spaces
/// up to `logo_width + GUTTER_WIDTH` visible columns, so the info column
/// starts at the same offset whether or not the logo still has lines
/// there. A single blank row brackets the frame on each side.
pub fn compose(logo: &Block, info: &Block, terminal_columns: u16) -> Vec<String> {
    if terminal_columns < NARROW_BREAKPOINT {
        let mut rows = Vec::with_capacity(info.height() + 2);
        rows.push(String::new());
        rows.extend(info.lines().iter().cloned());
        rows.push(String::new());
        return rows;
    }

    let logo_width = logo.width();
    let height = logo.height().max(info.height());

    let mut rows = Vec::with_capacity(height + 2);
    rows.push(String::new());
    for index in 0..height {
        let left = logo.line(index).unwrap_or("");
        let right = info.line(index).unwrap_or("");
        let pad = logo_width - visible_width(left) + GUTTER_WIDTH;
        let mut row = String::with_capacity(left.len() + pad + right.len());
        row.push_str(left);
        row.push_str(&" ".repeat(pad));
        row.push_str(right);
        rows.push(row);
    }
    rows.push(String::new());
    rows
}
