//! Left-column art module.
//!
//! Produces the block that sits beside the info panel: the owl mark in two
//! sizes, or an ASCII QR code when the user asks for one. Either way the
//! result is a plain [`Block`](owlfetch_text::Block) of styled lines; the
//! compositor does not care which it got.

pub mod art;
pub mod qr;

pub use art::{compact_logo, full_logo};
pub use qr::{qr_logo, qr_matrix};
