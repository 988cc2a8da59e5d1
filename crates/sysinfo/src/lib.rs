//! System probing module.
//!
//! Everything here answers one question: what is this machine running right
//! now? Facts come from `/proc`, `/sys`, `/etc` and a handful of external
//! tools, get normalized into display-ready strings, and end up in a
//! [`SystemReport`]. The report is then laid out as a styled info panel.
//!
//! Probes never fail the program. A missing file, an absent tool or a
//! timed-out command degrades to a sentinel value (`"Unknown"`, `"N/A"`,
//! `"No connection"`) and the panel renders around it.
//!
//! # Module Structure
//!
//! - [`probe`]: low-level file reads and bounded subprocess queries
//! - [`report`]: fact collection and normalization into [`SystemReport`]
//! - [`panel`]: the styled, tree-structured info panel

pub mod panel;
mod probe;
pub mod report;

pub use panel::info_panel;
pub use report::SystemReport;
