//! owlfetch (workspace facade crate).
//!
//! This package keeps the `owlfetch::{logo,sysinfo,term,text,types}` public
//! API in one place while the implementation lives in dedicated crates
//! under `crates/`.

pub use owlfetch_logo as logo;
pub use owlfetch_sysinfo as sysinfo;
pub use owlfetch_term as term;
pub use owlfetch_text as text;
pub use owlfetch_types as types;
