//! Shared vocabulary module - styling and layout constants
//!
//! This module defines the types shared by every other crate in the
//! workspace: the ANSI color palette, the theme that maps palette colors to
//! display roles, the logo variant selector, and the layout constants the
//! compositor's arithmetic is built on. All types are pure data with no
//! external dependencies, so they are usable in any context (block builders,
//! layout decisions, tests).
//!
//! # Layout Constants
//!
//! All widths are in visible terminal columns:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GUTTER_WIDTH` | 4 | Fixed gap between logo column and info column |
//! | `MIN_TEXT_WIDTH` | 30 | Floor for the info column, however narrow the terminal |
//! | `NARROW_BREAKPOINT` | 60 | Below this many columns the logo is dropped entirely |
//! | `WIDE_BREAKPOINT` | 80 | Below this many columns the compact logo is used |
//! | `QR_QUIET_ZONE` | 2 | Blank modules framing a generated QR matrix |
//! | `FALLBACK_COLUMNS` | 80 | Assumed width when the terminal size is unavailable |
//! | `FALLBACK_ROWS` | 24 | Assumed height when the terminal size is unavailable |
//!
//! # Styling
//!
//! Colors are raw SGR control spans embedded directly into line strings; a
//! line carries its own styling and resets itself, so blocks can be measured
//! and re-combined without tracking terminal state. [`Palette`] holds the
//! spans, [`Theme`] assigns them to display roles. Both are plain immutable
//! values constructed once per render and passed by reference into the block
//! builders.
//!
//! # Examples
//!
//! ```
//! use owlfetch_types::{LogoVariant, Palette, Theme, GUTTER_WIDTH, MIN_TEXT_WIDTH};
//!
//! let palette = Palette::default();
//! let theme = Theme::new(&palette);
//! assert_eq!(theme.accent, palette.light_blue);
//! assert_eq!(theme.reset, palette.reset);
//!
//! // Layout arithmetic inputs.
//! assert_eq!(GUTTER_WIDTH, 4);
//! assert_eq!(MIN_TEXT_WIDTH, 30);
//!
//! // Variants are plain selectors; generation lives elsewhere.
//! let v = LogoVariant::Compact;
//! assert_ne!(v, LogoVariant::Qr);
//! ```

/// Fixed gap between the logo column and the info column (4 columns)
pub const GUTTER_WIDTH: usize = 4;

/// Minimum width of the info column (30 columns)
///
/// Acts as a floor: a narrower terminal overflows horizontally rather than
/// squeezing info lines below legibility.
pub const MIN_TEXT_WIDTH: usize = 30;

/// Terminal width below which the logo is omitted entirely (60 columns)
pub const NARROW_BREAKPOINT: u16 = 60;

/// Terminal width below which the compact logo replaces the full one (80 columns)
pub const WIDE_BREAKPOINT: u16 = 80;

/// Quiet-zone border around a generated QR matrix, in modules (2)
pub const QR_QUIET_ZONE: usize = 2;

/// Assumed terminal width when the size query fails (80 columns)
pub const FALLBACK_COLUMNS: u16 = 80;

/// Assumed terminal height when the size query fails (24 rows)
pub const FALLBACK_ROWS: u16 = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_breakpoints_are_ordered() {
        // Narrow mode must trigger before the compact/full switch.
        assert!(NARROW_BREAKPOINT < WIDE_BREAKPOINT);
        assert!(MIN_TEXT_WIDTH > 0);
        assert!((MIN_TEXT_WIDTH as u16) < NARROW_BREAKPOINT);
    }

    #[test]
    fn palette_spans_are_well_formed_sgr() {
        let p = Palette::default();
        let spans = [
            p.black,
            p.dark_gray,
            p.light_gray,
            p.white,
            p.blue,
            p.light_blue,
            p.cyan,
            p.green,
            p.purple,
            p.yellow,
            p.red,
            p.orange,
            p.pink,
            p.reset,
        ];
        for span in spans {
            assert!(span.starts_with("\x1b["), "not an escape span: {span:?}");
            assert!(span.ends_with('m'), "unterminated span: {span:?}");
        }
    }

    #[test]
    fn swatches_cover_the_classic_eight() {
        let p = Palette::default();
        let swatches = p.swatches();
        assert_eq!(swatches.len(), 8);
        assert_eq!(swatches[0], p.black);
        assert_eq!(swatches[7], p.white);
    }

    #[test]
    fn theme_maps_roles_onto_palette() {
        let p = Palette::default();
        let t = Theme::new(&p);
        assert_eq!(t.primary, p.white);
        assert_eq!(t.secondary, p.light_gray);
        assert_eq!(t.accent, p.light_blue);
        assert_eq!(t.border, p.dark_gray);
    }
}

/// Which logo the frame is built around
///
/// The variant only selects a generator; the realized block width is known
/// after generation, which is why the text-column arithmetic happens in the
/// compositor rather than here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    /// Small owl mark for terminals narrower than [`WIDE_BREAKPOINT`]
    Compact,
    /// Full owl artwork for wide terminals
    Full,
    /// ASCII-rendered QR code, chosen whenever a payload was supplied
    Qr,
}

/// The terminal color palette as embedded SGR spans
///
/// Every field is a complete control span (`ESC [ ... m`). Lines are built
/// by concatenating spans with text and terminating with [`Palette::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub black: &'static str,
    pub dark_gray: &'static str,
    pub light_gray: &'static str,
    pub white: &'static str,
    pub blue: &'static str,
    pub light_blue: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub purple: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
    pub orange: &'static str,
    pub pink: &'static str,
    /// Clears all styling; every styled line ends with this span.
    pub reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            black: "\x1b[0;30m",
            dark_gray: "\x1b[1;30m",
            light_gray: "\x1b[0;37m",
            white: "\x1b[1;37m",
            blue: "\x1b[0;34m",
            light_blue: "\x1b[1;34m",
            cyan: "\x1b[0;36m",
            green: "\x1b[0;32m",
            purple: "\x1b[0;35m",
            yellow: "\x1b[1;33m",
            red: "\x1b[0;31m",
            orange: "\x1b[38;5;208m",
            pink: "\x1b[38;5;213m",
            reset: "\x1b[0m",
        }
    }
}

impl Palette {
    /// The classic eight terminal colors, in SGR order
    ///
    /// This is the swatch strip the info panel appends on wide layouts.
    pub fn swatches(&self) -> [&'static str; 8] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.purple,
            self.cyan,
            self.white,
        ]
    }
}

/// Display roles resolved against a [`Palette`]
///
/// - **primary**: labels and the username
/// - **secondary**: values
/// - **accent**: logo art, tree branches, the hostname
/// - **border**: the horizontal rule under the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    /// Copied from the palette so block builders can terminate spans
    /// without carrying both structs.
    pub reset: &'static str,
}

impl Theme {
    /// Resolve the default role mapping against a palette
    pub fn new(palette: &Palette) -> Self {
        Self {
            primary: palette.white,
            secondary: palette.light_gray,
            accent: palette.light_blue,
            border: palette.dark_gray,
            reset: palette.reset,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}
