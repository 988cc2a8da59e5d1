//! Width-driven layout decisions.

use owlfetch_types::{LogoVariant, GUTTER_WIDTH, MIN_TEXT_WIDTH, WIDE_BREAKPOINT};

/// Pick the logo variant for a terminal width.
///
/// An explicit QR request always wins; width only decides which owl fits.
pub fn choose_variant(terminal_columns: u16, qr_requested: bool) -> LogoVariant {
    if qr_requested {
        LogoVariant::Qr
    } else if terminal_columns < WIDE_BREAKPOINT {
        LogoVariant::Compact
    } else {
        LogoVariant::Full
    }
}

/// Columns available to the info panel beside a logo of `logo_width`.
///
/// Whatever remains after the logo and the gutter, but never less than
/// [`MIN_TEXT_WIDTH`]; cramped terminals overflow rather than squeeze the
/// panel into an unreadable sliver.
pub fn text_column_width(terminal_columns: u16, logo_width: usize) -> usize {
    (terminal_columns as usize)
        .saturating_sub(logo_width)
        .saturating_sub(GUTTER_WIDTH)
        .max(MIN_TEXT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_request_overrides_width() {
        assert_eq!(choose_variant(45, true), LogoVariant::Qr);
        assert_eq!(choose_variant(200, true), LogoVariant::Qr);
    }

    #[test]
    fn wide_breakpoint_switches_the_owl() {
        assert_eq!(choose_variant(79, false), LogoVariant::Compact);
        assert_eq!(choose_variant(80, false), LogoVariant::Full);
    }

    #[test]
    fn panel_gets_what_the_logo_leaves() {
        assert_eq!(text_column_width(120, 48), 68);
        assert_eq!(text_column_width(80, 12), 64);
    }

    #[test]
    fn panel_width_never_drops_below_the_floor() {
        assert_eq!(text_column_width(50, 10), 36);
        assert_eq!(text_column_width(40, 10), 30);
        assert_eq!(text_column_width(10, 48), 30);
    }
}
