//! Escape-aware width measurement and truncation.
//!
//! A control span starts at `ESC` and runs through the next `m`, inclusive.
//! A trailing `ESC` with no terminating `m` is consumed to end of string;
//! malformed input cannot make a span count toward width.

/// Marker appended to every truncated line.
const ELLIPSIS: &str = "...";

/// The canonical "clear all styling" span.
const RESET: &str = "\x1b[0m";

/// Number of visible columns in a line, ignoring all control spans.
///
/// Empty input yields 0. Every non-span character counts as one column.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            skip_span(&mut chars);
        } else {
            width += 1;
        }
    }
    width
}

/// Shorten `line` to at most `max_visible` columns, preserving styling.
///
/// A line that already fits is returned unchanged. Otherwise ordinary
/// characters are copied until `max_visible - 3` columns are used (three
/// reserved for the ellipsis), control spans encountered before the cut are
/// copied verbatim and never split, and `...` is appended. When the original
/// line ended with a reset span, the result does too, so a truncated line
/// can never leak color into whatever is printed after it.
///
/// The copy budget saturates at zero: for `max_visible < 3` the result is
/// any leading spans, the ellipsis, and the reset, giving a visible width of
/// 3 even though less was asked for. Callers wanting a hard guarantee should
/// not request widths below the ellipsis length.
pub fn truncate_to_width(line: &str, max_visible: usize) -> String {
    if visible_width(line) <= max_visible {
        return line.to_string();
    }

    let budget = max_visible.saturating_sub(ELLIPSIS.len());
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            out.push(ch);
            copy_span(&mut chars, &mut out);
        } else {
            if copied == budget {
                break;
            }
            out.push(ch);
            copied += 1;
        }
    }

    out.push_str(ELLIPSIS);
    if line.ends_with(RESET) && !out.ends_with(RESET) {
        out.push_str(RESET);
    }
    out
}

/// Advance past the remainder of a span whose `ESC` was already consumed.
fn skip_span(chars: &mut std::str::Chars<'_>) {
    for ch in chars.by_ref() {
        if ch == 'm' {
            break;
        }
    }
}

/// Copy the remainder of a span whose `ESC` was already pushed.
fn copy_span(chars: &mut std::str::Chars<'_>, out: &mut String) {
    for ch in chars.by_ref() {
        out.push(ch);
        if ch == 'm' {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: &str = "\x1b[1;34m";
    const GRAY: &str = "\x1b[0;37m";

    #[test]
    fn width_of_plain_text_is_char_count() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("owlfetch"), 8);
        assert_eq!(visible_width("├─ OS"), 5);
    }

    #[test]
    fn width_ignores_interleaved_spans() {
        let line = format!("{BLUE}user{RESET}@{GRAY}host{RESET}");
        assert_eq!(visible_width(&line), "user@host".len());

        // Spans alone measure zero.
        assert_eq!(visible_width(BLUE), 0);
        assert_eq!(visible_width(&format!("{BLUE}{GRAY}{RESET}")), 0);
    }

    #[test]
    fn width_treats_unterminated_escape_as_zero() {
        assert_eq!(visible_width("abc\x1b[1;3"), 3);
    }

    #[test]
    fn truncate_returns_fitting_lines_unchanged() {
        let line = format!("{BLUE}short{RESET}");
        assert_eq!(truncate_to_width(&line, 5), line);
        assert_eq!(truncate_to_width(&line, 80), line);
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn truncate_reserves_three_columns_for_the_ellipsis() {
        let out = truncate_to_width("abcdefghij", 8);
        assert_eq!(out, "abcde...");
        assert_eq!(visible_width(&out), 8);
    }

    #[test]
    fn truncate_copies_spans_without_counting_them() {
        let line = format!("{GRAY}a very long value indeed{RESET}");
        let out = truncate_to_width(&line, 10);
        assert!(out.starts_with(GRAY));
        assert!(out.ends_with(RESET));
        assert_eq!(visible_width(&out), 10);
    }

    #[test]
    fn truncate_never_splits_a_span() {
        // Cut lands between the two styled words; the second span must be
        // copied whole or not at all.
        let line = format!("{BLUE}abcd{GRAY}efgh{RESET}");
        let out = truncate_to_width(&line, 6);
        assert_eq!(out, format!("{BLUE}abc...{RESET}"));
    }

    #[test]
    fn truncate_restores_reset_after_the_cut() {
        let line = format!("{GRAY}abcdefghij{RESET}");
        let out = truncate_to_width(&line, 5);
        assert!(out.ends_with(RESET), "truncated line leaks color: {out:?}");
        assert_eq!(visible_width(&out), 5);
    }

    #[test]
    fn truncate_is_idempotent() {
        let line = format!("{GRAY}abcdefghijklmnop{RESET}");
        let once = truncate_to_width(&line, 9);
        let twice = truncate_to_width(&once, 9);
        assert_eq!(once, twice);
    }

    #[test]
    fn truncate_clamps_tiny_budgets() {
        // Below the ellipsis width the budget saturates at zero ordinary
        // characters; the marker is still appended.
        let out = truncate_to_width("abcdef", 2);
        assert_eq!(out, "...");

        let styled = format!("{GRAY}abcdef{RESET}");
        let out = truncate_to_width(&styled, 0);
        assert_eq!(out, format!("{GRAY}...{RESET}"));
    }

    #[test]
    fn truncate_bound_holds_for_all_small_widths() {
        let line = format!("{BLUE}0123456789{GRAY}0123456789{RESET}");
        for max in 3..=20 {
            let out = truncate_to_width(&line, max);
            assert!(
                visible_width(&out) <= max,
                "width {} exceeds max {max}",
                visible_width(&out)
            );
        }
    }
}
