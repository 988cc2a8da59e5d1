use owlfetch::text::{truncate_to_width, visible_width};

const BLUE: &str = "\x1b[1;34m";
const GRAY: &str = "\x1b[0;37m";
const RESET: &str = "\x1b[0m";

#[test]
fn control_spans_take_no_columns() {
    let styled = format!("{BLUE}├─ {RESET}{GRAY}Kernel{RESET}");
    assert_eq!(visible_width(&styled), 9);
    assert_eq!(visible_width("Kernel"), 6);
    assert_eq!(visible_width(""), 0);
}

#[test]
fn truncation_reserves_room_for_the_ellipsis() {
    let styled = format!("{GRAY}abcdefghij{RESET}");
    let cut = truncate_to_width(&styled, 8);
    assert_eq!(visible_width(&cut), 8);
    assert!(cut.contains("abcde..."));
}

#[test]
fn truncation_keeps_spans_and_closes_the_line() {
    let styled = format!("{BLUE}abc{GRAY}defgh{RESET}");
    let cut = truncate_to_width(&styled, 6);
    assert!(cut.starts_with(BLUE));
    assert!(cut.contains(GRAY));
    assert!(cut.ends_with(RESET));
    assert_eq!(visible_width(&cut), 6);
}

#[test]
fn fitting_lines_pass_through_untouched() {
    let styled = format!("{GRAY}short{RESET}");
    assert_eq!(truncate_to_width(&styled, 10), styled);
    assert_eq!(truncate_to_width(&styled, 5), styled);
}

#[test]
fn tiny_budgets_collapse_to_the_ellipsis() {
    assert_eq!(truncate_to_width("abcdef", 2), "...");
    assert_eq!(truncate_to_width("abcdef", 0), "...");
}
