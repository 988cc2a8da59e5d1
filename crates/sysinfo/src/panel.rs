//! The styled info panel: a tree-structured listing of [`SystemReport`]
//! facts, pre-colored and pre-truncated for a known column budget.

use owlfetch_text::{truncate_to_width, Block};
use owlfetch_types::{Palette, Theme};

use crate::report::SystemReport;

/// Width of the label field inside an entry row.
const LABEL_WIDTH: usize = 11;

/// Visible prefix of an entry row (branch, space, label field) plus one.
/// Values that can run long are clipped to `panel_width - VALUE_MARGIN`.
const VALUE_MARGIN: usize = 15;

const BRANCH_MID: &str = "├─";
const BRANCH_LAST: &str = "└─";

const SECTION_ICON: &str = "󰍹";
const BATTERY_ICON: &str = "󰁹";

/// Lay the report out as styled panel lines, `panel_width` columns wide.
///
/// Long free-form values (OS name, CPU model, network summary and the
/// like) are clipped so the row never overruns the column; fixed-format
/// values are trusted as-is. A color strip is appended when the panel is
/// wide enough to fit one.
pub fn info_panel(
    report: &SystemReport,
    palette: &Palette,
    theme: &Theme,
    panel_width: usize,
) -> Block {
    let value_width = panel_width.saturating_sub(VALUE_MARGIN);
    let clip = |text: &str| truncate_to_width(&styled(theme, text), value_width);

    let mut block = Block::new(vec![
        format!(
            "{}{}{}@{}{}{}",
            theme.primary, report.username, theme.secondary, theme.accent, report.hostname, theme.reset
        ),
        format!(
            "{}{}{}",
            theme.border,
            "─".repeat(panel_width.min(30)),
            theme.reset
        ),
        section(theme, SECTION_ICON, "System"),
        entry(theme, BRANCH_MID, "OS", &clip(&report.os)),
        entry(theme, BRANCH_MID, "Kernel", &clip(&report.kernel)),
        entry(theme, BRANCH_MID, "Uptime", &clip(&report.uptime)),
        entry(theme, BRANCH_MID, "Packages", &styled(theme, &report.packages)),
        entry(theme, BRANCH_LAST, "Shell", &styled(theme, &report.shell)),
        String::new(),
        section(theme, SECTION_ICON, "Hardware"),
        entry(theme, BRANCH_MID, "CPU", &clip(&report.cpu)),
        entry(theme, BRANCH_MID, "GPU", &clip(&report.gpu)),
        entry(theme, BRANCH_MID, "Memory", &styled(theme, &report.memory)),
        entry(theme, BRANCH_LAST, "Disk", &styled(theme, &report.disk)),
        String::new(),
        section(theme, SECTION_ICON, "Performance"),
        entry(
            theme,
            BRANCH_MID,
            "CPU Usage",
            &styled(theme, &format!("{}%", report.cpu_usage)),
        ),
        entry(theme, BRANCH_MID, "CPU Temp", &styled(theme, &report.cpu_temp)),
        entry(theme, BRANCH_LAST, "Load Avg", &styled(theme, &report.load_average)),
        String::new(),
        section(theme, SECTION_ICON, "Environment"),
        entry(theme, BRANCH_MID, "DE/WM", &clip(&report.desktop)),
        entry(theme, BRANCH_MID, "Resolution", &styled(theme, &report.resolution)),
        entry(theme, BRANCH_MID, "Locale", &styled(theme, &report.locale)),
        entry(theme, BRANCH_LAST, "Network", &clip(&report.network)),
    ]);

    if let Some(battery) = &report.battery {
        block.push(String::new());
        block.push(entry(theme, BATTERY_ICON, "Battery", &styled(theme, battery)));
    }

    if panel_width > 40 {
        block.push(String::new());
        block.push(color_strip(palette, theme));
    }

    block
}

/// `{accent}{icon} {primary}{title}{reset}`
fn section(theme: &Theme, icon: &str, title: &str) -> String {
    format!(
        "{}{icon} {}{title}{}",
        theme.accent, theme.primary, theme.reset
    )
}

/// `{accent}{branch} {primary}{label}{reset}<pad>{value}` with the label
/// field padded to [`LABEL_WIDTH`] columns. `value` arrives styled.
fn entry(theme: &Theme, branch: &str, label: &str, value: &str) -> String {
    let pad = " ".repeat(LABEL_WIDTH.saturating_sub(label.chars().count()));
    format!(
        "{}{branch} {}{label}{}{pad}{value}",
        theme.accent, theme.primary, theme.reset
    )
}

fn styled(theme: &Theme, value: &str) -> String {
    format!("{}{value}{}", theme.secondary, theme.reset)
}

fn color_strip(palette: &Palette, theme: &Theme) -> String {
    let mut strip = format!("{}Colors: ", theme.secondary);
    for color in palette.swatches() {
        strip.push_str(color);
        strip.push_str("███");
    }
    strip.push_str(theme.reset);
    strip
}
