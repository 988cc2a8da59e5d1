//! The owl, in two sizes. Shade blocks only; color comes from the theme
//! accent at build time.

use owlfetch_text::Block;
use owlfetch_types::Theme;

/// Six-line owl for tight terminals.
const COMPACT_ART: [&str; 6] = [
    "    ▓▓▓▓▓▓",
    "   ▓▓▓▓▓▓▓▓",
    "  ▓▓██▓▓██▓▓",
    "  ▓▓▓▓▓▓▓▓▓▓",
    "   ▓▓▓▓▓▓▓▓",
    "    ▓▓▓▓▓▓",
];

/// The full portrait.
const FULL_ART: [&str; 23] = [
    "        ░ ░░░░                            ░░░░░░",
    "        ░░░░░░                            ░░░░░░",
    "        ░░░▓▓░░░░   ░░░░░░░░░░░░░░░░░  ░░░░▒▒░░",
    "         ░░▓▓▓▓▓▓░░░░░▒▒▒▒▒▒▒▒▒▒▒▒░░░░░▒▒▒▒▒▒░░",
    "           ░▓▓▓▓▓▓▓▓▓░░░▒▒▒▒▒▒▒▒░░░▒▒▒▒▒▒▒▒▒▒░",
    "           ░░▓▓▓▓▓▓▓▓▓▓▒░░▒▒▒▒░░▒▒▒▒▒▒▒▒▒▒▒░░",
    "        ░░░▒▓▓░░░░░░░░░▓▓░░▒▒░░▒▒░░░░░░░░░▒▒░░░░",
    "        ░░▓▓▓░   ░██░░░░▓▓░░░▒▒▒░░▒░██░░░░░▒▒▒░░",
    "        ░░▓▓░░ ░░██░░░█░░▓▓░░▒▒░░▒░░░██░  ░░▒▒░",
    "        ░░▓▓░  ░░███▓█▓░░▓▓░░▒▒░░██▓███░░ ░░▒▒░░",
    "        ░░▓▓░░   ░░█▓░░░░▓▓░░▒▒░░░░▓█░░   ░░▒▒░░",
    "         ░░▓▓░░░░  ░░░░▒▓▓░░░░▒▒░░░░░░  ░░░░▒▒░░░",
    "        ░░░░▓▓▓▓░░░░░▓▓▓▒░░▒▒░░▒▒▒▒░░░░░▒▒▒▒░░░░",
    "           ░░░░▓▓▓▓▓▓▒░░░░░▒▒░░░░░▒▒▒▒▒▒▒░░░░",
    "           ░░░▒▒░░░░░▒▒▒▒▒░░░░▒▒▒▒▒░░░░░▒▒░░░",
    "           ░░░░░▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒░░░░░",
    "              ░░░░▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒░░░░",
    "                 ░░▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒░░░",
    "                 ░░░░▒▒▒▒▒▒▒▒▒▒▒▒▒▒░░░░",
    "                   ░░░░▒▒▒▒▒▒▒▒▒▒░░░░",
    "                      ░░░▒▒▒▒▒▒░░░",
    "                      ░░░░░▒▒░░░░░",
    "                         ░░░░░░",
];

/// The compact owl, accent-colored.
pub fn compact_logo(theme: &Theme) -> Block {
    colorize(&COMPACT_ART, theme)
}

/// The full owl, accent-colored.
pub fn full_logo(theme: &Theme) -> Block {
    colorize(&FULL_ART, theme)
}

fn colorize(art: &[&str], theme: &Theme) -> Block {
    Block::new(
        art.iter()
            .map(|line| format!("{}{line}{}", theme.accent, theme.reset))
            .collect(),
    )
}
