//! owlfetch runner (default binary).
//!
//! Probes the machine, builds the info panel and the left-column art, and
//! prints one composed frame sized to the current terminal. Diagnostics go
//! to stderr through `env_logger`; stdout carries nothing but the frame.

use anyhow::Result;
use clap::Parser;

use owlfetch::logo::{compact_logo, full_logo, qr_logo};
use owlfetch::sysinfo::{info_panel, SystemReport};
use owlfetch::term::{choose_variant, compose, text_column_width, Screen};
use owlfetch::types::{LogoVariant, Palette, Theme};

#[derive(Parser)]
#[command(name = "owlfetch")]
#[command(version)]
#[command(about = "System information at a glance, with an owl")]
struct Cli {
    /// Render an ASCII QR code of PAYLOAD in place of the owl
    #[arg(long = "ascii-qr", value_name = "PAYLOAD")]
    ascii_qr: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let palette = Palette::default();
    let theme = Theme::new(&palette);

    let (columns, rows) = Screen::size_or_default();
    let variant = choose_variant(columns, cli.ascii_qr.is_some());
    log::debug!("terminal {columns}x{rows}, logo variant {variant:?}");

    let logo = match variant {
        LogoVariant::Compact => compact_logo(&theme),
        LogoVariant::Full => full_logo(&theme),
        LogoVariant::Qr => {
            let payload = cli.ascii_qr.as_deref().unwrap_or_default();
            qr_logo(payload, &palette, &theme)
        }
    };

    // The panel width depends on the realized logo width, so the report is
    // collected only after the logo exists.
    let panel_width = text_column_width(columns, logo.width());
    let report = SystemReport::collect();
    let info = info_panel(&report, &palette, &theme, panel_width);

    let frame = compose(&logo, &info, columns);
    Screen::new().draw(&frame)
}
