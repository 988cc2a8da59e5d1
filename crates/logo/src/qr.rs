//! ASCII QR rendering. Encoding happens in the `qrcode` crate; this module
//! frames the matrix with a quiet zone and turns it into styled lines.

use anyhow::{anyhow, Result};
use qrcode::{EcLevel, QrCode};

use owlfetch_text::Block;
use owlfetch_types::{Palette, Theme, QR_QUIET_ZONE};

/// Encode `payload` at the lowest error-correction level and frame the
/// dark-module matrix with [`QR_QUIET_ZONE`] empty modules on every side.
pub fn qr_matrix(payload: &str) -> Result<Vec<Vec<bool>>> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
        .map_err(|err| anyhow!("{err:?}"))?;
    let width = code.width();
    let framed = width + 2 * QR_QUIET_ZONE;

    let mut matrix = vec![vec![false; framed]; framed];
    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color == qrcode::Color::Dark {
            let row = index / width + QR_QUIET_ZONE;
            let column = index % width + QR_QUIET_ZONE;
            matrix[row][column] = true;
        }
    }
    Ok(matrix)
}

/// Render `payload` as a scannable block, two columns per module so the
/// code comes out roughly square on screen.
///
/// Encoding failures never propagate; they collapse into a short two-line
/// block and the frame renders on.
pub fn qr_logo(payload: &str, palette: &Palette, theme: &Theme) -> Block {
    match qr_matrix(payload) {
        Ok(matrix) => matrix_block(&matrix, theme),
        Err(err) => {
            log::warn!("qr encoding failed: {err}");
            Block::new(vec![
                format!(
                    "{}Error generating QR code: {err}{}",
                    palette.red, theme.reset
                ),
                format!("{}Try a shorter payload{}", theme.secondary, theme.reset),
            ])
        }
    }
}

fn matrix_block(matrix: &[Vec<bool>], theme: &Theme) -> Block {
    let mut block = Block::default();
    for row in matrix {
        let mut line = String::new();
        for &dark in row {
            if dark {
                line.push_str(theme.accent);
                line.push_str("██");
                line.push_str(theme.reset);
            } else {
                line.push_str("  ");
            }
        }
        block.push(line);
    }
    block
}
