//! GUI runner - launches the color grid window
//!
//! Validates the built-in table before any window exists, then hands the
//! entries to the app.

use anyhow::{Context, Result};
use eframe::egui::{self, IconData};
use tracing::info;

use super::app::HueboardApp;
use crate::grid::GridConfig;
use crate::palette;

/// Window size in logical pixels. Sized so the default four-column grid
/// renders with the proportions it was designed for.
const WINDOW_SIZE: [f32; 2] = [800.0, 500.0];

/// Build the app icon: a 2x2 quad of swatch colors, generated in place.
fn app_icon() -> IconData {
    const SIDE: usize = 32;
    const QUADS: [[u8; 3]; 4] = [
        [214, 69, 65],
        [38, 166, 91],
        [68, 108, 179],
        [244, 208, 63],
    ];

    let mut rgba = Vec::with_capacity(SIDE * SIDE * 4);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let quad = usize::from(y >= SIDE / 2) * 2 + usize::from(x >= SIDE / 2);
            let [r, g, b] = QUADS[quad];
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }

    IconData {
        rgba,
        width: SIDE as u32,
        height: SIDE as u32,
    }
}

/// Run the color grid window until the user closes it.
pub fn run_gui(config: GridConfig) -> Result<()> {
    let entries = palette::named_colors().to_vec();
    palette::validate(&entries).context("Built-in color table failed validation")?;

    info!("[hueboard] Starting color grid with {} colors", entries.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_icon(std::sync::Arc::new(app_icon())),
        centered: true,
        ..Default::default()
    };

    let app = HueboardApp::new(entries, config);

    eframe::run_native("Color Picker", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_icon_dimensions() {
        let icon = app_icon();
        assert_eq!(icon.width, 32);
        assert_eq!(icon.height, 32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_app_icon_is_opaque() {
        let icon = app_icon();
        assert!(icon.rgba.chunks(4).all(|px| px[3] == 255));
    }
}
