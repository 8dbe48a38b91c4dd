//! Main GUI application using egui
//!
//! Paints the color grid and dispatches pointer clicks:
//! - Left click copies the color's name
//! - Right click copies the hex code
//! - Double right click copies the decimal RGB tuple

use eframe::egui::{self, Align2, Color32, CursorIcon, FontId, PointerButton, Rect};
use tracing::{debug, info, warn};

use super::theme;
use super::toast::{Toast, render_toast};
use crate::clipboard::SystemClipboard;
use crate::color::Rgb;
use crate::grid::{GridConfig, GridLayout};
use crate::palette::ColorEntry;
use crate::pick::{ClickButton, Copied, PointerClick, resolve_click};

pub struct HueboardApp {
    /// Validated color table the grid is built from
    entries: Vec<ColorEntry>,
    /// Layout knobs
    config: GridConfig,
    /// Cached layout, rebuilt when the painted surface changes
    layout: Option<GridLayout>,
    /// Long-lived clipboard handle
    clipboard: SystemClipboard,
    /// Copy feedback
    toast: Option<Toast>,
}

impl HueboardApp {
    pub fn new(entries: Vec<ColorEntry>, config: GridConfig) -> Self {
        Self {
            entries,
            config,
            layout: None,
            clipboard: SystemClipboard::new(),
            toast: None,
        }
    }

    /// Apply the light theme to the egui context.
    fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = false;
        style.visuals.panel_fill = theme::BG_PRIMARY;
        style.visuals.window_fill = theme::BG_PRIMARY;
        style.visuals.override_text_color = Some(theme::TEXT_PRIMARY);
        ctx.set_style(style);
    }

    /// Rebuild the cached layout when the surface changes (first frame,
    /// DPI switch). Within one surface the snapshot never moves, so click
    /// regions stay exact.
    fn ensure_layout(&mut self, bounds: Rect) {
        let stale = self
            .layout
            .as_ref()
            .map_or(true, |layout| layout.bounds() != bounds);
        if stale {
            debug!(?bounds, "building grid layout");
            self.layout = Some(GridLayout::build(&self.entries, bounds, &self.config));
        }
    }

    /// Copy a resolved click's payload and surface the result to the user.
    fn copy_payload(&mut self, copied: &Copied) {
        info!("{}", copied.payload);
        match self.clipboard.copy(&copied.payload) {
            Ok(()) => self.toast = Some(Toast::copied(&copied.payload)),
            Err(e) => {
                warn!("Clipboard write failed: {:#}", e);
                self.toast = Some(Toast::warning("Clipboard unavailable"));
            }
        }
    }
}

impl eframe::App for HueboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG_PRIMARY))
            .show(ctx, |ui| {
                let bounds = ui.max_rect();
                self.ensure_layout(bounds);
                let Some(layout) = self.layout.as_ref() else {
                    return;
                };

                let hovered = ctx
                    .input(|i| i.pointer.hover_pos())
                    .and_then(|pos| layout.cell_at(pos))
                    .map(|cell| cell.name);
                if hovered.is_some() {
                    ctx.set_cursor_icon(CursorIcon::PointingHand);
                }

                paint_cells(ui, layout, hovered);

                if let Some(click) = pointer_click(ctx) {
                    debug!(
                        pos = ?click.pos,
                        button = ?click.button,
                        double = click.double,
                        "pointer click"
                    );
                    if let Some(copied) = resolve_click(layout, &click) {
                        self.copy_payload(&copied);
                    }
                }
            });

        render_toast(ctx, &mut self.toast);
    }
}

/// Paint every cell: hover highlight first, then swatch bar and label.
fn paint_cells(ui: &egui::Ui, layout: &GridLayout, hovered: Option<&str>) {
    let painter = ui.painter();
    let font = FontId::proportional(layout.label_font_size());

    for cell in layout.cells() {
        if hovered == Some(cell.name) {
            painter.rect_filled(cell.region, 2.0, theme::BG_HOVER);
        }
        painter.rect_filled(cell.swatch, 0.0, swatch_fill(cell.rgb));
        painter.text(
            cell.label_pos,
            Align2::LEFT_CENTER,
            cell.name,
            font.clone(),
            theme::TEXT_PRIMARY,
        );
    }
}

/// Display color for a swatch. Rounding here is purely visual; clipboard
/// conversions live on `Rgb` and keep their own rules.
fn swatch_fill(rgb: Rgb) -> Color32 {
    Color32::from_rgb(
        (rgb.r * 255.0).round() as u8,
        (rgb.g * 255.0).round() as u8,
        (rgb.b * 255.0).round() as u8,
    )
}

/// Translate this frame's pointer input into at most one grid click.
///
/// A double click arrives right after its own single click, so the
/// double check runs first; on the frame where both fire, the double
/// wins. The single click of the pair still went through on the earlier
/// frame, mirroring how the events are delivered.
fn pointer_click(ctx: &egui::Context) -> Option<PointerClick> {
    ctx.input(|i| {
        let pos = i.pointer.interact_pos()?;
        if i.pointer.button_double_clicked(PointerButton::Secondary) {
            Some(PointerClick {
                pos,
                button: ClickButton::Secondary,
                double: true,
            })
        } else if i.pointer.button_clicked(PointerButton::Secondary) {
            Some(PointerClick {
                pos,
                button: ClickButton::Secondary,
                double: false,
            })
        } else if i.pointer.button_double_clicked(PointerButton::Primary) {
            Some(PointerClick {
                pos,
                button: ClickButton::Primary,
                double: true,
            })
        } else if i.pointer.button_clicked(PointerButton::Primary) {
            Some(PointerClick {
                pos,
                button: ClickButton::Primary,
                double: false,
            })
        } else {
            None
        }
    })
}
