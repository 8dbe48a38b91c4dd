//! Toast notification for copy feedback
//!
//! Shows the value that just landed on the clipboard (or a clipboard
//! warning) in the bottom-right corner, fading out after a couple of
//! seconds.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use super::theme::{TOAST_BG, TOAST_TEXT, TOAST_WARN};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_millis(2200);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.2;

/// One feedback message.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    warning: bool,
    started: Instant,
}

impl Toast {
    /// Feedback for a successful copy, showing the exact payload.
    pub fn copied(payload: &str) -> Self {
        Self {
            message: format!("Copied {}", payload),
            warning: false,
            started: Instant::now(),
        }
    }

    /// Non-fatal problem the user should see, e.g. clipboard loss.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            warning: true,
            started: Instant::now(),
        }
    }
}

/// Render the current toast, clearing it once it expires.
pub fn render_toast(ctx: &egui::Context, toast: &mut Option<Toast>) {
    let Some(current) = toast.as_ref() else {
        return;
    };

    let elapsed = current.started.elapsed();
    if elapsed > TOAST_DURATION {
        *toast = None;
        ctx.request_repaint();
        return;
    }

    // Calculate fade alpha
    let progress = elapsed.as_secs_f32();
    let alpha = if progress < FADE_DURATION {
        // Fade in
        progress / FADE_DURATION
    } else if progress > TOAST_DURATION.as_secs_f32() - FADE_DURATION {
        // Fade out
        (TOAST_DURATION.as_secs_f32() - progress) / FADE_DURATION
    } else {
        1.0
    };

    let text_color = if current.warning { TOAST_WARN } else { TOAST_TEXT };

    egui::Area::new(Id::new("copy_toast"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let bg_color = Color32::from_rgba_unmultiplied(
                TOAST_BG.r(),
                TOAST_BG.g(),
                TOAST_BG.b(),
                (alpha * 240.0) as u8,
            );

            egui::Frame::NONE
                .fill(bg_color)
                .corner_radius(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(&current.message)
                            .monospace()
                            .color(apply_alpha(text_color, alpha)),
                    );
                });
        });

    // Keep repainting for animation
    ctx.request_repaint();
}

/// Apply alpha to a color
fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}
