//! GUI Theme: plain light surface so the swatches read true.
//!
//! Color constants for the hueboard window. The grid itself supplies all
//! the color, so the chrome stays near-white and neutral.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background, matching the white canvas the grid was designed on
pub const BG_PRIMARY: Color32 = Color32::from_rgb(252, 252, 252);
/// Background of the cell under the pointer
pub const BG_HOVER: Color32 = Color32::from_rgb(234, 238, 242);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Cell labels
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 36, 40);

// ═══════════════════════════════════════════════════════════════════════════
// TOAST COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Dark backdrop so the toast stands out on the light grid
pub const TOAST_BG: Color32 = Color32::from_rgb(36, 40, 46);
/// Toast payload text
pub const TOAST_TEXT: Color32 = Color32::from_rgb(240, 240, 240);
/// Toast text for clipboard warnings
pub const TOAST_WARN: Color32 = Color32::from_rgb(255, 176, 0);
