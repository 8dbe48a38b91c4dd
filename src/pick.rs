//! Click dispatch: turns a pointer event over the grid into the text that
//! should land on the clipboard.

use egui::Pos2;

use crate::grid::GridLayout;

/// Which mouse button produced a click. Only the two buttons the grid
/// reacts to are modeled; others never reach the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    Primary,
    Secondary,
}

/// A pointer click in the grid's coordinate space.
#[derive(Debug, Clone, Copy)]
pub struct PointerClick {
    pub pos: Pos2,
    pub button: ClickButton,
    pub double: bool,
}

/// The representation a click asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// The color's name, e.g. `red`.
    Name,
    /// Lowercase hex, e.g. `#ff0000`.
    Hex,
    /// Decimal tuple, e.g. `(255, 0, 0)`.
    RgbTuple,
}

impl CopyFormat {
    /// Primary copies the name whatever the click count; secondary picks
    /// hex on a single click and the RGB tuple on a double click.
    pub fn for_click(button: ClickButton, double: bool) -> Self {
        match (button, double) {
            (ClickButton::Primary, _) => CopyFormat::Name,
            (ClickButton::Secondary, false) => CopyFormat::Hex,
            (ClickButton::Secondary, true) => CopyFormat::RgbTuple,
        }
    }
}

/// A resolved click: which color was hit and the payload to copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Copied {
    pub name: &'static str,
    pub format: CopyFormat,
    pub payload: String,
}

/// Resolve a click against a layout snapshot. `None` means no cell
/// contains the point; the click is ignored, not an error.
pub fn resolve_click(layout: &GridLayout, click: &PointerClick) -> Option<Copied> {
    let cell = layout.cell_at(click.pos)?;
    let format = CopyFormat::for_click(click.button, click.double);
    let payload = match format {
        CopyFormat::Name => cell.name.to_string(),
        CopyFormat::Hex => cell.rgb.to_hex(),
        CopyFormat::RgbTuple => cell.rgb.to_rgb_tuple(),
    };
    Some(Copied {
        name: cell.name,
        format,
        payload,
    })
}
