//! Hueboard - a clickable grid of named colors
//!
//! Hueboard shows the built-in table of named colors as a grid of swatches
//! sorted by hue, and copies whichever representation you click for:
//!
//! 1. **Left click**: the color's name (e.g. `red`)
//!
//! 2. **Right click**: the hex code (e.g. `#ff0000`)
//!
//! 3. **Double right click**: the decimal RGB tuple (e.g. `(255, 0, 0)`)

pub mod clipboard;
pub mod color;
pub mod grid;
pub mod gui;
pub mod palette;
pub mod pick;

pub use color::{Hsv, Rgb};
pub use grid::{GridCell, GridConfig, GridLayout};
pub use palette::{ColorEntry, PaletteError, named_colors};
pub use pick::{ClickButton, Copied, CopyFormat, PointerClick, resolve_click};
