//! Grid layout: orders the color table perceptually and assigns every
//! entry a cell with exact pixel geometry.
//!
//! A layout is an immutable snapshot built for one surface size. Entries
//! are sorted by HSV (ties broken by name), then wrapped row-major into a
//! fixed number of columns. Each cell records the rectangle that reacts to
//! clicks alongside the swatch bar and label anchor used for painting.

use std::cmp::Ordering;

use egui::{Pos2, Rect, Vec2};

use crate::color::Rgb;
use crate::palette::ColorEntry;

// Cell geometry as fractions of one grid slot: swatch bar on the left,
// label to its right, the bar riding slightly above the text baseline.
const SWATCH_LEFT: f32 = 0.05;
const SWATCH_RIGHT: f32 = 0.25;
const LABEL_LEFT: f32 = 0.30;
const SWATCH_THICKNESS: f32 = 0.6;
const SWATCH_RAISE: f32 = 0.1;
const LABEL_FONT_SCALE: f32 = 0.8;

/// Layout knobs for the grid builder.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Number of columns the sorted entries wrap into.
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: 4 }
    }
}

/// One laid-out color: where its clickable region, swatch and label live.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub name: &'static str,
    pub rgb: Rgb,
    pub row: usize,
    pub col: usize,
    /// Full slot rectangle. This is the exact area that reacts to clicks.
    pub region: Rect,
    /// The colored bar inside the slot.
    pub swatch: Rect,
    /// Left-center anchor of the name label.
    pub label_pos: Pos2,
}

/// An immutable grid snapshot: sorted cells plus the surface they were
/// computed for.
#[derive(Debug, Clone)]
pub struct GridLayout {
    cells: Vec<GridCell>,
    bounds: Rect,
    rows: usize,
    columns: usize,
    row_height: f32,
}

impl GridLayout {
    /// Lay out `entries` inside `bounds`.
    ///
    /// Row count is `n / columns + 1`, which leaves a spare row of
    /// headroom below the grid whenever the last row is full. Cells tile
    /// the grid area without gaps, so every point is in at most one
    /// region (shared edges resolve to the first cell in scan order).
    pub fn build(entries: &[ColorEntry], bounds: Rect, config: &GridConfig) -> Self {
        let columns = config.columns.max(1);
        let rows = entries.len() / columns + 1;
        let w = bounds.width() / columns as f32;
        let h = bounds.height() / (rows + 1) as f32;

        let mut sorted: Vec<&ColorEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| hsv_order(a, b));

        let cells = sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let col = i % columns;
                let row = i / columns;
                let x0 = bounds.left() + w * col as f32;
                let label_y = bounds.top() + h * (row as f32 + 1.0);

                let region = Rect::from_min_size(
                    Pos2::new(x0, label_y - h / 2.0),
                    Vec2::new(w, h),
                );

                let swatch_y = label_y - h * SWATCH_RAISE;
                let swatch = Rect::from_min_max(
                    Pos2::new(x0 + w * SWATCH_LEFT, swatch_y - h * SWATCH_THICKNESS / 2.0),
                    Pos2::new(x0 + w * SWATCH_RIGHT, swatch_y + h * SWATCH_THICKNESS / 2.0),
                );

                GridCell {
                    name: entry.name,
                    rgb: entry.rgb,
                    row,
                    col,
                    region,
                    swatch,
                    label_pos: Pos2::new(x0 + w * LABEL_LEFT, label_y),
                }
            })
            .collect();

        Self {
            cells,
            bounds,
            rows,
            columns,
            row_height: h,
        }
    }

    /// Cells in display order (sorted, row-major).
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Point size for cell labels, proportional to row height.
    pub fn label_font_size(&self) -> f32 {
        self.row_height * LABEL_FONT_SCALE
    }

    /// The first cell whose region contains `pos`, if any. A miss is not
    /// an error, points in the margins belong to no cell.
    pub fn cell_at(&self, pos: Pos2) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.region.contains(pos))
    }
}

/// Perceptual ordering: hue, then saturation, then value, with the name as
/// the final tie-breaker so equal colors sort deterministically.
fn hsv_order(a: &ColorEntry, b: &ColorEntry) -> Ordering {
    let ka = a.rgb.to_hsv();
    let kb = b.rgb.to_hsv();
    ka.h.total_cmp(&kb.h)
        .then(ka.s.total_cmp(&kb.s))
        .then(ka.v.total_cmp(&kb.v))
        .then(a.name.cmp(b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::named_colors;

    fn bounds_800x500() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 500.0))
    }

    fn entry(name: &'static str, r: f32, g: f32, b: f32) -> ColorEntry {
        ColorEntry {
            name,
            rgb: Rgb::new(r, g, b),
        }
    }

    #[test]
    fn test_every_color_gets_one_cell_inside_bounds() {
        let bounds = bounds_800x500();
        let layout = GridLayout::build(named_colors(), bounds, &GridConfig::default());

        assert_eq!(layout.cells().len(), named_colors().len());
        for cell in layout.cells() {
            assert!(
                bounds.contains_rect(cell.region),
                "{} region {:?} escapes bounds",
                cell.name,
                cell.region
            );
            assert!(cell.region.contains_rect(cell.swatch));
            assert!(cell.region.contains(cell.label_pos));
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let bounds = bounds_800x500();
        let a = GridLayout::build(named_colors(), bounds, &GridConfig::default());
        let b = GridLayout::build(named_colors(), bounds, &GridConfig::default());
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_row_and_column_assignment() {
        let layout = GridLayout::build(named_colors(), bounds_800x500(), &GridConfig::default());

        let n = named_colors().len();
        assert_eq!(layout.rows(), n / 4 + 1);
        assert_eq!(layout.columns(), 4);
        for (i, cell) in layout.cells().iter().enumerate() {
            assert_eq!(cell.col, i % 4);
            assert_eq!(cell.row, i / 4);
        }
    }

    #[test]
    fn test_darkest_achromatic_sorts_first() {
        // Hue and saturation are zero for both blacks; the name breaks
        // the tie, so "black" beats the "k" shorthand.
        let layout = GridLayout::build(named_colors(), bounds_800x500(), &GridConfig::default());
        assert_eq!(layout.cells()[0].name, "black");
        assert_eq!(layout.cells()[1].name, "k");
    }

    #[test]
    fn test_cell_at_hits_region_center() {
        let layout = GridLayout::build(named_colors(), bounds_800x500(), &GridConfig::default());
        for cell in layout.cells() {
            let hit = layout.cell_at(cell.region.center()).unwrap();
            assert_eq!(hit.name, cell.name);
        }
    }

    #[test]
    fn test_cell_at_misses_outside_grid() {
        let layout = GridLayout::build(named_colors(), bounds_800x500(), &GridConfig::default());
        assert!(layout.cell_at(Pos2::new(-50.0, -50.0)).is_none());
        assert!(layout.cell_at(Pos2::new(10_000.0, 10.0)).is_none());
        // The headroom strip below the last row belongs to no cell.
        assert!(layout.cell_at(Pos2::new(1.0, 499.0)).is_none());
    }

    #[test]
    fn test_shared_edge_resolves_to_first_cell() {
        let layout = GridLayout::build(named_colors(), bounds_800x500(), &GridConfig::default());
        let first = &layout.cells()[0];
        let second = &layout.cells()[1];

        // Closed-rect containment puts the boundary pixel between two
        // adjacent cells inside both regions; the scan order decides.
        let edge = Pos2::new(first.region.right(), first.region.center().y);
        assert!(first.region.contains(edge));
        assert!(second.region.contains(edge));
        assert_eq!(layout.cell_at(edge).unwrap().name, first.name);
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let layout = GridLayout::build(named_colors(), bounds_800x500(), &GridConfig::default());
        let cells = layout.cells();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(
                    !a.region.shrink(0.25).intersects(b.region.shrink(0.25)),
                    "{} and {} overlap",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_empty_table_builds_empty_layout() {
        let layout = GridLayout::build(&[], bounds_800x500(), &GridConfig::default());
        assert!(layout.cells().is_empty());
        assert_eq!(layout.rows(), 1);
        assert!(layout.cell_at(Pos2::new(400.0, 250.0)).is_none());
    }

    #[test]
    fn test_custom_column_count() {
        let entries = [
            entry("one", 0.1, 0.0, 0.0),
            entry("two", 0.2, 0.0, 0.0),
            entry("three", 0.3, 0.0, 0.0),
            entry("four", 0.4, 0.0, 0.0),
            entry("five", 0.5, 0.0, 0.0),
            entry("six", 0.6, 0.0, 0.0),
            entry("seven", 0.7, 0.0, 0.0),
        ];
        let bounds = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        let layout = GridLayout::build(&entries, bounds, &GridConfig { columns: 3 });

        assert_eq!(layout.rows(), 3);
        for (i, cell) in layout.cells().iter().enumerate() {
            assert_eq!(cell.col, i % 3);
            assert_eq!(cell.row, i / 3);
        }
    }

    #[test]
    fn test_sorts_by_hue_before_value() {
        let entries = [
            entry("bluish", 0.0, 0.0, 1.0),
            entry("reddish", 0.5, 0.0, 0.0),
        ];
        let layout = GridLayout::build(&entries, bounds_800x500(), &GridConfig::default());
        // Hue 0 sorts before hue 240 even though the blue is brighter.
        assert_eq!(layout.cells()[0].name, "reddish");
        assert_eq!(layout.cells()[1].name, "bluish");
    }
}
