use crate::pattern::CanonicalGrid;

// Geometry selector
//------------------------------------------------------------------------------

/// Cell inclusion policy for the rendered silhouette.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Every filled grid cell is drawn; the marker stays square.
    #[default]
    Square,
    /// A filled cell is drawn only if its center lies within the circle
    /// inscribed in the tag bounding box. Border cells near the corners drop
    /// out, producing a circular silhouette.
    Disc,
}

/// One filled cell, positioned in the renderer's output unit (pixels or
/// points) with a top-left origin. Renderers only remap origin, axis
/// direction and unit; they never re-derive inclusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Inset of the disc from the bounding box: at least 2 output units, or 20%
/// of a cell, whichever is larger.
pub fn disc_margin(cell: f64) -> f64 {
    f64::max(2.0, cell * 0.2)
}

/// Filled-cell rectangles for a square output of side `size`, in the same
/// unit as `size`. The cell lattice is `size / dim` for both styles; `Disc`
/// additionally filters by the inscribed-circle predicate, keeping cells on
/// the exact boundary (`<=`, not `<`).
pub fn filled_rects(grid: &CanonicalGrid, style: RenderStyle, size: f64) -> Vec<CellRect> {
    let dim = grid.dim();
    let cell = size / dim as f64;

    let margin = disc_margin(cell);
    let radius = (size - 2.0 * margin) / 2.0;
    let center = size / 2.0;

    let mut rects = Vec::new();
    for r in 0..dim {
        for c in 0..dim {
            if !grid.is_filled(r, c) {
                continue;
            }
            if let RenderStyle::Disc = style {
                let cx = (c as f64 + 0.5) * cell;
                let cy = (r as f64 + 0.5) * cell;
                let dist = ((cx - center).powi(2) + (cy - center).powi(2)).sqrt();
                if dist > radius {
                    continue;
                }
            }
            rects.push(CellRect {
                row: r,
                col: c,
                x: c as f64 * cell,
                y: r as f64 * cell,
                w: cell,
                h: cell,
            });
        }
    }
    rects
}
