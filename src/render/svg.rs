use std::fmt::Write;

use crate::geometry::{filled_rects, RenderStyle};
use crate::pattern::CanonicalGrid;
use crate::units;

// Vector markup renderer
//------------------------------------------------------------------------------

/// Render a tag as SVG text at a physical size.
///
/// Width and height are declared in cm so a viewer reproduces true scale; the
/// `viewBox` is sized in device pixels derived from `size_cm` at `dpi`. SVG
/// keeps no numeric DPI metadata, so the generation parameters are recorded
/// in a leading comment.
pub fn render(grid: &CanonicalGrid, style: RenderStyle, size_cm: f64, dpi: u32) -> String {
    let size_px = units::pixels_from_physical(size_cm, dpi);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<!-- tagmint: {size_cm:.2}cm x {size_cm:.2}cm at {dpi} DPI - print to scale -->"
    );
    let _ = writeln!(
        out,
        "<svg width=\"{size_cm}cm\" height=\"{size_cm}cm\" viewBox=\"0 0 {size_px} {size_px}\" xmlns=\"http://www.w3.org/2000/svg\">"
    );
    let _ = writeln!(out, "  <rect width=\"{size_px}\" height=\"{size_px}\" fill=\"white\"/>");
    push_rects(&mut out, grid, style, size_px as f64, 0.0, 0.0, "  ");
    out.push_str("</svg>\n");
    out
}

/// Emit one black `<rect>` per filled cell at an offset, truncating origin
/// and size to whole device pixels.
pub(crate) fn push_rects(
    out: &mut String,
    grid: &CanonicalGrid,
    style: RenderStyle,
    size: f64,
    dx: f64,
    dy: f64,
    indent: &str,
) {
    for cell in filled_rects(grid, style, size) {
        let x = (dx + cell.x) as u32;
        let y = (dy + cell.y) as u32;
        let w = cell.w as u32;
        let h = cell.h as u32;
        let _ = writeln!(
            out,
            "{indent}<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"black\"/>"
        );
    }
}
