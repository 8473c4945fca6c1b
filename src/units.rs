//! Pixel, physical and point conversions.
//!
//! Every caller-facing "size" is ambiguous between the payload+border span and
//! the full tag span including the outer white margin. The 8/10 ratio between
//! the two is fixed by the canonical grid and is resolved here, nowhere else.

/// Cells per side of the canonical grid, white margin included.
pub const GRID_DIM: u32 = 10;

/// Cells per side of the payload plus black border, margin excluded.
pub const INNER_SPAN: u32 = 8;

pub const CM_PER_INCH: f64 = 2.54;
pub const POINTS_PER_INCH: f64 = 72.0;

/// Physical length to pixel count. Truncates like `int(inches * dpi)`, so a
/// round-trip through [`physical_from_pixels`] may drift by one pixel.
pub fn pixels_from_physical(size_cm: f64, dpi: u32) -> u32 {
    (size_cm / CM_PER_INCH * dpi as f64) as u32
}

/// Pixel count to physical length in cm. Exact, no rounding.
pub fn physical_from_pixels(px: u32, dpi: u32) -> f64 {
    px as f64 / dpi as f64 * CM_PER_INCH
}

/// Payload+border span to full tag span (margin included).
pub fn full_from_payload(size: f64) -> f64 {
    size * GRID_DIM as f64 / INNER_SPAN as f64
}

/// Full tag span to payload+border span.
pub fn payload_from_full(size: f64) -> f64 {
    size * INNER_SPAN as f64 / GRID_DIM as f64
}

/// Pixel variant of [`full_from_payload`], rounded to the nearest pixel.
pub fn full_px_from_payload_px(px: u32) -> u32 {
    full_from_payload(px as f64).round() as u32
}

/// Physical length to print points (72 per inch).
pub fn points_from_physical(size_cm: f64) -> f64 {
    size_cm / CM_PER_INCH * POINTS_PER_INCH
}
