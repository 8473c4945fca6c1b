use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::geometry::{filled_rects, RenderStyle};
use crate::pattern::CanonicalGrid;

// Raster renderer
//------------------------------------------------------------------------------

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

/// Render a tag to a greyscale bitmap of exactly `size_px x size_px`.
///
/// Cells are drawn as solid blocks at a working size that is an exact
/// multiple of the grid dimension, so cell edges land on pixel boundaries
/// without seams. When the request is not a multiple, the result is then
/// resized to the exact request with nearest-neighbor sampling to keep edges
/// sharp; exact multiples skip the resample entirely.
pub fn render(grid: &CanonicalGrid, style: RenderStyle, size_px: u32) -> GrayImage {
    let dim = grid.dim() as u32;
    let cell = (size_px / dim).max(1);
    let work = cell * dim;

    let mut canvas = GrayImage::from_pixel(work, work, WHITE);
    for rect in filled_rects(grid, style, work as f64) {
        // Exact at a grid-multiple size; the cast truncates nothing
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(rect.x as i32, rect.y as i32).of_size(rect.w as u32, rect.h as u32),
            BLACK,
        );
    }

    if work == size_px {
        canvas
    } else {
        imageops::resize(&canvas, size_px, size_px, FilterType::Nearest)
    }
}

#[cfg(test)]
mod raster_tests {
    use super::*;
    use crate::family::{CodeTable, Tag36h11};
    use test_case::test_case;

    fn grid(id: u16) -> CanonicalGrid {
        CanonicalGrid::assemble(&Tag36h11.lookup(id).unwrap())
    }

    #[test_case(120; "exact multiple")]
    #[test_case(123; "just past a multiple")]
    #[test_case(400; "default size")]
    #[test_case(1181; "10cm at 300 dpi")]
    fn output_matches_requested_dimensions(size: u32) {
        let img = render(&grid(0), RenderStyle::Square, size);
        assert_eq!(img.dimensions(), (size, size));
    }

    #[test_case(RenderStyle::Square)]
    #[test_case(RenderStyle::Disc)]
    fn corners_are_white(style: RenderStyle) {
        for size in [10u32, 50, 123, 400] {
            let img = render(&grid(42), style, size);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(img.get_pixel(x, y), &WHITE, "corner ({x}, {y}) at {size}px");
            }
        }
    }

    #[test]
    fn border_ring_is_black_at_exact_multiple() {
        let img = render(&grid(0), RenderStyle::Square, 100);
        // One cell in from the corner lies on the black border ring
        assert_eq!(img.get_pixel(15, 15), &BLACK);
        assert_eq!(img.get_pixel(84, 15), &BLACK);
    }

    #[test]
    fn disc_blanks_border_corners() {
        let square = render(&grid(0), RenderStyle::Square, 400);
        let disc = render(&grid(0), RenderStyle::Disc, 400);
        // Center of border cell (1, 1)
        assert_eq!(square.get_pixel(60, 60), &BLACK);
        assert_eq!(disc.get_pixel(60, 60), &WHITE);
    }
}
