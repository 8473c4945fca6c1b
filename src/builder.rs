use image::GrayImage;

use crate::error::{TagError, TagResult};
use crate::family::{CodeTable, Tag36h11};
use crate::geometry::RenderStyle;
use crate::layout::{compose_image, compose_pdf, compose_svg, Composed, LayoutSpec};
use crate::pattern::CanonicalGrid;
use crate::render::{pdf, raster, svg};
use crate::units;

// Tag builder
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum SizeSpec {
    Pixels(u32),
    Physical { cm: f64, dpi: u32 },
}

/// Builder for a single marker render.
///
/// Sizes name the payload+border span by default, matching how tags are
/// usually specified; call [`full_size`](TagBuilder::full_size) when the
/// given size already includes the outer white margin.
pub struct TagBuilder {
    id: u16,
    style: RenderStyle,
    size: SizeSpec,
    full_size: bool,
}

impl TagBuilder {
    pub fn new(id: u16) -> Self {
        Self { id, style: RenderStyle::Square, size: SizeSpec::Pixels(400), full_size: false }
    }

    /// Target size in pixels. Physical metadata defaults to 72 DPI.
    pub fn size_px(&mut self, px: u32) -> &mut Self {
        self.size = SizeSpec::Pixels(px);
        self
    }

    /// Target size as a physical length at a scan resolution.
    pub fn physical(&mut self, cm: f64, dpi: u32) -> &mut Self {
        self.size = SizeSpec::Physical { cm, dpi };
        self
    }

    pub fn style(&mut self, style: RenderStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Treat the given size as the full tag span, margin included.
    pub fn full_size(&mut self, full: bool) -> &mut Self {
        self.full_size = full;
        self
    }

    pub fn build(&self) -> TagResult<Tag> {
        let matrix = Tag36h11.lookup(self.id)?;
        let grid = CanonicalGrid::assemble(&matrix);

        let (size_px, size_cm, dpi) = match self.size {
            SizeSpec::Pixels(0) => {
                return Err(TagError::InvalidLayout("tag size must be positive"))
            }
            SizeSpec::Pixels(px) => {
                let full_px =
                    if self.full_size { px } else { units::full_px_from_payload_px(px) };
                (full_px, units::physical_from_pixels(full_px, 72), 72)
            }
            SizeSpec::Physical { cm, dpi } => {
                if cm <= 0.0 || dpi == 0 {
                    return Err(TagError::InvalidLayout("physical size and dpi must be positive"));
                }
                let full_cm = if self.full_size { cm } else { units::full_from_payload(cm) };
                (units::pixels_from_physical(full_cm, dpi), full_cm, dpi)
            }
        };

        Ok(Tag { id: self.id, grid, style: self.style, size_px, size_cm, dpi })
    }
}

/// A resolved marker, ready to render through any backend. All sizes are the
/// full tag span including the white margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    id: u16,
    grid: CanonicalGrid,
    style: RenderStyle,
    size_px: u32,
    size_cm: f64,
    dpi: u32,
}

impl Tag {
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    pub fn size_cm(&self) -> f64 {
        self.size_cm
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn grid(&self) -> &CanonicalGrid {
        &self.grid
    }

    /// Greyscale bitmap of exactly `size_px x size_px`.
    pub fn to_image(&self) -> GrayImage {
        raster::render(&self.grid, self.style, self.size_px)
    }

    /// Print-to-scale SVG text.
    pub fn to_svg(&self) -> String {
        svg::render(&self.grid, self.style, self.size_cm, self.dpi)
    }

    /// Single-page vector document sized to the tag's physical footprint.
    pub fn to_pdf(&self) -> TagResult<Vec<u8>> {
        pdf::render(&self.grid, self.style, self.size_cm)
    }

    /// Terminal preview, one block character per cell.
    pub fn to_str(&self) -> String {
        let dim = self.grid.dim();
        let mut out = String::new();
        for r in 0..dim {
            for c in 0..dim {
                out.push(if self.grid.is_filled(r, c) { '█' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }
}

// Array builder
//------------------------------------------------------------------------------

/// Builder for a labeled grid of markers.
pub struct ArrayBuilder {
    ids: Option<Vec<u16>>,
    start: u16,
    rows: u32,
    cols: u32,
    tag_size: u32,
    spacing: u32,
    labels: bool,
    style: RenderStyle,
    full_size: bool,
    dpi: u32,
}

impl ArrayBuilder {
    pub fn new(start: u16, rows: u32, cols: u32) -> Self {
        Self {
            ids: None,
            start,
            rows,
            cols,
            tag_size: 200,
            spacing: 50,
            labels: true,
            style: RenderStyle::Square,
            full_size: false,
            dpi: 72,
        }
    }

    /// Explicit identifier sequence instead of a starting id.
    pub fn ids(&mut self, ids: Vec<u16>) -> &mut Self {
        self.ids = Some(ids);
        self
    }

    /// Per-tag size in pixels, payload+border span unless
    /// [`full_size`](ArrayBuilder::full_size) is set.
    pub fn tag_size(&mut self, px: u32) -> &mut Self {
        self.tag_size = px;
        self
    }

    pub fn spacing(&mut self, px: u32) -> &mut Self {
        self.spacing = px;
        self
    }

    pub fn labels(&mut self, labels: bool) -> &mut Self {
        self.labels = labels;
        self
    }

    pub fn style(&mut self, style: RenderStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn full_size(&mut self, full: bool) -> &mut Self {
        self.full_size = full;
        self
    }

    /// Resolution used to map the pixel layout onto the print page.
    pub fn dpi(&mut self, dpi: u32) -> &mut Self {
        self.dpi = dpi;
        self
    }

    pub fn build(&self) -> TagResult<TagArray> {
        if self.dpi == 0 {
            return Err(TagError::InvalidLayout("dpi must be positive"));
        }
        let tag_size = if self.full_size {
            self.tag_size
        } else {
            units::full_px_from_payload_px(self.tag_size)
        };
        let spec = match &self.ids {
            Some(ids) => LayoutSpec::new(
                ids.clone(),
                self.rows,
                self.cols,
                tag_size,
                self.spacing,
                self.labels,
            )?,
            None => LayoutSpec::from_start(
                self.start,
                self.rows,
                self.cols,
                tag_size,
                self.spacing,
                self.labels,
            )?,
        };
        Ok(TagArray { spec, style: self.style, dpi: self.dpi })
    }
}

/// A validated marker grid, ready to compose through any backend. Renders
/// return the artifact together with any out-of-domain identifiers that were
/// skipped; the skip policy is the same on every backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TagArray {
    spec: LayoutSpec,
    style: RenderStyle,
    dpi: u32,
}

impl TagArray {
    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    /// Canvas dimensions in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.spec.canvas_size()
    }

    pub fn to_image(&self) -> Composed<GrayImage> {
        compose_image(&Tag36h11, &self.spec, self.style)
    }

    pub fn to_svg(&self) -> Composed<String> {
        compose_svg(&Tag36h11, &self.spec, self.style)
    }

    pub fn to_pdf(&self) -> TagResult<Composed<Vec<u8>>> {
        compose_pdf(&Tag36h11, &self.spec, self.style, self.dpi)
    }
}
