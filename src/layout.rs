use std::fmt::Write;

use image::{imageops, GrayImage, Luma};

use crate::error::{TagError, TagResult};
use crate::family::CodeTable;
use crate::geometry::RenderStyle;
use crate::pattern::CanonicalGrid;
use crate::render::{raster, svg};

// Layout composer
//------------------------------------------------------------------------------

/// Height in layout units of the label band under each tag row.
pub const LABEL_BAND: u32 = 30;

/// A validated grid layout: identifier sequence walked row-major into
/// `rows x cols` tiles with uniform spacing and a one-spacing outer margin.
/// Constructed per call and consumed once; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    ids: Vec<u16>,
    rows: u32,
    cols: u32,
    tag_size: u32,
    spacing: u32,
    labels: bool,
}

impl LayoutSpec {
    pub fn new(
        ids: Vec<u16>,
        rows: u32,
        cols: u32,
        tag_size: u32,
        spacing: u32,
        labels: bool,
    ) -> TagResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(TagError::InvalidLayout("rows and columns must be positive"));
        }
        if tag_size == 0 {
            return Err(TagError::InvalidLayout("tag size must be positive"));
        }
        Ok(Self { ids, rows, cols, tag_size, spacing, labels })
    }

    /// Layout filled from a starting identifier, one id per tile. Ids past
    /// the family maximum stay in the sequence; composition skips and
    /// reports them. Sequences that would run past `u16::MAX` are rejected
    /// so the skip report always names distinct ids.
    pub fn from_start(
        start: u16,
        rows: u32,
        cols: u32,
        tag_size: u32,
        spacing: u32,
        labels: bool,
    ) -> TagResult<Self> {
        let count = rows as u64 * cols as u64;
        if count > 0 && start as u64 + count - 1 > u16::MAX as u64 {
            return Err(TagError::InvalidLayout("id sequence overflows the identifier domain"));
        }
        let ids = (0..count).map(|i| start + i as u16).collect();
        Self::new(ids, rows, cols, tag_size, spacing, labels)
    }

    pub fn ids(&self) -> &[u16] {
        &self.ids
    }

    pub fn tag_size(&self) -> u32 {
        self.tag_size
    }

    pub fn labels(&self) -> bool {
        self.labels
    }

    fn label_band(&self) -> u32 {
        if self.labels {
            LABEL_BAND
        } else {
            0
        }
    }

    /// Canvas dimensions: `cols*tag + (cols-1)*spacing + 2*spacing` wide,
    /// the analogous height, plus the label band per tile row.
    pub fn canvas_size(&self) -> (u32, u32) {
        let tile_h = self.tag_size + self.label_band();
        let width = self.cols * self.tag_size + (self.cols - 1) * self.spacing + 2 * self.spacing;
        let height = self.rows * tile_h + (self.rows - 1) * self.spacing + 2 * self.spacing;
        (width, height)
    }

    /// Tiles in row-major order: `(id, x, y_top)` of each tile that has an
    /// identifier. Trailing tiles beyond the sequence stay blank.
    fn tiles(&self) -> impl Iterator<Item = (u16, u32, u32)> + '_ {
        let tile_h = self.tag_size + self.label_band();
        (0..self.rows as usize * self.cols as usize)
            .take(self.ids.len())
            .map(move |idx| {
                let row = idx as u32 / self.cols;
                let col = idx as u32 % self.cols;
                let x = self.spacing + col * (self.tag_size + self.spacing);
                let y = self.spacing + row * (tile_h + self.spacing);
                (self.ids[idx], x, y)
            })
    }
}

/// A composed artifact plus the out-of-domain identifiers that were skipped.
/// The skip policy is identical across all three backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed<T> {
    pub artifact: T,
    pub skipped: Vec<u16>,
}

fn grid_for<T: CodeTable>(table: &T, id: u16) -> Option<CanonicalGrid> {
    table.lookup(id).ok().map(|m| CanonicalGrid::assemble(&m))
}

/// Compose the layout as a single greyscale bitmap. The label band is
/// reserved in the canvas arithmetic but left blank: glyph rasterization is
/// out of scope for the raster backend.
pub fn compose_image<T: CodeTable>(
    table: &T,
    spec: &LayoutSpec,
    style: RenderStyle,
) -> Composed<GrayImage> {
    let (width, height) = spec.canvas_size();
    let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));

    let mut skipped = Vec::new();
    for (id, x, y) in spec.tiles() {
        let Some(grid) = grid_for(table, id) else {
            skipped.push(id);
            continue;
        };
        let tile = raster::render(&grid, style, spec.tag_size());
        imageops::replace(&mut canvas, &tile, x as i64, y as i64);
    }
    Composed { artifact: canvas, skipped }
}

/// Compose the layout as a single SVG document in pixel units, one `<g>`
/// per tile, with `ID: n` labels under each tag when enabled.
pub fn compose_svg<T: CodeTable>(
    table: &T,
    spec: &LayoutSpec,
    style: RenderStyle,
) -> Composed<String> {
    let (width, height) = spec.canvas_size();
    let tag = spec.tag_size();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg width=\"{width}px\" height=\"{height}px\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">"
    );
    let _ = writeln!(out, "  <rect width=\"{width}\" height=\"{height}\" fill=\"white\"/>");

    let mut skipped = Vec::new();
    for (id, x, y) in spec.tiles() {
        let Some(grid) = grid_for(table, id) else {
            skipped.push(id);
            continue;
        };
        let _ = writeln!(out, "  <g transform=\"translate({x}, {y})\">");
        let _ = writeln!(out, "    <rect width=\"{tag}\" height=\"{tag}\" fill=\"white\"/>");
        svg::push_rects(&mut out, &grid, style, tag as f64, 0.0, 0.0, "    ");
        out.push_str("  </g>\n");

        if spec.labels() {
            let lx = x + 5;
            let ly = y + tag + 20;
            let _ = writeln!(
                out,
                "  <text x=\"{lx}\" y=\"{ly}\" font-family=\"Helvetica\" font-size=\"14\" fill=\"black\">ID: {id}</text>"
            );
        }
    }
    out.push_str("</svg>\n");
    Composed { artifact: out, skipped }
}

/// Compose the layout as a one-page vector document. Pixel-unit layout is
/// mapped to points at `dpi`, so the page footprint matches what the raster
/// backend would print at that resolution.
#[cfg(feature = "pdf")]
pub fn compose_pdf<T: CodeTable>(
    table: &T,
    spec: &LayoutSpec,
    style: RenderStyle,
    dpi: u32,
) -> TagResult<Composed<Vec<u8>>> {
    use crate::render::pdf;

    if dpi == 0 {
        return Err(TagError::InvalidLayout("dpi must be positive"));
    }

    let (width, height) = spec.canvas_size();
    let ppp = crate::units::POINTS_PER_INCH / dpi as f64;
    let page_w = width as f64 * ppp;
    let page_h = height as f64 * ppp;
    let tag = spec.tag_size();
    let tag_pt = tag as f64 * ppp;

    let mut ops = Vec::new();
    pdf::push_fill_color(&mut ops, 1.0);
    pdf::push_rect(&mut ops, 0.0, 0.0, page_w, page_h);

    let mut skipped = Vec::new();
    for (id, x, y) in spec.tiles() {
        let Some(grid) = grid_for(table, id) else {
            skipped.push(id);
            continue;
        };
        // Flip the tile's top edge into bottom-left page coordinates
        let y_bottom = height as f64 - (y + tag) as f64;
        pdf::push_tag_ops(&mut ops, &grid, style, x as f64 * ppp, y_bottom * ppp, tag_pt);

        if spec.labels() {
            let baseline_from_top = (y + tag + 15) as f64;
            let lx = (x + 5) as f64 * ppp;
            let ly = (height as f64 - baseline_from_top) * ppp;
            pdf::push_label_ops(&mut ops, &format!("ID: {id}"), lx, ly);
        }
    }

    let artifact = pdf::build_document(page_w, page_h, ops, spec.labels())?;
    Ok(Composed { artifact, skipped })
}

#[cfg(not(feature = "pdf"))]
pub fn compose_pdf<T: CodeTable>(
    _table: &T,
    _spec: &LayoutSpec,
    _style: RenderStyle,
    _dpi: u32,
) -> TagResult<Composed<Vec<u8>>> {
    Err(TagError::MissingCapability("pdf"))
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use crate::family::Tag36h11;

    #[test]
    fn canvas_size_includes_outer_margin() {
        let spec = LayoutSpec::from_start(0, 3, 4, 200, 50, false).unwrap();
        assert_eq!(spec.canvas_size(), (1050, 800));
    }

    #[test]
    fn canvas_size_adds_label_band_per_row() {
        let spec = LayoutSpec::from_start(0, 3, 4, 200, 50, true).unwrap();
        assert_eq!(spec.canvas_size(), (1050, 890));
    }

    #[test]
    fn rejects_degenerate_layouts() {
        assert_eq!(
            LayoutSpec::from_start(0, 0, 4, 200, 50, false),
            Err(TagError::InvalidLayout("rows and columns must be positive"))
        );
        assert_eq!(
            LayoutSpec::from_start(0, 3, 0, 200, 50, false),
            Err(TagError::InvalidLayout("rows and columns must be positive"))
        );
        assert_eq!(
            LayoutSpec::from_start(0, 3, 4, 0, 50, false),
            Err(TagError::InvalidLayout("tag size must be positive"))
        );
    }

    #[test]
    fn rejects_sequences_past_the_id_domain() {
        assert_eq!(
            LayoutSpec::from_start(u16::MAX - 1, 2, 2, 100, 10, false),
            Err(TagError::InvalidLayout("id sequence overflows the identifier domain"))
        );
        // the last representable id is still reachable
        let spec = LayoutSpec::from_start(u16::MAX - 2, 1, 3, 100, 10, false).unwrap();
        assert_eq!(spec.ids(), &[u16::MAX - 2, u16::MAX - 1, u16::MAX]);
        let composed = compose_svg(&Tag36h11, &spec, RenderStyle::Square);
        assert_eq!(composed.skipped, vec![u16::MAX - 2, u16::MAX - 1, u16::MAX]);
    }

    #[test]
    fn image_composition_skips_and_reports_overflow_ids() {
        // 585..=590: four tiles past the family maximum
        let spec = LayoutSpec::from_start(585, 2, 3, 100, 10, false).unwrap();
        let composed = compose_image(&Tag36h11, &spec, RenderStyle::Square);
        assert_eq!(composed.skipped, vec![587, 588, 589, 590]);
        assert_eq!(composed.artifact.dimensions(), spec.canvas_size());
    }

    #[test]
    fn svg_composition_applies_the_same_skip_policy() {
        let spec = LayoutSpec::from_start(585, 2, 3, 100, 10, false).unwrap();
        let composed = compose_svg(&Tag36h11, &spec, RenderStyle::Square);
        assert_eq!(composed.skipped, vec![587, 588, 589, 590]);
        assert_eq!(composed.artifact.matches("<g ").count(), 2);
    }

    #[test]
    fn short_sequences_leave_trailing_tiles_blank() {
        let spec = LayoutSpec::new(vec![0, 1, 2], 2, 2, 100, 10, false).unwrap();
        let composed = compose_svg(&Tag36h11, &spec, RenderStyle::Square);
        assert!(composed.skipped.is_empty());
        assert_eq!(composed.artifact.matches("<g ").count(), 3);
    }

    #[test]
    fn svg_labels_under_each_tag() {
        let spec = LayoutSpec::from_start(5, 1, 2, 100, 10, true).unwrap();
        let composed = compose_svg(&Tag36h11, &spec, RenderStyle::Square);
        assert!(composed.artifact.contains(">ID: 5</text>"));
        assert!(composed.artifact.contains(">ID: 6</text>"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn pdf_composition_applies_the_same_skip_policy() {
        let spec = LayoutSpec::from_start(585, 2, 3, 100, 10, true).unwrap();
        let composed = compose_pdf(&Tag36h11, &spec, RenderStyle::Square, 72).unwrap();
        assert_eq!(composed.skipped, vec![587, 588, 589, 590]);
        assert!(composed.artifact.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&composed.artifact);
        assert!(text.contains("ID: 585"));
        assert!(text.contains("ID: 586"));
        assert!(!text.contains("ID: 587"));
    }
}
