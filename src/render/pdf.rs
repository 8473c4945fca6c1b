//! Vector print renderer.
//!
//! Pages are points-based (72 per inch) and sized exactly to the rendered
//! footprint. The page origin is bottom-left, so row coordinates are flipped
//! relative to the raster and SVG backends' top-left convention. Built only
//! with the `pdf` feature; without it every entry point reports
//! `MissingCapability` instead of degrading to raster.

#[cfg(feature = "pdf")]
use lopdf::content::{Content, Operation};
#[cfg(feature = "pdf")]
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::TagResult;
use crate::geometry::RenderStyle;
use crate::pattern::CanonicalGrid;
#[cfg(feature = "pdf")]
use crate::{geometry::filled_rects, units};

#[cfg(not(feature = "pdf"))]
use crate::error::TagError;

// Print renderer
//------------------------------------------------------------------------------

/// Render a single tag as a one-page vector document sized `size_cm` square.
#[cfg(feature = "pdf")]
pub fn render(grid: &CanonicalGrid, style: RenderStyle, size_cm: f64) -> TagResult<Vec<u8>> {
    let page = units::points_from_physical(size_cm);

    let mut ops = Vec::new();
    push_tag_ops(&mut ops, grid, style, 0.0, 0.0, page);
    build_document(page, page, ops, false)
}

#[cfg(not(feature = "pdf"))]
pub fn render(_grid: &CanonicalGrid, _style: RenderStyle, _size_cm: f64) -> TagResult<Vec<u8>> {
    Err(TagError::MissingCapability("pdf"))
}

/// Draw one tag with its bottom-left corner at `(origin_x, origin_y)` in page
/// points: white tag background, then one filled rect per included cell with
/// the vertical axis flipped into page coordinates.
#[cfg(feature = "pdf")]
pub(crate) fn push_tag_ops(
    ops: &mut Vec<Operation>,
    grid: &CanonicalGrid,
    style: RenderStyle,
    origin_x: f64,
    origin_y: f64,
    size_pt: f64,
) {
    push_fill_color(ops, 1.0);
    push_rect(ops, origin_x, origin_y, size_pt, size_pt);

    push_fill_color(ops, 0.0);
    for cell in filled_rects(grid, style, size_pt) {
        let x = origin_x + cell.x;
        let y = origin_y + size_pt - (cell.y + cell.h);
        push_rect(ops, x, y, cell.w, cell.h);
    }
}

#[cfg(feature = "pdf")]
pub(crate) fn push_fill_color(ops: &mut Vec<Operation>, grey: f32) {
    ops.push(Operation::new("rg", vec![grey.into(), grey.into(), grey.into()]));
}

#[cfg(feature = "pdf")]
pub(crate) fn push_rect(ops: &mut Vec<Operation>, x: f64, y: f64, w: f64, h: f64) {
    ops.push(Operation::new(
        "re",
        vec![(x as f32).into(), (y as f32).into(), (w as f32).into(), (h as f32).into()],
    ));
    ops.push(Operation::new("f", vec![]));
}

/// Draw a text label with its baseline at `(x, y)` in page points. Requires a
/// document built with `with_font`.
#[cfg(feature = "pdf")]
pub(crate) fn push_label_ops(ops: &mut Vec<Operation>, text: &str, x: f64, y: f64) {
    push_fill_color(ops, 0.0);
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec!["F1".into(), 9.into()]));
    ops.push(Operation::new("Td", vec![(x as f32).into(), (y as f32).into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(text.as_bytes().to_vec(), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Assemble a one-page document around a content stream and serialize it.
/// The document is built whole in memory; nothing partial ever escapes.
#[cfg(feature = "pdf")]
pub(crate) fn build_document(
    width_pt: f64,
    height_pt: f64,
    ops: Vec<Operation>,
    with_font: bool,
) -> TagResult<Vec<u8>> {
    use crate::error::TagError;

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let resources_id = if with_font {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        })
    } else {
        doc.add_object(dictionary! {})
    };

    let content = Content { operations: ops };
    let encoded = content.encode().map_err(|_| TagError::DocumentEncode)?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (width_pt as f32).into(),
            (height_pt as f32).into(),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(|_| TagError::DocumentEncode)?;
    Ok(bytes)
}
