use image::Luma;
use test_case::test_case;

use tagmint::{
    units, ArrayBuilder, CodeTable, RenderStyle, Tag36h11, TagBuilder, TagError,
};

#[cfg(test)]
mod conversion_proptests {
    use proptest::prelude::*;
    use tagmint::units;

    proptest! {
        #[test]
        fn physical_pixel_round_trip(px in 1u32..20_000, dpi in prop_oneof![
            Just(72u32), Just(96), Just(150), Just(300), Just(600)
        ]) {
            let cm = units::physical_from_pixels(px, dpi);
            let back = units::pixels_from_physical(cm, dpi);
            prop_assert!((back as i64 - px as i64).abs() <= 1);
        }

        #[test]
        fn payload_full_ratio_inverts(size in 0.01f64..10_000.0) {
            let full = units::full_from_payload(size);
            prop_assert!((units::payload_from_full(full) - size).abs() < 1e-9);
            prop_assert!(full > size);
        }

        #[test]
        fn every_valid_id_renders(id in 0u16..587) {
            let tag = tagmint::TagBuilder::new(id).size_px(80).full_size(true).build().unwrap();
            prop_assert_eq!(tag.to_image().dimensions(), (80, 80));
        }
    }
}

#[test]
fn lookup_is_stable_across_calls() {
    for id in 0..587u16 {
        assert_eq!(Tag36h11.lookup(id).unwrap(), Tag36h11.lookup(id).unwrap());
    }
}

#[test_case(123; "non-divisible size")]
#[test_case(120; "divisible size")]
#[test_case(37; "small odd size")]
fn raster_output_is_exactly_the_requested_size(size: u32) {
    let tag = TagBuilder::new(0).size_px(size).full_size(true).build().unwrap();
    assert_eq!(tag.to_image().dimensions(), (size, size));
}

#[test_case(RenderStyle::Square)]
#[test_case(RenderStyle::Disc)]
fn raster_corners_are_white(style: RenderStyle) {
    for size in [10u32, 123, 400] {
        let img = TagBuilder::new(42)
            .size_px(size)
            .full_size(true)
            .style(style)
            .build()
            .unwrap()
            .to_image();
        let last = size - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(img.get_pixel(x, y), &Luma([255u8]), "corner ({x}, {y}) at {size}px");
        }
    }
}

#[test]
fn disc_pixels_are_a_subset_of_square_pixels() {
    let build = |style| {
        TagBuilder::new(17)
            .size_px(200)
            .full_size(true)
            .style(style)
            .build()
            .unwrap()
            .to_image()
    };
    let square = build(RenderStyle::Square);
    let disc = build(RenderStyle::Disc);
    for (x, y, px) in disc.enumerate_pixels() {
        if px.0[0] == 0 {
            assert_eq!(square.get_pixel(x, y).0[0], 0, "disc black at ({x}, {y}) but square white");
        }
    }
}

#[test]
fn svg_declares_physical_scale_and_dpi() {
    let svg = TagBuilder::new(42)
        .physical(10.0, 300)
        .full_size(true)
        .build()
        .unwrap()
        .to_svg();

    assert!(svg.contains("width=\"10cm\" height=\"10cm\""));
    assert!(svg.contains("viewBox=\"0 0 1181 1181\""));
    let comment = svg.lines().next().unwrap();
    assert!(comment.contains("300 DPI"));
    assert!(comment.contains("10.00cm"));
}

#[test]
fn out_of_domain_identifier_is_rejected_not_wrapped() {
    assert_eq!(TagBuilder::new(587).build().unwrap_err(), TagError::InvalidIdentifier(587));
    assert_eq!(TagBuilder::new(700).build().unwrap_err(), TagError::InvalidIdentifier(700));
}

#[test]
fn array_canvas_matches_layout_arithmetic() {
    let board = ArrayBuilder::new(0, 3, 4)
        .tag_size(200)
        .full_size(true)
        .spacing(50)
        .labels(false)
        .build()
        .unwrap();
    assert_eq!(board.canvas_size(), (1050, 800));
    assert_eq!(board.to_image().artifact.dimensions(), (1050, 800));
}

#[test]
fn overflow_skip_policy_is_uniform_across_backends() {
    // 2x3 board starting at 584: ids 584..=589, of which 587..=589 overflow
    let board = ArrayBuilder::new(584, 2, 3)
        .tag_size(100)
        .full_size(true)
        .spacing(10)
        .labels(false)
        .build()
        .unwrap();

    let image = board.to_image();
    let svg = board.to_svg();
    assert_eq!(image.skipped, vec![587, 588, 589]);
    assert_eq!(svg.skipped, image.skipped);

    #[cfg(feature = "pdf")]
    {
        let pdf = board.to_pdf().unwrap();
        assert_eq!(pdf.skipped, image.skipped);
        assert!(pdf.artifact.starts_with(b"%PDF-"));
    }
}

#[test]
fn in_range_tiles_still_render_next_to_skipped_ones() {
    let board = ArrayBuilder::new(586, 1, 2)
        .tag_size(100)
        .full_size(true)
        .spacing(10)
        .labels(false)
        .build()
        .unwrap();
    let composed = board.to_image();
    assert_eq!(composed.skipped, vec![587]);

    // First tile rendered: its border ring has black pixels
    let img = composed.artifact;
    assert!(img.pixels().any(|p| p.0[0] == 0));
    // Second tile blank: sample the middle of where it would be
    let x = 10 + 100 + 10 + 50;
    assert_eq!(img.get_pixel(x, 10 + 50).0[0], 255);
}

#[test]
fn batch_range_renders_through_the_single_tag_path() {
    let mut count = 0;
    for id in tagmint::batch::id_range(580, 586).unwrap() {
        let tag = TagBuilder::new(id).size_px(50).full_size(true).build().unwrap();
        assert_eq!(tag.to_image().dimensions(), (50, 50));
        count += 1;
    }
    assert_eq!(count, 7);
}

#[test]
fn size_conversion_surface_is_consistent() {
    // 400px payload span -> 500px full span -> back
    assert_eq!(units::full_px_from_payload_px(400), 500);
    assert_eq!(units::payload_from_full(500.0), 400.0);
    // convertSize-style pure math: 10cm at 300 DPI
    assert_eq!(units::pixels_from_physical(10.0, 300), 1181);
    let cm = units::physical_from_pixels(1181, 300);
    assert!((cm - 10.0).abs() < 0.01);
}

#[cfg(feature = "pdf")]
#[test]
fn pdf_page_is_sized_to_the_tag_footprint() {
    let bytes = TagBuilder::new(3)
        .physical(5.0, 300)
        .full_size(true)
        .build()
        .unwrap()
        .to_pdf()
        .unwrap();
    let text = String::from_utf8_lossy(&bytes);
    // 5cm = 141.73.. points
    assert!(text.contains("MediaBox"));
    assert!(text.contains("141.73"));
}
