use std::error::Error;

use tagmint::{ArrayBuilder, RenderStyle, TagBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let tag = TagBuilder::new(42).size_px(40).full_size(true).build()?;
    println!("tag36h11 id {} preview:\n{}", tag.id(), tag.to_str());

    let tag = TagBuilder::new(42).physical(10.0, 300).style(RenderStyle::Disc).build()?;
    println!(
        "Render: {}px ({:.2}cm x {:.2}cm at {} DPI)",
        tag.size_px(),
        tag.size_cm(),
        tag.size_cm(),
        tag.dpi()
    );
    tag.to_image().save("apriltag_42.png")?;
    std::fs::write("apriltag_42.svg", tag.to_svg())?;
    std::fs::write("apriltag_42.pdf", tag.to_pdf()?)?;
    println!("Saved apriltag_42.png / .svg / .pdf");

    for id in tagmint::batch::id_range(0, 2)? {
        let tag = TagBuilder::new(id).size_px(400).build()?;
        tag.to_image().save(format!("apriltag_{id}.png"))?;
    }
    println!("Saved batch apriltag_0.png .. apriltag_2.png");

    let board = ArrayBuilder::new(0, 3, 4).tag_size(200).spacing(50).labels(true).build()?;
    let composed = board.to_image();
    composed.artifact.save("apriltag_array_3x4.png")?;
    let (w, h) = board.canvas_size();
    println!("Saved apriltag_array_3x4.png ({w}x{h}, {} tiles skipped)", composed.skipped.len());

    Ok(())
}
