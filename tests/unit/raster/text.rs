use super::*;

fn painted(text: &str, size_px: f32) -> Vec<u8> {
    let mut pixmap = vello_cpu::Pixmap::new(64, 32);
    let mut ctx = vello_cpu::RenderContext::new(64, 32);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((0.0, 20.0)));
    BlockTextPainter
        .paint(&mut ctx, text, size_px, Rgba8::WHITE)
        .unwrap();
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    pixmap.data_as_u8_slice().to_vec()
}

fn lit(data: &[u8]) -> usize {
    data.chunks_exact(4).filter(|px| px[3] != 0).count()
}

#[test]
fn block_painter_fills_one_cell_per_glyph() {
    // 10px em: 5x7 cells.
    assert_eq!(lit(&painted("a", 10.0)), 35);
    assert_eq!(lit(&painted("ab", 10.0)), 70);
}

#[test]
fn block_painter_skips_whitespace() {
    assert_eq!(lit(&painted("a b", 10.0)), 70);
    assert_eq!(lit(&painted("   ", 10.0)), 0);
}

#[test]
fn block_painter_rejects_non_positive_size() {
    let mut ctx = vello_cpu::RenderContext::new(8, 8);
    assert!(
        BlockTextPainter
            .paint(&mut ctx, "a", 0.0, Rgba8::WHITE)
            .is_err()
    );
}

#[test]
fn font_engine_rejects_garbage_bytes() {
    let err = FontTextPainter::from_bytes(vec![0u8; 16]).err().unwrap();
    assert!(err.to_string().contains("font error:"));
}

#[test]
fn font_painter_reports_missing_file() {
    let err = FontTextPainter::from_path("does/not/exist.ttf").err().unwrap();
    assert!(err.to_string().contains("font error:"));
}

const TEST_FONT: &str = "tests/data/fonts/DejaVuSansMono.ttf";

/// Lit-pixel bounding box `(x0, y0, x1, y1)` of `text` drawn with its baseline at `y = 40`.
fn font_ink_bbox(text: &str, size_px: f32) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = (256u16, 64u16);
    let mut painter = FontTextPainter::from_path(TEST_FONT).unwrap();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((16.0, 40.0)));
    painter.paint(&mut ctx, text, size_px, Rgba8::WHITE).unwrap();
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (i, px) in pixmap.data_as_u8_slice().chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let (x, y) = ((i % usize::from(w)) as u32, (i / usize::from(w)) as u32);
        bbox = Some(match bbox {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bbox
}

#[test]
fn font_painter_reports_family() {
    let painter = FontTextPainter::from_path(TEST_FONT).unwrap();
    assert!(painter.family_name().starts_with("DejaVu Sans Mono"));
}

#[test]
fn font_painter_lays_glyphs_along_the_line() {
    // DejaVu Sans Mono advances ~0.6em per glyph.
    let size = 28.0;
    let advance = 0.6 * size;
    let (x0, y0, x1, y1) = font_ink_bbox("hello", size).unwrap();

    let width = (x1 - x0 + 1) as f32;
    assert!(
        width > 4.0 * advance && width <= 5.0 * advance + 2.0,
        "width {width} for 5 glyphs of advance {advance}"
    );
    assert!(x0 >= 16 && x0 < 16 + advance as u32, "x0 {x0}");
    assert!(y0 > 40 - size as u32, "y0 {y0} above the ascent");
    assert!(y1 <= 41, "y1 {y1} below the baseline");
}

#[test]
fn font_painter_ink_grows_with_text_length() {
    let (_, _, short, _) = font_ink_bbox("he", 28.0).unwrap();
    let (_, _, long, _) = font_ink_bbox("hello", 28.0).unwrap();
    assert!(long >= short + 2 * 16, "short {short} long {long}");
}

#[test]
fn font_painter_draws_nothing_for_whitespace() {
    assert_eq!(font_ink_bbox("   ", 28.0), None);
}
