use super::*;

fn surface(w: u32, h: u32) -> RasterSurface {
    RasterSurface::new(Canvas {
        width: w,
        height: h,
    })
    .unwrap()
}

fn fill(ctx: &mut vello_cpu::RenderContext, x0: f64, y0: f64, x1: f64, y1: f64) {
    ctx.set_paint(Rgba8::WHITE.to_cpu_color());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x0, y0, x1, y1));
}

#[test]
fn fresh_surface_has_no_ink() {
    let s = surface(32, 16);
    let frame = s.snapshot();
    assert_eq!((frame.width, frame.height), (32, 16));
    assert!(s.ink_pixels().is_empty());
}

#[test]
fn render_full_then_clear_leaves_nothing() {
    let mut s = surface(32, 16);
    s.render_full(|ctx| fill(ctx, 2.0, 2.0, 6.0, 6.0));
    let ink = s.ink_pixels();
    assert_eq!(ink.len(), 16);
    assert!(ink.iter().all(|p| (2..6).contains(&p.x) && (2..6).contains(&p.y)));
    assert_eq!(s.pixel(3, 3), Some(Rgba8::WHITE));

    s.clear();
    assert!(s.ink_pixels().is_empty());
}

#[test]
fn clear_from_column_keeps_left_side() {
    let mut s = surface(32, 16);
    s.render_full(|ctx| fill(ctx, 0.0, 0.0, 32.0, 1.0));
    s.clear_from_column(10);
    let ink = s.ink_pixels();
    assert_eq!(ink.len(), 10);
    assert!(ink.iter().all(|p| p.x < 10));

    s.clear_from_column(-5);
    assert!(s.ink_pixels().is_empty());
}

#[test]
fn clear_from_column_past_edge_is_noop() {
    let mut s = surface(8, 8);
    s.render_full(|ctx| fill(ctx, 0.0, 0.0, 8.0, 8.0));
    s.clear_from_column(8);
    assert_eq!(s.ink_pixels().len(), 64);
}

#[test]
fn draw_from_column_only_touches_right_side() {
    let mut s = surface(16, 4);
    s.draw_from_column(8, |ctx| fill(ctx, 0.0, 0.0, 16.0, 1.0));
    let ink = s.ink_pixels();
    assert_eq!(ink.len(), 8);
    assert!(ink.iter().all(|p| p.x >= 8 && p.y == 0));
}

#[test]
fn snapshot_is_straight_alpha() {
    let mut s = surface(4, 4);
    s.render_full(|ctx| fill(ctx, 0.0, 0.0, 1.0, 1.0));
    let frame = s.snapshot();
    assert_eq!(frame.width, 4);
    assert_eq!(frame.data.len(), 4 * 4 * 4);
    assert_eq!(&frame.data[0..4], &[255, 255, 255, 255]);
    assert_eq!(&frame.data[4..8], &[0, 0, 0, 0]);
}
