use super::*;

fn px(x: i32, y: i32, a: u8) -> InkPixel {
    InkPixel {
        x,
        y,
        color: Rgba8::new(255, 255, 255, a),
    }
}

#[test]
fn pixels_become_unit_particles_in_order() {
    let field = ParticleField::from_pixels(&[px(3, 1, 255), px(9, 2, 40)], 1.0);
    assert_eq!(field.len(), 2);
    let ps = field.particles();
    assert_eq!((ps[0].x, ps[0].y, ps[0].radius), (3, 1, 1.0));
    assert_eq!(ps[1].color.a, 40);
    assert_eq!(ps[1].color.css(), "rgba(255, 255, 255, 40)");
}

#[test]
fn max_x_is_rightmost_column() {
    let field = ParticleField::from_pixels(&[px(3, 1, 255), px(41, 0, 255), px(7, 5, 255)], 1.0);
    assert_eq!(field.max_x(), 41);
}

#[test]
fn empty_field_sweeps_from_zero() {
    let field = ParticleField::from_pixels(&[], 1.0);
    assert!(field.is_empty());
    assert_eq!(field.max_x(), 0);
}

#[test]
fn spent_means_non_positive_radius() {
    let mut p = ParticleField::from_pixels(&[px(0, 0, 255)], 1.0).particles()[0];
    assert!(!p.is_spent());
    p.radius = 0.0;
    assert!(p.is_spent());
    p.radius = -0.01;
    assert!(p.is_spent());
}
