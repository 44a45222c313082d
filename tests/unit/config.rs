use super::*;

#[test]
fn defaults_match_stock_control() {
    let cfg = VanishConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 800);
    assert_eq!(cfg.canvas.height, 800);
    assert_eq!(cfg.sweep_step_px, 8);
    assert_eq!(cfg.raster_font_size_px(), 28.0);
    assert_eq!(cfg.placeholders.len(), 4);
    assert_eq!(cfg.placeholder_period(), Duration::from_secs(5));
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = VanishConfig::from_json_str(r#"{ "sweep_step_px": 4, "font_scale": 3.0 }"#).unwrap();
    assert_eq!(cfg.sweep_step_px, 4);
    assert_eq!(cfg.font_scale, 3.0);
    assert_eq!(cfg.text_origin, [16.0, 40.0]);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = VanishConfig::from_json_str(r#"{ "sweep": 4 }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn validate_rejects_bad_values() {
    let cases = [
        r#"{ "sweep_step_px": 0 }"#,
        r#"{ "font_scale": -1.0 }"#,
        r#"{ "placeholders": [] }"#,
        r#"{ "canvas": { "width": 100000, "height": 10 } }"#,
        r#"{ "placeholder_period_ms": 0 }"#,
        r#"{ "ink": { "r": 255, "g": 0, "b": 0, "a": 255 } }"#,
    ];
    for case in cases {
        assert!(VanishConfig::from_json_str(case).is_err(), "{case}");
    }
}

#[test]
fn validate_rejects_ink_without_every_channel() {
    let cfg = VanishConfig {
        ink: Rgba8::new(255, 0, 0, 255),
        ..VanishConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("ink must have non-zero r, g, b"));
    assert!(VanishConfig::default().validate().is_ok());
}
