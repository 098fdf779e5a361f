#![allow(clippy::float_cmp)]

use canvas::config::GroupDrag;

use super::*;

#[test]
fn missing_element_uses_defaults() {
    assert_eq!(parse(None).unwrap(), CanvasConfig::default());
}

#[test]
fn blank_element_uses_defaults() {
    assert_eq!(parse(Some("  \n  ")).unwrap(), CanvasConfig::default());
}

#[test]
fn inline_json_overrides_defaults() {
    let cfg = parse(Some(r#"
        { "group_drag": "preserve", "max_diameter_ratio": 0.1 }
    "#))
    .unwrap();
    assert_eq!(cfg.group_drag, GroupDrag::Preserve);
    assert_eq!(cfg.max_diameter_ratio, 0.1);
    assert_eq!(cfg.min_diameter_ratio, 0.05);
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(parse(Some("{")), Err(CanvasError::ConfigParse(_))));
}

#[test]
fn invalid_values_are_reported() {
    assert!(matches!(parse(Some(r#"{"min_diameter_ratio": 2.0}"#)), Err(CanvasError::InvalidConfig(_))));
}
