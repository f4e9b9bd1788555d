use super::*;

#[test]
fn palette_style_has_no_attributes() {
    assert_eq!(Style::palette().attributes(), "");
    assert!(!Style::palette().custom);
}

#[test]
fn outline_leaves_stroke_to_palette() {
    assert_eq!(Style::outline().attributes(), r#" fill="none""#);
}

#[test]
fn custom_style_lists_every_attribute() {
    let style = Style::custom("red", "black").with_stroke_width(0.5);
    assert!(style.custom);
    assert_eq!(
        style.attributes(),
        r#" fill="red" stroke="black" stroke-width="0.5""#
    );
}

#[test]
fn attribute_values_are_escaped() {
    let style = Style::custom(r##"url("#g")"##, "a&b");
    let attrs = style.attributes();
    assert!(attrs.contains("&quot;"));
    assert!(attrs.contains("a&amp;b"));
}

#[test]
fn serde_defaults_missing_fields() {
    let style: Style = serde_json::from_str(r#"{"fill": "blue"}"#).unwrap();
    assert_eq!(style.fill.as_deref(), Some("blue"));
    assert!(!style.custom);
    assert!(style.stroke.is_none());
}
