//! Integration tests for the stock stylesheet.
//!
//! These resolve whole elements through the public API the way a rendering
//! engine would: one display per pass, one table per element class.

use transit_style::model::{FocusRecord, LabelRecord, PointRecord, SegmentRecord, StopRecord};
use transit_style::{
    default_stylesheet, AttrValue, AttributeRule, DisplayContext, ElementClass, FixedZoom,
    MarkerDefs, Resolver, StyleConfig, Stylesheet, NOT_FOCUSED_COLOR,
};

fn segment(json: &str) -> SegmentRecord {
    serde_json::from_str(json).expect("valid segment fixture")
}

#[test]
fn test_segment_stroke_scenarios() {
    let sheet = default_stylesheet();
    let zoom = FixedZoom(1.0);
    let mut defs = MarkerDefs::new();
    let mut display = DisplayContext::new(&zoom, &mut defs);

    let highlighted = segment(
        r#"{ "focused": true, "type": "TRANSIT", "patterns": [{ "route_id": "HSL:1300" }] }"#,
    );
    let walk = segment(r#"{ "focused": true, "type": "WALK" }"#);
    let unfocused = segment(r#"{ "focused": false, "type": "BICYCLE" }"#);

    let stroke = |display: &mut DisplayContext<'_>, data: &SegmentRecord| {
        sheet.resolve(ElementClass::Segments, "stroke", display, data, 0)
    };

    assert_eq!(stroke(&mut display, &highlighted), Some("#FF640E".into()));
    assert_eq!(stroke(&mut display, &walk), Some("rgba(0,0,0,0.33)".into()));
    assert_eq!(stroke(&mut display, &unfocused), Some("#e0e0e0".into()));
}

#[test]
fn test_segment_attributes_as_json() {
    let zoom = FixedZoom(4.0);
    let mut defs = MarkerDefs::new();
    let mut display = DisplayContext::new(&zoom, &mut defs);
    let data = segment(
        r#"{ "id": "s9", "focused": true, "type": "TRANSIT", "mode": 3,
             "patterns": [{ "route_id": "HSL:1001", "route_type": 3 }],
             "frequency": { "average": 8 } }"#,
    );

    let attrs = default_stylesheet().resolve_all(ElementClass::Segments, &mut display, &data, 0);

    assert_eq!(
        attrs.to_json(),
        serde_json::json!({
            "stroke": "#007AC9",
            "stroke-dasharray": "6px, 6px",
            "stroke-width": "2px",
            "envelope": "10px",
        })
    );
}

#[test]
fn test_stop_visibility_across_zoom() {
    let sheet = default_stylesheet();
    let middle = StopRecord::on(PointRecord::default());

    for (scale, expected) in [(0.5, Some("hidden")), (1.49, Some("hidden")), (2.0, None)] {
        let zoom = FixedZoom(scale);
        let mut defs = MarkerDefs::new();
        let mut display = DisplayContext::new(&zoom, &mut defs);
        let value = sheet.resolve(ElementClass::StopsPattern, "visibility", &mut display, &middle, 0);
        assert_eq!(value, expected.map(AttrValue::from), "scale {}", scale);
    }
}

#[test]
fn test_multipoints_always_visible() {
    let zoom = FixedZoom(1.0);
    let mut defs = MarkerDefs::new();
    let mut display = DisplayContext::new(&zoom, &mut defs);
    let middle = StopRecord::on(PointRecord::default());
    let sheet = default_stylesheet();

    let stop = sheet.resolve_all(ElementClass::StopsMerged, &mut display, &middle, 0);
    let multi = sheet.resolve_all(ElementClass::MultipointsMerged, &mut display, &middle, 0);

    assert_eq!(stop.get("visibility"), Some(&AttrValue::from("hidden")));
    assert_eq!(multi.get("visibility"), Some(&AttrValue::Bool(true)));
    assert_eq!(stop.get("stroke"), Some(&AttrValue::from(NOT_FOCUSED_COLOR)));
    assert_eq!(stop.get("r"), multi.get("r"));
}

#[test]
fn test_label_attributes() {
    let zoom = FixedZoom(0.625);
    let mut defs = MarkerDefs::new();
    let mut display = DisplayContext::new(&zoom, &mut defs);
    let label = LabelRecord::for_point(PointRecord {
        alight: true,
        ..Default::default()
    });

    let attrs = default_stylesheet().resolve_all(ElementClass::Labels, &mut display, &label, 0);

    assert_eq!(
        attrs.to_json(),
        serde_json::json!({
            "font-size": "12px",
            "font-weight": "bold",
            "orientations": ["E", "W"],
        })
    );
}

#[test]
fn test_resolver_can_register_markers() {
    let mut sheet = Stylesheet::standard();
    sheet
        .table_mut(ElementClass::Segments)
        .expect("segments table")
        .set(
            "marker-mid",
            Resolver::new(|display, data, _, utils| {
                let segment = data.as_segment()?;
                Some(
                    utils
                        .define_segment_circle_marker(display, segment, 3.0, "#007AC9")
                        .into(),
                )
            }),
        );

    let zoom = FixedZoom(1.0);
    let mut defs = MarkerDefs::new();
    let mut data = SegmentRecord::new("42", transit_style::model::SegmentType::Transit);
    {
        let mut display = DisplayContext::new(&zoom, &mut defs);
        let first = sheet.resolve_all(ElementClass::Segments, &mut display, &data, 0);
        data.focused = false;
        let second = sheet.resolve_all(ElementClass::Segments, &mut display, &data, 1);

        assert_eq!(first.get("marker-mid"), Some(&AttrValue::from("url(#circleMarker-42)")));
        assert_eq!(first.get("marker-mid"), second.get("marker-mid"));
    }

    assert_eq!(defs.with_id("circleMarker-42").count(), 2);
    let fills: Vec<_> = defs.iter().map(|m| m.circle.fill.clone()).collect();
    assert_eq!(fills, vec!["#007AC9".to_string(), NOT_FOCUSED_COLOR.to_string()]);
    assert!(defs.to_svg().contains("markerUnits=\"userSpaceOnUse\""));

    // The shared stylesheet is untouched.
    assert!(default_stylesheet()
        .table(ElementClass::Segments)
        .expect("segments table")
        .get("marker-mid")
        .is_none());
}

#[test]
fn test_configured_stylesheet() {
    let config = StyleConfig::from_yaml_str(
        r##"
scales:
  font: [8, 12, 16]
segments:
  highlighted_routes: ["HSL:1001"]
  highlight: "#00aa00"
overrides:
  segment_label_containers:
    rx: 5
"##,
    )
    .expect("valid config");
    let sheet = Stylesheet::from_config(&config).expect("valid stylesheet");

    let zoom = FixedZoom(1.0);
    let mut defs = MarkerDefs::new();
    let mut display = DisplayContext::new(&zoom, &mut defs);

    let label = LabelRecord::default();
    assert_eq!(
        sheet.resolve(ElementClass::Labels, "font-size", &mut display, &label, 0),
        Some("12px".into())
    );

    let data = segment(
        r#"{ "focused": true, "type": "TRANSIT", "patterns": [{ "route_id": "HSL:1001" }] }"#,
    );
    assert_eq!(
        sheet.resolve(ElementClass::Segments, "stroke", &mut display, &data, 0),
        Some("#00aa00".into())
    );

    let container = FocusRecord { focused: true };
    let attrs = sheet.resolve_all(ElementClass::SegmentLabelContainers, &mut display, &container, 0);
    assert_eq!(attrs.get("rx"), Some(&AttrValue::Num(5.0)));
    assert_eq!(attrs.get("ry"), Some(&AttrValue::Num(3.0)));
    assert_eq!(attrs.get("fill"), None);
}

#[test]
fn test_custom_table_rules() {
    let mut sheet = Stylesheet::standard();
    let places = sheet.table_mut(ElementClass::Places).expect("places table");
    places.set(
        "fill",
        AttributeRule::candidates(
            "#000",
            vec![Resolver::new(|_, data, _, _| {
                data.is_focused().then(|| AttrValue::from("#f00"))
            })],
        ),
    );

    let zoom = FixedZoom(1.0);
    let mut defs = MarkerDefs::new();
    let mut display = DisplayContext::new(&zoom, &mut defs);

    let focused = FocusRecord { focused: true };
    let plain = FocusRecord::default();
    assert_eq!(
        sheet.resolve(ElementClass::Places, "fill", &mut display, &focused, 0),
        Some("#f00".into())
    );
    assert_eq!(
        sheet.resolve(ElementClass::Places, "fill", &mut display, &plain, 0),
        Some("#000".into())
    );
    assert!(defs.is_empty());
}
