//! Path segment rules.

use std::sync::Arc;

use crate::config::{SegmentPalette, NOT_FOCUSED_COLOR};
use crate::model::{Segment, SegmentType};
use crate::style::{AttrValue, AttributeRule, Resolver, StyleTable};

/// Travel mode drawn with the thinner line and envelope.
const THIN_MODE: u16 = 3;

/// Every path segment.
pub fn segments(palette: &SegmentPalette) -> StyleTable {
    let palette = Arc::new(palette.clone());
    let default_stroke = palette.transit.clone();

    StyleTable::new()
        .add(
            "stroke",
            AttributeRule::candidates(
                default_stroke,
                vec![Resolver::new(move |_, data, _, _| {
                    stroke_color(&palette, data.as_segment()?).map(AttrValue::from)
                })],
            ),
        )
        .add(
            "stroke-dasharray",
            AttributeRule::candidates(
                false,
                vec![Resolver::new(|_, data, _, _| {
                    let frequency = data.as_segment()?.frequency()?;
                    if frequency.average >= 12.0 {
                        return None;
                    }
                    if frequency.average > 6.0 {
                        Some("6px, 6px".into())
                    } else {
                        Some("12px, 2px".into())
                    }
                })],
            ),
        )
        .add(
            "stroke-width",
            AttributeRule::candidates(
                "6px",
                vec![Resolver::new(|display, data, _, utils| {
                    let zoom = display.scale();
                    let width = if data.as_segment()?.mode() == Some(THIN_MODE) {
                        utils.pixels(zoom, 2.0, 2.0, 2.0)
                    } else {
                        utils.pixels(zoom, 4.0, 4.0, 4.0)
                    };
                    Some(AttrValue::px(width))
                })],
            ),
        )
        // Invisible hit-test width around the visible stroke.
        .add(
            "envelope",
            AttributeRule::computed_candidates(
                Resolver::new(|display, data, _, utils| {
                    let segment = data.as_segment()?;
                    if segment.segment_type() != SegmentType::Transit {
                        return Some("8px".into());
                    }
                    let zoom = display.scale();
                    let width = if segment.mode() == Some(THIN_MODE) {
                        utils.pixels(zoom, 4.0, 6.0, 10.0)
                    } else {
                        utils.pixels(zoom, 6.0, 10.0, 14.0)
                    };
                    Some(AttrValue::px(width))
                }),
                vec![],
            ),
        )
}

// TODO: the highlighted route ids are HSL-specific; move them out of the
// default palette once deployments ship their own style config.
fn stroke_color(palette: &SegmentPalette, segment: &dyn Segment) -> Option<String> {
    if !segment.is_focused() {
        return Some(NOT_FOCUSED_COLOR.to_string());
    }
    let color = match segment.segment_type() {
        SegmentType::Transit => {
            let route_id = segment.patterns().first()?.route_id.as_deref()?;
            if palette.is_highlighted(route_id) {
                &palette.highlight
            } else {
                &palette.transit
            }
        }
        SegmentType::Car => &palette.car,
        SegmentType::Bicycle => &palette.bicycle,
        SegmentType::Walk => &palette.walk,
        SegmentType::Other => return None,
    };
    Some(color.clone())
}

/// The thin front line drawn over highlighted segments.
pub fn segments_front() -> StyleTable {
    StyleTable::new()
        .add("stroke", "#006eb5")
        .add(
            "stroke-width",
            Resolver::new(|display, _, _, utils| {
                Some(AttrValue::px(utils.pixels(display.scale(), 3.0, 6.0, 10.0) / 2.0))
            }),
        )
        .add("fill", "none")
        .add("display", "none")
}

pub fn segments_halo() -> StyleTable {
    StyleTable::new()
        .add("stroke", "#fff")
        .add("stroke-width", Resolver::new(|_, _, _, _| Some(0.into())))
        .add("stroke-linecap", "round")
        .add("fill", "none")
}

/// Boxes behind segment labels.
pub fn segment_label_containers() -> StyleTable {
    StyleTable::new()
        .add(
            "fill",
            Resolver::new(|_, data, _, _| {
                if data.is_focused() {
                    None
                } else {
                    Some(NOT_FOCUSED_COLOR.into())
                }
            }),
        )
        .add("stroke-width", Resolver::new(|_, _, _, _| Some(0.into())))
        .add("rx", 3)
        .add("ry", 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayContext, FixedZoom, MarkerDefs};
    use crate::model::{ElementData, FocusRecord, Frequency, PatternInfo, SegmentRecord};
    use crate::scale::ScaleUtils;

    fn resolve(table: &StyleTable, attr: &str, scale: f64, data: &dyn ElementData) -> Option<AttrValue> {
        let zoom = FixedZoom(scale);
        let mut defs = MarkerDefs::new();
        let mut ctx = DisplayContext::new(&zoom, &mut defs);
        table.resolve(attr, &mut ctx, data, 0, &ScaleUtils::standard())
    }

    fn segment(json: &str) -> SegmentRecord {
        serde_json::from_str(json).unwrap()
    }

    fn stroke(data: &SegmentRecord) -> Option<AttrValue> {
        resolve(&segments(&SegmentPalette::default()), "stroke", 1.0, data)
    }

    #[test]
    fn test_stroke_highlighted_route() {
        for route in ["HSL:1300", "HSL:1300V", "HSL:1300M"] {
            let data = segment(&format!(
                r#"{{ "focused": true, "type": "TRANSIT", "patterns": [{{ "route_id": "{}" }}] }}"#,
                route
            ));
            assert_eq!(stroke(&data), Some("#FF640E".into()), "route {}", route);
        }
    }

    #[test]
    fn test_stroke_regular_transit() {
        let data = segment(
            r#"{ "focused": true, "type": "TRANSIT", "patterns": [{ "route_id": "HSL:1001" }] }"#,
        );
        assert_eq!(stroke(&data), Some("#007AC9".into()));
    }

    #[test]
    fn test_stroke_street_modes() {
        let walk = segment(r#"{ "focused": true, "type": "WALK" }"#);
        let car = segment(r#"{ "focused": true, "type": "CAR" }"#);
        let bike = segment(r#"{ "focused": true, "type": "BICYCLE" }"#);

        assert_eq!(stroke(&walk), Some("rgba(0,0,0,0.33)".into()));
        assert_eq!(stroke(&car), Some("rgba(0,0,0,0)".into()));
        assert_eq!(stroke(&bike), Some("rgba(0,0,0,0)".into()));
    }

    #[test]
    fn test_stroke_unfocused() {
        for kind in ["TRANSIT", "WALK", "CAR", "FERRY"] {
            let data = segment(&format!(r#"{{ "focused": false, "type": "{}" }}"#, kind));
            assert_eq!(stroke(&data), Some(NOT_FOCUSED_COLOR.into()), "type {}", kind);
        }
    }

    #[test]
    fn test_stroke_falls_back_to_default() {
        let unknown = segment(r#"{ "focused": true, "type": "FERRY" }"#);
        let no_patterns = segment(r#"{ "focused": true, "type": "TRANSIT" }"#);

        assert_eq!(stroke(&unknown), Some("#007AC9".into()));
        assert_eq!(stroke(&no_patterns), Some("#007AC9".into()));
        assert_eq!(stroke_on_non_segment(), Some("#007AC9".into()));
    }

    fn stroke_on_non_segment() -> Option<AttrValue> {
        resolve(
            &segments(&SegmentPalette::default()),
            "stroke",
            1.0,
            &FocusRecord { focused: true },
        )
    }

    #[test]
    fn test_stroke_uses_palette() {
        let palette = SegmentPalette {
            highlighted_routes: vec!["HSL:1001".to_string()],
            highlight: "#00ff00".to_string(),
            ..Default::default()
        };
        let data = segment(
            r#"{ "focused": true, "type": "TRANSIT", "patterns": [{ "route_id": "HSL:1001" }] }"#,
        );
        assert_eq!(
            resolve(&segments(&palette), "stroke", 1.0, &data),
            Some("#00ff00".into())
        );
    }

    #[test]
    fn test_dasharray_by_frequency() {
        let table = segments(&SegmentPalette::default());
        let mut data = SegmentRecord::new("1", SegmentType::Transit);

        assert_eq!(resolve(&table, "stroke-dasharray", 1.0, &data), Some(false.into()));

        data.frequency = Some(Frequency { average: 15.0 });
        assert_eq!(resolve(&table, "stroke-dasharray", 1.0, &data), Some(false.into()));

        data.frequency = Some(Frequency { average: 12.0 });
        assert_eq!(resolve(&table, "stroke-dasharray", 1.0, &data), Some(false.into()));

        data.frequency = Some(Frequency { average: 10.0 });
        assert_eq!(
            resolve(&table, "stroke-dasharray", 1.0, &data),
            Some("6px, 6px".into())
        );

        data.frequency = Some(Frequency { average: 6.0 });
        assert_eq!(
            resolve(&table, "stroke-dasharray", 1.0, &data),
            Some("12px, 2px".into())
        );
    }

    #[test]
    fn test_stroke_width_by_mode() {
        let table = segments(&SegmentPalette::default());
        let mut data = SegmentRecord::new("1", SegmentType::Transit);

        assert_eq!(resolve(&table, "stroke-width", 2.0, &data), Some("4px".into()));
        data.mode = Some(3);
        assert_eq!(resolve(&table, "stroke-width", 2.0, &data), Some("2px".into()));
        assert_eq!(
            resolve(&table, "stroke-width", 1.0, &FocusRecord::default()),
            Some("6px".into())
        );
    }

    #[test]
    fn test_envelope() {
        let table = segments(&SegmentPalette::default());
        let walk = SegmentRecord::new("w", SegmentType::Walk);
        let mut transit = SegmentRecord::new("t", SegmentType::Transit);
        transit.patterns.push(PatternInfo::new("HSL:1001", 3));

        assert_eq!(resolve(&table, "envelope", 4.0, &walk), Some("8px".into()));
        assert_eq!(resolve(&table, "envelope", 1.0, &transit), Some("10px".into()));
        assert_eq!(resolve(&table, "envelope", 4.0, &transit), Some("14px".into()));

        transit.mode = Some(3);
        assert_eq!(resolve(&table, "envelope", 0.25, &transit), Some("4px".into()));
        assert_eq!(resolve(&table, "envelope", 4.0, &transit), Some("10px".into()));

        assert_eq!(resolve(&table, "envelope", 1.0, &FocusRecord::default()), None);
    }

    #[test]
    fn test_front_width() {
        let table = segments_front();
        let data = FocusRecord::default();
        assert_eq!(resolve(&table, "stroke-width", 1.0, &data), Some("3px".into()));
        assert_eq!(resolve(&table, "stroke-width", 0.25, &data), Some("1.5px".into()));
        assert_eq!(resolve(&table, "display", 1.0, &data), Some("none".into()));
    }

    #[test]
    fn test_halo() {
        let table = segments_halo();
        let data = FocusRecord::default();
        assert_eq!(resolve(&table, "stroke-width", 3.0, &data), Some(AttrValue::Num(0.0)));
        assert_eq!(resolve(&table, "stroke-linecap", 1.0, &data), Some("round".into()));
    }

    #[test]
    fn test_label_container_fill() {
        let table = segment_label_containers();
        assert_eq!(
            resolve(&table, "fill", 1.0, &FocusRecord { focused: false }),
            Some(NOT_FOCUSED_COLOR.into())
        );
        assert_eq!(resolve(&table, "fill", 1.0, &FocusRecord { focused: true }), None);
        assert_eq!(
            resolve(&table, "rx", 1.0, &FocusRecord::default()),
            Some(AttrValue::Num(3.0))
        );
    }
}
