//! Stop and multipoint rules.

use crate::config::NOT_FOCUSED_COLOR;
use crate::style::{AttrValue, AttributeRule, Resolver, StyleTable};

/// Stops merged into a single marker where several patterns meet.
pub fn stops_merged() -> StyleTable {
    StyleTable::new()
        .add("fill", Resolver::new(|_, _, _, _| Some("#fff".into())))
        .add(
            "r",
            Resolver::new(|display, _, _, utils| {
                Some(utils.pixels(display.scale(), 4.0, 6.0, 8.0).into())
            }),
        )
        .add(
            "stroke",
            Resolver::new(|_, data, _, _| {
                let point = data.owner()?;
                if !point.is_focused() {
                    return Some(NOT_FOCUSED_COLOR.into());
                }
                Some("#000".into())
            }),
        )
        .add("stroke-width", Resolver::new(|_, _, _, _| Some(1.into())))
        // Main marker shape: 'roundedrect', 'rectangle' or 'circle'.
        .add(
            "marker-type",
            AttributeRule::candidates(
                "circle",
                vec![Resolver::new(|_, data, _, _| {
                    let point = data.owner()?;
                    let boards_or_alights =
                        point.contains_board_point() || point.contains_alight_point();
                    if boards_or_alights && !point.contains_transfer_point() {
                        Some("circle".into())
                    } else {
                        None
                    }
                })],
            ),
        )
        // Extra pixels around the marker beyond the width of its segments.
        .add("marker-padding", 3)
        .add(
            "visibility",
            Resolver::new(|_, data, _, _| {
                if data.owner()?.contains_segment_end_point() {
                    None
                } else {
                    Some("hidden".into())
                }
            }),
        )
}

/// Stops drawn individually along a pattern.
pub fn stops_pattern() -> StyleTable {
    StyleTable::new()
        .add("cx", 0)
        .add("cy", 0)
        .add(
            "r",
            AttributeRule::candidates(
                4,
                vec![
                    Resolver::new(|display, data, _, utils| {
                        let point = data.owner()?;
                        if point.is_bus_only() && !point.contains_segment_end_point() {
                            Some(AttrValue::Num(
                                0.5 * utils.pixels(display.scale(), 2.0, 4.0, 6.5),
                            ))
                        } else {
                            None
                        }
                    }),
                    Resolver::new(|display, _, _, utils| {
                        Some(utils.pixels(display.scale(), 1.0, 2.0, 4.0).into())
                    }),
                ],
            ),
        )
        .add("stroke", "none")
        .add(
            "visibility",
            Resolver::new(|display, data, _, _| {
                if display.scale() < 1.5 {
                    return Some("hidden".into());
                }
                if data.owner()?.contains_segment_end_point() {
                    return Some("hidden".into());
                }
                None
            }),
        )
}
