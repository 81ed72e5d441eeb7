//! Label rules.

use crate::style::{AttrValue, AttributeRule, Resolver, StyleTable};

/// Compass codes a labeler understands, relative to the labeled point.
///
/// `E`/`W` labels run horizontally, `N`/`S` vertically, the rest at 45°.
pub const ORIENTATIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn labels() -> StyleTable {
    StyleTable::new()
        .add(
            "font-size",
            Resolver::new(|display, _, _, utils| Some(AttrValue::px(utils.font_size(display)))),
        )
        .add(
            "font-weight",
            Resolver::new(|_, data, _, _| {
                let point = data.labeled_point()?;
                if point.contains_board_point() || point.contains_alight_point() {
                    Some("bold".into())
                } else {
                    None
                }
            }),
        )
        // Allowed placements, in the order the labeler tries them.
        .add("orientations", AttributeRule::candidates(vec!["E", "W"], vec![]))
}
