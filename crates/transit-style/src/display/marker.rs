//! SVG marker definitions.

/// Sink for marker definitions. Markers are only ever appended.
pub trait MarkerSurface {
    fn append_marker(&mut self, marker: MarkerDef);
}

/// A circle drawn inside a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleDef {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

/// A `<marker>` holding a single circle.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDef {
    pub id: String,
    pub ref_x: f64,
    pub ref_y: f64,
    pub marker_width: f64,
    pub marker_height: f64,
    pub marker_units: &'static str,
    pub circle: CircleDef,
}

impl MarkerDef {
    /// A circle marker of `radius`, anchored on the circle's center.
    pub fn circle(id: impl Into<String>, radius: f64, fill: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ref_x: radius,
            ref_y: radius,
            marker_width: radius * 2.0,
            marker_height: radius * 2.0,
            marker_units: "userSpaceOnUse",
            circle: CircleDef {
                cx: radius,
                cy: radius,
                r: radius,
                fill: fill.into(),
            },
        }
    }

    /// The `url(#id)` reference used in `marker-*` attributes.
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Renders the marker wrapped in its own `<defs>` element.
    pub fn to_svg(&self) -> String {
        let c = &self.circle;
        format!(
            "<defs><marker id=\"{}\" refX=\"{}\" refY=\"{}\" markerWidth=\"{}\" markerHeight=\"{}\" markerUnits=\"{}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/></marker></defs>",
            self.id,
            self.ref_x,
            self.ref_y,
            self.marker_width,
            self.marker_height,
            self.marker_units,
            c.cx,
            c.cy,
            c.r,
            c.fill
        )
    }
}

/// In-memory marker surface.
#[derive(Debug, Clone, Default)]
pub struct MarkerDefs {
    markers: Vec<MarkerDef>,
}

impl MarkerDefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerDef> {
        self.markers.iter()
    }

    /// All definitions with the given id, in append order.
    pub fn with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a MarkerDef> {
        self.markers.iter().filter(move |m| m.id == id)
    }

    /// Renders every marker, one `<defs>` element each, in append order.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for marker in &self.markers {
            out.push_str(&marker.to_svg());
        }
        out
    }
}

impl MarkerSurface for MarkerDefs {
    fn append_marker(&mut self, marker: MarkerDef) {
        self.markers.push(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_geometry() {
        let marker = MarkerDef::circle("circleMarker-7", 3.0, "#f00");
        assert_eq!(marker.ref_x, 3.0);
        assert_eq!(marker.ref_y, 3.0);
        assert_eq!(marker.marker_width, 6.0);
        assert_eq!(marker.marker_height, 6.0);
        assert_eq!(marker.circle.r, 3.0);
        assert_eq!(marker.reference(), "url(#circleMarker-7)");
    }

    #[test]
    fn test_to_svg() {
        let marker = MarkerDef::circle("m1", 2.5, "#e0e0e0");
        assert_eq!(
            marker.to_svg(),
            "<defs><marker id=\"m1\" refX=\"2.5\" refY=\"2.5\" markerWidth=\"5\" markerHeight=\"5\" markerUnits=\"userSpaceOnUse\"><circle cx=\"2.5\" cy=\"2.5\" r=\"2.5\" fill=\"#e0e0e0\"/></marker></defs>"
        );
    }

    #[test]
    fn test_defs_keep_duplicates() {
        let mut defs = MarkerDefs::new();
        defs.append_marker(MarkerDef::circle("a", 1.0, "#000"));
        defs.append_marker(MarkerDef::circle("a", 1.0, "#000"));
        defs.append_marker(MarkerDef::circle("b", 1.0, "#000"));

        assert_eq!(defs.len(), 3);
        assert_eq!(defs.with_id("a").count(), 2);
        assert_eq!(defs.to_svg().matches("<defs>").count(), 3);
    }
}
