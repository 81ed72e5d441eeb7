//! Helpers handed to every style resolver.

use super::linear::{validate_domain, PiecewiseScale};
use crate::config::NOT_FOCUSED_COLOR;
use crate::display::{DisplayContext, MarkerDef};
use crate::model::Segment;
use crate::style::ConfigurationError;

/// Zoom-to-size conversions plus marker registration.
///
/// # Example
///
/// ```rust
/// use transit_style::ScaleUtils;
///
/// let utils = ScaleUtils::standard();
/// assert_eq!(utils.pixels(0.25, 4.0, 6.0, 8.0), 4.0);
/// assert_eq!(utils.pixels(1.0, 4.0, 6.0, 8.0), 6.0);
/// assert_eq!(utils.pixels(4.0, 4.0, 6.0, 8.0), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleUtils {
    stroke: PiecewiseScale,
    font: PiecewiseScale,
}

impl ScaleUtils {
    /// Stock scales: strokes 5/12/19 and fonts 10/14/18 over the zoom domain.
    pub const fn standard() -> Self {
        Self {
            stroke: PiecewiseScale::zoom([5.0, 12.0, 19.0]),
            font: PiecewiseScale::zoom([10.0, 14.0, 18.0]),
        }
    }

    /// Custom control points. `domain` must be finite and strictly increasing.
    pub fn new(
        domain: [f64; 3],
        stroke: [f64; 3],
        font: [f64; 3],
    ) -> Result<Self, ConfigurationError> {
        validate_domain(domain)?;
        Ok(Self {
            stroke: PiecewiseScale::new(domain, stroke)?,
            font: PiecewiseScale::new(domain, font)?,
        })
    }

    pub fn domain(&self) -> [f64; 3] {
        self.stroke.domain()
    }

    /// Interpolates `min`/`normal`/`max` over the zoom domain at `zoom`.
    pub fn pixels(&self, zoom: f64, min: f64, normal: f64, max: f64) -> f64 {
        self.stroke.with_range([min, normal, max]).apply(zoom)
    }

    /// Stroke width for the display's current zoom.
    pub fn stroke_width(&self, display: &DisplayContext<'_>) -> f64 {
        self.stroke.apply(display.scale())
    }

    /// Font size for the display's current zoom, in whole pixels.
    pub fn font_size(&self, display: &DisplayContext<'_>) -> f64 {
        self.font.apply(display.scale()).floor()
    }

    /// Appends a circle marker for `segment` and returns its `url(#..)` reference.
    ///
    /// The marker id is `circleMarker-<segment id>`. Unfocused segments get
    /// [`NOT_FOCUSED_COLOR`] instead of `fill`. Every call appends a new
    /// definition, even when one with the same id already exists.
    pub fn define_segment_circle_marker(
        &self,
        display: &mut DisplayContext<'_>,
        segment: &dyn Segment,
        radius: f64,
        fill: &str,
    ) -> String {
        let id = format!("circleMarker-{}", segment.id());
        let fill = if segment.is_focused() {
            fill
        } else {
            NOT_FOCUSED_COLOR
        };
        let marker = MarkerDef::circle(id, radius, fill);
        let reference = marker.reference();
        log::debug!("registering marker {} (r={}, fill={})", marker.id, radius, fill);
        display.surface().append_marker(marker);
        reference
    }
}

impl Default for ScaleUtils {
    fn default() -> Self {
        Self::standard()
    }
}
