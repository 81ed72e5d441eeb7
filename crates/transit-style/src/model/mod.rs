//! The read-only view of transit data that style rules query.
//!
//! The rendering engine owns the actual data model. Rules only see it through
//! [`ElementData`], [`Point`] and [`Segment`], and never mutate it. Every
//! accessor that can be missing on partially-loaded data returns an `Option`,
//! so a rule facing malformed data simply has no opinion.
//!
//! [`records`] holds plain serde-friendly implementations of these traits for
//! engines that keep transit data as JSON.

pub mod records;

use serde::Deserialize;

pub use records::{FocusRecord, LabelRecord, PointRecord, SegmentRecord, StopRecord};

/// GTFS route type for buses.
pub const BUS_ROUTE_TYPE: u16 = 3;

/// The route summary carried by a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatternInfo {
    #[serde(default)]
    pub route_id: Option<String>,
    /// GTFS route type of the pattern's route; `None` when the route isn't loaded.
    #[serde(default)]
    pub route_type: Option<u16>,
}

impl PatternInfo {
    pub fn new(route_id: impl Into<String>, route_type: u16) -> Self {
        Self {
            route_id: Some(route_id.into()),
            route_type: Some(route_type),
        }
    }
}

/// How a segment is travelled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentType {
    Transit,
    Car,
    Bicycle,
    Walk,
    #[serde(other)]
    Other,
}

/// Service frequency along a segment, in minutes between departures.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Frequency {
    pub average: f64,
}

/// A map point (stop, place or multipoint) and its journey classification.
pub trait Point {
    fn is_focused(&self) -> bool;
    fn contains_board_point(&self) -> bool;
    fn contains_alight_point(&self) -> bool;
    fn contains_transfer_point(&self) -> bool;
    fn contains_segment_end_point(&self) -> bool;
    /// Patterns serving this point.
    fn patterns(&self) -> &[PatternInfo];

    /// True when every pattern with a loaded route is a bus route.
    ///
    /// Patterns with neither a route id nor a route type don't count either
    /// way. A route without a type is not a bus.
    fn is_bus_only(&self) -> bool {
        self.patterns()
            .iter()
            .filter(|p| p.route_id.is_some() || p.route_type.is_some())
            .all(|p| p.route_type == Some(BUS_ROUTE_TYPE))
    }
}

/// A rendered path segment.
pub trait Segment {
    fn id(&self) -> &str;
    fn is_focused(&self) -> bool;
    fn segment_type(&self) -> SegmentType;
    /// Numeric travel mode, if known. Mode 3 gets the thinner treatment.
    fn mode(&self) -> Option<u16>;
    fn patterns(&self) -> &[PatternInfo];
    fn frequency(&self) -> Option<Frequency>;
}

/// Any element being styled.
///
/// Each element class implements the accessors its rules use and inherits
/// the "nothing here" defaults for the rest.
pub trait ElementData {
    fn is_focused(&self) -> bool {
        false
    }

    /// The point a stop marker belongs to.
    fn owner(&self) -> Option<&dyn Point> {
        None
    }

    /// The point a label is attached to.
    fn labeled_point(&self) -> Option<&dyn Point> {
        None
    }

    fn as_segment(&self) -> Option<&dyn Segment> {
        None
    }
}
