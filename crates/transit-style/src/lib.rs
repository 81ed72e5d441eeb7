//! # Transit Style
//!
//! Zoom-aware style rules for drawing transit maps.
//!
//! A rendering engine asks this crate, for every element it draws (a stop,
//! a path segment, a label, ...) and every attribute it sets (`fill`, `r`,
//! `stroke-width`, `visibility`, ...), what the value should be at the current
//! zoom for that element's transit data. The answer is either a value or
//! "leave the attribute unset".
//!
//! ## Concepts
//!
//! - **Rules**: an [`AttributeRule`] is a constant, a [`Resolver`] function,
//!   or an ordered candidate list whose first present override wins over its
//!   default.
//! - **Tables**: a [`StyleTable`] holds the rules for one element class. The
//!   [`Stylesheet`] holds one table per [`ElementClass`].
//! - **Scales**: [`ScaleUtils`] turns the zoom scale into pixel sizes, stroke
//!   widths and font sizes, and registers circle markers on the drawing surface.
//! - **Configuration**: [`StyleConfig`] tunes scales, segment colors and
//!   per-table overrides from YAML.
//!
//! ## Quick Start
//!
//! ```rust
//! use transit_style::{default_stylesheet, DisplayContext, ElementClass, FixedZoom, MarkerDefs};
//! use transit_style::model::{PatternInfo, SegmentRecord, SegmentType};
//!
//! let zoom = FixedZoom(1.0);
//! let mut defs = MarkerDefs::new();
//! let mut display = DisplayContext::new(&zoom, &mut defs);
//!
//! let mut segment = SegmentRecord::new("s1", SegmentType::Transit);
//! segment.patterns.push(PatternInfo::new("HSL:1300", 1));
//!
//! let attrs = default_stylesheet().resolve_all(ElementClass::Segments, &mut display, &segment, 0);
//! assert_eq!(attrs.get("stroke").and_then(|v| v.as_str()), Some("#FF640E"));
//! assert_eq!(attrs.get("envelope").and_then(|v| v.as_str()), Some("10px"));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: stylesheet construction and
//! marker registration at `debug`, omitted attributes at `trace`. An omitted
//! attribute is a normal outcome and is never reported as an error.

pub mod config;
pub mod display;
pub mod model;
pub mod scale;
pub mod style;
pub mod tables;

pub use config::{ScaleConfig, SegmentPalette, StyleConfig, NOT_FOCUSED_COLOR};
pub use display::{DisplayContext, FixedZoom, MarkerDef, MarkerDefs, MarkerSurface, ZoomState};
pub use model::ElementData;
pub use scale::{PiecewiseScale, ScaleUtils, ZOOM_DOMAIN};
pub use style::{
    AttrValue, AttributeRule, Candidate, ConfigurationError, ResolvedAttributes, Resolver,
    StyleTable,
};
pub use tables::{default_stylesheet, ElementClass, Stylesheet};
