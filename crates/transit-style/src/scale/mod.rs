//! Zoom-driven sizing.
//!
//! This module provides:
//!
//! - [`PiecewiseScale`]: a three-point piecewise-linear map
//! - [`ScaleUtils`]: the `pixels`/`stroke_width`/`font_size` helpers and
//!   circle-marker registration handed to every resolver
//!
//! All scales share the zoom control points [`ZOOM_DOMAIN`] unless a
//! [`ScaleConfig`](crate::ScaleConfig) says otherwise.

mod linear;
mod utils;

pub use linear::{validate_domain, PiecewiseScale, ZOOM_DOMAIN};
pub use utils::ScaleUtils;
