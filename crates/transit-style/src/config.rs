//! Stylesheet configuration.
//!
//! [`StyleConfig`] collects the tunable data behind the default tables: scale
//! control points, the segment palette (including the route ids that get the
//! highlight color), and constant overrides layered on top of any table. Every
//! field has a default, so an empty document yields the stock stylesheet.
//!
//! ```rust
//! use transit_style::StyleConfig;
//!
//! let config = StyleConfig::from_yaml_str(
//!     r##"
//! segments:
//!   highlighted_routes: ["HSL:1001"]
//! overrides:
//!   places:
//!     fill: "#333"
//! "##,
//! )
//! .unwrap();
//!
//! assert_eq!(config.segments.highlighted_routes, vec!["HSL:1001".to_string()]);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::scale::{ScaleUtils, ZOOM_DOMAIN};
use crate::style::{AttrValue, ConfigurationError};

/// Fallback color for elements that aren't focused.
pub const NOT_FOCUSED_COLOR: &str = "#e0e0e0";

/// Complete stylesheet configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub scales: ScaleConfig,
    pub segments: SegmentPalette,
    /// Table name → attribute → constant, applied after the built-in rules.
    pub overrides: BTreeMap<String, BTreeMap<String, AttrValue>>,
}

impl StyleConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigurationError> {
        let config: StyleConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading style config from {}", path.display());
        Self::from_yaml_str(&source)
    }

    /// Checks scale control points and palette colors.
    ///
    /// Table names in `overrides` are checked when the stylesheet is built.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.scales.utils()?;
        self.segments.validate()
    }
}

/// Control points for the zoom-driven scales.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub domain: [f64; 3],
    pub stroke: [f64; 3],
    pub font: [f64; 3],
}

impl ScaleConfig {
    /// Builds the validated scale utilities.
    pub fn utils(&self) -> Result<ScaleUtils, ConfigurationError> {
        ScaleUtils::new(self.domain, self.stroke, self.font)
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            domain: ZOOM_DOMAIN,
            stroke: [5.0, 12.0, 19.0],
            font: [10.0, 14.0, 18.0],
        }
    }
}

/// Stroke colors for path segments.
///
/// Routes listed in `highlighted_routes` are matched against the id of the
/// segment's first pattern.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmentPalette {
    pub transit: String,
    pub highlight: String,
    pub highlighted_routes: Vec<String>,
    pub car: String,
    pub bicycle: String,
    pub walk: String,
}

impl SegmentPalette {
    pub fn is_highlighted(&self, route_id: &str) -> bool {
        self.highlighted_routes.iter().any(|r| r == route_id)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let colors = [
            ("segments.transit", &self.transit),
            ("segments.highlight", &self.highlight),
            ("segments.car", &self.car),
            ("segments.bicycle", &self.bicycle),
            ("segments.walk", &self.walk),
        ];
        match colors.iter().find(|(_, c)| c.trim().is_empty()) {
            Some((field, _)) => Err(ConfigurationError::EmptyColor {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for SegmentPalette {
    fn default() -> Self {
        Self {
            transit: "#007AC9".to_string(),
            highlight: "#FF640E".to_string(),
            highlighted_routes: vec![
                "HSL:1300V".to_string(),
                "HSL:1300M".to_string(),
                "HSL:1300".to_string(),
            ],
            car: "rgba(0,0,0,0)".to_string(),
            bicycle: "rgba(0,0,0,0)".to_string(),
            walk: "rgba(0,0,0,0.33)".to_string(),
        }
    }
}
