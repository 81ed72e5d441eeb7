//! The stock style tables and the stylesheet that groups them.
//!
//! Every element class the renderer draws has one [`StyleTable`], addressed
//! by an [`ElementClass`] whose [`name`](ElementClass::name) is stable:
//!
//! | Class | Name |
//! |-------|------|
//! | merged stop markers | `stops_merged` |
//! | stops along a pattern | `stops_pattern` |
//! | places | `places` |
//! | merged multipoints | `multipoints_merged` |
//! | multipoints along a pattern | `multipoints_pattern` |
//! | labels | `labels` |
//! | path segments | `segments` |
//! | segment front lines | `segments_front` |
//! | segment halos | `segments_halo` |
//! | segment label boxes | `segment_label_containers` |
//! | wireframe vertices | `wireframe_vertices` |
//! | wireframe edges | `wireframe_edges` |
//!
//! The two multipoint tables are copies of the stop tables. They are cloned
//! before being patched, so changing one never leaks into the other.

mod labels;
mod places;
mod segments;
mod stops;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::config::{SegmentPalette, StyleConfig};
use crate::display::DisplayContext;
use crate::model::ElementData;
use crate::scale::ScaleUtils;
use crate::style::{AttrValue, ConfigurationError, ResolvedAttributes, Resolver, StyleTable};

pub use labels::{labels, ORIENTATIONS};
pub use places::{places, wireframe_edges, wireframe_vertices};
pub use segments::{segment_label_containers, segments, segments_front, segments_halo};
pub use stops::{stops_merged, stops_pattern};

/// Which table an element is styled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementClass {
    StopsMerged,
    StopsPattern,
    Places,
    MultipointsMerged,
    MultipointsPattern,
    Labels,
    Segments,
    SegmentsFront,
    SegmentsHalo,
    SegmentLabelContainers,
    WireframeVertices,
    WireframeEdges,
}

impl ElementClass {
    pub const ALL: [ElementClass; 12] = [
        ElementClass::StopsMerged,
        ElementClass::StopsPattern,
        ElementClass::Places,
        ElementClass::MultipointsMerged,
        ElementClass::MultipointsPattern,
        ElementClass::Labels,
        ElementClass::Segments,
        ElementClass::SegmentsFront,
        ElementClass::SegmentsHalo,
        ElementClass::SegmentLabelContainers,
        ElementClass::WireframeVertices,
        ElementClass::WireframeEdges,
    ];

    /// The stable table name.
    pub fn name(self) -> &'static str {
        match self {
            ElementClass::StopsMerged => "stops_merged",
            ElementClass::StopsPattern => "stops_pattern",
            ElementClass::Places => "places",
            ElementClass::MultipointsMerged => "multipoints_merged",
            ElementClass::MultipointsPattern => "multipoints_pattern",
            ElementClass::Labels => "labels",
            ElementClass::Segments => "segments",
            ElementClass::SegmentsFront => "segments_front",
            ElementClass::SegmentsHalo => "segments_halo",
            ElementClass::SegmentLabelContainers => "segment_label_containers",
            ElementClass::WireframeVertices => "wireframe_vertices",
            ElementClass::WireframeEdges => "wireframe_edges",
        }
    }
}

impl fmt::Display for ElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementClass {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| ConfigurationError::UnknownTable {
                name: s.to_string(),
            })
    }
}

/// All style tables plus the scales their resolvers use.
///
/// # Example
///
/// ```rust
/// use transit_style::{default_stylesheet, DisplayContext, ElementClass, FixedZoom, MarkerDefs};
/// use transit_style::model::{PointRecord, StopRecord};
///
/// let zoom = FixedZoom(1.0);
/// let mut defs = MarkerDefs::new();
/// let mut display = DisplayContext::new(&zoom, &mut defs);
///
/// let stop = StopRecord::on(PointRecord { segment_end: true, ..Default::default() });
/// let attrs = default_stylesheet().resolve_all(ElementClass::StopsMerged, &mut display, &stop, 0);
///
/// assert_eq!(attrs.get("r").and_then(|v| v.as_num()), Some(6.0));
/// assert!(attrs.get("visibility").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Stylesheet {
    tables: BTreeMap<ElementClass, StyleTable>,
    utils: ScaleUtils,
}

impl Stylesheet {
    /// An empty stylesheet using `utils` for its resolvers.
    pub fn new(utils: ScaleUtils) -> Self {
        Self {
            tables: BTreeMap::new(),
            utils,
        }
    }

    /// The stock tables with the stock scales and palette.
    pub fn standard() -> Self {
        Self::build(ScaleUtils::standard(), &SegmentPalette::default())
    }

    /// The stock tables built from `config`, with its overrides applied.
    pub fn from_config(config: &StyleConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let mut sheet = Self::build(config.scales.utils()?, &config.segments);
        sheet.apply_overrides(&config.overrides)?;
        Ok(sheet)
    }

    fn build(utils: ScaleUtils, palette: &SegmentPalette) -> Self {
        let mut sheet = Self::new(utils);
        let stops_merged = stops_merged();
        let stops_pattern = stops_pattern();

        sheet.insert_derived(ElementClass::MultipointsMerged, &stops_merged, |t| {
            t.set("visibility", true)
        });
        sheet.insert_derived(ElementClass::MultipointsPattern, &stops_pattern, |_| {});
        sheet.insert(ElementClass::StopsMerged, stops_merged);
        sheet.insert(ElementClass::StopsPattern, stops_pattern);
        sheet.insert(ElementClass::Places, places());
        sheet.insert(ElementClass::Labels, labels());
        sheet.insert(ElementClass::Segments, segments(palette));
        sheet.insert(ElementClass::SegmentsFront, segments_front());
        sheet.insert(ElementClass::SegmentsHalo, segments_halo());
        sheet.insert(ElementClass::SegmentLabelContainers, segment_label_containers());
        sheet.insert(ElementClass::WireframeVertices, wireframe_vertices());
        sheet.insert(ElementClass::WireframeEdges, wireframe_edges());

        log::debug!("built stylesheet with {} tables", sheet.tables.len());
        sheet
    }

    fn insert_derived(
        &mut self,
        name: ElementClass,
        base: &StyleTable,
        patch: impl FnOnce(&mut StyleTable),
    ) {
        let mut table = base.clone();
        patch(&mut table);
        self.tables.insert(name, table);
    }

    /// Adds or replaces a table.
    pub fn insert(&mut self, class: ElementClass, table: StyleTable) {
        self.tables.insert(class, table);
    }

    /// Replaces `name` with a patched copy of `base`.
    pub fn derive(
        &mut self,
        name: ElementClass,
        base: ElementClass,
        patch: impl FnOnce(&mut StyleTable),
    ) -> Result<(), ConfigurationError> {
        let source = self
            .tables
            .get(&base)
            .ok_or_else(|| ConfigurationError::MissingSourceTable {
                name: name.name().to_string(),
                base: base.name().to_string(),
            })?
            .clone();
        self.insert_derived(name, &source, patch);
        Ok(())
    }

    pub fn table(&self, class: ElementClass) -> Option<&StyleTable> {
        self.tables.get(&class)
    }

    pub fn table_mut(&mut self, class: ElementClass) -> Option<&mut StyleTable> {
        self.tables.get_mut(&class)
    }

    /// Looks a table up by its stable name.
    pub fn get(&self, name: &str) -> Option<&StyleTable> {
        let class = name.parse().ok()?;
        self.table(class)
    }

    pub fn utils(&self) -> &ScaleUtils {
        &self.utils
    }

    /// Layers constant values on top of the built-in rules.
    ///
    /// Each value is tried before every built-in rule of its attribute, so a
    /// configured value always wins. Label `orientations` must only use codes
    /// from [`ORIENTATIONS`].
    pub fn apply_overrides(
        &mut self,
        overrides: &BTreeMap<String, BTreeMap<String, AttrValue>>,
    ) -> Result<(), ConfigurationError> {
        for (table_name, attrs) in overrides {
            let class: ElementClass = table_name.parse()?;
            let table = self
                .tables
                .get_mut(&class)
                .ok_or_else(|| ConfigurationError::UnknownTable {
                    name: table_name.clone(),
                })?;
            for (attr, value) in attrs {
                if class == ElementClass::Labels && attr == "orientations" {
                    check_orientations(value)?;
                }
                table.layer_override(attr, Resolver::constant(value.clone()));
            }
            log::debug!("applied {} override(s) to {}", attrs.len(), class);
        }
        Ok(())
    }

    /// Resolves one attribute of one element.
    pub fn resolve(
        &self,
        class: ElementClass,
        attr: &str,
        display: &mut DisplayContext<'_>,
        data: &dyn ElementData,
        index: usize,
    ) -> Option<AttrValue> {
        self.table(class)?
            .resolve(attr, display, data, index, &self.utils)
    }

    /// Resolves every attribute of one element.
    pub fn resolve_all(
        &self,
        class: ElementClass,
        display: &mut DisplayContext<'_>,
        data: &dyn ElementData,
        index: usize,
    ) -> ResolvedAttributes {
        match self.table(class) {
            Some(table) => table.resolve_all(display, data, index, &self.utils),
            None => ResolvedAttributes::default(),
        }
    }
}

fn check_orientations(value: &AttrValue) -> Result<(), ConfigurationError> {
    let codes: Vec<&str> = match value {
        AttrValue::List(codes) => codes.iter().map(String::as_str).collect(),
        AttrValue::Str(code) => vec![code.as_str()],
        other => {
            return Err(ConfigurationError::UnknownOrientation {
                code: format!("{:?}", other),
            })
        }
    };
    match codes.into_iter().find(|c| !ORIENTATIONS.contains(c)) {
        Some(code) => Err(ConfigurationError::UnknownOrientation {
            code: code.to_string(),
        }),
        None => Ok(()),
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::standard()
    }
}

static DEFAULT_STYLESHEET: Lazy<Stylesheet> = Lazy::new(Stylesheet::standard);

/// The process-wide stock stylesheet, built on first use.
pub fn default_stylesheet() -> &'static Stylesheet {
    &DEFAULT_STYLESHEET
}
