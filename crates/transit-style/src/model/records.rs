//! Plain data implementations of the model traits.

use serde::Deserialize;

use super::{ElementData, Frequency, PatternInfo, Point, Segment, SegmentType};

/// A point with its classification flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointRecord {
    pub focused: bool,
    pub board: bool,
    pub alight: bool,
    pub transfer: bool,
    pub segment_end: bool,
    pub patterns: Vec<PatternInfo>,
}

impl Point for PointRecord {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn contains_board_point(&self) -> bool {
        self.board
    }

    fn contains_alight_point(&self) -> bool {
        self.alight
    }

    fn contains_transfer_point(&self) -> bool {
        self.transfer
    }

    fn contains_segment_end_point(&self) -> bool {
        self.segment_end
    }

    fn patterns(&self) -> &[PatternInfo] {
        &self.patterns
    }
}

impl ElementData for PointRecord {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn owner(&self) -> Option<&dyn Point> {
        Some(self)
    }
}

/// A stop marker. `owner` is missing while the point is still loading.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StopRecord {
    pub owner: Option<PointRecord>,
}

impl StopRecord {
    pub fn on(owner: PointRecord) -> Self {
        Self { owner: Some(owner) }
    }
}

impl ElementData for StopRecord {
    fn owner(&self) -> Option<&dyn Point> {
        self.owner.as_ref().map(|p| p as &dyn Point)
    }
}

/// A text label attached to a point.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelRecord {
    pub parent: Option<PointRecord>,
}

impl LabelRecord {
    pub fn for_point(parent: PointRecord) -> Self {
        Self {
            parent: Some(parent),
        }
    }
}

impl ElementData for LabelRecord {
    fn labeled_point(&self) -> Option<&dyn Point> {
        self.parent.as_ref().map(|p| p as &dyn Point)
    }
}

/// A path segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SegmentRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub focused: bool,
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    #[serde(default)]
    pub mode: Option<u16>,
    #[serde(default)]
    pub patterns: Vec<PatternInfo>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

impl SegmentRecord {
    pub fn new(id: impl Into<String>, segment_type: SegmentType) -> Self {
        Self {
            id: id.into(),
            focused: true,
            segment_type,
            mode: None,
            patterns: Vec::new(),
            frequency: None,
        }
    }
}

impl Segment for SegmentRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn segment_type(&self) -> SegmentType {
        self.segment_type.clone()
    }

    fn mode(&self) -> Option<u16> {
        self.mode
    }

    fn patterns(&self) -> &[PatternInfo] {
        &self.patterns
    }

    fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }
}

impl ElementData for SegmentRecord {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn as_segment(&self) -> Option<&dyn Segment> {
        Some(self)
    }
}

/// An element whose only styled property is its focus, e.g. a label container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FocusRecord {
    pub focused: bool,
}

impl ElementData for FocusRecord {
    fn is_focused(&self) -> bool {
        self.focused
    }
}
