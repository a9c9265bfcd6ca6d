//! Output model: per-record geometry, visual attributes, and the transient
//! per-render decorations.

use indexmap::IndexMap;
use serde::Serialize;

/// Per-record geometry. `display: false` marks a record filtered out of the
/// current view; it keeps its entry (and its last geometry) but renders with
/// an effective radius of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutProperty {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub display: bool,
}

/// Per-record visual attributes, computed independently of layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualProperty {
    pub color: String,
    pub img_url: Option<String>,
    pub label: Option<String>,
}

/// The merged render-property table entry handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleProperty {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub display: bool,
    pub color: String,
    pub img_url: Option<String>,
    pub label: Option<String>,
}

/// The enclosing ring drawn around one cluster, labelled above the ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRing {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// The per-record caption drawn under a circle in the sorted strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortLabel {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One tick: the pixel offset along the axis and its caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// A plot axis. `position` is the fixed pixel coordinate of the axis line
/// (y for a bottom axis, x for a left axis); `start`/`end` span it along the
/// other dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub position: f64,
    pub start: f64,
    pub end: f64,
    pub ticks: Vec<AxisTick>,
}

/// Layout-specific auxiliary visuals. Rebuilt from scratch on every render;
/// never persisted in the per-record table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Decorations {
    pub cluster_rings: Vec<ClusterRing>,
    pub sort_labels: Vec<SortLabel>,
    pub axes: Vec<Axis>,
}

/// Result of one layout pass: geometry per record (in dataset order) plus
/// decorations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutView {
    pub properties: IndexMap<String, LayoutProperty>,
    pub decorations: Decorations,
}

/// One fully-rendered view: the merged property table and the decorations,
/// with the canvas dimensions they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub circles: IndexMap<String, CircleProperty>,
    pub decorations: Decorations,
}
