//! The view configuration value object.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::{DimValue, Record};

/// The active geometry algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Default,
    Cluster,
    Sort,
    Plot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Binding of the sorted-strip layout: which dimension to rank by, and in
/// which direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSetting {
    pub dim: String,
    pub order: SortOrder,
}

/// One scatter-plot axis binding. `order: Desc` flips the axis direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSetting {
    pub dim: String,
    pub order: SortOrder,
}

/// Caller-supplied radius override used by the plot layout.
pub type SizeFn = Arc<dyn Fn(&Record) -> f64 + Send + Sync>;

/// Scatter-plot binding: two numeric axes and an optional per-record size
/// override.
#[derive(Clone, Serialize, Deserialize)]
pub struct PlotSetting {
    pub x: AxisSetting,
    pub y: AxisSetting,
    #[serde(skip)]
    pub size: Option<SizeFn>,
}

impl PlotSetting {
    pub fn new(x: AxisSetting, y: AxisSetting) -> Self {
        Self { x, y, size: None }
    }

    pub fn with_size(mut self, size: SizeFn) -> Self {
        self.size = Some(size);
        self
    }
}

impl fmt::Debug for PlotSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotSetting")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("size", &self.size.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Per-dimension allow-lists. A record passes iff, for every dimension in
/// the map, its value is a member of that dimension's allowed set.
pub type Filters = IndexMap<String, Vec<DimValue>>;

/// All dimension bindings driving one rendered view. Mutate only through the
/// named setters on [`crate::ViewState`], which validate dimensions and
/// apply the cascade clears; strategies receive this as an immutable
/// snapshot per render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub layout: LayoutMode,
    pub label_by: Option<String>,
    pub display_image_by: Option<String>,
    pub color_by: Option<String>,
    pub size_by: Option<String>,
    pub cluster_by: Option<String>,
    pub sort: Option<SortSetting>,
    pub plot: Option<PlotSetting>,
    pub filters: Option<Filters>,
}

impl ViewOptions {
    /// Whether `record` passes the current filter set. Absent filters mean
    /// no restriction.
    pub fn record_passes_filters(&self, record: &Record) -> bool {
        let Some(filters) = &self.filters else {
            return true;
        };
        for (dim, allowed) in filters {
            let passes = record.get(dim).is_some_and(|v| allowed.contains(v));
            if !passes {
                return false;
            }
        }
        true
    }

    /// The packing weight of `record` under the current size binding.
    /// Records weigh 1 when no size dimension is bound.
    pub fn size_weight(&self, record: &Record) -> f64 {
        match &self.size_by {
            Some(dim) => record.get(dim).map(DimValue::weight).unwrap_or(0.0),
            None => 1.0,
        }
    }
}
