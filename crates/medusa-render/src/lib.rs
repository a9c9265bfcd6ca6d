#![forbid(unsafe_code)]

//! Headless layout + SVG rendering for the medusa bubble-chart engine.
//!
//! The entry point is [`layout_view`]: records plus an immutable
//! configuration snapshot in, per-record geometry plus per-render
//! decorations out. The four strategies share the packed layout as their
//! base; sort and plot delegate to it explicitly rather than inheriting.

pub mod cluster;
pub mod model;
pub mod packed;
pub mod plot;
pub mod scale;
pub mod sort;
pub mod svg;
pub mod visual;

use medusa_core::{Dataset, LayoutMode, ViewOptions};

use crate::model::LayoutView;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot scale the {dim} axis: no numeric values among visible records")]
    EmptyScaleDomain { dim: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Padding between sibling circles (and between cluster rings) in pixels.
pub const PACK_PADDING: f64 = 20.0;

/// Computes the layout for the active strategy.
///
/// Infallible for every mode except plot, which needs at least one visible
/// record with numeric values on both bound axes.
pub fn layout_view(
    dataset: &Dataset,
    options: &ViewOptions,
    width: f64,
    height: f64,
) -> Result<LayoutView> {
    match options.layout {
        LayoutMode::Default => Ok(packed::layout_packed(dataset, options, width, height)),
        LayoutMode::Cluster => Ok(cluster::layout_cluster(dataset, options, width, height)),
        LayoutMode::Sort => Ok(sort::layout_sort(dataset, options, width, height)),
        LayoutMode::Plot => plot::layout_plot(dataset, options, width, height),
    }
}
