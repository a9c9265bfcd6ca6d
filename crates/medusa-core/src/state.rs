//! The configuration state machine behind the `xxxBy` setter API.
//!
//! Every setter validates its target dimension against the dataset, applies
//! the cascade clears that keep at most one of cluster/sort/plot active, and
//! records a warning instead of failing when validation rejects the request.

use indexmap::IndexMap;

use crate::Dataset;
use crate::options::{Filters, LayoutMode, PlotSetting, SortSetting, ViewOptions};

/// Current view configuration plus the construction-time snapshot that
/// [`ViewState::reset`] restores. Non-fatal validation failures accumulate
/// in `warnings` (and are also emitted through `tracing`).
#[derive(Debug, Clone)]
pub struct ViewState {
    initial: ViewOptions,
    current: ViewOptions,
    warnings: Vec<String>,
}

impl ViewState {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            initial: options.clone(),
            current: options,
            warnings: Vec::new(),
        }
    }

    pub fn options(&self) -> &ViewOptions {
        &self.current
    }

    /// Warnings accumulated since construction or the last [`reset`].
    ///
    /// [`reset`]: ViewState::reset
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Restores the configuration supplied at construction time.
    pub fn reset(&mut self) -> &mut Self {
        self.current = self.initial.clone();
        self.warnings.clear();
        self
    }

    pub fn label_by(&mut self, dataset: &Dataset, dim: Option<&str>) -> &mut Self {
        match dim {
            Some(d) => {
                if self.validate(dataset, d) {
                    self.current.label_by = Some(d.to_string());
                    self.current.display_image_by = None;
                }
            }
            None => self.current.label_by = None,
        }
        self
    }

    pub fn color_by(&mut self, dataset: &Dataset, dim: Option<&str>) -> &mut Self {
        match dim {
            Some(d) => {
                if self.validate(dataset, d) {
                    self.current.color_by = Some(d.to_string());
                    self.current.display_image_by = None;
                }
            }
            None => self.current.color_by = None,
        }
        self
    }

    pub fn size_by(&mut self, dataset: &Dataset, dim: Option<&str>) -> &mut Self {
        match dim {
            Some(d) => {
                if self.validate(dataset, d) {
                    self.current.size_by = Some(d.to_string());
                }
            }
            None => self.current.size_by = None,
        }
        self
    }

    /// Setting an image dimension suppresses color and label rendering.
    pub fn display_image_by(&mut self, dataset: &Dataset, dim: Option<&str>) -> &mut Self {
        match dim {
            Some(d) => {
                if self.validate(dataset, d) {
                    self.current.display_image_by = Some(d.to_string());
                    self.current.color_by = None;
                    self.current.label_by = None;
                }
            }
            None => self.current.display_image_by = None,
        }
        self
    }

    pub fn cluster_by(&mut self, dataset: &Dataset, dim: Option<&str>) -> &mut Self {
        match dim {
            Some(d) => {
                if self.validate(dataset, d) {
                    self.current.cluster_by = Some(d.to_string());
                    self.current.sort = None;
                    self.current.layout = LayoutMode::Cluster;
                }
            }
            None => {
                self.current.cluster_by = None;
                if self.current.layout == LayoutMode::Cluster {
                    self.current.layout = LayoutMode::Default;
                }
            }
        }
        self
    }

    pub fn sort_by(&mut self, dataset: &Dataset, setting: Option<SortSetting>) -> &mut Self {
        match setting {
            Some(s) => {
                if self.validate(dataset, &s.dim) {
                    self.current.sort = Some(s);
                    self.current.cluster_by = None;
                    self.current.layout = LayoutMode::Sort;
                }
            }
            None => {
                self.current.sort = None;
                if self.current.layout == LayoutMode::Sort {
                    self.current.layout = LayoutMode::Default;
                }
            }
        }
        self
    }

    /// Both axis dimensions must exist and hold numeric values (checked, as
    /// all dimension validation is, against the first record). On rejection
    /// the prior layout stays active.
    pub fn plot_by(&mut self, dataset: &Dataset, setting: Option<PlotSetting>) -> &mut Self {
        match setting {
            Some(s) => {
                let valid = self.validate_numeric(dataset, &s.x.dim)
                    && self.validate_numeric(dataset, &s.y.dim);
                if valid {
                    self.current.plot = Some(s);
                    self.current.layout = LayoutMode::Plot;
                }
            }
            None => {
                self.current.plot = None;
                if self.current.layout == LayoutMode::Plot {
                    self.current.layout = LayoutMode::Default;
                }
            }
        }
        self
    }

    /// Invalid dimension keys are dropped from the map; an empty result
    /// clears the filters entirely ("no filter", not "filter everything").
    pub fn filter_by(&mut self, dataset: &Dataset, filters: Filters) -> &mut Self {
        let mut sanitized: Filters = IndexMap::new();
        for (dim, values) in filters {
            if self.validate(dataset, &dim) {
                sanitized.insert(dim, values);
            }
        }
        self.current.filters = if sanitized.is_empty() {
            None
        } else {
            Some(sanitized)
        };
        self
    }

    fn validate(&mut self, dataset: &Dataset, dim: &str) -> bool {
        if dataset.has_dimension(dim) {
            return true;
        }
        self.warn(format!(
            "{dim} is not a valid dimension; the call takes no effect"
        ));
        false
    }

    fn validate_numeric(&mut self, dataset: &Dataset, dim: &str) -> bool {
        if !self.validate(dataset, dim) {
            return false;
        }
        if dataset.is_numeric_dimension(dim) {
            return true;
        }
        self.warn(format!(
            "{dim} does not hold numeric values; the plot binding is rejected"
        ));
        false
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}
