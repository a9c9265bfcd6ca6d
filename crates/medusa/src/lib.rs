#![forbid(unsafe_code)]

//! `medusa` is a headless bubble-chart engine.
//!
//! Records go in; circle geometry, visual attributes and per-render
//! decorations come out. Rendering (DOM, canvas, animation) stays with the
//! consumer: the engine hands over a [`Frame`] (one property entry per
//! record ever seen, plus decorations rebuilt each render) and the bundled
//! SVG emitter shows what a renderer is expected to do with it.
//!
//! ```
//! use medusa::{Chart, Record, ViewOptions};
//!
//! let records = vec![
//!     Record::new("a").with("v", 10.0),
//!     Record::new("b").with("v", 20.0),
//!     Record::new("c").with("v", 30.0),
//! ];
//! let mut chart = Chart::new(records, ViewOptions::default(), 800.0, 600.0).unwrap();
//! let frame = chart.size_by(Some("v")).render().unwrap();
//! assert!(frame.circles["c"].r > frame.circles["a"].r);
//! ```

pub use medusa_core::*;

pub use medusa_render::model::{
    Axis, AxisOrientation, AxisTick, CircleProperty, ClusterRing, Decorations, Frame,
    LayoutProperty, SortLabel, VisualProperty,
};
pub use medusa_render::svg::{SvgRenderOptions, render_frame_svg};
pub use medusa_render::visual::DEFAULT_COLOR;

use indexmap::IndexMap;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] medusa_core::Error),
    #[error(transparent)]
    Layout(#[from] medusa_render::Error),
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// The orchestrator: dataset + configuration + the persistent per-record
/// property table.
///
/// Setters validate their dimension against the dataset and chain; `render`
/// evaluates the current configuration into a [`Frame`]. Entries in the
/// property table are created once per record and never removed: a record
/// filtered out of the view keeps its last computed geometry with
/// `display: false` and renders at radius zero.
#[derive(Debug, Clone)]
pub struct Chart {
    dataset: Dataset,
    state: ViewState,
    width: f64,
    height: f64,
    circles: IndexMap<String, CircleProperty>,
}

impl Chart {
    pub fn new(
        records: Vec<Record>,
        options: ViewOptions,
        width: f64,
        height: f64,
    ) -> ChartResult<Self> {
        let dataset = Dataset::new(records)?;
        let mut circles = IndexMap::with_capacity(dataset.len());
        for record in dataset.records() {
            circles.insert(
                record.id.clone(),
                CircleProperty {
                    x: width / 2.0,
                    y: height / 2.0,
                    r: 0.0,
                    display: true,
                    color: DEFAULT_COLOR.to_string(),
                    img_url: None,
                    label: None,
                },
            );
        }
        Ok(Self {
            dataset,
            state: ViewState::new(options),
            width,
            height,
            circles,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &ViewOptions {
        self.state.options()
    }

    /// Validation warnings accumulated since construction or the last
    /// [`reset`](Chart::reset).
    pub fn warnings(&self) -> &[String] {
        self.state.warnings()
    }

    pub fn update_dimensions(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn label_by(&mut self, dim: Option<&str>) -> &mut Self {
        self.state.label_by(&self.dataset, dim);
        self
    }

    pub fn color_by(&mut self, dim: Option<&str>) -> &mut Self {
        self.state.color_by(&self.dataset, dim);
        self
    }

    pub fn size_by(&mut self, dim: Option<&str>) -> &mut Self {
        self.state.size_by(&self.dataset, dim);
        self
    }

    pub fn cluster_by(&mut self, dim: Option<&str>) -> &mut Self {
        self.state.cluster_by(&self.dataset, dim);
        self
    }

    pub fn sort_by(&mut self, setting: Option<SortSetting>) -> &mut Self {
        self.state.sort_by(&self.dataset, setting);
        self
    }

    pub fn plot_by(&mut self, setting: Option<PlotSetting>) -> &mut Self {
        self.state.plot_by(&self.dataset, setting);
        self
    }

    pub fn display_image_by(&mut self, dim: Option<&str>) -> &mut Self {
        self.state.display_image_by(&self.dataset, dim);
        self
    }

    pub fn filter_by(&mut self, filters: Filters) -> &mut Self {
        self.state.filter_by(&self.dataset, filters);
        self
    }

    /// Restores the configuration supplied at construction time.
    pub fn reset(&mut self) -> &mut Self {
        self.state.reset();
        self
    }

    /// Evaluates the current configuration into a [`Frame`].
    ///
    /// Idempotent: with no configuration change in between, repeated calls
    /// return identical frames. The only failure mode is a plot render over
    /// a visible set with no numeric axis values.
    pub fn render(&mut self) -> ChartResult<Frame> {
        // Strategies get an immutable snapshot; setters during a render are
        // impossible by construction (&mut self).
        let options = self.state.options().clone();
        let view = medusa_render::layout_view(&self.dataset, &options, self.width, self.height)?;
        let visuals = medusa_render::visual::resolve_visuals(&self.dataset, &options);

        for record in self.dataset.records() {
            let entry = self
                .circles
                .get_mut(&record.id)
                .expect("every record has a property entry");
            if let Some(layout) = view.properties.get(&record.id) {
                if layout.display {
                    entry.x = layout.x;
                    entry.y = layout.y;
                    entry.r = layout.r;
                }
                // Hidden records keep their last geometry frozen.
                entry.display = layout.display;
            }
            if let Some(visual) = visuals.get(&record.id) {
                entry.color = visual.color.clone();
                entry.img_url = visual.img_url.clone();
                entry.label = visual.label.clone();
            }
        }

        Ok(Frame {
            width: self.width,
            height: self.height,
            circles: self.circles.clone(),
            decorations: view.decorations,
        })
    }

    /// Renders the current configuration straight to SVG.
    pub fn render_svg(&mut self, options: &SvgRenderOptions) -> ChartResult<String> {
        let frame = self.render()?;
        Ok(render_frame_svg(&frame, options))
    }
}
