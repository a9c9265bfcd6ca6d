use std::sync::Arc;

use indexmap::IndexMap;
use medusa_core::{
    AxisSetting, Dataset, PlotSetting, Record, SortOrder, ViewOptions,
};
use medusa_render::model::AxisOrientation;
use medusa_render::plot::layout_plot;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("a").with("x", 1.0).with("y", 100.0).with("sector", "fintech"),
        Record::new("b").with("x", 5.0).with("y", 50.0).with("sector", "ai"),
        Record::new("c").with("x", 9.0).with("y", 10.0).with("sector", "ai"),
    ])
    .unwrap()
}

fn axis(dim: &str, order: SortOrder) -> AxisSetting {
    AxisSetting {
        dim: dim.to_string(),
        order,
    }
}

fn options(x_order: SortOrder, y_order: SortOrder) -> ViewOptions {
    ViewOptions {
        plot: Some(PlotSetting::new(axis("x", x_order), axis("y", y_order))),
        ..ViewOptions::default()
    }
}

#[test]
fn plot_ascending_maps_min_to_left_and_bottom() {
    let view = layout_plot(&dataset(), &options(SortOrder::Asc, SortOrder::Asc), WIDTH, HEIGHT)
        .unwrap();
    let p = &view.properties;

    // x: 1 -> 40, 9 -> 760; y: 10 -> bottom (560), 100 -> top (40).
    assert!((p["a"].x - 40.0).abs() < 1e-9);
    assert!((p["c"].x - (WIDTH - 40.0)).abs() < 1e-9);
    assert!((p["a"].y - 40.0).abs() < 1e-9);
    assert!((p["c"].y - (HEIGHT - 40.0)).abs() < 1e-9);
    assert!(p["b"].x > p["a"].x && p["b"].x < p["c"].x);
}

#[test]
fn plot_descending_reverses_the_axes() {
    let view = layout_plot(&dataset(), &options(SortOrder::Desc, SortOrder::Desc), WIDTH, HEIGHT)
        .unwrap();
    let p = &view.properties;
    assert!((p["a"].x - (WIDTH - 40.0)).abs() < 1e-9);
    assert!((p["c"].x - 40.0).abs() < 1e-9);
    assert!((p["a"].y - (HEIGHT - 40.0)).abs() < 1e-9);
    assert!((p["c"].y - 40.0).abs() < 1e-9);
}

#[test]
fn plot_keeps_packed_radii_and_visibility() {
    let sized = ViewOptions {
        size_by: Some("y".to_string()),
        ..options(SortOrder::Asc, SortOrder::Asc)
    };
    let view = layout_plot(&dataset(), &sized, WIDTH, HEIGHT).unwrap();
    let p = &view.properties;
    assert!(p["a"].r > p["b"].r && p["b"].r > p["c"].r);
    assert!(p.values().all(|prop| prop.display));
}

#[test]
fn plot_size_override_replaces_the_packed_radius() {
    let mut opts = options(SortOrder::Asc, SortOrder::Asc);
    let setting = opts.plot.take().unwrap();
    opts.plot = Some(setting.with_size(Arc::new(|_| 7.5)));

    let view = layout_plot(&dataset(), &opts, WIDTH, HEIGHT).unwrap();
    assert!(view.properties.values().all(|p| p.r == 7.5));
}

#[test]
fn plot_emits_bottom_and_left_axes_with_ticks() {
    let view = layout_plot(&dataset(), &options(SortOrder::Asc, SortOrder::Asc), WIDTH, HEIGHT)
        .unwrap();
    let axes = &view.decorations.axes;
    assert_eq!(axes.len(), 2);

    let bottom = axes
        .iter()
        .find(|a| a.orientation == AxisOrientation::Bottom)
        .unwrap();
    assert_eq!(bottom.position, HEIGHT - 40.0);
    assert!(!bottom.ticks.is_empty());
    for tick in &bottom.ticks {
        assert!(tick.offset >= 40.0 - 1e-9 && tick.offset <= WIDTH - 40.0 + 1e-9);
    }

    let left = axes
        .iter()
        .find(|a| a.orientation == AxisOrientation::Left)
        .unwrap();
    assert_eq!(left.position, 40.0);
    for tick in &left.ticks {
        assert!(tick.offset >= 40.0 - 1e-9 && tick.offset <= HEIGHT - 40.0 + 1e-9);
    }
}

#[test]
fn plot_with_no_visible_records_is_an_error() {
    let mut filters: IndexMap<String, Vec<medusa_core::DimValue>> = IndexMap::new();
    filters.insert("sector".to_string(), vec!["nothing".into()]);
    let opts = ViewOptions {
        filters: Some(filters),
        ..options(SortOrder::Asc, SortOrder::Asc)
    };
    let err = layout_plot(&dataset(), &opts, WIDTH, HEIGHT).unwrap_err();
    assert!(err.to_string().contains("no numeric values"));
}

#[test]
fn plot_records_missing_an_axis_value_keep_their_packed_position() {
    let ds = Dataset::new(vec![
        Record::new("a").with("x", 1.0).with("y", 2.0),
        Record::new("b").with("x", 3.0).with("y", 4.0),
        Record::new("sparse").with("x", 5.0),
    ])
    .unwrap();
    let packed = medusa_render::packed::layout_packed(
        &ds,
        &options(SortOrder::Asc, SortOrder::Asc),
        WIDTH,
        HEIGHT,
    );
    let view = layout_plot(&ds, &options(SortOrder::Asc, SortOrder::Asc), WIDTH, HEIGHT).unwrap();

    let before = &packed.properties["sparse"];
    let after = &view.properties["sparse"];
    assert_eq!((before.x, before.y, before.r), (after.x, after.y, after.r));
    assert!(after.display);
}

#[test]
fn plot_without_a_setting_returns_the_packed_layout() {
    let opts = ViewOptions::default();
    let view = layout_plot(&dataset(), &opts, WIDTH, HEIGHT).unwrap();
    assert!(view.decorations.axes.is_empty());
}
