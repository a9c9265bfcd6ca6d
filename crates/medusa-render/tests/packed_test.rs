use indexmap::IndexMap;
use medusa_core::{Dataset, Record, ViewOptions};
use medusa_render::packed::layout_packed;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("a").with("v", 10.0).with("sector", "fintech"),
        Record::new("b").with("v", 20.0).with("sector", "ai"),
        Record::new("c").with("v", 30.0).with("sector", "ai"),
    ])
    .unwrap()
}

fn size_by_v() -> ViewOptions {
    ViewOptions {
        size_by: Some("v".to_string()),
        ..ViewOptions::default()
    }
}

#[test]
fn packed_radii_follow_the_size_dimension() {
    let view = layout_packed(&dataset(), &size_by_v(), WIDTH, HEIGHT);
    let p = &view.properties;
    assert!(p["a"].r < p["b"].r);
    assert!(p["b"].r < p["c"].r);
    assert!(p["a"].r > 0.0);
}

#[test]
fn packed_circles_do_not_overlap_and_stay_on_canvas() {
    let view = layout_packed(&dataset(), &size_by_v(), WIDTH, HEIGHT);
    let circles: Vec<_> = view.properties.values().collect();
    for i in 0..circles.len() {
        for j in i + 1..circles.len() {
            let (a, b) = (circles[i], circles[j]);
            let d = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            assert!(d + 1e-6 >= a.r + b.r, "circles {i} and {j} overlap");
        }
    }
    for c in circles {
        assert!(c.x - c.r >= -1e-6 && c.x + c.r <= WIDTH + 1e-6);
        assert!(c.y - c.r >= -1e-6 && c.y + c.r <= HEIGHT + 1e-6);
    }
}

#[test]
fn packed_uses_uniform_weights_without_a_size_binding() {
    let view = layout_packed(&dataset(), &ViewOptions::default(), WIDTH, HEIGHT);
    let radii: Vec<f64> = view.properties.values().map(|p| p.r).collect();
    assert!(radii.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-9));
}

#[test]
fn packed_filters_hide_records_without_removing_them() {
    let mut filters: IndexMap<String, Vec<medusa_core::DimValue>> = IndexMap::new();
    filters.insert("sector".to_string(), vec!["ai".into()]);
    let options = ViewOptions {
        filters: Some(filters),
        ..size_by_v()
    };

    let view = layout_packed(&dataset(), &options, WIDTH, HEIGHT);
    assert_eq!(view.properties.len(), 3);
    assert!(!view.properties["a"].display);
    assert!(view.properties["b"].display);
    assert!(view.properties["c"].display);

    // The hidden record keeps a stable centered entry with zero radius.
    let hidden = &view.properties["a"];
    assert_eq!((hidden.x, hidden.y, hidden.r), (WIDTH / 2.0, HEIGHT / 2.0, 0.0));
}

#[test]
fn packed_is_deterministic() {
    let first = layout_packed(&dataset(), &size_by_v(), WIDTH, HEIGHT);
    let second = layout_packed(&dataset(), &size_by_v(), WIDTH, HEIGHT);
    assert_eq!(first.properties, second.properties);
}

#[test]
fn packed_empty_dataset_yields_an_empty_table() {
    let view = layout_packed(&Dataset::default(), &ViewOptions::default(), WIDTH, HEIGHT);
    assert!(view.properties.is_empty());
    assert_eq!(view.decorations, Default::default());
}

#[test]
fn packed_zero_weight_records_get_zero_radius_positions() {
    let ds = Dataset::new(vec![
        Record::new("a").with("v", 0.0),
        Record::new("b").with("v", 25.0),
    ])
    .unwrap();
    let view = layout_packed(&ds, &size_by_v(), WIDTH, HEIGHT);
    assert_eq!(view.properties["a"].r, 0.0);
    assert!(view.properties["a"].x.is_finite());
    assert!(view.properties["b"].r > 0.0);
}
