use indexmap::IndexMap;
use medusa_core::{Dataset, Record, ViewOptions};
use medusa_render::cluster::layout_cluster;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("a").with("v", 10.0).with("sector", "fintech"),
        Record::new("b").with("v", 20.0).with("sector", "ai"),
        Record::new("c").with("v", 30.0).with("sector", "ai"),
        Record::new("d").with("v", 5.0).with("sector", "bio"),
    ])
    .unwrap()
}

fn options() -> ViewOptions {
    ViewOptions {
        size_by: Some("v".to_string()),
        cluster_by: Some("sector".to_string()),
        ..ViewOptions::default()
    }
}

#[test]
fn cluster_emits_one_ring_per_distinct_value_in_first_occurrence_order() {
    let view = layout_cluster(&dataset(), &options(), WIDTH, HEIGHT);
    let labels: Vec<&str> = view
        .decorations
        .cluster_rings
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(labels, vec!["fintech", "ai", "bio"]);
}

#[test]
fn cluster_rings_contain_their_members() {
    let view = layout_cluster(&dataset(), &options(), WIDTH, HEIGHT);
    let members: [(&str, &[&str]); 3] =
        [("fintech", &["a"]), ("ai", &["b", "c"]), ("bio", &["d"])];
    for (label, ids) in members {
        let ring = view
            .decorations
            .cluster_rings
            .iter()
            .find(|r| r.label == label)
            .unwrap();
        for id in ids {
            let p = &view.properties[*id];
            let d = ((p.x - ring.x).powi(2) + (p.y - ring.y).powi(2)).sqrt();
            assert!(
                d + p.r <= ring.r + 1e-6,
                "record {id} escapes ring {label}"
            );
        }
    }
}

#[test]
fn cluster_sibling_rings_do_not_overlap() {
    let view = layout_cluster(&dataset(), &options(), WIDTH, HEIGHT);
    let rings = &view.decorations.cluster_rings;
    for i in 0..rings.len() {
        for j in i + 1..rings.len() {
            let (a, b) = (&rings[i], &rings[j]);
            let d = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            assert!(d + 1e-6 >= a.r + b.r, "rings {i} and {j} overlap");
        }
    }
}

#[test]
fn cluster_missing_values_group_together() {
    let ds = Dataset::new(vec![
        Record::new("a").with("v", 10.0).with("sector", "ai"),
        Record::new("b").with("v", 20.0),
        Record::new("c").with("v", 30.0),
    ])
    .unwrap();
    let view = layout_cluster(&ds, &options(), WIDTH, HEIGHT);
    let labels: Vec<&str> = view
        .decorations
        .cluster_rings
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(labels, vec!["ai", "null"]);
}

#[test]
fn cluster_filtered_records_do_not_join_groups() {
    let mut filters: IndexMap<String, Vec<medusa_core::DimValue>> = IndexMap::new();
    filters.insert("sector".to_string(), vec!["ai".into()]);
    let opts = ViewOptions {
        filters: Some(filters),
        ..options()
    };
    let view = layout_cluster(&dataset(), &opts, WIDTH, HEIGHT);
    assert_eq!(view.decorations.cluster_rings.len(), 1);
    assert_eq!(view.decorations.cluster_rings[0].label, "ai");
    assert!(!view.properties["a"].display);
    assert!(!view.properties["d"].display);
}

#[test]
fn cluster_without_a_binding_degenerates_to_a_flat_pack() {
    let opts = ViewOptions {
        cluster_by: None,
        ..options()
    };
    let view = layout_cluster(&dataset(), &opts, WIDTH, HEIGHT);
    assert!(view.decorations.cluster_rings.is_empty());
    assert!(view.properties.values().all(|p| p.display));
}

#[test]
fn cluster_numeric_group_keys_use_their_display_form() {
    let ds = Dataset::new(vec![
        Record::new("a").with("stage", 1.0),
        Record::new("b").with("stage", 2.0),
        Record::new("c").with("stage", 1.0),
    ])
    .unwrap();
    let opts = ViewOptions {
        cluster_by: Some("stage".to_string()),
        ..ViewOptions::default()
    };
    let view = layout_cluster(&ds, &opts, WIDTH, HEIGHT);
    let labels: Vec<&str> = view
        .decorations
        .cluster_rings
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(labels, vec!["1", "2"]);
}
