//! The cluster layout: a two-level packing with one ring per group.

use indexmap::IndexMap;
use medusa_core::{Dataset, Record, ViewOptions};
use polyp::{Hierarchy, Pack};

use crate::PACK_PADDING;
use crate::model::{ClusterRing, Decorations, LayoutProperty, LayoutView};
use crate::packed;

/// Group key for a record: the raw attribute value, compared by its display
/// form. Records missing the cluster dimension fall into one `"null"` group.
fn group_key(record: &Record, dim: &str) -> String {
    record
        .get(dim)
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string())
}

pub fn layout_cluster(
    dataset: &Dataset,
    options: &ViewOptions,
    width: f64,
    height: f64,
) -> LayoutView {
    let Some(cluster_dim) = options.cluster_by.as_deref() else {
        // No binding: degenerate to the flat pack, no rings.
        return packed::layout_packed(dataset, options, width, height);
    };

    let mut properties = IndexMap::with_capacity(dataset.len());
    let mut groups: IndexMap<String, Vec<&Record>> = IndexMap::new();
    for record in dataset.records() {
        let passes = options.record_passes_filters(record);
        properties.insert(
            record.id.clone(),
            LayoutProperty {
                x: width / 2.0,
                y: height / 2.0,
                r: 0.0,
                display: passes,
            },
        );
        if passes {
            groups
                .entry(group_key(record, cluster_dim))
                .or_default()
                .push(record);
        }
    }

    // Root -> group -> leaf; groups keep first-occurrence order and sum
    // their members' weights.
    let mut hierarchy = Hierarchy::new();
    let mut group_nodes = Vec::with_capacity(groups.len());
    for members in groups.values() {
        let group = hierarchy.add_child(Hierarchy::ROOT, 0.0);
        group_nodes.push(group);
        for record in members {
            hierarchy.add_child(group, options.size_weight(record));
        }
    }
    hierarchy.sum();
    Pack::new()
        .size(width, height)
        .padding(PACK_PADDING)
        .layout(&mut hierarchy);

    let mut cluster_rings = Vec::with_capacity(groups.len());
    for ((key, members), group) in groups.iter().zip(group_nodes) {
        let ring = hierarchy.circle(group);
        cluster_rings.push(ClusterRing {
            label: key.clone(),
            x: ring.x,
            y: ring.y,
            r: ring.r,
        });
        let leaves = hierarchy.children(group).to_vec();
        for (record, leaf) in members.iter().zip(leaves) {
            let circle = hierarchy.circle(leaf);
            let property = properties
                .get_mut(&record.id)
                .expect("group member has a property entry");
            property.x = circle.x;
            property.y = circle.y;
            property.r = circle.r;
        }
    }

    LayoutView {
        properties,
        decorations: Decorations {
            cluster_rings,
            ..Decorations::default()
        },
    }
}
