//! The default layout: one flat packing of every visible record.

use indexmap::IndexMap;
use medusa_core::{Dataset, Record, ViewOptions};
use polyp::{Hierarchy, Pack};

use crate::PACK_PADDING;
use crate::model::{Decorations, LayoutProperty, LayoutView};

pub fn layout_packed(
    dataset: &Dataset,
    options: &ViewOptions,
    width: f64,
    height: f64,
) -> LayoutView {
    LayoutView {
        properties: packed_properties(dataset, options, width, height),
        decorations: Decorations::default(),
    }
}

/// Packs the post-filter survivors, sized by the bound size dimension
/// (uniform weight 1 otherwise). Filtered-out records keep a centered,
/// zero-radius property with `display: false`.
pub(crate) fn packed_properties(
    dataset: &Dataset,
    options: &ViewOptions,
    width: f64,
    height: f64,
) -> IndexMap<String, LayoutProperty> {
    let mut properties = IndexMap::with_capacity(dataset.len());
    let mut survivors: Vec<&Record> = Vec::new();
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
            survivors.push(record);
        }
    }

    let mut hierarchy = Hierarchy::new();
    for record in &survivors {
        hierarchy.add_child(Hierarchy::ROOT, options.size_weight(record));
    }
    hierarchy.sum();
    Pack::new()
        .size(width, height)
        .padding(PACK_PADDING)
        .layout(&mut hierarchy);

    let leaves = hierarchy.children(Hierarchy::ROOT).to_vec();
    for (record, leaf) in survivors.iter().zip(leaves) {
        let circle = hierarchy.circle(leaf);
        let property = properties
            .get_mut(&record.id)
            .expect("survivor has a property entry");
        property.x = circle.x;
        property.y = circle.y;
        property.r = circle.r;
    }

    properties
}
