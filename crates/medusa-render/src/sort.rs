//! The sort layout: packed radii re-arranged into a ranked horizontal strip.

use std::cmp::Ordering;

use medusa_core::{Dataset, DimValue, SortOrder, ViewOptions};

use crate::model::{LayoutView, SortLabel};
use crate::packed;

/// Gap between neighbouring circles in the strip, and the strip's left inset.
const STRIP_GAP: f64 = 10.0;

pub fn layout_sort(
    dataset: &Dataset,
    options: &ViewOptions,
    width: f64,
    height: f64,
) -> LayoutView {
    let mut view = packed::layout_packed(dataset, options, width, height);
    let Some(setting) = &options.sort else {
        return view;
    };

    // Visible records in dataset order; the stable sort keeps that order for
    // ties. Records missing the sort dimension rank after present values.
    let mut entries: Vec<(&str, Option<&DimValue>)> = dataset
        .records()
        .iter()
        .filter(|r| view.properties.get(&r.id).is_some_and(|p| p.display))
        .map(|r| (r.id.as_str(), r.get(&setting.dim)))
        .collect();
    entries.sort_by(|(_, a), (_, b)| {
        let ordering = match (a, b) {
            (Some(a), Some(b)) => a.total_cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match setting.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let mut offset = STRIP_GAP;
    for (id, value) in entries {
        let property = view
            .properties
            .get_mut(id)
            .expect("visible record has a property entry");
        property.x = offset + property.r;
        property.y = height / 2.0;
        view.decorations.sort_labels.push(SortLabel {
            id: id.to_string(),
            x: property.x,
            y: height / 2.0 + property.r + 20.0,
            width: property.r * 2.0,
            label: value.map(|v| v.to_string()).unwrap_or_default(),
        });
        offset += 2.0 * property.r + STRIP_GAP;
    }

    view
}
