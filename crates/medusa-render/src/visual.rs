//! Visual-attribute resolution: per-record color, image URL and label.
//!
//! Orthogonal to layout: resolved over the whole dataset (not just visible
//! records) so a record keeps its category color while filtered out.

use indexmap::IndexMap;
use medusa_core::{Dataset, ViewOptions};
use rustc_hash::FxHashMap;

use crate::model::VisualProperty;

/// Fill used when no color dimension is bound (and for image circles).
pub const DEFAULT_COLOR: &str = "#eee";

/// The 12-color categorical palette (ColorBrewer Set3).
const PALETTE: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

/// Assigns palette colors to category values in first-occurrence order,
/// cycling once the palette is exhausted.
#[derive(Debug, Clone, Default)]
pub struct CategoricalColors {
    mapping: FxHashMap<String, usize>,
    next: usize,
}

impl CategoricalColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_for(&mut self, value: &str) -> String {
        if let Some(idx) = self.mapping.get(value).copied() {
            return PALETTE[idx % PALETTE.len()].to_string();
        }
        let idx = self.next;
        self.next += 1;
        self.mapping.insert(value.to_string(), idx);
        PALETTE[idx % PALETTE.len()].to_string()
    }
}

/// Resolves color/image/label for every record under the current bindings.
/// An active image binding suppresses both color and label.
pub fn resolve_visuals(dataset: &Dataset, options: &ViewOptions) -> IndexMap<String, VisualProperty> {
    let mut colors = CategoricalColors::new();
    let mut out = IndexMap::with_capacity(dataset.len());

    for record in dataset.records() {
        let property = if let Some(dim) = options.display_image_by.as_deref() {
            VisualProperty {
                color: DEFAULT_COLOR.to_string(),
                img_url: record.get(dim).map(|v| v.to_string()),
                label: None,
            }
        } else {
            let color = match options.color_by.as_deref() {
                Some(dim) => record
                    .get(dim)
                    .map(|v| colors.color_for(&v.to_string()))
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                None => DEFAULT_COLOR.to_string(),
            };
            VisualProperty {
                color,
                img_url: None,
                label: options
                    .label_by
                    .as_deref()
                    .and_then(|dim| record.get(dim))
                    .map(|v| v.to_string()),
            }
        };
        out.insert(record.id.clone(), property);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_assign_in_first_occurrence_order_and_cycle() {
        let mut colors = CategoricalColors::new();
        assert_eq!(colors.color_for("a"), PALETTE[0]);
        assert_eq!(colors.color_for("b"), PALETTE[1]);
        assert_eq!(colors.color_for("a"), PALETTE[0]);
        for i in 2..12 {
            colors.color_for(&format!("v{i}"));
        }
        // The 13th distinct value wraps around to the first palette entry.
        assert_eq!(colors.color_for("v12"), PALETTE[0]);
    }
}
