//! The plot layout: packed radii re-positioned on two numeric scales.

use medusa_core::{AxisSetting, Dataset, DimValue, Record, SortOrder, ViewOptions};

use crate::model::{Axis, AxisOrientation, AxisTick, LayoutView};
use crate::scale::LinearScale;
use crate::{Error, Result, packed};

/// Inset between the canvas edge and the axis lines.
const AXIS_PADDING: f64 = 40.0;

const TICK_COUNT: usize = 10;

pub fn layout_plot(
    dataset: &Dataset,
    options: &ViewOptions,
    width: f64,
    height: f64,
) -> Result<LayoutView> {
    let mut view = packed::layout_packed(dataset, options, width, height);
    let Some(setting) = &options.plot else {
        return Ok(view);
    };

    let visible: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| view.properties.get(&r.id).is_some_and(|p| p.display))
        .collect();

    let x_scale = axis_scale(&visible, &setting.x, (AXIS_PADDING, width - AXIS_PADDING))?;
    let y_scale = axis_scale(&visible, &setting.y, (height - AXIS_PADDING, AXIS_PADDING))?;

    for record in &visible {
        let x_value = record.get(&setting.x.dim).and_then(DimValue::as_number);
        let y_value = record.get(&setting.y.dim).and_then(DimValue::as_number);
        let (Some(xv), Some(yv)) = (x_value, y_value) else {
            // A record can pass first-record validation yet miss a value;
            // it keeps its packed position.
            continue;
        };
        let property = view
            .properties
            .get_mut(&record.id)
            .expect("visible record has a property entry");
        property.x = x_scale.scale(xv);
        property.y = y_scale.scale(yv);
        if let Some(size) = &setting.size {
            property.r = size(record);
        }
    }

    view.decorations.axes = vec![
        axis(
            AxisOrientation::Bottom,
            height - AXIS_PADDING,
            AXIS_PADDING,
            width - AXIS_PADDING,
            &x_scale,
        ),
        axis(
            AxisOrientation::Left,
            AXIS_PADDING,
            AXIS_PADDING,
            height - AXIS_PADDING,
            &y_scale,
        ),
    ];

    Ok(view)
}

/// Builds the scale for one axis over the visible records' numeric values.
/// An empty value set is a hard error rather than a NaN domain.
fn axis_scale(
    visible: &[&Record],
    setting: &AxisSetting,
    range: (f64, f64),
) -> Result<LinearScale> {
    let values: Vec<f64> = visible
        .iter()
        .filter_map(|r| r.get(&setting.dim).and_then(DimValue::as_number))
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return Err(Error::EmptyScaleDomain {
            dim: setting.dim.clone(),
        });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let domain = match setting.order {
        SortOrder::Asc => (min, max),
        SortOrder::Desc => (max, min),
    };
    Ok(LinearScale::new(domain, range))
}

fn axis(
    orientation: AxisOrientation,
    position: f64,
    start: f64,
    end: f64,
    scale: &LinearScale,
) -> Axis {
    let ticks = scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick {
            offset: scale.scale(value),
            label: tick_label(value),
        })
        .collect();
    Axis {
        orientation,
        position,
        start,
        end,
        ticks,
    }
}

fn tick_label(value: f64) -> String {
    DimValue::Number(value).to_string()
}
