use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::core::scale::LinearScale;
use crate::core::text::format_value;
use crate::error::{ChartError, ChartResult};

/// Plot insets reserving room for the y tick labels and the x axis.
pub const INSET_LEFT_PX: f64 = 42.0;
pub const INSET_RIGHT_PX: f64 = 12.0;
pub const INSET_TOP_PX: f64 = 12.0;
pub const INSET_BOTTOM_PX: f64 = 22.0;

/// Maximum number of y tick labels (and matching gridlines).
pub const MAX_TICKS: usize = 5;

/// Radius of point markers.
pub const MARKER_RADIUS_PX: f64 = 3.0;

/// One plotted sample in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// One y-axis tick label with its gridline row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub text: String,
    pub value: f64,
    pub y: f64,
}

/// Full line chart layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub logical_width: f64,
    pub logical_height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub points: Vec<PlotPoint>,
    pub ticks: Vec<TickLabel>,
    /// Closed polygon under the line, down to the plot baseline.
    pub area: Vec<(f64, f64)>,
}

/// Lays out a Cartesian line plot over index → value.
///
/// Returns `Ok(None)` when the dataset is empty or no value is positive
/// ("nothing drawn"). The y-domain is `[min(values), max(values)]`; a
/// degenerate domain (all samples equal) falls back to a range of
/// `max(value, 1)` so no mapping divides by zero. A single sample produces
/// exactly one marker.
pub fn layout_line(
    dataset: &Dataset,
    logical_width: f64,
    logical_height: f64,
) -> ChartResult<Option<LineLayout>> {
    dataset.validate()?;
    if !logical_width.is_finite()
        || !logical_height.is_finite()
        || logical_width <= 0.0
        || logical_height <= 0.0
    {
        return Err(ChartError::InvalidData(
            "line surface size must be finite and > 0".to_owned(),
        ));
    }

    let values = dataset.values();
    if values.iter().all(|v| *v <= 0.0) {
        return Ok(None);
    }

    let min = values
        .iter()
        .copied()
        .min_by_key(|v| OrderedFloat(*v))
        .unwrap_or(0.0);
    let max = values
        .iter()
        .copied()
        .max_by_key(|v| OrderedFloat(*v))
        .unwrap_or(0.0);

    let range = if min == max { max.max(1.0) } else { max - min };
    let scale = LinearScale::new(min, min + range)?;

    let plot_left = INSET_LEFT_PX.min(logical_width * 0.4);
    let plot_right = (logical_width - INSET_RIGHT_PX).max(plot_left + 1.0);
    let plot_top = INSET_TOP_PX.min(logical_height * 0.2);
    let plot_bottom = (logical_height - INSET_BOTTOM_PX).max(plot_top + 1.0);

    let step_count = (values.len() - 1).max(1) as f64;
    let x_step = (plot_right - plot_left) / step_count;

    let mut points = Vec::with_capacity(values.len());
    for (index, value) in values.iter().copied().enumerate() {
        let x = plot_left + index as f64 * x_step;
        let y = scale.map(value, plot_bottom, plot_top)?;
        points.push(PlotPoint {
            index,
            x,
            y,
            value,
        });
    }

    let tick_count = MAX_TICKS.min(values.len().max(2));
    let mut ticks = Vec::with_capacity(tick_count);
    for step in 0..tick_count {
        let ratio = step as f64 / (tick_count - 1) as f64;
        let value = min + ratio * range;
        ticks.push(TickLabel {
            text: format_value(value),
            value,
            y: scale.map(value, plot_bottom, plot_top)?,
        });
    }

    let mut area = Vec::with_capacity(points.len() + 2);
    for point in &points {
        area.push((point.x, point.y));
    }
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        area.push((last.x, plot_bottom));
        area.push((first.x, plot_bottom));
    }

    Ok(Some(LineLayout {
        logical_width,
        logical_height,
        plot_left,
        plot_right,
        plot_top,
        plot_bottom,
        points,
        ticks,
        area,
    }))
}
