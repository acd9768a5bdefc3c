use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::core::text::{ellipsize, estimate_text_width, format_value};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fraction of the surface width the label column may occupy at most.
pub const LABEL_COLUMN_MAX_RATIO: f64 = 0.45;

/// Horizontal padding between the label column, bars and value text.
pub const COLUMN_GAP_PX: f64 = 8.0;

/// Vertical fraction of each row filled by the bar.
pub const BAR_FILL_RATIO: f64 = 0.62;

/// Corner rounding requested for bar rectangles.
pub const BAR_CORNER_RADIUS_PX: f64 = 3.0;

/// Requested bar orientation.
///
/// Both variants currently produce the horizontal layout; the attribute is
/// parsed so the input contract stays stable if a vertical variant lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl BarOrientation {
    pub fn parse(raw: &str) -> ChartResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "horizontal" | "x" => Ok(Self::Horizontal),
            "vertical" | "y" => Ok(Self::Vertical),
            other => Err(ChartError::InvalidData(format!(
                "unknown bar orientation: `{other}`"
            ))),
        }
    }
}

/// One laid-out bar row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRow {
    pub index: usize,
    /// Label text after ellipsizing to the label column.
    pub label: String,
    pub value: f64,
    pub color: Color,
    pub bar_x: f64,
    pub bar_y: f64,
    pub bar_width: f64,
    pub bar_height: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub value_x: f64,
    pub value_y: f64,
}

/// Full horizontal bar chart layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub logical_width: f64,
    pub logical_height: f64,
    pub label_column_width: f64,
    pub corner_radius: f64,
    pub font_size_px: f64,
    pub rows: Vec<BarRow>,
}

/// Lays out horizontal bars for a dataset.
///
/// Returns `Ok(None)` when the dataset is empty or no value is positive
/// ("nothing drawn"). Bar lengths divide by `max(values).max(1)`, so a
/// zero value among positive ones keeps its row with a zero-length bar
/// without a divide-by-zero.
pub fn layout_bars(
    dataset: &Dataset,
    logical_width: f64,
    logical_height: f64,
    font_size_px: f64,
    orientation: BarOrientation,
) -> ChartResult<Option<BarLayout>> {
    dataset.validate()?;
    if !logical_width.is_finite()
        || !logical_height.is_finite()
        || logical_width <= 0.0
        || logical_height <= 0.0
    {
        return Err(ChartError::InvalidData(
            "bar surface size must be finite and > 0".to_owned(),
        ));
    }
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "bar font size must be finite and > 0".to_owned(),
        ));
    }

    // Orientation is accepted but both branches lay out horizontally.
    let _ = orientation;

    let max_value = dataset.values().iter().copied().fold(0.0_f64, f64::max);
    if dataset.is_empty() || max_value <= 0.0 {
        return Ok(None);
    }
    let denominator = max_value.max(1.0);

    let widest_label = dataset
        .labels()
        .iter()
        .map(|label| estimate_text_width(label, font_size_px))
        .fold(0.0_f64, f64::max);
    let label_column_width =
        (widest_label + COLUMN_GAP_PX).min(logical_width * LABEL_COLUMN_MAX_RATIO);

    let widest_value = dataset
        .values()
        .iter()
        .map(|value| estimate_text_width(&format_value(*value), font_size_px))
        .fold(0.0_f64, f64::max);
    let value_reserve = widest_value + COLUMN_GAP_PX;

    let track_x = label_column_width + COLUMN_GAP_PX;
    let track_width = (logical_width - track_x - value_reserve).max(1.0);

    let row_height = logical_height / dataset.len() as f64;
    let bar_height = row_height * BAR_FILL_RATIO;

    let mut rows = Vec::with_capacity(dataset.len());
    for (index, value) in dataset.values().iter().copied().enumerate() {
        let ratio = (value / denominator).max(0.0);
        let bar_width = track_width * ratio;
        let row_top = index as f64 * row_height;
        let bar_y = row_top + (row_height - bar_height) / 2.0;
        let text_y = row_top + (row_height - font_size_px) / 2.0;

        rows.push(BarRow {
            index,
            label: ellipsize(
                &dataset.labels()[index],
                label_column_width - COLUMN_GAP_PX / 2.0,
                font_size_px,
            ),
            value,
            color: dataset.colors()[index],
            bar_x: track_x,
            bar_y,
            bar_width,
            bar_height,
            label_x: label_column_width,
            label_y: text_y,
            value_x: track_x + bar_width + COLUMN_GAP_PX / 2.0,
            value_y: text_y,
        });
    }

    Ok(Some(BarLayout {
        logical_width,
        logical_height,
        label_column_width,
        corner_radius: BAR_CORNER_RADIUS_PX,
        font_size_px,
        rows,
    }))
}
