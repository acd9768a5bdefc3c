use serde::{Deserialize, Serialize};

use crate::core::{BarOrientation, SurfaceRequest};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_FONT_SIZE_PX: f64 = 12.0;

/// Chart type selected by the host, usually from a string attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
}

impl ChartKind {
    pub fn parse(raw: &str) -> ChartResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "doughnut" | "donut" => Ok(Self::Doughnut),
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            other => Err(ChartError::InvalidData(format!(
                "unknown chart kind: `{other}`"
            ))),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub surface: SurfaceRequest,
    pub kind: ChartKind,
    /// Chart's index among sibling charts; shifts palette assignment.
    #[serde(default)]
    pub palette_offset: i64,
    #[serde(default)]
    pub bar_orientation: BarOrientation,
    #[serde(default = "default_font_size")]
    pub font_size_px: f64,
    /// Stable identity for the render-meta side table.
    #[serde(default)]
    pub chart_id: u64,
}

impl ChartEngineConfig {
    /// Creates a minimal config with defaults for everything optional.
    #[must_use]
    pub fn new(kind: ChartKind, surface: SurfaceRequest) -> Self {
        Self {
            surface,
            kind,
            palette_offset: 0,
            bar_orientation: BarOrientation::default(),
            font_size_px: default_font_size(),
            chart_id: 0,
        }
    }

    /// Sets the palette offset shared by sibling charts.
    #[must_use]
    pub fn with_palette_offset(mut self, palette_offset: i64) -> Self {
        self.palette_offset = palette_offset;
        self
    }

    /// Sets the requested bar orientation.
    #[must_use]
    pub fn with_bar_orientation(mut self, orientation: BarOrientation) -> Self {
        self.bar_orientation = orientation;
        self
    }

    /// Sets the base font size in logical pixels.
    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    /// Sets the chart identity used for cached render metadata.
    #[must_use]
    pub fn with_chart_id(mut self, chart_id: u64) -> Self {
        self.chart_id = chart_id;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE_PX
}
