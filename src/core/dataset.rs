use serde::{Deserialize, Serialize};

use crate::core::palette::{EntryStatus, pick_color};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One raw input record.
///
/// Upstream payloads arrive in two serialization conventions (PascalCase and
/// lowercase field names), so both spellings are modeled explicitly and the
/// accessors below define the probe order in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "Label", skip_serializing_if = "Option::is_none")]
    pub label_pascal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code_pascal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, rename = "Bucket", skip_serializing_if = "Option::is_none")]
    pub bucket_pascal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    #[serde(default, rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count_pascal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, rename = "State", skip_serializing_if = "Option::is_none")]
    pub state_pascal: Option<String>,
}

impl ChartEntry {
    /// Convenience constructor for the common labeled-count shape.
    #[must_use]
    pub fn labeled(label: impl Into<String>, count: f64) -> Self {
        Self {
            label: Some(label.into()),
            count: Some(count),
            ..Self::default()
        }
    }

    /// Display text. Probe order: `Label`, `label`, `Code`, `code`,
    /// `Bucket`, `bucket`; empty string when none is present.
    #[must_use]
    pub fn display_label(&self) -> &str {
        [
            &self.label_pascal,
            &self.label,
            &self.code_pascal,
            &self.code,
            &self.bucket_pascal,
            &self.bucket,
        ]
        .into_iter()
        .find_map(|field| field.as_deref())
        .unwrap_or("")
    }

    /// Numeric value. Probe order: `Count`, `count`; zero when absent or
    /// non-finite.
    #[must_use]
    pub fn value(&self) -> f64 {
        let raw = self.count_pascal.or(self.count).unwrap_or(0.0);
        if raw.is_finite() { raw } else { 0.0 }
    }

    /// Status keyword. Probe order: `State`, `state`.
    #[must_use]
    pub fn status(&self) -> Option<EntryStatus> {
        self.state_pascal
            .as_deref()
            .or(self.state.as_deref())
            .and_then(EntryStatus::parse)
    }
}

/// Parses a serialized JSON array of entries.
pub fn parse_entries_json(input: &str) -> ChartResult<Vec<ChartEntry>> {
    serde_json::from_str(input).map_err(|e| ChartError::MalformedDataset(e.to_string()))
}

/// Renderer-neutral projection of a list of entries.
///
/// Invariant: `labels`, `values` and `colors` always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<Color>,
}

impl Dataset {
    /// Builds a dataset from raw entries, resolving one color per entry.
    ///
    /// `palette_offset` is typically the chart's index among sibling charts.
    #[must_use]
    pub fn from_entries(entries: &[ChartEntry], palette_offset: i64) -> Self {
        let mut labels = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        let mut colors = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            labels.push(entry.display_label().to_owned());
            values.push(entry.value());
            colors.push(pick_color(entry.status(), index as i64, palette_offset));
        }

        Self {
            labels,
            values,
            colors,
        }
    }

    /// Builds a dataset from pre-resolved columns.
    pub fn from_columns(
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<Color>,
    ) -> ChartResult<Self> {
        let dataset = Self {
            labels,
            values,
            colors,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.labels.len() != self.values.len() || self.values.len() != self.colors.len() {
            return Err(ChartError::InvalidData(format!(
                "dataset columns must have equal lengths: labels={}, values={}, colors={}",
                self.labels.len(),
                self.values.len(),
                self.colors.len()
            )));
        }
        for value in &self.values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "dataset values must be finite".to_owned(),
                ));
            }
        }
        for color in &self.colors {
            color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
