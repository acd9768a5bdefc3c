use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto an arbitrary pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Position of `value` in the domain as a 0..=1 ratio (unclamped).
    pub fn normalize(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    /// Maps `value` onto the pixel range `px_start..=px_end`.
    ///
    /// The range may run in either direction, which is how y-down screen
    /// coordinates are produced without a separate inverted scale.
    pub fn map(self, value: f64, px_start: f64, px_end: f64) -> ChartResult<f64> {
        if !px_start.is_finite() || !px_end.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel range must be finite".to_owned(),
            ));
        }

        let normalized = self.normalize(value)?;
        Ok(px_start + normalized * (px_end - px_start))
    }
}
