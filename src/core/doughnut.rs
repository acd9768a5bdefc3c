use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::dataset::Dataset;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Segments start at 12 o'clock and run clockwise.
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Gap kept between the outer radius and the surface edge.
pub const EDGE_MARGIN_PX: f64 = 12.0;

/// Ring thickness as inner/outer radius ratio.
pub const INNER_RADIUS_RATIO: f64 = 0.6;

/// Outer radius growth applied to the hovered segment.
pub const ACTIVE_OUTER_GROWTH_PX: f64 = 6.0;

/// Inner radius shrink applied to the hovered segment.
pub const ACTIVE_INNER_SHRINK_PX: f64 = 4.0;

/// Hit-testing accepts pointers slightly inside the ring hole.
pub const HIT_INNER_RATIO: f64 = 0.92;

/// Hit-testing accepts pointers slightly past the outer edge.
pub const HIT_OUTER_SLACK_PX: f64 = 2.0;

/// Normalizes an angle into [0, 2π).
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// One doughnut slice, recomputed on every projection.
///
/// `start`/`end` are normalized to [0, 2π); `wrap` marks arcs that cross the
/// 0-radian boundary, which flips the angular containment test from AND to OR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position of the source entry in the dataset (zero-value entries are
    /// skipped, so this is not necessarily contiguous).
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub wrap: bool,
    pub value: f64,
    pub percent: f64,
    pub label: String,
    pub color: Color,
}

impl Segment {
    /// Angular containment over the half-open range `[start, end)`.
    ///
    /// A full-circle segment is stored as `end == start` with `wrap` set,
    /// which this test accepts for every angle.
    #[must_use]
    pub fn contains_angle(&self, theta: f64) -> bool {
        if self.wrap {
            theta >= self.start || theta < self.end
        } else {
            theta >= self.start && theta < self.end
        }
    }

    /// Arc span in radians.
    #[must_use]
    pub fn span(&self) -> f64 {
        if self.wrap {
            self.end + std::f64::consts::TAU - self.start
        } else {
            self.end - self.start
        }
    }
}

/// Geometry of the last doughnut projection, cached for hit-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughnutGeometry {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub segments: SmallVec<[Segment; 8]>,
    pub total: f64,
    pub active_index: Option<usize>,
}

impl DoughnutGeometry {
    #[must_use]
    pub fn active_segment(&self) -> Option<&Segment> {
        let active = self.active_index?;
        self.segments.iter().find(|segment| segment.index == active)
    }

    /// Hit-tests a pointer position against the ring.
    ///
    /// Returns the dataset index of the segment under the pointer, or `None`
    /// when the pointer is outside the radial band
    /// `[inner_radius * HIT_INNER_RATIO, outer_radius + HIT_OUTER_SLACK_PX]`
    /// or no segment's angular range contains it.
    #[must_use]
    pub fn segment_at(&self, x: f64, y: f64) -> Option<usize> {
        let dx = x - self.cx;
        let dy = y - self.cy;
        let radius = dx.hypot(dy);
        if radius < self.inner_radius * HIT_INNER_RATIO
            || radius > self.outer_radius + HIT_OUTER_SLACK_PX
        {
            return None;
        }

        let theta = normalize_angle(dy.atan2(dx));
        self.segments
            .iter()
            .find(|segment| segment.contains_angle(theta))
            .map(|segment| segment.index)
    }
}

/// Projects a dataset into doughnut segments.
///
/// Returns `Ok(None)` when the value total is not positive: nothing is drawn
/// and no geometry is cached. Entries with non-positive values produce no
/// segment. The input dataset is never mutated; every call recomputes the
/// full geometry.
pub fn project_doughnut(
    dataset: &Dataset,
    logical_width: f64,
    logical_height: f64,
    active: Option<usize>,
) -> ChartResult<Option<DoughnutGeometry>> {
    dataset.validate()?;
    if !logical_width.is_finite()
        || !logical_height.is_finite()
        || logical_width <= 0.0
        || logical_height <= 0.0
    {
        return Err(ChartError::InvalidData(
            "doughnut surface size must be finite and > 0".to_owned(),
        ));
    }

    let total: f64 = dataset.values().iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Ok(None);
    }

    let cx = logical_width / 2.0;
    let cy = logical_height / 2.0;
    let outer_radius = ((logical_width.min(logical_height) / 2.0) - EDGE_MARGIN_PX).max(1.0);
    let inner_radius = outer_radius * INNER_RADIUS_RATIO;

    let mut segments: SmallVec<[Segment; 8]> = SmallVec::new();
    let mut cursor = START_ANGLE;
    for (index, value) in dataset.values().iter().copied().enumerate() {
        if value <= 0.0 {
            continue;
        }

        let span = value / total * TAU;
        let start = normalize_angle(cursor);
        let end = normalize_angle(cursor + span);
        segments.push(Segment {
            index,
            start,
            end,
            wrap: end < start,
            value,
            percent: value / total * 100.0,
            label: dataset.labels()[index].clone(),
            color: dataset.colors()[index],
        });
        cursor += span;
    }

    // Snap the traversal closed: accumulated spans can land a hair short of
    // (or past) the first segment's start, which would leave an angular
    // sliver no segment claims. A lone segment covers the full circle, which
    // the normalized form expresses as end == start with the wrap flag set.
    let first_start = segments[0].start;
    if let Some(last) = segments.last_mut() {
        last.end = first_start;
        last.wrap = last.end <= last.start;
    }

    let active_index =
        active.filter(|wanted| segments.iter().any(|segment| segment.index == *wanted));

    Ok(Some(DoughnutGeometry {
        cx,
        cy,
        inner_radius,
        outer_radius,
        segments,
        total,
        active_index,
    }))
}
