//! Translates core layouts into backend-agnostic render frames.
//!
//! Everything here is a pure function from geometry to primitives, so a
//! frame can be asserted on in tests without any drawing backend.

use std::f64::consts::TAU;

use crate::core::doughnut::{ACTIVE_INNER_SHRINK_PX, ACTIVE_OUTER_GROWTH_PX};
use crate::core::line::MARKER_RADIUS_PX;
use crate::core::text::format_value;
use crate::core::{BarLayout, DoughnutGeometry, LineLayout, Segment, SurfaceMetrics};
use crate::interaction::TooltipContent;
use crate::render::{
    ArcPrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

const CENTER_DISK_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const TEXT_COLOR: Color = Color::from_rgb8(0x37, 0x41, 0x51);
const MUTED_TEXT_COLOR: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
const GRID_COLOR: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
const AXIS_COLOR: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
const HIGHLIGHT_RING_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

const GLOW_THICKNESS_PX: f64 = 6.0;
const GLOW_ALPHA: f64 = 0.3;
const AREA_FILL_ALPHA: f64 = 0.25;
const HIGHLIGHT_RING_WIDTH_PX: f64 = 2.0;

/// Tooltip payload for one hovered segment.
#[must_use]
pub fn tooltip_content_for(segment: &Segment) -> TooltipContent {
    TooltipContent {
        label: segment.label.clone(),
        value: segment.value,
        percent: segment.percent,
    }
}

/// Builds the doughnut scene: segment arcs, hover affordances, center disk
/// and center overlay labels.
#[must_use]
pub fn build_doughnut_frame(
    geometry: &DoughnutGeometry,
    metrics: SurfaceMetrics,
    font_size_px: f64,
) -> RenderFrame {
    let mut frame = RenderFrame::new(metrics.viewport).with_pixel_ratio(metrics.pixel_ratio);

    for segment in &geometry.segments {
        let is_active = geometry.active_index == Some(segment.index);
        // Arc angles for drawing must be monotone increasing; wrapped
        // segments unfold past 2π instead of keeping the normalized end.
        let draw_start = segment.start;
        let draw_end = segment.start + segment.span();
        let (inner, outer) = if is_active {
            (
                (geometry.inner_radius - ACTIVE_INNER_SHRINK_PX).max(0.0),
                geometry.outer_radius + ACTIVE_OUTER_GROWTH_PX,
            )
        } else {
            (geometry.inner_radius, geometry.outer_radius)
        };

        if is_active {
            // Soft glow just outside the grown segment.
            frame = frame.with_arc(ArcPrimitive::filled(
                geometry.cx,
                geometry.cy,
                outer,
                outer + GLOW_THICKNESS_PX,
                draw_start,
                draw_end,
                segment.color.with_alpha(GLOW_ALPHA),
            ));
        }

        let mut arc = ArcPrimitive::filled(
            geometry.cx,
            geometry.cy,
            inner,
            outer,
            draw_start,
            draw_end,
            segment.color,
        );
        if is_active {
            arc = arc.with_stroke(HIGHLIGHT_RING_WIDTH_PX, HIGHLIGHT_RING_COLOR);
        }
        frame = frame.with_arc(arc);
    }

    // Solid center disk under the overlay labels.
    let disk_radius = (geometry.inner_radius - ACTIVE_INNER_SHRINK_PX).max(1.0);
    frame = frame.with_arc(ArcPrimitive::filled(
        geometry.cx,
        geometry.cy,
        0.0,
        disk_radius,
        0.0,
        TAU,
        CENTER_DISK_COLOR,
    ));

    let active = geometry.active_segment();
    let primary_size = font_size_px * 1.8;
    let primary = match active {
        Some(segment) => format_value(segment.value),
        None => format_value(geometry.total),
    };
    let secondary = active.map_or("Total", |segment| segment.label.as_str());

    frame = frame.with_text(TextPrimitive::new(
        primary,
        geometry.cx,
        geometry.cy - primary_size,
        primary_size,
        TEXT_COLOR,
        TextHAlign::Center,
    ));
    if !secondary.is_empty() {
        frame = frame.with_text(TextPrimitive::new(
            secondary,
            geometry.cx,
            geometry.cy + font_size_px * 0.25,
            font_size_px,
            MUTED_TEXT_COLOR,
            TextHAlign::Center,
        ));
    }
    if let Some(segment) = active {
        frame = frame.with_text(TextPrimitive::new(
            format!("{:.1}%", segment.percent),
            geometry.cx,
            geometry.cy + font_size_px * 1.6,
            font_size_px,
            MUTED_TEXT_COLOR,
            TextHAlign::Center,
        ));
    }

    frame
}

/// Builds the horizontal bar scene: rounded bars, row labels, value text.
#[must_use]
pub fn build_bar_frame(layout: &BarLayout, metrics: SurfaceMetrics) -> RenderFrame {
    let mut frame = RenderFrame::new(metrics.viewport).with_pixel_ratio(metrics.pixel_ratio);

    for row in &layout.rows {
        if row.bar_width > 0.0 {
            frame = frame.with_rect(
                RectPrimitive::filled(row.bar_x, row.bar_y, row.bar_width, row.bar_height, row.color)
                    .with_corner_radius(layout.corner_radius),
            );
        }
        if !row.label.is_empty() {
            frame = frame.with_text(TextPrimitive::new(
                row.label.clone(),
                row.label_x,
                row.label_y,
                layout.font_size_px,
                TEXT_COLOR,
                TextHAlign::Right,
            ));
        }
        frame = frame.with_text(TextPrimitive::new(
            format_value(row.value),
            row.value_x,
            row.value_y,
            layout.font_size_px,
            MUTED_TEXT_COLOR,
            TextHAlign::Left,
        ));
    }

    frame
}

/// Builds the line scene: gridlines, axes, gradient area, polyline, markers
/// and y tick labels.
#[must_use]
pub fn build_line_frame(
    layout: &LineLayout,
    metrics: SurfaceMetrics,
    line_color: Color,
    font_size_px: f64,
) -> RenderFrame {
    let mut frame = RenderFrame::new(metrics.viewport).with_pixel_ratio(metrics.pixel_ratio);

    for tick in &layout.ticks {
        frame = frame.with_line(LinePrimitive::new(
            layout.plot_left,
            tick.y,
            layout.plot_right,
            tick.y,
            1.0,
            GRID_COLOR,
        ));
        frame = frame.with_text(TextPrimitive::new(
            tick.text.clone(),
            layout.plot_left - 6.0,
            tick.y - font_size_px / 2.0,
            font_size_px,
            MUTED_TEXT_COLOR,
            TextHAlign::Right,
        ));
    }

    // Axes drawn over the gridlines.
    frame = frame.with_line(LinePrimitive::new(
        layout.plot_left,
        layout.plot_top,
        layout.plot_left,
        layout.plot_bottom,
        1.0,
        AXIS_COLOR,
    ));
    frame = frame.with_line(LinePrimitive::new(
        layout.plot_left,
        layout.plot_bottom,
        layout.plot_right,
        layout.plot_bottom,
        1.0,
        AXIS_COLOR,
    ));

    if layout.points.len() >= 2 {
        frame = frame.with_polygon(
            PolygonPrimitive::filled(
                layout.area.clone(),
                line_color.with_alpha(AREA_FILL_ALPHA),
            )
            .with_vertical_fade(),
        );
        for pair in layout.points.windows(2) {
            frame = frame.with_line(LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                2.0,
                line_color,
            ));
        }
    }

    for point in &layout.points {
        frame = frame.with_arc(ArcPrimitive::filled(
            point.x,
            point.y,
            0.0,
            MARKER_RADIUS_PX,
            0.0,
            TAU,
            line_color,
        ));
    }

    frame
}
