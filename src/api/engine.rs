use tracing::{debug, warn};

use crate::core::{
    ChartEntry, Dataset, DoughnutGeometry, SurfaceMetrics, layout_bars, layout_line,
    palette_color, parse_entries_json, project_doughnut,
};
use crate::error::ChartResult;
use crate::interaction::{
    ChartId, CursorStyle, HoverChange, HoverState, InteractionState, NullTooltip, RenderMetaStore,
    TOOLTIP_OFFSET_PX, TooltipPresenter,
};
use crate::render::{Color, Renderer};

use super::frame_builder::{
    build_bar_frame, build_doughnut_frame, build_line_frame, tooltip_content_for,
};
use super::{ChartEngineConfig, ChartKind};

/// Main orchestration facade for one chart.
///
/// `ChartEngine` owns the dataset, the cached doughnut geometry, the hover
/// state machine and the tooltip presenter, and drives the renderer.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    chart_id: ChartId,
    entries: Vec<ChartEntry>,
    dataset: Dataset,
    meta: RenderMetaStore,
    interaction: Option<InteractionState>,
    tooltip: Box<dyn TooltipPresenter>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            chart_id: ChartId::new(config.chart_id),
            entries: Vec::new(),
            dataset: Dataset::default(),
            meta: RenderMetaStore::new(),
            interaction: None,
            tooltip: Box::new(NullTooltip),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn chart_id(&self) -> ChartId {
        self.chart_id
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the tooltip sink. The default presenter discards everything.
    pub fn set_tooltip_presenter(&mut self, tooltip: Box<dyn TooltipPresenter>) {
        self.tooltip = tooltip;
    }

    /// Enables pointer handling for this chart.
    ///
    /// Idempotent: returns `true` only on first attach, so hosts wiring
    /// event listeners can guard against double registration.
    pub fn attach_interaction(&mut self) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        self.interaction = Some(InteractionState::default());
        true
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.map(InteractionState::hover).unwrap_or_default()
    }

    #[must_use]
    pub fn cursor_style(&self) -> CursorStyle {
        self.interaction.map(InteractionState::cursor).unwrap_or_default()
    }

    /// Replaces the chart's entries and re-derives the dataset.
    ///
    /// Cached geometry describes the previous dataset, so it is dropped
    /// here; hit-testing stays inert until the next render.
    pub fn set_entries(&mut self, entries: Vec<ChartEntry>) {
        self.dataset = Dataset::from_entries(&entries, self.config.palette_offset);
        self.entries = entries;
        self.meta.remove(self.chart_id);
    }

    /// Loads entries from a serialized JSON array.
    ///
    /// Malformed payloads are logged and treated as "no dataset": the chart
    /// renders nothing and any previously shown fallback content stays put.
    /// Returns whether a dataset was loaded.
    pub fn set_entries_json(&mut self, payload: &str) -> bool {
        match parse_entries_json(payload) {
            Ok(entries) => {
                self.set_entries(entries);
                true
            }
            Err(error) => {
                warn!(%error, "discarding malformed chart dataset");
                self.set_entries(Vec::new());
                false
            }
        }
    }

    /// Per-entry resolved colors, for hosts syncing fallback legend swatches.
    #[must_use]
    pub fn entry_colors(&self) -> Vec<Color> {
        self.dataset.colors().to_vec()
    }

    /// Cached doughnut geometry from the last render, if any.
    #[must_use]
    pub fn render_meta(&self) -> Option<&DoughnutGeometry> {
        self.meta.get(self.chart_id)
    }

    /// Renders the chart once.
    ///
    /// Returns `Ok(false)` when nothing was drawn: unresolvable surface,
    /// empty dataset, or zero-sum doughnut. Callers keep prior host state
    /// visible in that case.
    pub fn render(&mut self) -> ChartResult<bool> {
        let Some(metrics) = self.config.surface.resolve() else {
            debug!("drawing surface unavailable, nothing rendered");
            return Ok(false);
        };

        match self.config.kind {
            ChartKind::Doughnut => {
                let active = match self.hover_state() {
                    HoverState::Hover(index) => Some(index),
                    HoverState::Idle => None,
                };
                self.render_doughnut(metrics, active)
            }
            ChartKind::Bar => self.render_bar(metrics),
            ChartKind::Line => self.render_line(metrics),
        }
    }

    fn render_doughnut(
        &mut self,
        metrics: SurfaceMetrics,
        active: Option<usize>,
    ) -> ChartResult<bool> {
        let Some(geometry) = project_doughnut(
            &self.dataset,
            metrics.logical_width,
            metrics.logical_height,
            active,
        )?
        else {
            debug!("doughnut dataset empty or zero-sum, nothing rendered");
            self.meta.remove(self.chart_id);
            return Ok(false);
        };

        let frame = build_doughnut_frame(&geometry, metrics, self.config.font_size_px);
        self.renderer.render(&frame)?;
        // Replaced wholesale so hit-testing never observes a partial update.
        self.meta.insert(self.chart_id, geometry);
        Ok(true)
    }

    fn render_bar(&mut self, metrics: SurfaceMetrics) -> ChartResult<bool> {
        let Some(layout) = layout_bars(
            &self.dataset,
            metrics.logical_width,
            metrics.logical_height,
            self.config.font_size_px,
            self.config.bar_orientation,
        )?
        else {
            debug!("bar dataset empty, nothing rendered");
            return Ok(false);
        };

        let frame = build_bar_frame(&layout, metrics);
        self.renderer.render(&frame)?;
        Ok(true)
    }

    fn render_line(&mut self, metrics: SurfaceMetrics) -> ChartResult<bool> {
        let Some(layout) =
            layout_line(&self.dataset, metrics.logical_width, metrics.logical_height)?
        else {
            debug!("line dataset empty, nothing rendered");
            return Ok(false);
        };

        let line_color = self
            .dataset
            .colors()
            .first()
            .copied()
            .unwrap_or_else(|| palette_color(0, self.config.palette_offset));
        let frame = build_line_frame(&layout, metrics, line_color, self.config.font_size_px);
        self.renderer.render(&frame)?;
        Ok(true)
    }

    /// Handles pointer movement in logical pixels over the chart.
    ///
    /// Doughnut only; other kinds report `Unchanged`. Enter/exit transitions
    /// re-render with the highlight applied or removed and drive the tooltip
    /// presenter; staying on the same segment only repositions the tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<HoverChange> {
        if self.config.kind != ChartKind::Doughnut {
            return Ok(HoverChange::Unchanged);
        }
        let Some(mut interaction) = self.interaction else {
            return Ok(HoverChange::Unchanged);
        };
        let Some(geometry) = self.meta.get(self.chart_id) else {
            return Ok(HoverChange::Unchanged);
        };

        let change = interaction.on_pointer_move(geometry, x, y);
        self.interaction = Some(interaction);

        match change {
            HoverChange::Entered(index) => {
                if let Some(metrics) = self.config.surface.resolve() {
                    self.render_doughnut(metrics, Some(index))?;
                }
                if let Some(content) = self
                    .render_meta()
                    .and_then(DoughnutGeometry::active_segment)
                    .map(tooltip_content_for)
                {
                    self.tooltip
                        .show(x + TOOLTIP_OFFSET_PX, y + TOOLTIP_OFFSET_PX, &content);
                }
            }
            HoverChange::Retained(_) => {
                if let Some(content) = self
                    .render_meta()
                    .and_then(DoughnutGeometry::active_segment)
                    .map(tooltip_content_for)
                {
                    self.tooltip
                        .show(x + TOOLTIP_OFFSET_PX, y + TOOLTIP_OFFSET_PX, &content);
                }
            }
            HoverChange::Exited => {
                if let Some(metrics) = self.config.surface.resolve() {
                    self.render_doughnut(metrics, None)?;
                }
                self.tooltip.hide();
            }
            HoverChange::Unchanged => {}
        }

        Ok(change)
    }

    /// Handles the pointer leaving the chart: unconditionally clears hover.
    pub fn pointer_leave(&mut self) -> ChartResult<HoverChange> {
        let Some(mut interaction) = self.interaction else {
            return Ok(HoverChange::Unchanged);
        };
        let change = interaction.on_pointer_leave();
        self.interaction = Some(interaction);

        if change == HoverChange::Exited {
            if let Some(metrics) = self.config.surface.resolve() {
                self.render_doughnut(metrics, None)?;
            }
            self.tooltip.hide();
        }
        Ok(change)
    }
}
