use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DoughnutGeometry;

/// Fixed pixel offset between the pointer and the tooltip anchor.
pub const TOOLTIP_OFFSET_PX: f64 = 14.0;

/// Stable identity of one chart on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartId(u64);

impl ChartId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Hover state of one doughnut chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hover(usize),
}

/// Cursor the host should display over the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

/// Outcome of one pointer event against the hover state machine.
///
/// `Entered`/`Exited` require a re-render (highlight added or removed);
/// `Retained` only repositions the tooltip; `Unchanged` needs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Retained(usize),
    Exited,
}

/// Content handed to the tooltip presenter for a hovered segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub label: String,
    pub value: f64,
    pub percent: f64,
}

/// Injectable tooltip sink owned by the interaction layer's construction
/// scope, replacing any module-level singleton element.
pub trait TooltipPresenter {
    fn show(&mut self, x: f64, y: f64, content: &TooltipContent);
    fn hide(&mut self);
}

/// Presenter that ignores everything; default for headless engines.
#[derive(Debug, Default)]
pub struct NullTooltip;

impl TooltipPresenter for NullTooltip {
    fn show(&mut self, _x: f64, _y: f64, _content: &TooltipContent) {}
    fn hide(&mut self) {}
}

/// Presenter that records every call, for tests and host diagnostics.
#[derive(Debug, Default)]
pub struct RecordingTooltip {
    pub shown: Vec<(f64, f64, TooltipContent)>,
    pub hide_calls: usize,
    pub visible: bool,
}

impl TooltipPresenter for RecordingTooltip {
    fn show(&mut self, x: f64, y: f64, content: &TooltipContent) {
        self.shown.push((x, y, content.clone()));
        self.visible = true;
    }

    fn hide(&mut self) {
        self.hide_calls += 1;
        self.visible = false;
    }
}

/// Shared handle so hosts (and tests) can keep inspecting a presenter that
/// was handed to an engine.
impl<T: TooltipPresenter> TooltipPresenter for std::rc::Rc<std::cell::RefCell<T>> {
    fn show(&mut self, x: f64, y: f64, content: &TooltipContent) {
        self.borrow_mut().show(x, y, content);
    }

    fn hide(&mut self) {
        self.borrow_mut().hide();
    }
}

/// Per-chart hover state machine: `Idle ⇄ Hover(index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    hover: HoverState,
    cursor: CursorStyle,
}

impl InteractionState {
    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn cursor(self) -> CursorStyle {
        self.cursor
    }

    /// Advances the state machine for a pointer position over `geometry`.
    pub fn on_pointer_move(&mut self, geometry: &DoughnutGeometry, x: f64, y: f64) -> HoverChange {
        match (self.hover, geometry.segment_at(x, y)) {
            (HoverState::Idle, None) => HoverChange::Unchanged,
            (HoverState::Idle, Some(index)) => {
                self.hover = HoverState::Hover(index);
                self.cursor = CursorStyle::Pointer;
                HoverChange::Entered(index)
            }
            (HoverState::Hover(_), None) => {
                self.hover = HoverState::Idle;
                self.cursor = CursorStyle::Default;
                HoverChange::Exited
            }
            (HoverState::Hover(current), Some(index)) if current == index => {
                HoverChange::Retained(index)
            }
            (HoverState::Hover(_), Some(index)) => {
                self.hover = HoverState::Hover(index);
                self.cursor = CursorStyle::Pointer;
                HoverChange::Entered(index)
            }
        }
    }

    /// Pointer left the chart: unconditionally back to `Idle`.
    pub fn on_pointer_leave(&mut self) -> HoverChange {
        let was_hovering = matches!(self.hover, HoverState::Hover(_));
        self.hover = HoverState::Idle;
        self.cursor = CursorStyle::Default;
        if was_hovering {
            HoverChange::Exited
        } else {
            HoverChange::Unchanged
        }
    }
}

/// Explicit side table of cached doughnut geometry keyed by chart identity.
///
/// Entries are created on first render and overwritten, never merged, on
/// every subsequent render, so hit-testing always sees one whole projection.
#[derive(Debug, Default)]
pub struct RenderMetaStore {
    entries: IndexMap<ChartId, DoughnutGeometry>,
}

impl RenderMetaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ChartId, geometry: DoughnutGeometry) {
        self.entries.insert(id, geometry);
    }

    #[must_use]
    pub fn get(&self, id: ChartId) -> Option<&DoughnutGeometry> {
        self.entries.get(&id)
    }

    pub fn remove(&mut self, id: ChartId) -> Option<DoughnutGeometry> {
        self.entries.shift_remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
