use std::cell::RefCell;
use std::rc::Rc;

use chartlet::api::ChartKind;
use chartlet::core::{ChartEntry, SurfaceRequest};
use chartlet::interaction::{HoverChange, HoverState, RecordingTooltip};
use chartlet::render::NullRenderer;
use chartlet::{ChartEngine, ChartEngineConfig};

fn doughnut_config() -> ChartEngineConfig {
    ChartEngineConfig::new(ChartKind::Doughnut, SurfaceRequest::new(None, 1.0))
}

fn sample_entries() -> Vec<ChartEntry> {
    vec![
        ChartEntry::labeled("A", 10.0),
        ChartEntry::labeled("B", 0.0),
        ChartEntry::labeled("C", 30.0),
    ]
}

#[test]
fn doughnut_render_emits_segments_disk_and_center_labels() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    engine.set_entries(sample_entries());

    assert!(engine.render().expect("render"));

    let renderer = engine.renderer();
    assert_eq!(renderer.render_calls, 1);
    // Two positive segments plus the center disk.
    assert_eq!(renderer.last_arc_count, 3);
    // Total value and the "Total" caption.
    assert_eq!(renderer.last_text_count, 2);
    assert!(engine.render_meta().is_some());
}

#[test]
fn empty_dataset_renders_nothing() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");

    assert!(!engine.render().expect("render"));
    assert_eq!(engine.renderer().render_calls, 0);
    assert!(engine.render_meta().is_none());
}

#[test]
fn malformed_json_clears_the_dataset_instead_of_failing() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    engine.set_entries(sample_entries());
    assert!(engine.render().expect("render"));

    assert!(!engine.set_entries_json("{ not json"));
    assert!(!engine.render().expect("render"));
    // The stale cached geometry is dropped along with the dataset.
    assert!(engine.render_meta().is_none());
}

#[test]
fn json_payloads_accept_both_field_casings() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    let payload = r#"[
        {"Label": "Alpha", "Count": 4},
        {"label": "beta", "count": 6}
    ]"#;
    assert!(engine.set_entries_json(payload));
    assert!(engine.render().expect("render"));

    let labels = engine.dataset().labels().to_vec();
    assert_eq!(labels, vec!["Alpha".to_owned(), "beta".to_owned()]);
    assert_eq!(engine.entry_colors().len(), 2);
}

#[test]
fn sibling_offset_shifts_entry_colors() {
    let mut first =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    let mut second = ChartEngine::new(
        NullRenderer::default(),
        doughnut_config().with_palette_offset(1),
    )
    .expect("engine");
    first.set_entries(sample_entries());
    second.set_entries(sample_entries());

    let shifted = second.entry_colors();
    let base = first.entry_colors();
    // Offset 1 means entry i of the second chart matches entry i+1 of the first.
    assert_eq!(shifted[0], base[1]);
    assert_eq!(shifted[1], base[2]);
}

#[test]
fn hover_round_trip_drives_highlight_and_tooltip() {
    let tooltip = Rc::new(RefCell::new(RecordingTooltip::default()));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    engine.set_tooltip_presenter(Box::new(Rc::clone(&tooltip)));
    engine.set_entries(sample_entries());
    assert!(engine.attach_interaction());
    assert!(!engine.attach_interaction());
    assert!(engine.render().expect("render"));

    // Mid-ring at 3 o'clock, inside segment C.
    let change = engine.pointer_move(246.4, 120.0).expect("move");
    assert_eq!(change, HoverChange::Entered(2));
    assert_eq!(engine.hover_state(), HoverState::Hover(2));

    // The highlighted render adds the glow arc and the percent caption.
    assert_eq!(engine.renderer().render_calls, 2);
    assert_eq!(engine.renderer().last_arc_count, 4);
    assert_eq!(engine.renderer().last_text_count, 3);

    {
        let seen = tooltip.borrow();
        assert_eq!(seen.shown.len(), 1);
        let (x, y, content) = &seen.shown[0];
        assert_eq!((*x, *y), (246.4 + 14.0, 120.0 + 14.0));
        assert_eq!(content.label, "C");
        assert_eq!(content.value, 30.0);
        assert!((content.percent - 75.0).abs() < 1e-9);
    }

    // Staying on the segment repositions the tooltip without re-rendering.
    let change = engine.pointer_move(250.0, 120.0).expect("move");
    assert_eq!(change, HoverChange::Retained(2));
    assert_eq!(engine.renderer().render_calls, 2);
    assert_eq!(tooltip.borrow().shown.len(), 2);

    // The center hole ends the hover.
    let change = engine.pointer_move(160.0, 120.0).expect("move");
    assert_eq!(change, HoverChange::Exited);
    assert_eq!(engine.hover_state(), HoverState::Idle);
    assert_eq!(engine.renderer().render_calls, 3);
    assert_eq!(engine.renderer().last_arc_count, 3);
    assert!(!tooltip.borrow().visible);
    assert_eq!(tooltip.borrow().hide_calls, 1);
}

#[test]
fn all_zero_datasets_render_nothing_for_bar_and_line() {
    let zeros = vec![
        ChartEntry::labeled("a", 0.0),
        ChartEntry::labeled("b", 0.0),
        ChartEntry::labeled("c", 0.0),
    ];
    for kind in [ChartKind::Bar, ChartKind::Line] {
        let mut engine = ChartEngine::new(
            NullRenderer::default(),
            ChartEngineConfig::new(kind, SurfaceRequest::new(None, 1.0)),
        )
        .expect("engine");
        engine.set_entries(zeros.clone());

        assert!(!engine.render().expect("render"), "{kind:?} drew zeros");
        assert_eq!(engine.renderer().render_calls, 0);
    }
}

#[test]
fn replacing_entries_drops_cached_geometry_immediately() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    engine.set_entries(sample_entries());
    engine.attach_interaction();
    engine.render().expect("render");
    assert!(engine.render_meta().is_some());

    engine.set_entries(vec![ChartEntry::labeled("fresh", 1.0)]);
    assert!(engine.render_meta().is_none());

    // A pointer event between data load and redraw must not hit-test the
    // previous dataset's segments.
    assert_eq!(
        engine.pointer_move(246.4, 120.0).expect("move"),
        HoverChange::Unchanged
    );
    assert_eq!(engine.hover_state(), HoverState::Idle);
}

#[test]
fn pointer_leave_clears_an_active_hover() {
    let tooltip = Rc::new(RefCell::new(RecordingTooltip::default()));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    engine.set_tooltip_presenter(Box::new(Rc::clone(&tooltip)));
    engine.set_entries(sample_entries());
    engine.attach_interaction();
    engine.render().expect("render");

    engine.pointer_move(160.0, 33.6).expect("move");
    assert_eq!(engine.hover_state(), HoverState::Hover(0));

    assert_eq!(engine.pointer_leave().expect("leave"), HoverChange::Exited);
    assert_eq!(engine.hover_state(), HoverState::Idle);
    assert!(!tooltip.borrow().visible);

    // A second leave is a no-op.
    assert_eq!(
        engine.pointer_leave().expect("leave"),
        HoverChange::Unchanged
    );
}

#[test]
fn pointer_events_are_inert_without_interaction_or_for_other_kinds() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), doughnut_config()).expect("engine");
    engine.set_entries(sample_entries());
    engine.render().expect("render");
    // No attach_interaction call.
    assert_eq!(
        engine.pointer_move(246.4, 120.0).expect("move"),
        HoverChange::Unchanged
    );

    let mut bars = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(ChartKind::Bar, SurfaceRequest::new(None, 1.0)),
    )
    .expect("engine");
    bars.set_entries(sample_entries());
    bars.attach_interaction();
    bars.render().expect("render");
    assert_eq!(
        bars.pointer_move(100.0, 40.0).expect("move"),
        HoverChange::Unchanged
    );
}

#[test]
fn bar_render_emits_rows_labels_and_values() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(ChartKind::Bar, SurfaceRequest::new(None, 1.0)),
    )
    .expect("engine");
    engine.set_entries(vec![
        ChartEntry::labeled("alpha", 12.0),
        ChartEntry::labeled("beta", 7.0),
    ]);

    assert!(engine.render().expect("render"));
    let renderer = engine.renderer();
    assert_eq!(renderer.last_rect_count, 2);
    // One row label and one value text per row.
    assert_eq!(renderer.last_text_count, 4);
    assert_eq!(renderer.last_arc_count, 0);
}

#[test]
fn line_render_emits_grid_axes_area_and_markers() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(ChartKind::Line, SurfaceRequest::new(None, 1.0)),
    )
    .expect("engine");
    engine.set_entries(vec![
        ChartEntry::labeled("t0", 5.0),
        ChartEntry::labeled("t1", 9.0),
        ChartEntry::labeled("t2", 2.0),
    ]);

    assert!(engine.render().expect("render"));
    let renderer = engine.renderer();
    // Three gridlines, two axes, two polyline segments.
    assert_eq!(renderer.last_line_count, 7);
    assert_eq!(renderer.last_polygon_count, 1);
    // One marker per sample.
    assert_eq!(renderer.last_arc_count, 3);
    // Tick labels only.
    assert_eq!(renderer.last_text_count, 3);
}

#[test]
fn config_survives_a_json_round_trip() {
    let config = doughnut_config()
        .with_palette_offset(2)
        .with_font_size_px(14.0)
        .with_chart_id(7);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn chart_kind_parsing_accepts_aliases() {
    assert_eq!(ChartKind::parse("donut").expect("parse"), ChartKind::Doughnut);
    assert_eq!(ChartKind::parse(" Bar ").expect("parse"), ChartKind::Bar);
    assert_eq!(ChartKind::parse("line").expect("parse"), ChartKind::Line);
    assert!(ChartKind::parse("scatter").is_err());
}

#[test]
fn invalid_font_size_is_rejected_at_construction() {
    let config = doughnut_config().with_font_size_px(0.0);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());
}
