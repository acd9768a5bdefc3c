use chartlet::core::line::MAX_TICKS;
use chartlet::core::{ChartEntry, Dataset, layout_line};

fn dataset(values: &[f64]) -> Dataset {
    let entries: Vec<ChartEntry> = values
        .iter()
        .enumerate()
        .map(|(i, v)| ChartEntry::labeled(format!("t{i}"), *v))
        .collect();
    Dataset::from_entries(&entries, 0)
}

#[test]
fn empty_dataset_is_not_drawn() {
    let layout = layout_line(&dataset(&[]), 320.0, 240.0).expect("layout");
    assert!(layout.is_none());
}

#[test]
fn single_sample_plots_exactly_one_point() {
    let layout = layout_line(&dataset(&[42.0]), 320.0, 240.0)
        .expect("layout")
        .expect("plotted");

    assert_eq!(layout.points.len(), 1);
    let point = layout.points[0];
    assert!(point.x.is_finite());
    assert!(point.y.is_finite());
    assert_eq!(point.value, 42.0);
    assert!(point.y >= layout.plot_top && point.y <= layout.plot_bottom);
}

#[test]
fn all_zero_values_are_not_drawn() {
    let layout = layout_line(&dataset(&[0.0, 0.0, 0.0]), 320.0, 240.0).expect("layout");
    assert!(layout.is_none());
}

#[test]
fn degenerate_range_does_not_divide_by_zero() {
    // All samples equal.
    for constant in [7.0, 0.25] {
        let layout = layout_line(&dataset(&[constant, constant, constant]), 320.0, 240.0)
            .expect("layout")
            .expect("plotted");
        for point in &layout.points {
            assert!(point.y.is_finite(), "constant {constant} produced NaN");
        }
        for tick in &layout.ticks {
            assert!(tick.y.is_finite());
        }
    }
}

#[test]
fn y_domain_spans_min_to_max() {
    let layout = layout_line(&dataset(&[10.0, 30.0, 20.0]), 320.0, 240.0)
        .expect("layout")
        .expect("plotted");

    // Max value maps to the plot top, min to the plot bottom.
    let max_point = layout.points[1];
    let min_point = layout.points[0];
    assert!((max_point.y - layout.plot_top).abs() < 1e-9);
    assert!((min_point.y - layout.plot_bottom).abs() < 1e-9);

    // x positions advance monotonically.
    for pair in layout.points.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn at_most_five_evenly_spaced_ticks() {
    let layout = layout_line(
        &dataset(&[1.0, 9.0, 4.0, 7.0, 2.0, 8.0, 3.0]),
        320.0,
        240.0,
    )
    .expect("layout")
    .expect("plotted");

    assert!(layout.ticks.len() <= MAX_TICKS);
    assert!(layout.ticks.len() >= 2);

    let first = layout.ticks.first().expect("first tick");
    let last = layout.ticks.last().expect("last tick");
    assert_eq!(first.value, 1.0);
    assert_eq!(last.value, 9.0);

    let step = layout.ticks[1].value - layout.ticks[0].value;
    for pair in layout.ticks.windows(2) {
        assert!((pair[1].value - pair[0].value - step).abs() < 1e-9);
    }
}

#[test]
fn area_polygon_closes_onto_the_baseline() {
    let layout = layout_line(&dataset(&[5.0, 1.0, 3.0]), 320.0, 240.0)
        .expect("layout")
        .expect("plotted");

    assert_eq!(layout.area.len(), layout.points.len() + 2);
    let first_point = layout.points.first().expect("first");
    let last_point = layout.points.last().expect("last");
    let closing = &layout.area[layout.area.len() - 2..];
    assert_eq!(closing[0], (last_point.x, layout.plot_bottom));
    assert_eq!(closing[1], (first_point.x, layout.plot_bottom));
}
