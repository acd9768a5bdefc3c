use chartlet::core::surface::{DEFAULT_LOGICAL_HEIGHT, DEFAULT_LOGICAL_WIDTH};
use chartlet::core::SurfaceRequest;

#[test]
fn unmeasured_element_falls_back_to_default_box() {
    let metrics = SurfaceRequest::new(None, 1.0).resolve().expect("surface");
    assert_eq!(metrics.logical_width, DEFAULT_LOGICAL_WIDTH);
    assert_eq!(metrics.logical_height, DEFAULT_LOGICAL_HEIGHT);
    assert_eq!(metrics.viewport.width, 320);
    assert_eq!(metrics.viewport.height, 240);
}

#[test]
fn zero_or_negative_measured_size_also_falls_back() {
    let metrics = SurfaceRequest::new(Some((0.0, 100.0)), 1.0)
        .resolve()
        .expect("surface");
    assert_eq!(metrics.logical_width, DEFAULT_LOGICAL_WIDTH);

    let metrics = SurfaceRequest::new(Some((-50.0, -10.0)), 2.0)
        .resolve()
        .expect("surface");
    assert_eq!(metrics.logical_height, DEFAULT_LOGICAL_HEIGHT);
}

#[test]
fn pixel_ratio_is_carried_for_backends() {
    let metrics = SurfaceRequest::new(Some((300.0, 150.0)), 2.0)
        .resolve()
        .expect("surface");
    assert_eq!(metrics.pixel_ratio, 2.0);
    // Layout space stays logical.
    assert_eq!(metrics.logical_width, 300.0);
    assert_eq!(metrics.viewport.width, 300);
}

#[test]
fn unusable_ratio_yields_no_surface() {
    assert!(SurfaceRequest::new(None, 0.0).resolve().is_none());
    assert!(SurfaceRequest::new(None, -1.0).resolve().is_none());
    assert!(SurfaceRequest::new(None, f64::NAN).resolve().is_none());
    assert!(SurfaceRequest::new(None, f64::INFINITY).resolve().is_none());
}

#[test]
fn fractional_measured_sizes_round_up_to_a_valid_viewport() {
    let metrics = SurfaceRequest::new(Some((299.4, 150.7)), 1.0)
        .resolve()
        .expect("surface");
    assert_eq!(metrics.viewport.width, 300);
    assert_eq!(metrics.viewport.height, 151);
}
