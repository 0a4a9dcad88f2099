mod support;

use std::rc::Rc;

use graph_viewport_wasm::{
    EventOutcome, InputEvent, Point, Transform, ViewportConfig, ViewportController, WheelInput,
};
use support::{RecordingSurface, approx, controller};

fn wheel(x: f64, y: f64, delta_y: f64) -> InputEvent {
    InputEvent::Wheel(WheelInput { client: Point::new(x, y), delta_y })
}

#[test]
fn wheel_down_zooms_out_around_cursor() {
    let (mut ctrl, _surface) = controller(ViewportConfig::default());
    let outcome = ctrl.handle(&wheel(50.0, 50.0, 120.0));
    assert_eq!(outcome, EventOutcome::CONSUMED);

    let t = ctrl.transform();
    assert!(approx(t.scale, 0.9));
    assert!(approx(t.offset_x, 5.0));
    assert!(approx(t.offset_y, 5.0));
}

#[test]
fn wheel_up_zooms_in() {
    let (mut ctrl, _surface) = controller(ViewportConfig::default());
    ctrl.handle(&wheel(0.0, 0.0, -3.0));
    assert!(approx(ctrl.transform().scale, 1.1));
    assert_eq!(ctrl.transform().offset(), Point::ORIGIN);
}

#[test]
fn cursor_is_measured_from_container_origin() {
    let surface = RecordingSurface::placed(200.0, 100.0, 400.0, 300.0);
    let mut ctrl = ViewportController::new(Rc::clone(&surface), ViewportConfig::default());

    // client (250, 150) is container-local (50, 50)
    ctrl.handle(&wheel(250.0, 150.0, 1.0));
    let t = ctrl.transform();
    assert!(approx(t.offset_x, 5.0));
    assert!(approx(t.offset_y, 5.0));
}

#[test]
fn wheel_at_bound_still_suppresses_scroll() {
    let (mut ctrl, surface) = controller(ViewportConfig::default());
    for _ in 0..40 {
        ctrl.handle(&wheel(10.0, 10.0, 1.0));
    }
    assert_eq!(ctrl.transform().scale, 0.3);
    let applied = surface.apply_count();

    let outcome = ctrl.handle(&wheel(10.0, 10.0, 1.0));
    assert_eq!(outcome, EventOutcome::CONSUMED);
    assert_eq!(surface.apply_count(), applied);
}

#[test]
fn one_step_per_event_regardless_of_magnitude() {
    let (mut ctrl, _surface) = controller(ViewportConfig::default());
    ctrl.handle(&wheel(0.0, 0.0, -1000.0));
    assert!(approx(ctrl.transform().scale, 1.1));
}

#[test]
fn disabled_wheel_zoom_lets_page_scroll() {
    let config = ViewportConfig { wheel_zoom_enabled: false, ..ViewportConfig::default() };
    let (mut ctrl, _surface) = controller(config);
    assert_eq!(ctrl.handle(&wheel(50.0, 50.0, 1.0)), EventOutcome::PASS);
    assert_eq!(ctrl.transform(), Transform::IDENTITY);
}

#[test]
fn custom_step_is_used() {
    let config = ViewportConfig { zoom_factor: 0.25, ..ViewportConfig::default() };
    let (mut ctrl, _surface) = controller(config);
    ctrl.handle(&wheel(0.0, 0.0, -1.0));
    assert_eq!(ctrl.transform().scale, 1.25);
}
