#![cfg(target_arch = "wasm32")]
use graph_viewport_wasm::application::ViewportSession;
use graph_viewport_wasm::infrastructure::dom::{
    CONTROLS_CLASS, TRANSFORM_CONTAINER_CLASS, find_child_with_class,
};
use graph_viewport_wasm::presentation::{ViewportHost, create_graph_viewport};
use graph_viewport_wasm::{ControlCommand, ViewportConfig, ViewportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit, WheelEvent, WheelEventInit};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A 400x300 container holding one child per class name.
fn fixture(id: &str, child_classes: &[&str]) -> HtmlElement {
    let doc = document();
    let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    container.set_id(id);
    container
        .set_attribute("style", "position: relative; overflow: hidden; width: 400px; height: 300px;")
        .unwrap();
    for class in child_classes {
        let child = doc.create_element("div").unwrap();
        child.set_class_name(class);
        container.append_child(&child).unwrap();
    }
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

fn child_classes(parent: &Element) -> Vec<String> {
    let children = parent.children();
    (0..children.length()).filter_map(|i| children.item(i)).map(|c| c.class_name()).collect()
}

fn wrapper_transform(container: &HtmlElement) -> String {
    let wrapper: HtmlElement = find_child_with_class(container, TRANSFORM_CONTAINER_CLASS)
        .unwrap()
        .dyn_into()
        .unwrap();
    wrapper.style().get_property_value("transform").unwrap()
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_button(0);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn missing_container_attaches_nothing() {
    let err = ViewportSession::attach("no-such-graph", ViewportConfig::default()).unwrap_err();
    assert_eq!(err, ViewportError::MissingContainer("no-such-graph".into()));
    assert!(create_graph_viewport("no-such-graph", JsValue::UNDEFINED).is_none());
}

#[wasm_bindgen_test]
fn attach_reparents_content_into_wrapper() {
    let container = fixture("graph-reparent", &["node-a", "node-b"]);
    let session = ViewportSession::attach("graph-reparent", ViewportConfig::default()).unwrap();

    assert_eq!(child_classes(&container), vec![TRANSFORM_CONTAINER_CLASS, CONTROLS_CLASS]);
    let wrapper = find_child_with_class(&container, TRANSFORM_CONTAINER_CLASS).unwrap();
    assert_eq!(child_classes(&wrapper), vec!["node-a", "node-b"]);

    let controls = find_child_with_class(&container, CONTROLS_CLASS).unwrap();
    assert_eq!(controls.children().length(), 3);
    assert_eq!(wrapper_transform(&container), "translate(0px, 0px) scale(1)");
    assert_eq!(session.container_id(), "graph-reparent");
}

#[wasm_bindgen_test]
fn existing_controls_are_left_in_place() {
    let container = fixture("graph-own-controls", &["node", CONTROLS_CLASS]);
    let _session = ViewportSession::attach("graph-own-controls", ViewportConfig::default()).unwrap();

    assert_eq!(child_classes(&container), vec![CONTROLS_CLASS, TRANSFORM_CONTAINER_CLASS]);
    let wrapper = find_child_with_class(&container, TRANSFORM_CONTAINER_CLASS).unwrap();
    assert_eq!(child_classes(&wrapper), vec!["node"]);
}

#[wasm_bindgen_test]
fn commands_write_the_wrapper_transform() {
    let container = fixture("graph-commands", &["node"]);
    let session = ViewportSession::attach("graph-commands", ViewportConfig::default()).unwrap();

    session.execute(ControlCommand::ZoomIn);
    assert_eq!(session.transform().scale, 1.1);
    assert!(wrapper_transform(&container).ends_with("scale(1.1)"));

    session.execute(ControlCommand::Reset);
    assert_eq!(wrapper_transform(&container), "translate(0px, 0px) scale(1)");
}

#[wasm_bindgen_test]
fn control_button_click_zooms() {
    let container = fixture("graph-buttons", &["node"]);
    let session = ViewportSession::attach("graph-buttons", ViewportConfig::default()).unwrap();

    let button: HtmlElement = container
        .query_selector("button[data-command='zoom-out']")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();
    assert!((session.transform().scale - 0.9).abs() < 1e-9);
    assert!(!session.is_dragging());
}

#[wasm_bindgen_test]
fn drag_tracks_pointer_on_document() {
    let container = fixture("graph-drag", &["node"]);
    let session = ViewportSession::attach("graph-drag", ViewportConfig::default()).unwrap();

    container.dispatch_event(&mouse("mousedown", 10, 10)).unwrap();
    assert!(session.is_dragging());
    document().dispatch_event(&mouse("mousemove", 60, -20)).unwrap();
    document().dispatch_event(&mouse("mouseup", 60, -20)).unwrap();

    let t = session.transform();
    assert_eq!((t.offset_x, t.offset_y), (50.0, -30.0));
    assert!(!session.is_dragging());
}

#[wasm_bindgen_test]
fn dispose_detaches_listeners_and_controls() {
    let container = fixture("graph-dispose", &["node"]);
    let mut session = ViewportSession::attach("graph-dispose", ViewportConfig::default()).unwrap();
    assert!(session.listened_events().contains(&"mousemove"));

    session.dispose();
    assert!(session.is_disposed());
    assert!(session.listened_events().is_empty());
    assert!(find_child_with_class(&container, CONTROLS_CLASS).is_none());

    let init = WheelEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_delta_y(-100.0);
    container
        .dispatch_event(&WheelEvent::new_with_event_init_dict("wheel", &init).unwrap())
        .unwrap();
    container.dispatch_event(&mouse("mousedown", 0, 0)).unwrap();
    assert_eq!(session.transform().scale, 1.0);
    assert!(!session.is_dragging());

    session.dispose();
}

#[wasm_bindgen_test]
fn host_attaches_once() {
    fixture("graph-host", &["node"]);
    let mut host = ViewportHost::new("graph-host".into(), JsValue::UNDEFINED);
    assert!(!host.is_attached());
    assert!(host.ensure());
    assert!(host.ensure());
    let container = document().get_element_by_id("graph-host").unwrap();
    let wrappers = container.query_selector_all(&format!(".{}", TRANSFORM_CONTAINER_CLASS)).unwrap();
    assert_eq!(wrappers.length(), 1);

    assert!(host.command("zoom-in"));
    assert!(!host.command("spin"));
    host.teardown();
    assert!(!host.is_attached());
}
