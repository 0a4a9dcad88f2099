use std::str::FromStr;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use crate::application::ViewportSession;
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{ControlCommand, ViewportConfig};
use crate::infrastructure::dom::find_container;
use crate::{log_error, log_warn};

/// Pan/zoom handle returned to JavaScript.
///
/// Commands are the only way external UI may change the view.
#[wasm_bindgen]
pub struct GraphViewport {
    session: ViewportSession,
}

#[wasm_bindgen]
impl GraphViewport {
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.session.execute(ControlCommand::ZoomIn);
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.session.execute(ControlCommand::ZoomOut);
    }

    pub fn reset(&self) {
        self.session.execute(ControlCommand::Reset);
    }

    /// Run a command by name (`"zoom-in"`, `"zoom-out"`, `"reset"`).
    /// Returns `false` for unknown names.
    pub fn command(&self, name: &str) -> bool {
        match ControlCommand::from_str(name) {
            Ok(command) => {
                self.session.execute(command);
                true
            }
            Err(_) => {
                log_warn!(LogComponent::Presentation("GraphViewport"), "unknown command '{}'", name);
                false
            }
        }
    }

    /// Detach all listeners. The handle stays valid but inert.
    pub fn dispose(&mut self) {
        self.session.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.session.transform().scale
    }

    #[wasm_bindgen(getter, js_name = offsetX)]
    pub fn offset_x(&self) -> f64 {
        self.session.transform().offset_x
    }

    #[wasm_bindgen(getter, js_name = offsetY)]
    pub fn offset_y(&self) -> f64 {
        self.session.transform().offset_y
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    #[wasm_bindgen(getter, js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.session.is_disposed()
    }
}

impl GraphViewport {
    pub fn session(&self) -> &ViewportSession {
        &self.session
    }
}

/// Overlay a JS option object on `base`; malformed options fall back to `base`.
pub fn config_from_js(base: ViewportConfig, options: &JsValue) -> ViewportConfig {
    if options.is_undefined() || options.is_null() {
        return base;
    }
    let json = js_sys::JSON::stringify(options).ok().and_then(|json| json.as_string());
    let Some(json) = json else {
        log_warn!(LogComponent::Presentation("Options"), "options are not serializable, using defaults");
        return base;
    };
    base.merge_json(&json).unwrap_or_else(|err| {
        log_warn!(LogComponent::Presentation("Options"), "invalid options ({}), using defaults", err);
        base
    })
}

/// Attach a viewport controller to `containerId`.
///
/// Returns `undefined` (and logs an error) when the container does not exist.
#[wasm_bindgen(js_name = createGraphViewport)]
pub fn create_graph_viewport(container_id: &str, options: JsValue) -> Option<GraphViewport> {
    let config = config_from_js(ViewportConfig::default(), &options);
    ViewportSession::attach(container_id, config).ok().map(|session| GraphViewport { session })
}

/// Graph page factory: deeper zoom range (max 5x) and a grab cursor.
#[wasm_bindgen(js_name = initializeGraphViewport)]
pub fn initialize_graph_viewport(container_id: &str, options: JsValue) -> Option<GraphViewport> {
    let config = config_from_js(ViewportConfig::graph_defaults(), &options);
    let container = match find_container(container_id) {
        Ok(container) => container,
        Err(err) => {
            log_error!(LogComponent::Presentation("GraphViewport"), "{}", err);
            return None;
        }
    };
    let session = ViewportSession::attach_to(container_id, container, config).ok()?;
    session.show_grab_cursor();
    Some(GraphViewport { session })
}

/// Owner-side slot guarding against attaching twice to the same page.
#[wasm_bindgen]
pub struct ViewportHost {
    container_id: String,
    options: JsValue,
    instance: Option<GraphViewport>,
}

#[wasm_bindgen]
impl ViewportHost {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: String, options: JsValue) -> Self {
        Self { container_id, options, instance: None }
    }

    /// Attach if not attached yet. Returns whether an instance is held.
    /// Safe to call repeatedly, e.g. from a retry timer in page glue.
    pub fn ensure(&mut self) -> bool {
        if self.instance.is_none() {
            self.instance = initialize_graph_viewport(&self.container_id, self.options.clone());
        }
        self.instance.is_some()
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.instance.is_some()
    }

    /// Dispose and drop the held instance, allowing a later `ensure`.
    pub fn teardown(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.dispose();
        }
    }

    /// Forward a command to the held instance, if any.
    pub fn command(&self, name: &str) -> bool {
        self.instance.as_ref().map(|instance| instance.command(name)).unwrap_or(false)
    }
}
