use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::Callback;
use web_sys::{Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, UiEvent, WheelEvent};

use crate::domain::errors::{ViewportError, ViewportResult};
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{
    ControlCommand, InputEvent, Point, PointerInput, TouchInput, Transform, ViewportConfig,
    ViewportController, WheelInput,
};
use crate::infrastructure::dom::{
    DomSurface, EventListenerHandle, EventOptions, find_container, is_control_target, listen,
    mount_controls,
};
use crate::{log_debug, log_error, log_info};

type SharedController = Rc<RefCell<ViewportController<DomSurface>>>;

/// A controller attached to a live container, plus every listener and
/// element it added to the page.
///
/// Pointer-down, touch-start and wheel listen on the container. Pointer
/// move/up and touch move/end listen on the document so a drag keeps
/// tracking outside the container. Resize listens on the window.
pub struct ViewportSession {
    container_id: String,
    controller: SharedController,
    listeners: Vec<EventListenerHandle>,
    mounted_controls: Option<Element>,
}

impl ViewportSession {
    /// Attach to the element with id `container_id`.
    ///
    /// On `MissingContainer` nothing is touched: no listeners, no transform.
    pub fn attach(container_id: &str, config: ViewportConfig) -> ViewportResult<Self> {
        let container = find_container(container_id).inspect_err(|err| {
            log_error!(LogComponent::Application("Session"), "{}", err);
        })?;
        Self::attach_to(container_id, container, config)
    }

    /// Attach to an already resolved container element.
    pub fn attach_to(container_id: &str, container: HtmlElement, config: ViewportConfig) -> ViewportResult<Self> {
        let surface = DomSurface::adopt(container.clone()).inspect_err(|err| {
            log_error!(LogComponent::Application("Session"), "{}", err);
        })?;
        let controller = Rc::new(RefCell::new(ViewportController::new(surface, config)));
        let config = *controller.borrow().config();

        let mounted_controls = mount_controls(&container, command_callback(Rc::downgrade(&controller)));

        let mut session = Self {
            container_id: container_id.to_string(),
            controller,
            listeners: Vec::new(),
            mounted_controls,
        };
        session.wire_listeners(&container, &config)?;

        log_info!(
            LogComponent::Application("Session"),
            "viewport attached to '{}' with {} listeners",
            container_id,
            session.listeners.len()
        );
        Ok(session)
    }

    fn wire_listeners(&mut self, container: &HtmlElement, config: &ViewportConfig) -> ViewportResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| ViewportError::BrowserApi("window not available".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ViewportError::BrowserApi("document not available".into()))?;
        let container_target: &EventTarget = container.as_ref();
        let document_target: &EventTarget = document.as_ref();
        let window_target: &EventTarget = window.as_ref();

        if config.wheel_zoom_enabled {
            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                container_target,
                leptos::ev::wheel,
                &EventOptions::active(),
                move |ev: WheelEvent| {
                    let input = InputEvent::Wheel(WheelInput {
                        client: client_point(&ev),
                        delta_y: ev.delta_y(),
                    });
                    dispatch(&controller, ev.as_ref(), input);
                },
            ));
        }

        if config.drag_pan_enabled {
            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                container_target,
                leptos::ev::mousedown,
                &EventOptions::active(),
                move |ev: MouseEvent| {
                    let input = InputEvent::MouseDown(PointerInput {
                        client: client_point(&ev),
                        button: ev.button(),
                        on_controls: is_control_target(ev.as_ref()),
                    });
                    dispatch(&controller, ev.as_ref(), input);
                },
            ));

            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                document_target,
                leptos::ev::mousemove,
                &EventOptions::active(),
                move |ev: MouseEvent| {
                    dispatch(&controller, ev.as_ref(), InputEvent::MouseMove(client_point(&ev)));
                },
            ));

            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                document_target,
                leptos::ev::mouseup,
                &EventOptions::default(),
                move |ev: MouseEvent| dispatch(&controller, ev.as_ref(), InputEvent::MouseUp),
            ));

            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                container_target,
                leptos::ev::touchstart,
                &EventOptions::active(),
                move |ev: TouchEvent| {
                    let input = InputEvent::TouchStart(touch_input(&ev));
                    dispatch(&controller, ev.as_ref(), input);
                },
            ));

            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                document_target,
                leptos::ev::touchmove,
                &EventOptions::active(),
                move |ev: TouchEvent| {
                    let input = InputEvent::TouchMove(touch_input(&ev));
                    dispatch(&controller, ev.as_ref(), input);
                },
            ));

            let controller = Rc::clone(&self.controller);
            self.listeners.push(listen(
                document_target,
                leptos::ev::touchend,
                &EventOptions::default(),
                move |ev: TouchEvent| dispatch(&controller, ev.as_ref(), InputEvent::TouchEnd),
            ));
        }

        let controller = Rc::clone(&self.controller);
        self.listeners.push(listen(
            window_target,
            leptos::ev::resize,
            &EventOptions::default(),
            move |ev: UiEvent| dispatch(&controller, ev.as_ref(), InputEvent::Resize),
        ));

        Ok(())
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn transform(&self) -> Transform {
        self.controller.borrow().transform()
    }

    /// Container cursor hint used by the graph page factory.
    pub fn show_grab_cursor(&self) {
        self.controller.borrow().surface().show_grab_cursor();
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().is_dragging()
    }

    /// Names of the events currently listened to, in attach order.
    pub fn listened_events(&self) -> Vec<&str> {
        self.listeners.iter().map(EventListenerHandle::event_name).collect()
    }

    pub fn is_disposed(&self) -> bool {
        self.listeners.is_empty() && self.mounted_controls.is_none()
    }

    /// Run a command from the control surface. Ignored once disposed.
    pub fn execute(&self, command: ControlCommand) {
        if self.is_disposed() {
            return;
        }
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.execute(command);
        }
    }

    /// Detach every listener and remove the control cluster this session
    /// mounted. The wrapper and its content stay in place. Idempotent.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.end_gesture();
        }
        let detached = self.listeners.len();
        self.listeners.clear();
        if let Some(controls) = self.mounted_controls.take() {
            controls.remove();
        }
        log_info!(
            LogComponent::Application("Session"),
            "viewport on '{}' disposed, {} listeners detached",
            self.container_id,
            detached
        );
    }
}

impl Drop for ViewportSession {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for ViewportSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportSession")
            .field("container_id", &self.container_id)
            .field("listeners", &self.listeners.len())
            .field("transform", &self.controller.try_borrow().map(|c| c.transform()).ok())
            .finish()
    }
}

/// Buttons hold a weak handle so a dropped session makes them inert.
fn command_callback(controller: Weak<RefCell<ViewportController<DomSurface>>>) -> Callback<ControlCommand> {
    Callback::new(move |command: ControlCommand| {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        if let Ok(mut controller) = controller.try_borrow_mut() {
            log_debug!(LogComponent::Application("Controls"), "{} pressed", command);
            controller.execute(command);
        }
    })
}

fn dispatch(controller: &SharedController, event: &Event, input: InputEvent) {
    let Ok(mut controller) = controller.try_borrow_mut() else {
        return;
    };
    if controller.handle(&input).prevent_default {
        event.prevent_default();
    }
}

fn client_point(ev: &MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn touch_input(ev: &TouchEvent) -> TouchInput {
    let touches = ev.touches();
    TouchInput {
        contacts: touches.length(),
        primary: touches.item(0).map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64)),
        on_controls: is_control_target(ev.as_ref()),
    }
}
