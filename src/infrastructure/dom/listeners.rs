use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::domain::logging::LogComponent;
use crate::log_warn;

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

impl EventOptions {
    /// Options for handlers that may call `preventDefault`.
    pub fn active() -> Self {
        Self { passive: false, ..Self::default() }
    }
}

/// A registered listener. Dropping the handle detaches it from its target.
pub struct EventListenerHandle {
    target: EventTarget,
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl EventListenerHandle {
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

impl std::fmt::Debug for EventListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListenerHandle")
            .field("event_name", &self.event_name)
            .field("capture", &self.capture)
            .finish()
    }
}

/// Attach a typed listener to any event target (element, document, window).
pub fn listen<E>(
    target: &EventTarget,
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> EventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        )
        .is_err()
    {
        log_warn!(LogComponent::Infrastructure("Listeners"), "failed to attach '{}' listener", event_name);
    }

    EventListenerHandle { target: target.clone(), event_name, callback, capture: options.capture }
}
