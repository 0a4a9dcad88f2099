use super::input::{EventOutcome, InputEvent, PRIMARY_BUTTON, PointerInput, TouchInput, WheelInput};
use super::surface::ContentSurface;
use super::value_objects::{ControlCommand, Point, Transform, ViewportConfig};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Transient drag gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_pointer: Point,
}

/// Domain entity - pan/zoom state machine over a content surface.
///
/// Owns the [`Transform`] and [`DragState`]; every change is pushed to the
/// surface before the mutating method returns.
#[derive(Debug)]
pub struct ViewportController<S: ContentSurface> {
    config: ViewportConfig,
    transform: Transform,
    drag: DragState,
    surface: S,
}

impl<S: ContentSurface> ViewportController<S> {
    /// Start at the identity transform and apply it to `surface` once.
    pub fn new(surface: S, config: ViewportConfig) -> Self {
        let controller = Self {
            config: config.sanitized(),
            transform: Transform::IDENTITY,
            drag: DragState::default(),
            surface,
        };
        controller.apply();
        controller
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Change scale by `delta`, keeping the content under `anchor` fixed.
    ///
    /// Returns `false` without touching the surface when the clamped scale
    /// equals the current one.
    pub fn zoom_by(&mut self, delta: f64, anchor: Point) -> bool {
        if !delta.is_finite() || !anchor.is_finite() {
            return false;
        }
        let old_scale = self.transform.scale;
        let new_scale = self.config.clamp_scale(old_scale + delta);
        if new_scale == old_scale {
            log_trace!(LogComponent::Domain("Viewport"), "zoom clamped at {}", old_scale);
            return false;
        }
        self.transform = self.transform.zoomed_about(new_scale, anchor);
        self.apply();
        true
    }

    /// Zoom one step toward the container center.
    pub fn zoom_in(&mut self) -> bool {
        let center = self.surface.bounding_rect().center();
        self.zoom_by(self.config.zoom_factor, center)
    }

    /// Zoom one step away from the container center.
    pub fn zoom_out(&mut self) -> bool {
        let center = self.surface.bounding_rect().center();
        self.zoom_by(-self.config.zoom_factor, center)
    }

    /// Translate the content. Panning is unbounded.
    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) {
        if !delta_x.is_finite() || !delta_y.is_finite() {
            return;
        }
        self.transform = self.transform.panned(delta_x, delta_y);
        self.apply();
    }

    /// Back to identity, even when 1.0 lies outside the configured bounds.
    pub fn reset(&mut self) {
        self.transform = Transform::IDENTITY;
        self.apply();
    }

    pub fn execute(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::ZoomIn => {
                self.zoom_in();
            }
            ControlCommand::ZoomOut => {
                self.zoom_out();
            }
            ControlCommand::Reset => self.reset(),
        }
    }

    /// Reassert the current transform after the container was resized.
    pub fn on_resize(&self) {
        self.apply();
    }

    pub fn handle(&mut self, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::Wheel(wheel) => self.on_wheel(wheel),
            InputEvent::MouseDown(pointer) => self.on_mouse_down(pointer),
            InputEvent::MouseMove(client) => self.on_mouse_move(*client),
            InputEvent::TouchStart(touch) => self.on_touch_start(touch),
            InputEvent::TouchMove(touch) => self.on_touch_move(touch),
            InputEvent::MouseUp | InputEvent::TouchEnd => {
                self.end_gesture();
                EventOutcome::PASS
            }
            InputEvent::Resize => {
                self.on_resize();
                EventOutcome::PASS
            }
        }
    }

    /// One discrete zoom step per wheel event, anchored at the cursor.
    ///
    /// Scrolling is suppressed whenever wheel zoom is enabled, including
    /// steps that hit a scale bound.
    pub fn on_wheel(&mut self, wheel: &WheelInput) -> EventOutcome {
        if !self.config.wheel_zoom_enabled {
            return EventOutcome::PASS;
        }
        let delta = if wheel.delta_y < 0.0 { self.config.zoom_factor } else { -self.config.zoom_factor };
        let anchor = self.surface.bounding_rect().to_local(wheel.client);
        self.zoom_by(delta, anchor);
        EventOutcome::CONSUMED
    }

    pub fn on_mouse_down(&mut self, pointer: &PointerInput) -> EventOutcome {
        if !self.config.drag_pan_enabled || pointer.button != PRIMARY_BUTTON || pointer.on_controls {
            return EventOutcome::PASS;
        }
        self.begin_gesture(pointer.client);
        EventOutcome::CONSUMED
    }

    pub fn on_mouse_move(&mut self, client: Point) -> EventOutcome {
        if !self.drag.is_dragging {
            return EventOutcome::PASS;
        }
        self.track_gesture(client);
        EventOutcome::CONSUMED
    }

    pub fn on_touch_start(&mut self, touch: &TouchInput) -> EventOutcome {
        if !self.config.drag_pan_enabled || touch.on_controls {
            return EventOutcome::PASS;
        }
        match touch.single_contact() {
            Some(client) => {
                self.begin_gesture(client);
                EventOutcome::CONSUMED
            }
            None => EventOutcome::PASS,
        }
    }

    pub fn on_touch_move(&mut self, touch: &TouchInput) -> EventOutcome {
        if !self.drag.is_dragging {
            return EventOutcome::PASS;
        }
        match touch.single_contact() {
            Some(client) => {
                self.track_gesture(client);
                EventOutcome::CONSUMED
            }
            None => EventOutcome::PASS,
        }
    }

    /// Leave the dragging state. Safe to call while idle.
    pub fn end_gesture(&mut self) {
        let was_dragging = self.drag.is_dragging;
        self.drag.is_dragging = false;
        if was_dragging {
            log_debug!(LogComponent::Domain("Viewport"), "drag ended at {:?}", self.transform.offset());
            self.surface.set_grabbing(false);
        }
    }

    fn begin_gesture(&mut self, client: Point) {
        self.drag = DragState { is_dragging: true, last_pointer: client };
        self.surface.set_grabbing(true);
        log_debug!(LogComponent::Domain("Viewport"), "drag started at ({}, {})", client.x, client.y);
    }

    fn track_gesture(&mut self, client: Point) {
        let delta_x = client.x - self.drag.last_pointer.x;
        let delta_y = client.y - self.drag.last_pointer.y;
        self.pan_by(delta_x, delta_y);
        self.drag.last_pointer = client;
    }

    fn apply(&self) {
        self.surface.apply_transform(&self.transform);
    }
}
