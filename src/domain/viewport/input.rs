//! Device-independent input events consumed by the controller.
//!
//! The DOM layer translates browser events into these values; the
//! controller never touches `web_sys` types directly.

use super::value_objects::Point;

/// `MouseEvent.button` value of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Position in page viewport (client) coordinates.
    pub client: Point,
    pub button: i16,
    /// The event target sits inside the zoom control cluster.
    pub on_controls: bool,
}

impl PointerInput {
    pub fn primary(client: Point) -> Self {
        Self { client, button: PRIMARY_BUTTON, on_controls: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchInput {
    /// Number of active contact points on the surface.
    pub contacts: u32,
    /// Client position of the first contact, if any.
    pub primary: Option<Point>,
    pub on_controls: bool,
}

impl TouchInput {
    pub fn single(client: Point) -> Self {
        Self { contacts: 1, primary: Some(client), on_controls: false }
    }

    /// Position of the sole contact, or `None` for multi-touch.
    pub fn single_contact(&self) -> Option<Point> {
        if self.contacts == 1 { self.primary } else { None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub client: Point,
    /// Vertical scroll delta; negative means scrolling up (zoom in).
    pub delta_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel(WheelInput),
    MouseDown(PointerInput),
    MouseMove(Point),
    MouseUp,
    TouchStart(TouchInput),
    TouchMove(TouchInput),
    TouchEnd,
    Resize,
}

/// What the DOM layer should do with the originating browser event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub prevent_default: bool,
}

impl EventOutcome {
    /// Let the browser handle the event normally.
    pub const PASS: EventOutcome = EventOutcome { prevent_default: false };
    /// Suppress text selection, page scroll, and similar defaults.
    pub const CONSUMED: EventOutcome = EventOutcome { prevent_default: true };
}
