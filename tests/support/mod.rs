#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use graph_viewport_wasm::{
    ContainerRect, ContentSurface, Point, Transform, ViewportConfig, ViewportController,
};

/// In-memory surface that records every transform pushed to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub rect: Cell<ContainerRect>,
    pub applied: RefCell<Vec<Transform>>,
    pub grabbing: Cell<Option<bool>>,
}

impl RecordingSurface {
    pub fn sized(width: f64, height: f64) -> Rc<Self> {
        Self::placed(0.0, 0.0, width, height)
    }

    pub fn placed(left: f64, top: f64, width: f64, height: f64) -> Rc<Self> {
        let surface = Self::default();
        surface.rect.set(ContainerRect::new(left, top, width, height));
        Rc::new(surface)
    }

    pub fn apply_count(&self) -> usize {
        self.applied.borrow().len()
    }

    pub fn last_applied(&self) -> Option<Transform> {
        self.applied.borrow().last().copied()
    }
}

impl ContentSurface for RecordingSurface {
    fn bounding_rect(&self) -> ContainerRect {
        self.rect.get()
    }

    fn apply_transform(&self, transform: &Transform) {
        self.applied.borrow_mut().push(*transform);
    }

    fn set_grabbing(&self, grabbing: bool) {
        self.grabbing.set(Some(grabbing));
    }
}

pub type TestController = ViewportController<Rc<RecordingSurface>>;

/// Controller over an 800x600 container at the page origin.
pub fn controller(config: ViewportConfig) -> (TestController, Rc<RecordingSurface>) {
    let surface = RecordingSurface::sized(800.0, 600.0);
    (ViewportController::new(Rc::clone(&surface), config), surface)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

pub fn approx_point(a: Point, b: Point) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}
