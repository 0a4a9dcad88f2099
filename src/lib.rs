use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::errors::{ViewportError, ViewportResult};
pub use domain::viewport::{
    ContainerRect, ContentSurface, ControlCommand, DragState, EventOutcome, InputEvent, Point,
    PointerInput, TouchInput, Transform, ViewportConfig, ViewportController, WheelInput,
};

/// Install logging and panic reporting when the module loads
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🔍 graph viewport module ready");
}
