//! Browser DOM adapters for the viewport controller.

pub mod controls;
pub mod listeners;
pub mod surface;

pub use controls::{ZoomControls, mount_controls};
pub use listeners::{EventListenerHandle, EventOptions, listen};
pub use surface::{
    CONTROLS_CLASS, DomSurface, TRANSFORM_CONTAINER_CLASS, find_child_with_class, find_container,
    is_control_target,
};
