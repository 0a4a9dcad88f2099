//! Viewport aggregate: transform math, input model, and the controller.

pub mod entities;
pub mod input;
pub mod surface;
pub mod value_objects;

pub use entities::*;
pub use input::*;
pub use surface::*;
pub use value_objects::*;
