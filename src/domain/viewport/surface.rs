use super::value_objects::{ContainerRect, Transform};

/// The content region a controller drives.
///
/// Implemented by the DOM wrapper in the browser and by recording doubles
/// in tests.
pub trait ContentSurface {
    /// Current bounding box of the container. Queried fresh on every zoom
    /// because layout can change between events.
    fn bounding_rect(&self) -> ContainerRect;

    fn apply_transform(&self, transform: &Transform);

    /// Cursor feedback while a drag is in progress.
    fn set_grabbing(&self, _grabbing: bool) {}
}

impl<S: ContentSurface + ?Sized> ContentSurface for std::rc::Rc<S> {
    fn bounding_rect(&self) -> ContainerRect {
        (**self).bounding_rect()
    }

    fn apply_transform(&self, transform: &Transform) {
        (**self).apply_transform(transform)
    }

    fn set_grabbing(&self, grabbing: bool) {
        (**self).set_grabbing(grabbing)
    }
}
