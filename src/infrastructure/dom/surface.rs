use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::domain::errors::{ViewportError, ViewportResult};
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{ContainerRect, ContentSurface, Transform};
use crate::log_warn;

/// Class of the wrapper that receives every transform.
pub const TRANSFORM_CONTAINER_CLASS: &str = "graph-transform-container";
/// Class of the zoom control cluster; never transformed or reparented.
pub const CONTROLS_CLASS: &str = "graph-controls";

const WRAPPER_STYLE: [(&str, &str); 6] = [
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("transform-origin", "0 0"),
];

/// Look up the container element by id.
pub fn find_container(container_id: &str) -> ViewportResult<HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ViewportError::MissingContainer(container_id.to_string()))
}

/// Direct child of `parent` carrying `class`, if any.
pub fn find_child_with_class(parent: &Element, class: &str) -> Option<Element> {
    element_children(parent).into_iter().find(|child| child.class_list().contains(class))
}

/// Whether the event originated inside the zoom control cluster.
pub fn is_control_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(&format!(".{}", CONTROLS_CLASS)).ok().flatten())
        .is_some()
}

/// Snapshot of the element children; `children()` is a live collection.
fn element_children(parent: &Element) -> Vec<Element> {
    let children = parent.children();
    (0..children.length()).filter_map(|i| children.item(i)).collect()
}

fn browser_error(action: &str) -> impl Fn(wasm_bindgen::JsValue) -> ViewportError + '_ {
    move |err| ViewportError::BrowserApi(format!("{}: {:?}", action, err))
}

/// The container plus the wrapper that all transforms are written to.
#[derive(Debug, Clone)]
pub struct DomSurface {
    container: HtmlElement,
    wrapper: HtmlElement,
}

impl DomSurface {
    /// Take ownership of the container's content.
    ///
    /// Postconditions: the container has a direct child with class
    /// [`TRANSFORM_CONTAINER_CLASS`] (reused if already present), and every
    /// other child except the [`CONTROLS_CLASS`] cluster has been moved into
    /// it, preserving document order.
    pub fn adopt(container: HtmlElement) -> ViewportResult<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| ViewportError::BrowserApi("container has no owner document".into()))?;

        let wrapper = match find_child_with_class(&container, TRANSFORM_CONTAINER_CLASS) {
            Some(existing) => existing
                .dyn_into::<HtmlElement>()
                .map_err(|_| ViewportError::BrowserApi("wrapper is not an HTML element".into()))?,
            None => Self::create_wrapper(&document)?,
        };

        let wrapper_node: &Node = wrapper.as_ref();
        for child in element_children(&container) {
            if child.is_same_node(Some(wrapper_node)) || child.class_list().contains(CONTROLS_CLASS) {
                continue;
            }
            wrapper.append_child(&child).map_err(browser_error("reparent child"))?;
        }

        let container_node: &Node = container.as_ref();
        let attached = wrapper
            .parent_node()
            .map(|parent| parent.is_same_node(Some(container_node)))
            .unwrap_or(false);
        if !attached {
            container.append_child(&wrapper).map_err(browser_error("attach wrapper"))?;
        }

        Ok(Self { container, wrapper })
    }

    fn create_wrapper(document: &Document) -> ViewportResult<HtmlElement> {
        let wrapper = document
            .create_element("div")
            .map_err(browser_error("create wrapper"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewportError::BrowserApi("wrapper is not an HTML element".into()))?;
        wrapper.set_class_name(TRANSFORM_CONTAINER_CLASS);
        let style = wrapper.style();
        for (property, value) in WRAPPER_STYLE {
            style.set_property(property, value).map_err(browser_error("style wrapper"))?;
        }
        Ok(wrapper)
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn wrapper(&self) -> &HtmlElement {
        &self.wrapper
    }

    /// Show the draggable cursor on the container.
    pub fn show_grab_cursor(&self) {
        self.set_cursor("grab");
    }

    fn set_cursor(&self, cursor: &str) {
        if self.container.style().set_property("cursor", cursor).is_err() {
            log_warn!(LogComponent::Infrastructure("DomSurface"), "failed to set cursor '{}'", cursor);
        }
    }
}

impl ContentSurface for DomSurface {
    fn bounding_rect(&self) -> ContainerRect {
        let rect = self.container.get_bounding_client_rect();
        ContainerRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn apply_transform(&self, transform: &Transform) {
        if self.wrapper.style().set_property("transform", &transform.to_css()).is_err() {
            log_warn!(LogComponent::Infrastructure("DomSurface"), "failed to apply {}", transform.to_css());
        }
    }

    fn set_grabbing(&self, grabbing: bool) {
        self.set_cursor(if grabbing { "grabbing" } else { "grab" });
    }
}
