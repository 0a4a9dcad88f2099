/// Failures that can stop a viewport from attaching.
///
/// Every runtime operation on an attached viewport is total; only
/// construction can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// No element with the given id exists in the document.
    MissingContainer(String),
    /// A browser DOM call rejected the request while building the wrapper
    /// or controls.
    BrowserApi(String),
}

impl std::fmt::Display for ViewportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportError::MissingContainer(id) => {
                write!(f, "Container with ID '{}' not found", id)
            }
            ViewportError::BrowserApi(msg) => write!(f, "Browser API Error: {}", msg),
        }
    }
}

impl std::error::Error for ViewportError {}

pub type ViewportResult<T> = Result<T, ViewportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_container_names_the_id() {
        let err = ViewportError::MissingContainer("flow-graph".into());
        assert_eq!(err.to_string(), "Container with ID 'flow-graph' not found");
    }
}
