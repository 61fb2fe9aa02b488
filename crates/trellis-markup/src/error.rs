//! Error types for the loader integration layer.

use crate::tree::ElementId;

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during load-time resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host's ambient scope service failed to enumerate its scopes.
    #[error("Ambient scope enumeration failed: {message}")]
    ScopeEnumeration { message: String },

    /// An element id does not refer to a live element in the tree.
    #[error("Element {id:?} is not in the tree")]
    ElementNotFound { id: ElementId },
}

impl Error {
    /// Create a scope enumeration error.
    pub fn scope_enumeration(message: impl Into<String>) -> Self {
        Self::ScopeEnumeration {
            message: message.into(),
        }
    }

    /// Create an element-not-found error.
    pub fn element_not_found(id: ElementId) -> Self {
        Self::ElementNotFound { id }
    }
}
