//! Load-time services the host loader hands to markup extensions.
//!
//! When the loader encounters an extension at a use-site it does not expose
//! its internals; it passes a capability bundle ([`LoadServices`]) from which
//! the extension may request the ambient scope enumeration and the requesting
//! element. Either capability may be absent — extensions degrade rather than
//! fail when one is missing.

use trellis_style::ScopeHandle;

use crate::Result;
use crate::tree::{ElementId, ElementRef, ElementTree};

/// Ordered enumeration of the resource scopes visible at a parse point.
///
/// The order is owned by the implementation: callers consult scopes in
/// exactly the order returned and attach no inner/outer meaning to it.
pub trait AmbientScopes {
    /// The scopes visible from the current parse point.
    ///
    /// An `Err` means the enumeration itself failed; it surfaces unchanged
    /// to whoever requested resolution.
    fn visible_scopes(&self) -> Result<Vec<ScopeHandle>>;
}

/// The capability bundle available to a markup extension at its use-site.
pub trait LoadServices {
    /// The ambient scope enumeration service, if this host provides one.
    fn ambient_scopes(&self) -> Option<&dyn AmbientScopes>;

    /// The element whose property is being assigned, if known.
    fn target(&self) -> Option<ElementRef<'_>>;
}

/// A value producer evaluated once per use-site during loading.
///
/// The loader constructs the extension from the description, calls
/// [`MarkupExtension::provide_value`] exactly once, and binds the result to
/// the property that referenced it.
pub trait MarkupExtension {
    /// The value type this extension produces.
    type Output;

    /// Produce the value to bind at the use-site.
    fn provide_value(&self, services: &dyn LoadServices) -> Result<Self::Output>;
}

/// The standard [`AmbientScopes`] implementation: a stack of scopes pushed as
/// the loader descends nested declarations and popped on the way back out.
///
/// Lookups run in push order.
#[derive(Default)]
pub struct ScopeStack {
    scopes: Vec<ScopeHandle>,
}

impl ScopeStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a scope. It is consulted after every scope already pushed.
    pub fn push(&mut self, scope: ScopeHandle) {
        self.scopes.push(scope);
    }

    /// Pop the most recently pushed scope.
    pub fn pop(&mut self) -> Option<ScopeHandle> {
        self.scopes.pop()
    }

    /// Number of scopes on the stack.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Check whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl AmbientScopes for ScopeStack {
    fn visible_scopes(&self) -> Result<Vec<ScopeHandle>> {
        Ok(self.scopes.clone())
    }
}

/// The standard [`LoadServices`] bundle: an optional scope enumeration plus
/// an optional requesting element.
#[derive(Default, Clone, Copy)]
pub struct LoaderContext<'a> {
    ambient: Option<&'a dyn AmbientScopes>,
    target: Option<(&'a ElementTree, ElementId)>,
}

impl<'a> LoaderContext<'a> {
    /// Create a context with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the ambient scope enumeration service.
    pub fn with_ambient_scopes(mut self, scopes: &'a dyn AmbientScopes) -> Self {
        self.ambient = Some(scopes);
        self
    }

    /// Attach the requesting element.
    pub fn with_target(mut self, tree: &'a ElementTree, element: ElementId) -> Self {
        self.target = Some((tree, element));
        self
    }
}

impl LoadServices for LoaderContext<'_> {
    fn ambient_scopes(&self) -> Option<&dyn AmbientScopes> {
        self.ambient
    }

    fn target(&self) -> Option<ElementRef<'_>> {
        let (tree, id) = self.target?;
        match tree.element(id) {
            Ok(element) => Some(element),
            Err(_) => {
                tracing::debug!("Load target {:?} is not in the tree", id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trellis_style::{Color, ResourceDictionary, Style, StyleSource};

    #[test]
    fn scope_stack_enumerates_in_push_order() {
        let mut first = ResourceDictionary::new();
        first.insert("Base", Style::new().with_setter("color", Color::RED));
        let mut second = ResourceDictionary::new();
        second.insert("Base", Style::new().with_setter("color", Color::BLUE));

        let mut stack = ScopeStack::new();
        stack.push(Arc::new(first));
        stack.push(Arc::new(second));

        let scopes = stack.visible_scopes().unwrap();
        assert_eq!(scopes.len(), 2);

        // First-pushed scope answers first.
        let style = scopes[0].lookup("Base").unwrap();
        assert_eq!(style.get("color").unwrap().as_color(), Some(&Color::RED));
    }

    #[test]
    fn scope_stack_pops_most_recent() {
        let mut stack = ScopeStack::new();
        assert!(stack.is_empty());

        stack.push(Arc::new(ResourceDictionary::new()));
        stack.push(Arc::new(ResourceDictionary::new()));
        assert_eq!(stack.len(), 2);

        assert!(stack.pop().is_some());
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn empty_context_has_no_capabilities() {
        let ctx = LoaderContext::new();
        assert!(ctx.ambient_scopes().is_none());
        assert!(ctx.target().is_none());
    }

    #[test]
    fn context_degrades_on_stale_target() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();

        let other = ElementTree::new();
        let ctx = LoaderContext::new().with_target(&other, root);
        assert!(ctx.target().is_none());

        let ctx = LoaderContext::new().with_target(&tree, root);
        assert!(ctx.target().is_some());
    }
}
