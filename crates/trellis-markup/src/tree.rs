//! The element tree that anchors fallback resource lookup.
//!
//! Loaded UI descriptions produce a tree of elements, each carrying its own
//! [`ResourceDictionary`]. When a style resource reference cannot be satisfied
//! from the loader's ambient scopes, the requesting element's resolution
//! context answers instead: the element's own dictionary, then its ancestors
//! outward, then the tree-level application resources.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use slotmap::{SlotMap, new_key_type};

use trellis_style::{ResourceDictionary, Style};

use crate::{Error, Result};

new_key_type! {
    /// Identifier for an element in an [`ElementTree`].
    pub struct ElementId;
}

#[derive(Debug, Default)]
struct ElementNode {
    name: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    resources: ResourceDictionary,
}

/// An arena of elements with parent/child links and per-element resources.
#[derive(Debug, Default)]
pub struct ElementTree {
    nodes: SlotMap<ElementId, ElementNode>,
    application_resources: ResourceDictionary,
}

impl ElementTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with no parent.
    pub fn create_root(&mut self) -> ElementId {
        self.nodes.insert(ElementNode::default())
    }

    /// Create an element as a child of `parent`.
    pub fn create_child(&mut self, parent: ElementId) -> Result<ElementId> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::element_not_found(parent));
        }
        let id = self.nodes.insert(ElementNode {
            parent: Some(parent),
            ..ElementNode::default()
        });
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Check whether an id refers to a live element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set an element's name.
    pub fn set_name(&mut self, id: ElementId, name: impl Into<String>) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(Error::element_not_found(id))?;
        node.name = Some(name.into());
        Ok(())
    }

    /// Get an element's name.
    pub fn name(&self, id: ElementId) -> Result<Option<&str>> {
        let node = self.nodes.get(id).ok_or(Error::element_not_found(id))?;
        Ok(node.name.as_deref())
    }

    /// Get an element's parent.
    pub fn parent(&self, id: ElementId) -> Result<Option<ElementId>> {
        let node = self.nodes.get(id).ok_or(Error::element_not_found(id))?;
        Ok(node.parent)
    }

    /// Get an element's children, in creation order.
    pub fn children(&self, id: ElementId) -> Result<&[ElementId]> {
        let node = self.nodes.get(id).ok_or(Error::element_not_found(id))?;
        Ok(&node.children)
    }

    /// Get an element's resource dictionary.
    pub fn resources(&self, id: ElementId) -> Result<&ResourceDictionary> {
        let node = self.nodes.get(id).ok_or(Error::element_not_found(id))?;
        Ok(&node.resources)
    }

    /// Get mutable access to an element's resource dictionary.
    pub fn resources_mut(&mut self, id: ElementId) -> Result<&mut ResourceDictionary> {
        let node = self.nodes.get_mut(id).ok_or(Error::element_not_found(id))?;
        Ok(&mut node.resources)
    }

    /// The tree-level application resources, consulted after every element's
    /// ancestor chain.
    pub fn application_resources(&self) -> &ResourceDictionary {
        &self.application_resources
    }

    /// Mutable access to the application resources.
    pub fn application_resources_mut(&mut self) -> &mut ResourceDictionary {
        &mut self.application_resources
    }

    /// Resolve a style resource from an element's context.
    ///
    /// Walks the element's own dictionary, then its ancestors outward, then
    /// the application resources. Returns `None` when nothing binds `key`, or
    /// when `id` no longer refers to a live element.
    pub fn try_find_resource(&self, id: ElementId, key: &str) -> Option<Style> {
        if !self.nodes.contains_key(id) {
            tracing::debug!("Resource lookup for '{}' from element {:?} not in tree", key, id);
            return None;
        }

        let mut current = Some(id);
        while let Some(element) = current {
            let node = &self.nodes[element];
            if let Some(style) = node.resources.get(key) {
                return Some(style.clone());
            }
            current = node.parent;
        }

        self.application_resources.get(key).cloned()
    }

    /// Borrow an element as an [`ElementRef`].
    pub fn element(&self, id: ElementId) -> Result<ElementRef<'_>> {
        if !self.nodes.contains_key(id) {
            return Err(Error::element_not_found(id));
        }
        Ok(ElementRef { tree: self, id })
    }
}

/// A borrowed (tree, element) pair — the "requesting element" handle passed
/// to markup extensions at load time.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a ElementTree,
    id: ElementId,
}

impl<'a> ElementRef<'a> {
    /// The element's id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The tree the element lives in.
    pub fn tree(&self) -> &'a ElementTree {
        self.tree
    }

    /// Resolve a style resource from this element's context.
    pub fn try_find_resource(&self, key: &str) -> Option<Style> {
        self.tree.try_find_resource(self.id, key)
    }
}

/// An element tree behind a reader/writer lock, for hosts that load several
/// descriptions in parallel.
///
/// Resolution only ever takes read access; the lock exists so such hosts can
/// still mutate the tree between load passes.
#[derive(Debug, Clone, Default)]
pub struct SharedElementTree {
    inner: Arc<RwLock<ElementTree>>,
}

impl SharedElementTree {
    /// Wrap a tree for shared access.
    pub fn new(tree: ElementTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Acquire read access.
    pub fn read(&self) -> RwLockReadGuard<'_, ElementTree> {
        self.inner.read()
    }

    /// Acquire write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, ElementTree> {
        self.inner.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_style::{Color, StyleValue};

    fn style_with_color(color: Color) -> Style {
        Style::new().with_setter("color", color)
    }

    #[test]
    fn create_child_links_parent() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();
        let child = tree.create_child(root).unwrap();

        assert_eq!(tree.parent(child).unwrap(), Some(root));
        assert_eq!(tree.children(root).unwrap(), &[child]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn create_child_of_unknown_parent_fails() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();

        let mut other = ElementTree::new();
        assert!(matches!(
            other.create_child(root),
            Err(Error::ElementNotFound { .. })
        ));
    }

    #[test]
    fn find_resource_prefers_own_dictionary() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();
        let child = tree.create_child(root).unwrap();

        tree.resources_mut(root)
            .unwrap()
            .insert("Base", style_with_color(Color::RED));
        tree.resources_mut(child)
            .unwrap()
            .insert("Base", style_with_color(Color::BLUE));

        let found = tree.try_find_resource(child, "Base").unwrap();
        assert_eq!(found.get("color"), Some(&StyleValue::Color(Color::BLUE)));
    }

    #[test]
    fn find_resource_walks_ancestors_then_application() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();
        let child = tree.create_child(root).unwrap();
        let grandchild = tree.create_child(child).unwrap();

        tree.resources_mut(root)
            .unwrap()
            .insert("Base", style_with_color(Color::RED));
        tree.application_resources_mut()
            .insert("Accent", style_with_color(Color::GREEN));

        let base = tree.try_find_resource(grandchild, "Base").unwrap();
        assert_eq!(base.get("color"), Some(&StyleValue::Color(Color::RED)));

        let accent = tree.try_find_resource(grandchild, "Accent").unwrap();
        assert_eq!(accent.get("color"), Some(&StyleValue::Color(Color::GREEN)));

        assert!(tree.try_find_resource(grandchild, "missing").is_none());
    }

    #[test]
    fn element_ref_resolves_from_context() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();
        tree.resources_mut(root)
            .unwrap()
            .insert("Base", style_with_color(Color::RED));

        let element = tree.element(root).unwrap();
        assert!(element.try_find_resource("Base").is_some());
        assert!(element.try_find_resource("missing").is_none());
    }

    #[test]
    fn names_round_trip() {
        let mut tree = ElementTree::new();
        let root = tree.create_root();
        assert_eq!(tree.name(root).unwrap(), None);

        tree.set_name(root, "window").unwrap();
        assert_eq!(tree.name(root).unwrap(), Some("window"));
    }
}
