//! Arena-backed element tree.

use log::trace;
use thiserror::Error;

use super::node::{Element, ElementKind, NodeId, Rect};

/// Errors raised by structural tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("{0} does not belong to this document")]
    UnknownNode(NodeId),
    #[error("cannot append {child} under {parent}: {child} is an ancestor of {parent}")]
    HierarchyCycle { parent: NodeId, child: NodeId },
}

/// An element tree.
///
/// Elements live in an arena and are addressed by [`NodeId`]. The first
/// element created with [`Document::new`] is the root (`body`); other
/// elements stay detached until appended somewhere.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document containing only a root `div`.
    pub fn new() -> Self {
        let mut root = Element::new(ElementKind::Div);
        root.id = Some("body".to_string());
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, kind: ElementKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(kind));
        id
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0)
    }

    fn get(&self, id: NodeId) -> Result<&Element, DomError> {
        self.element(id).ok_or(DomError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        self.element_mut(id).ok_or(DomError::UnknownNode(id))
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) -> Result<(), DomError> {
        self.get_mut(node)?.id = Some(id.to_string());
        Ok(())
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), DomError> {
        let element = self.get_mut(node)?;
        if !element.has_class(class) {
            element.class_list.push(class.to_string());
        }
        Ok(())
    }

    /// Sets a custom data attribute (`data-<key>`).
    pub fn set_data(&mut self, node: NodeId, key: &str, value: &str) -> Result<(), DomError> {
        self.get_mut(node)?
            .dataset
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn set_bounds(&mut self, node: NodeId, bounds: Rect) -> Result<(), DomError> {
        self.get_mut(node)?.bounds = bounds;
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(Element::parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map(Element::children).unwrap_or(&[])
    }

    /// Whether `node` is `ancestor` itself or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Appends `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.get(parent)?;
        self.get(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyCycle { parent, child });
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        trace!("Appended {} under {}", child, parent);
        Ok(())
    }

    /// Appends several children in one call, preserving their order.
    ///
    /// All ids are validated before any of them is attached, so a failing
    /// batch leaves the tree untouched.
    pub fn append(&mut self, parent: NodeId, children: &[NodeId]) -> Result<(), DomError> {
        self.get(parent)?;
        for &child in children {
            self.get(child)?;
            if self.contains(child, parent) {
                return Err(DomError::HierarchyCycle { parent, child });
            }
        }
        for &child in children {
            self.append_child(parent, child)?;
        }
        Ok(())
    }

    /// Detaches `node` (with its subtree) from its parent.
    ///
    /// Detached elements stay in the arena but are no longer reachable from
    /// the root, so they never receive hit tests. Removing a node without a
    /// parent is a no-op.
    pub fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.get(node)?;
        self.detach(node);
        Ok(())
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(old_parent) = self.nodes[node.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&c| c != node);
        }
    }

    /// Returns the path from the outermost ancestor down to `node` inclusive.
    pub fn composed_path(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.element(node).map(|_| node);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        path.reverse();
        path
    }

    /// Depth-first, document-order walk of the subtree rooted at `node`.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if self.element(id).is_none() {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Finds the first attached element matching a simple selector.
    ///
    /// Supported selectors: `#id`, `.class` and a bare tag name.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// Finds every attached element matching a simple selector, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = selector.trim();
        let matches = |element: &Element| {
            if let Some(id) = selector.strip_prefix('#') {
                element.id.as_deref() == Some(id)
            } else if let Some(class) = selector.strip_prefix('.') {
                element.has_class(class)
            } else {
                ElementKind::from_tag_name(selector) == Some(element.kind)
            }
        };
        self.descendants(self.root)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(matches))
            .collect()
    }

    /// Returns the innermost attached element whose bounds contain the point.
    ///
    /// Children are stacked above their parent and later siblings above
    /// earlier ones. A child is only considered when its parent contains the
    /// point. A root with empty bounds covers the whole plane, like a page
    /// that catches every click no other element claims.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<NodeId> {
        let root = self.element(self.root)?;
        if !root.bounds.is_empty() && !root.bounds.contains(x, y) {
            return None;
        }
        root.children()
            .iter()
            .rev()
            .find_map(|&child| self.hit_test_from(child, x, y))
            .or(Some(self.root))
    }

    fn hit_test_from(&self, node: NodeId, x: i32, y: i32) -> Option<NodeId> {
        let element = self.element(node)?;
        if !element.bounds.contains(x, y) {
            return None;
        }
        element
            .children()
            .iter()
            .rev()
            .find_map(|&child| self.hit_test_from(child, x, y))
            .or(Some(node))
    }
}
