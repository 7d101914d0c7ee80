//! UI tree nodes and search over them.
//!
//! A [`UiNode`] is a read-only view of one element in the target
//! application's on-screen tree. The core never mutates nodes; it resolves
//! them per snapshot and requests actions on them through the driver port.
//! Node identity is not stable between snapshots, so search results must
//! never be cached across snapshots.

use serde::{Deserialize, Serialize};

/// Stable view identifier exposed by the host environment.
///
/// Well-known ids (play/pause control, video surface) are configured once;
/// most nodes carry no id at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(String);

impl ViewId {
    /// Wrap a view identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One element of a UI-tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiNode {
    /// Stable identifier, when the host exposes one.
    pub view_id: Option<ViewId>,
    /// Textual description of the element, when the host exposes one.
    pub description: Option<String>,
    /// Child elements in traversal order.
    pub children: Vec<UiNode>,
}

impl UiNode {
    /// An anonymous node without id, description, or children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_id: None,
            description: None,
            children: Vec::new(),
        }
    }

    /// Set the stable view identifier.
    #[must_use]
    pub fn with_view_id(mut self, id: impl Into<ViewId>) -> Self {
        self.view_id = Some(id.into());
        self
    }

    /// Set the textual description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    /// Find the first node (pre-order, the node itself included) whose view
    /// identifier equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &ViewId) -> Option<&UiNode> {
        if self.view_id.as_ref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Find the first node (pre-order, the node itself included) whose
    /// description contains `needle` as an exact, case-sensitive substring.
    #[must_use]
    pub fn find_by_description_containing(&self, needle: &str) -> Option<&UiNode> {
        if self
            .description
            .as_deref()
            .is_some_and(|desc| desc.contains(needle))
        {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_description_containing(needle))
    }
}

impl Default for UiNode {
    fn default() -> Self {
        Self::new()
    }
}
