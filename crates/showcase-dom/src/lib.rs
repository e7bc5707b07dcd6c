//! fOS Showcase DOM
//!
//! Small arena-based DOM used by the showcase page: elements, text,
//! class lists, inline style and form-control values.

mod classlist;
mod document;
mod dom_events;
mod node;
mod style;
mod tree;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use dom_events::{DomEvent, EventType};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use style::InlineStyle;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM operation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {0:?} does not exist")]
    NotFound(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Cannot insert {child:?} into {parent:?}: {reason}")]
    HierarchyRequest {
        parent: NodeId,
        child: NodeId,
        reason: &'static str,
    },
}

/// Result alias for DOM operations
pub type DomResult<T> = Result<T, DomError>;
