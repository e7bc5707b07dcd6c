//! DOM Tree (arena-based allocation)
//!
//! Element nodes are never freed: detaching only unlinks them, so an
//! element's `NodeId` stays valid for the tree's lifetime. Text nodes
//! dropped by `set_text_content` go on a free list and are reused by the
//! next `create_text`.

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    free_text: Vec<NodeId>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            free_text: Vec::new(),
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        match self.free_text.pop() {
            Some(id) => {
                self.nodes[id.index()] = Node::text(content.to_string());
                id
            }
            None => self.push(Node::text(content.to_string())),
        }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Element data of `id`
    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    /// Mutable element data of `id`
    pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Parent of `id`, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Ancestors of `id`, nearest first (excluding `id` itself)
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// All descendants of `id` in document order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();

        while let Some(current) = stack.pop() {
            out.push(current);
            let first = stack.len();
            stack.extend(self.children(current).map(|(c, _)| c));
            stack[first..].reverse();
        }

        out
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if parent_node.is_text() {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "text nodes cannot have children",
            });
        }
        if matches!(child_node.data, NodeData::Document) {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "the document cannot be inserted",
            });
        }
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "insertion would create a cycle",
            });
        }

        self.detach(child)?;

        let prev_last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev_last;
        }
        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        Ok(())
    }

    /// Unlink `id` from its parent; detached nodes are left as-is
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let node = self.node(id)?;
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;

        Ok(())
    }

    /// Concatenated text of `id` and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        match self.get(id) {
            Some(node) if node.is_text() => node.as_text().unwrap_or_default().to_string(),
            Some(_) => self
                .descendants(id)
                .into_iter()
                .filter_map(|d| self.get(d).and_then(Node::as_text))
                .collect(),
            None => String::new(),
        }
    }

    /// Replace all children of `id` with a single text node.
    ///
    /// A lone text child is rewritten in place. An empty string leaves the
    /// node without children.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        if let NodeData::Text(data) = &mut self
            .get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .data
        {
            data.content = text.to_string();
            return Ok(());
        }

        let children: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        if let [only] = children[..] {
            if !text.is_empty() {
                if let NodeData::Text(data) = &mut self.nodes[only.index()].data {
                    data.content = text.to_string();
                    return Ok(());
                }
            }
        }

        for child in children {
            self.detach(child)?;
            if self.nodes[child.index()].is_text() {
                self.free_text.push(child);
            }
        }

        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(id, text_node)?;
        }

        Ok(())
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node is created with the tree
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        tree.append_child(tree.root(), ul).unwrap();
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, b).unwrap();

        let ids: Vec<NodeId> = tree.children(ul).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(tree.parent(b), Some(ul));
    }

    #[test]
    fn test_append_moves_node() {
        let mut tree = DomTree::new();
        let first = tree.create_element("div");
        let second = tree.create_element("div");
        let span = tree.create_element("span");
        tree.append_child(first, span).unwrap();
        tree.append_child(second, span).unwrap();

        assert_eq!(tree.children(first).count(), 0);
        assert_eq!(tree.parent(span), Some(second));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        let err = tree.append_child(inner, outer).unwrap_err();
        assert!(matches!(err, DomError::HierarchyRequest { .. }));
    }

    #[test]
    fn test_set_text_content() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        tree.set_text_content(p, "Hello").unwrap();
        assert_eq!(tree.text_content(p), "Hello");

        tree.set_text_content(p, "").unwrap();
        assert_eq!(tree.text_content(p), "");
        assert_eq!(tree.children(p).count(), 0);
    }

    #[test]
    fn test_set_text_content_reuses_nodes() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        tree.set_text_content(p, "first").unwrap();
        let before = tree.len();

        for i in 0..100 {
            tree.set_text_content(p, &format!("text {i}")).unwrap();
            tree.set_text_content(p, "").unwrap();
        }

        assert_eq!(tree.len(), before);
        assert_eq!(tree.text_content(p), "");
        tree.set_text_content(p, "last").unwrap();
        assert_eq!(tree.text_content(p), "last");
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn test_descendants_document_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("a");
        let a_text = tree.create_text("x");
        let b = tree.create_element("b");
        tree.append_child(div, a).unwrap();
        tree.append_child(a, a_text).unwrap();
        tree.append_child(div, b).unwrap();

        assert_eq!(tree.descendants(div), vec![a, a_text, b]);
    }
}
