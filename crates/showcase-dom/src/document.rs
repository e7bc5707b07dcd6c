//! Document - High-level document API

use crate::{DomResult, DomTree, NodeId};

/// HTML Document
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with `<html>`, `<head>` and `<body>`
    pub fn new(url: &str) -> DomResult<Self> {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html)?;
        tree.append_child(html, head)?;
        tree.append_child(html, body)?;

        tracing::debug!("Created document: {}", url);

        Ok(Self {
            tree,
            url: url.to_string(),
            body_element: body,
        })
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Create an element and append it under `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// First attached element with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.descendants(self.tree.root()).into_iter().find(|&node| {
            self.tree
                .element(node)
                .is_ok_and(|e| e.id.as_deref() == Some(id))
        })
    }

    /// Elements under `root` carrying `class`, in document order
    pub fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.tree
            .descendants(root)
            .into_iter()
            .filter(|&node| self.has_class(node, class))
            .collect()
    }

    /// First element under `root` carrying `class`
    pub fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.tree
            .descendants(root)
            .into_iter()
            .find(|&node| self.has_class(node, class))
    }

    /// Nearest inclusive ancestor of `node` carrying `class`
    pub fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        std::iter::once(node)
            .chain(self.tree.ancestors(node))
            .find(|&n| self.has_class(n, class))
    }

    /// Whether `node` is an element carrying `class`
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree
            .element(node)
            .is_ok_and(|e| e.classes.contains(class))
    }

    /// Text content of `node`
    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// Replace the text content of `node`
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        self.tree.set_text_content(node, text)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}
