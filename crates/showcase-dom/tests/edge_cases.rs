//! Edge case tests for showcase-dom
//!
//! Boundary conditions for tree mutation, text content and lookups.

use showcase_dom::{DomError, Document, DomTree, NodeId};

// ============================================================================
// TREE EDGE CASES
// ============================================================================

#[test]
fn test_fresh_tree_has_document_node() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.parent(tree.root()), None);
}

#[test]
fn test_unknown_node_errors() {
    let mut tree = DomTree::new();
    let bogus = NodeId::NONE;

    assert_eq!(tree.element(bogus).unwrap_err(), DomError::NotFound(bogus));
    assert!(tree.set_text_content(bogus, "x").is_err());
    assert!(tree.append_child(tree.root(), bogus).is_err());
    assert_eq!(tree.text_content(bogus), "");
}

#[test]
fn test_text_node_is_not_element() {
    let mut tree = DomTree::new();
    let text = tree.create_text("plain");
    assert_eq!(tree.element(text).unwrap_err(), DomError::NotAnElement(text));
}

#[test]
fn test_text_node_cannot_have_children() {
    let mut tree = DomTree::new();
    let text = tree.create_text("plain");
    let span = tree.create_element("span");

    let err = tree.append_child(text, span).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest { .. }));
}

#[test]
fn test_self_append_rejected() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    assert!(tree.append_child(div, div).is_err());
}

#[test]
fn test_document_cannot_be_appended() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let root = tree.root();
    assert!(tree.append_child(div, root).is_err());
}

#[test]
fn test_detach_middle_child_relinks_siblings() {
    let mut tree = DomTree::new();
    let list = tree.create_element("ul");
    let items: Vec<NodeId> = (0..3).map(|_| tree.create_element("li")).collect();
    for &item in &items {
        tree.append_child(list, item).unwrap();
    }

    tree.detach(items[1]).unwrap();

    let remaining: Vec<NodeId> = tree.children(list).map(|(id, _)| id).collect();
    assert_eq!(remaining, vec![items[0], items[2]]);
    assert_eq!(tree.parent(items[1]), None);
}

#[test]
fn test_text_content_on_text_node_replaces_in_place() {
    let mut tree = DomTree::new();
    let text = tree.create_text("before");
    tree.set_text_content(text, "after").unwrap();
    assert_eq!(tree.text_content(text), "after");
}

#[test]
fn test_text_content_unicode() {
    let mut tree = DomTree::new();
    let p = tree.create_element("p");
    tree.set_text_content(p, "こんにちは 🚀").unwrap();
    assert_eq!(tree.text_content(p), "こんにちは 🚀");
}

// ============================================================================
// DOCUMENT QUERIES
// ============================================================================

#[test]
fn test_elements_by_class_in_document_order() {
    let mut doc = Document::new("about:blank").unwrap();
    let body = doc.body();
    let mut expected = Vec::new();
    for _ in 0..3 {
        let item = doc.append_element(body, "div").unwrap();
        doc.tree_mut().element_mut(item).unwrap().set_attr("class", "faq-item");
        doc.append_element(item, "p").unwrap();
        expected.push(item);
    }

    assert_eq!(doc.get_elements_by_class_name(doc.body(), "faq-item"), expected);
    assert!(doc.get_elements_by_class_name(doc.body(), "nope").is_empty());
}

#[test]
fn test_duplicate_ids_return_first() {
    let mut doc = Document::new("about:blank").unwrap();
    let body = doc.body();
    let first = doc.append_element(body, "div").unwrap();
    let second = doc.append_element(body, "div").unwrap();
    doc.tree_mut().element_mut(first).unwrap().set_attr("id", "dup");
    doc.tree_mut().element_mut(second).unwrap().set_attr("id", "dup");

    assert_eq!(doc.get_element_by_id("dup"), Some(first));
}
