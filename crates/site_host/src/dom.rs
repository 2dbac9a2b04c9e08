//! Detached DOM node model and the root-container contract renderers write into.
//!
//! Renderers build a [`Node`] tree without touching the page; a [`RootContainer`] adapter then
//! materializes it. Text is always stored and applied as plain text content, never as markup.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Detached element with optional text content, class attribute and child elements.
pub struct Node {
    /// Lower-case tag name.
    pub tag: String,
    /// Plain text content set before any children are appended.
    pub text: Option<String>,
    /// Value of the `class` attribute.
    pub class_name: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Node>,
}

/// Creates an element of `tag`, setting text and class only when they are non-empty.
pub fn make_node(tag: &str, text: Option<&str>, class_name: Option<&str>) -> Node {
    Node {
        tag: tag.to_string(),
        text: text.filter(|text| !text.is_empty()).map(str::to_string),
        class_name: class_name
            .filter(|class_name| !class_name.is_empty())
            .map(str::to_string),
        children: Vec::new(),
    }
}

impl Node {
    /// Appends `child` as the last child.
    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style [`Node::append`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.append(child);
        self
    }

    /// Concatenated text of this node and all descendants, like DOM `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// All descendants (excluding `self`) with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        for child in &self.children {
            if child.tag == tag {
                found.push(child);
            }
            child.collect(tag, found);
        }
    }
}

/// Host container that receives rendered output.
pub trait RootContainer {
    /// Removes every child unconditionally.
    fn clear(&self);

    /// Appends `node` (and its subtree) as the last child.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the node (for example an invalid tag name).
    fn append(&self, node: &Node) -> Result<(), String>;

    /// Number of direct children.
    fn child_count(&self) -> usize;
}

#[derive(Debug, Default)]
struct MemoryRootState {
    children: Vec<Node>,
    mutations: usize,
    rejection: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory root container that records children and counts mutating calls.
pub struct MemoryRoot {
    inner: Rc<RefCell<MemoryRootState>>,
}

impl MemoryRoot {
    /// Root pre-populated with `children`, mutation counter at zero.
    pub fn with_children(children: Vec<Node>) -> Self {
        let root = Self::default();
        root.inner.borrow_mut().children = children;
        root
    }

    /// Makes every later `append` fail with `reason` without adding the node.
    pub fn reject_appends(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().rejection = Some(reason.into());
    }

    /// Snapshot of the current children.
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    /// Number of `clear`/`append` calls observed.
    pub fn mutation_count(&self) -> usize {
        self.inner.borrow().mutations
    }
}

impl RootContainer for MemoryRoot {
    fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.children.clear();
        inner.mutations += 1;
    }

    fn append(&self, node: &Node) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        inner.mutations += 1;
        if let Some(reason) = &inner.rejection {
            return Err(reason.clone());
        }
        inner.children.push(node.clone());
        Ok(())
    }

    fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_node_skips_empty_text_and_class() {
        let node = make_node("p", Some(""), Some(""));
        assert_eq!(node.text, None);
        assert_eq!(node.class_name, None);

        let node = make_node("section", None, Some("content-section"));
        assert_eq!(node.tag, "section");
        assert_eq!(node.class_name.as_deref(), Some("content-section"));
    }

    #[test]
    fn markup_in_text_stays_literal() {
        let node = make_node("p", Some("<b>bold</b>"), None);
        assert!(node.children.is_empty());
        assert_eq!(node.text_content(), "<b>bold</b>");
    }

    #[test]
    fn text_content_and_find_all_walk_descendants() {
        let tree = make_node("ul", None, None)
            .with_child(
                make_node("li", None, None)
                    .with_child(make_node("strong", Some("A"), None))
                    .with_child(make_node("p", Some("a"), None)),
            )
            .with_child(make_node("li", None, None).with_child(make_node("p", Some("b"), None)));

        assert_eq!(tree.text_content(), "Aab");
        assert_eq!(tree.find_all("li").len(), 2);
        assert_eq!(tree.find_all("p").len(), 2);
        assert!(tree.find_all("ul").is_empty());
    }

    #[test]
    fn memory_root_tracks_children_and_mutations() {
        let root = MemoryRoot::with_children(vec![make_node("p", Some("old"), None)]);
        let root_obj: &dyn RootContainer = &root;
        assert_eq!(root_obj.child_count(), 1);
        assert_eq!(root.mutation_count(), 0);

        root_obj.clear();
        root_obj
            .append(&make_node("section", None, None))
            .expect("append");
        assert_eq!(root_obj.child_count(), 1);
        assert_eq!(root.children()[0].tag, "section");
        assert_eq!(root.mutation_count(), 2);
    }

    #[test]
    fn rejected_appends_leave_children_unchanged() {
        let root = MemoryRoot::default();
        root.reject_appends("no");

        assert_eq!(root.append(&make_node("p", None, None)), Err("no".to_string()));
        assert_eq!(root.child_count(), 0);
        assert_eq!(root.mutation_count(), 1);
    }
}
