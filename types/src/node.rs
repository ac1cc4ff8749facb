//! Singly-linked list of named, valued nodes.
//!
//! Each [`Node`] owns its successor exclusively, so a list is acyclic by
//! construction. [`append_node`] walks to the tail and attaches there;
//! [`NodeList`] wraps the head and hands out forward iterators.
//!
//! Mutable traversal yields [`NodeMut`], which reaches a node's fields but not
//! its link, so the walk can't be invalidated from inside the loop.

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "unnamed";

/// A list element with an identifier, a name, a mutable value and a forward link.
pub struct Node {
    pub id: i64,
    pub name: String,
    value: i64,
    next: Option<Box<Node>>,
}

/// Field record accepted by [`Node::from_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFields {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn write_node(f: &mut fmt::Formatter<'_>, id: i64, name: &str, value: i64) -> fmt::Result {
    write!(f, "Node{{id={id}, name={name}, value={value}}}")
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0, DEFAULT_NAME)
    }
}

impl Node {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: 0,
            next: None,
        }
    }

    /// Alternate constructor; yields the same node as [`Node::new`] for the same fields.
    #[must_use]
    pub fn from_fields(fields: NodeFields) -> Self {
        let NodeFields { id, name } = fields;
        Self::new(id, name)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Store `value`, or zero when absent.
    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value.unwrap_or(0);
    }

    #[must_use]
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl From<NodeFields> for Node {
    fn from(fields: NodeFields) -> Self {
        Self::from_fields(fields)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.id, &self.name, self.value)
    }
}

// Shows the successor's id only; a derived impl would recurse down the chain.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("next", &self.next().map(|n| n.id))
            .finish()
    }
}

/// Compares this node and every successor, walking both chains in lockstep.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (Some(self), Some(other));
        loop {
            match (left, right) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if a.id != b.id || a.value != b.value || a.name != b.name {
                        return false;
                    }
                    left = a.next();
                    right = b.next();
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Node {}

/// Zero a node's value.
pub fn reset_node(node: &mut Node) {
    node.value = 0;
}

/// Attach `node` after the current tail of `head`, returning the (possibly new) head.
///
/// An empty list becomes a list of just `node`.
#[must_use]
pub fn append_node(head: Option<Box<Node>>, node: Node) -> Box<Node> {
    let Some(mut head) = head else {
        return Box::new(node);
    };

    let mut slot = &mut head.next;
    while let Some(cur) = slot {
        slot = &mut cur.next;
    }
    *slot = Some(Box::new(node));

    head
}

/// Mutable view of one node's fields during traversal.
pub struct NodeMut<'a> {
    id: i64,
    name: &'a str,
    value: &'a mut i64,
}

impl NodeMut<'_> {
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        *self.value
    }

    /// Store `value`, or zero when absent.
    pub fn set_value(&mut self, value: Option<i64>) {
        *self.value = value.unwrap_or(0);
    }

    /// Same as [`reset_node`] on the underlying node.
    pub fn reset(&mut self) {
        *self.value = 0;
    }
}

impl fmt::Display for NodeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.id, self.name, *self.value)
    }
}

impl fmt::Debug for NodeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &*self.value)
            .finish()
    }
}

/// Owner of a list head.
#[derive(Default)]
pub struct NodeList {
    head: Option<Box<Node>>,
}

impl NodeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, node: Node) {
        self.head = Some(append_node(self.head.take(), node));
    }

    #[must_use]
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl fmt::Debug for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for NodeList {
    fn eq(&self, other: &Self) -> bool {
        self.head() == other.head()
    }
}

impl Eq for NodeList {}

impl Drop for NodeList {
    // Unlink iteratively so long lists don't recurse through Box drops.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut NodeList {
    type Item = NodeMut<'a>;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Head-to-tail traversal. Single pass; call [`NodeList::iter`] again to restart.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

#[derive(Debug)]
pub struct IterMut<'a> {
    next: Option<&'a mut Node>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = NodeMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        let Node {
            id,
            name,
            value,
            next,
        } = node;
        self.next = next.as_deref_mut();
        Some(NodeMut {
            id: *id,
            name: name.as_str(),
            value,
        })
    }
}
