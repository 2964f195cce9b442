use crate::arena::{Handle, TypedArena};
use std::fmt;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// Child links own the subtree they point at; `parent` is a plain back-reference.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub color: Color,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Option<Handle>) -> Self {
        Node {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// A read-only view of a node in a `RedBlackSet`.
///
/// The view exposes the value, color and links of a node so that the shape of a tree can be
/// inspected without being able to modify it.
///
/// # Examples
///
/// ```
/// use red_black_collections::{Color, RedBlackSet};
///
/// let mut set = RedBlackSet::new();
/// set.add_range(vec![2, 1, 3]);
///
/// let root = set.root_node().unwrap();
/// assert_eq!(root.value(), &2);
/// assert_eq!(root.color(), Color::Black);
/// assert!(root.is_root());
///
/// let left = root.left().unwrap();
/// assert_eq!(left.value(), &1);
/// assert!(left.is_leaf());
/// assert_eq!(left.parent().map(|node| *node.value()), Some(2));
/// ```
pub struct NodeRef<'a, T> {
    arena: &'a TypedArena<Node<T>>,
    handle: Handle,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a TypedArena<Node<T>>, handle: Handle) -> Self {
        NodeRef { arena, handle }
    }

    fn node(&self) -> &'a Node<T> {
        let arena = self.arena;
        &arena[self.handle]
    }

    fn link(&self, link: Option<Handle>) -> Option<NodeRef<'a, T>> {
        link.map(|handle| NodeRef::new(self.arena, handle))
    }

    /// Returns the value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// Returns the color of the node.
    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// Returns `true` if the node has no parent.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.node().right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.node().parent)
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}
