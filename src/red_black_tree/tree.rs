use crate::arena::{Handle, TypedArena};
use crate::compare::Compare;
use crate::red_black_tree::node::{Color, Node, Side};
use std::cmp::Ordering;
use std::mem;

pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// The node graph of a red black tree.
///
/// Every node lives in `arena` and is reachable from `root` through exactly one child link.
/// The ordering is not stored here; every operation that needs it takes a comparator.
#[derive(Clone)]
pub struct Tree<T> {
    pub arena: TypedArena<Node<T>>,
    pub root: Option<Handle>,
    pub len: usize,
}

impl<T> Tree<T> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            arena: TypedArena::new(chunk_size),
            root: None,
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    fn color(&self, link: Option<Handle>) -> Color {
        match link {
            None => Color::Black,
            Some(handle) => self.arena[handle].color,
        }
    }

    fn is_red(&self, link: Option<Handle>) -> bool {
        self.color(link) == Color::Red
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        self.arena[handle].color = color;
    }

    fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.arena[handle].child(side)
    }

    // precondition: `child` is a child of `parent`
    fn side_of(&self, child: Handle, parent: Handle) -> Side {
        if self.arena[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Puts `new` in the slot of the parent of `old` that currently holds `old`. The links of
    // `old` itself are left untouched.
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.arena[old].parent;
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(old, parent);
                self.arena[parent].set_child(side, new);
            },
        }
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    // Rotates the subtree rooted at `pivot` towards `direction`: the child of `pivot` on the
    // opposite side takes its place and `pivot` becomes that child's `direction` child.
    fn rotate(&mut self, pivot: Handle, direction: Side) {
        trace!("rotating {:?} towards {:?}", pivot, direction);
        let opposite = direction.opposite();
        let child = self
            .child(pivot, opposite)
            .expect("Expected rotation child node to be `Some`.");
        let inner = self.child(child, direction);

        self.arena[pivot].set_child(opposite, inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(pivot);
        }

        self.transplant(pivot, Some(child));
        self.arena[child].set_child(direction, Some(pivot));
        self.arena[pivot].parent = Some(child);
    }

    fn leftmost(&self, mut curr: Handle) -> Handle {
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        curr
    }

    fn rightmost(&self, mut curr: Handle) -> Handle {
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        curr
    }

    pub fn find<C>(&self, comparator: &C, value: &T) -> Option<Handle>
    where
        C: Compare<T>,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match comparator.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn get<C>(&self, comparator: &C, value: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        self.find(comparator, value)
            .map(|handle| &self.arena[handle].value)
    }

    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[self.leftmost(root)].value)
    }

    pub fn max(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[self.rightmost(root)].value)
    }

    pub fn floor<C>(&self, comparator: &C, value: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match comparator.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    ret = Some(&node.value);
                    node.right
                },
                Ordering::Equal => return Some(&node.value),
            };
        }
        ret
    }

    pub fn ceil<C>(&self, comparator: &C, value: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match comparator.compare(value, &node.value) {
                Ordering::Less => {
                    ret = Some(&node.value);
                    node.left
                },
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.value),
            };
        }
        ret
    }

    /// Inserts `value` unless an equal value is already present. Returns `true` if a node was
    /// added.
    pub fn insert<C>(&mut self, comparator: &C, value: T) -> bool
    where
        C: Compare<T>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            parent = Some(handle);
            match comparator.compare(&value, &node.value) {
                Ordering::Less => {
                    side = Side::Left;
                    curr = node.left;
                },
                Ordering::Greater => {
                    side = Side::Right;
                    curr = node.right;
                },
                Ordering::Equal => return false,
            }
        }

        let new_node = self.arena.allocate(Node::new(value, parent));
        match parent {
            None => self.root = Some(new_node),
            Some(parent) => self.arena[parent].set_child(side, Some(new_node)),
        }
        self.len += 1;

        self.insert_fixup(new_node);
        true
    }

    fn insert_fixup(&mut self, mut curr: Handle) {
        while let Some(mut parent) = self.arena[curr].parent {
            if self.arena[parent].color == Color::Black {
                break;
            }

            let grandparent = match self.arena[parent].parent {
                Some(grandparent) => grandparent,
                None => {
                    self.set_color(parent, Color::Black);
                    break;
                },
            };
            let parent_side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if let Some(uncle) = uncle.filter(|uncle| self.arena[*uncle].color == Color::Red) {
                trace!("insert fix-up: red uncle, recoloring {:?}", grandparent);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                curr = grandparent;
                continue;
            }

            if self.side_of(curr, parent) != parent_side {
                trace!("insert fix-up: inner grandchild {:?}", curr);
                self.rotate(parent, parent_side);
                mem::swap(&mut curr, &mut parent);
            }

            trace!("insert fix-up: outer grandchild {:?}", curr);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Removes the node equal to `value` and returns its value, or `None` if there is no such
    /// node.
    pub fn remove<C>(&mut self, comparator: &C, value: &T) -> Option<T>
    where
        C: Compare<T>,
    {
        let target = self.find(comparator, value)?;
        let Node {
            left,
            right,
            color,
            parent,
            ..
        } = self.arena[target];

        // The color that disappears from the tree, the link that fills the vacated position,
        // and where that position is.
        let removed_color;
        let replacement;
        let splice_parent;
        let splice_side;

        match (left, right) {
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                removed_color = self.arena[successor].color;
                replacement = self.arena[successor].right;

                if successor == right {
                    splice_parent = Some(successor);
                    splice_side = Side::Right;
                } else {
                    splice_parent = self.arena[successor].parent;
                    splice_side = Side::Left;
                    self.transplant(successor, replacement);
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }

                self.transplant(target, Some(successor));
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                self.set_color(successor, color);
            },
            _ => {
                removed_color = color;
                replacement = left.or(right);
                splice_parent = parent;
                splice_side = match parent {
                    Some(parent) => self.side_of(target, parent),
                    None => Side::Left,
                };
                self.transplant(target, replacement);
            },
        }

        let node = self.arena.free(&target);
        self.len -= 1;

        if removed_color == Color::Black {
            match splice_parent {
                Some(splice_parent) => self.remove_fixup(replacement, splice_parent, splice_side),
                None => {
                    if let Some(replacement) = replacement {
                        self.set_color(replacement, Color::Black);
                    }
                },
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }

        Some(node.value)
    }

    // `curr` is the link at `side` of `parent` whose paths are one black node short.
    fn remove_fixup(&mut self, mut curr: Option<Handle>, mut parent: Handle, mut side: Side) {
        while !self.is_red(curr) {
            let opposite = side.opposite();
            let mut sibling = self
                .child(parent, opposite)
                .expect("Expected sibling of a deficient link to be `Some`.");

            if self.arena[sibling].color == Color::Red {
                trace!("remove fix-up: red sibling {:?}", sibling);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self
                    .child(parent, opposite)
                    .expect("Expected sibling of a deficient link to be `Some`.");
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, opposite);

            if !self.is_red(near) && !self.is_red(far) {
                trace!("remove fix-up: black nephews, moving up from {:?}", parent);
                self.set_color(sibling, Color::Red);
                curr = Some(parent);
                match self.arena[parent].parent {
                    Some(grandparent) => {
                        side = self.side_of(parent, grandparent);
                        parent = grandparent;
                    },
                    None => break,
                }
                continue;
            }

            if !self.is_red(far) {
                trace!("remove fix-up: red near nephew under {:?}", sibling);
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, opposite);
                sibling = self
                    .child(parent, opposite)
                    .expect("Expected sibling of a deficient link to be `Some`.");
            }

            trace!("remove fix-up: red far nephew under {:?}", sibling);
            let parent_color = self.arena[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = self.child(sibling, opposite) {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent, side);
            return;
        }

        if let Some(curr) = curr {
            self.set_color(curr, Color::Black);
        }
    }
}
