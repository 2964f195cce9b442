use crate::arena::{Handle, TypedArena};
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree::Tree;
use std::collections::VecDeque;
use std::vec;

/// An iterator that yields the values of a tree in ascending order (left, node, right).
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = InOrder {
            tree,
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.tree.arena[handle].left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.stack.pop()?;
        let node = &tree.arena[handle];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> where T: 'a {}

/// An iterator that yields the values of a tree in pre-order (node, left, right).
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        PreOrder {
            tree,
            stack: tree.root.into_iter().collect(),
            remaining: tree.len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.stack.pop()?;
        let node = &tree.arena[handle];
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> where T: 'a {}

/// An iterator that yields the values of a tree in post-order (left, right, node).
pub struct PostOrder<'a, T> {
    tree: &'a Tree<T>,
    // Each entry records whether the children of the node have already been scheduled.
    stack: Vec<(Handle, bool)>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        PostOrder {
            tree,
            stack: tree.root.map(|root| (root, false)).into_iter().collect(),
            remaining: tree.len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((handle, expanded)) = self.stack.pop() {
            let node = &tree.arena[handle];
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.stack.push((handle, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for PostOrder<'a, T> where T: 'a {}

/// An iterator that yields the values of a tree level by level, left to right within a level.
pub struct LevelOrder<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<Handle>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        LevelOrder {
            tree,
            queue: tree.root.into_iter().collect(),
            remaining: tree.len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.queue.pop_front()?;
        let node = &tree.arena[handle];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for LevelOrder<'a, T> where T: 'a {}

/// An owning iterator that yields the values of a tree in ascending order.
pub struct IntoIter<T> {
    arena: TypedArena<Node<T>>,
    order: vec::IntoIter<Handle>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        let order = InOrderHandles::new(&tree).collect::<Vec<Handle>>();
        IntoIter {
            arena: tree.arena,
            order: order.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.order.next()?;
        Some(self.arena.free(&handle).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// In-order walk over handles, used to schedule the owning iterator.
struct InOrderHandles<'a, T> {
    arena: &'a TypedArena<Node<T>>,
    stack: Vec<Handle>,
}

impl<'a, T> InOrderHandles<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = InOrderHandles {
            arena: &tree.arena,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.arena[handle].left;
        }
    }
}

impl<'a, T> Iterator for InOrderHandles<'a, T> {
    type Item = Handle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let right = self.arena[handle].right;
        self.push_left_spine(right);
        Some(handle)
    }
}
