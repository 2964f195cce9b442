use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use crate::red_black_tree::node::NodeRef;
use crate::red_black_tree::traversal::{InOrder, IntoIter, LevelOrder, PostOrder, PreOrder};
use crate::red_black_tree::tree::{Tree, DEFAULT_CHUNK_SIZE};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// and keeps the root black, forbids a red node from having a red child, and keeps the same
/// number of black nodes on every path from a node to an empty child slot. Together these
/// bound the height of the tree by `2 * log2(n + 1)`.
///
/// Values are ordered by a `Compare<T>` fixed at construction, `Natural` by default. Values that
/// compare equal are the same element, so inserting a present value leaves the set unchanged.
///
/// # Examples
///
/// ```
/// use red_black_collections::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
#[derive(Clone)]
pub struct RedBlackSet<T, C = Natural> {
    tree: Tree<T>,
    comparator: C,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Constructs a new, empty `RedBlackSet<T>` ordered by `Ord` whose nodes are allocated
    /// `chunk_size` at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_chunk_size(1024);
    /// set.insert(1);
    /// assert_eq!(set.chunk_size(), 1024);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self::with_comparator_and_chunk_size(Natural, chunk_size)
    }
}

impl<T, C> RedBlackSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.add_range(vec![1, 3, 2]);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_chunk_size(comparator, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator` whose nodes are
    /// allocated `chunk_size` at a time. A `chunk_size` of zero is treated as one.
    pub fn with_comparator_and_chunk_size(comparator: C, chunk_size: usize) -> Self {
        RedBlackSet {
            tree: Tree::new(chunk_size),
            comparator,
        }
    }

    /// Returns the ordering of the set.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of node slots allocated at a time.
    pub fn chunk_size(&self) -> usize {
        self.tree.arena.chunk_size()
    }

    /// Inserts a value into the set. Returns `true` if the value was not already present. If an
    /// equal value is present, the set is left unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(&self.comparator, value)
    }

    /// Inserts every value yielded by `values` in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add_range(vec![3, 1, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        for value in values {
            self.insert(value);
        }
        debug!("added {} values to a set of {}", self.len() - before, before);
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns the stored value. Returns `None` if the value
    /// was not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(&self.comparator, value)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.tree.find(&self.comparator, value).is_some()
    }

    /// Returns a reference to the stored value that compares equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// set.insert((1, 'a'));
    /// assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.get(&self.comparator, value)
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.tree.floor(&self.comparator, value)
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        self.tree.ceil(&self.comparator, value)
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.len == 0
    }

    /// Clears the set, removing all values. The ordering and chunk size are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(set.root_node().is_none());
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing a set of {} values", self.tree.len);
        self.tree.clear();
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the minimum value of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::{Error, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.min_value(), Err(Error::EmptyTree { operation: "minimum value" }));
    ///
    /// set.insert(2);
    /// assert_eq!(set.min_value(), Ok(&2));
    /// ```
    pub fn min_value(&self) -> Result<&T> {
        self.min().ok_or(Error::EmptyTree {
            operation: "minimum value",
        })
    }

    /// Returns the maximum value of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the set is empty.
    pub fn max_value(&self) -> Result<&T> {
        self.max().ok_or(Error::EmptyTree {
            operation: "maximum value",
        })
    }

    /// Returns a read-only view of the root node, or `None` if the set is empty.
    pub fn root_node(&self) -> Option<NodeRef<'_, T>> {
        self.tree
            .root
            .map(|root| NodeRef::new(&self.tree.arena, root))
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> InOrder<'_, T> {
        self.inorder()
    }

    /// Returns an iterator that yields the values in ascending order.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(&self.tree)
    }

    /// Returns an iterator that yields every node before its left subtree, and the left subtree
    /// before the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add_range(vec![1, 2, 3, 4]);
    /// assert_eq!(set.preorder().collect::<Vec<&u32>>(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.tree)
    }

    /// Returns an iterator that yields the left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add_range(vec![1, 2, 3, 4]);
    /// assert_eq!(set.postorder().collect::<Vec<&u32>>(), vec![&1, &4, &3, &2]);
    /// ```
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.tree)
    }

    /// Returns an iterator that yields the values breadth first, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add_range(vec![1, 2, 3, 4]);
    /// assert_eq!(set.level_order().collect::<Vec<&u32>>(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.tree)
    }

    /// Clones the values of the set in ascending order into `dest`, starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is greater than the length of `dest`, and
    /// `Error::InsufficientCapacity` if fewer than `len()` slots remain after `index`. `dest` is
    /// not modified when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add_range(vec![3, 1, 2]);
    ///
    /// let mut dest = [0; 5];
    /// set.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [0, 1, 2, 3, 0]);
    /// assert!(set.copy_to(&mut dest, 3).is_err());
    /// ```
    pub fn copy_to(&self, dest: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        if index > dest.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: dest.len(),
            });
        }
        let available = dest.len() - index;
        if available < self.len() {
            return Err(Error::InsufficientCapacity {
                required: self.len(),
                available,
            });
        }
        for (slot, value) in dest[index..].iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.add_range(iter);
        set
    }
}

impl<T, C> Extend<T> for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_range(iter);
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = InOrder<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> PartialEq for RedBlackSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for RedBlackSet<T, C> where T: Eq {}

impl<T, C> fmt::Debug for RedBlackSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Serialize for RedBlackSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackSetVisitor {
            marker: PhantomData,
        })
    }
}

struct RedBlackSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for RedBlackSetVisitor<T>
where
    T: Ord + Deserialize<'de>,
{
    type Value = RedBlackSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = RedBlackSet::new();
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}
