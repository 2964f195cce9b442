//! Chunked slot allocator that backs the tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A copyable reference to a slot of a `TypedArena<T>`.
///
/// A handle stays valid until the slot it refers to is freed or the arena is cleared. Freed
/// slots are recycled, so a stale handle may later refer to a different object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

#[derive(Clone)]
enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// An allocator for objects of a single type, addressed by `Handle`s.
///
/// Objects live in fixed-size chunks that are never reallocated once created, so allocating does
/// not move existing objects. Freed slots are threaded onto a free list and reused by later
/// allocations before a new chunk is created.
///
/// # Examples
///
/// ```
/// use red_black_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(64);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert!(arena.is_empty());
/// ```
#[derive(Clone)]
pub struct TypedArena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_handle(&self, handle: &Handle) -> bool {
        handle.chunk_index < self.chunks.len()
            && handle.block_index < self.chunks[handle.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` that allocates `chunk_size` slots at a time. A
    /// `chunk_size` of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// assert_eq!(arena.chunk_size(), 1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size: chunk_size.max(1),
            len: 0,
            capacity: 0,
        }
    }

    /// Returns the number of slots allocated per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves `value` into the arena and returns a handle to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(64);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            None => {
                let chunk_count = self.chunks.len();
                let last_chunk = &mut self.chunks[chunk_count - 1];
                last_chunk.push(Block::Occupied(value));
                Handle {
                    chunk_index: chunk_count - 1,
                    block_index: last_chunk.len() - 1,
                }
            },
            Some(handle) => {
                let vacant_block = mem::replace(
                    &mut self.chunks[handle.chunk_index][handle.block_index],
                    Block::Occupied(value),
                );

                match vacant_block {
                    Block::Vacant(next_handle) => {
                        self.head = next_handle;
                        handle
                    },
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
            },
        }
    }

    /// Frees the slot referred to by `handle` and returns the object it held.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to an invalid or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(64);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        if !self.is_valid_handle(handle) {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(
            &mut self.chunks[handle.chunk_index][handle.block_index],
            Block::Vacant(self.head),
        );
        match old_block {
            Block::Vacant(next_handle) => {
                self.chunks[handle.chunk_index][handle.block_index] = Block::Vacant(next_handle);
                panic!("Error: attempting to free vacant block.")
            },
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(*handle);
                value
            },
        }
    }

    /// Drops every object in the arena and releases all chunks.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(64);
    /// let x = arena.allocate(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }

    /// Returns an immutable reference to the object referred to by `handle`, or `None` if the
    /// slot is invalid or vacant.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk_index][handle.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the object referred to by `handle`, or `None` if the slot
    /// is invalid or vacant.
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk_index][handle.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle refers to a vacant block.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle refers to a vacant block.")
    }
}
