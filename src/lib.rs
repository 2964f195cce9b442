//! Ordered collections built on a red-black tree.
//!
//! The tree keeps its nodes in a [`TypedArena`](arena::TypedArena) and links them through
//! copyable handles, so parent back-references never alias the owning child links. All
//! mutating operations run a fix-up pass that restores the red-black coloring invariants,
//! which keeps insertion, deletion and lookup at O(log n) regardless of insertion order.
//!
//! # Examples
//!
//! ```
//! use red_black_collections::RedBlackSet;
//!
//! let mut set = RedBlackSet::new();
//! set.add_range(vec![13, 8, 17, 1, 11]);
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.min_value().unwrap(), &1);
//! assert_eq!(set.inorder().cloned().collect::<Vec<_>>(), vec![1, 8, 11, 13, 17]);
//! ```

#[macro_use]
extern crate log;
extern crate serde;

mod error;
pub mod arena;
pub mod compare;
pub mod red_black_tree;

pub use crate::compare::{Compare, Natural};
pub use crate::error::{Error, Result};
pub use crate::red_black_tree::{Color, NodeRef, RedBlackSet};
