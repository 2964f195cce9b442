//! Orderings used to place values in a tree.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// The order a tree is built with is fixed for the lifetime of the tree. Two values that compare
/// `Equal` are treated as the same element.
///
/// Any closure of the form `Fn(&T, &T) -> Ordering` is a `Compare<T>`.
///
/// # Examples
///
/// ```
/// use red_black_collections::{Compare, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let descending = |a: &u32, b: &u32| b.cmp(a);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The ordering given by the `Ord` implementation of `T`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
