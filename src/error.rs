use std::error;
use std::fmt;
use std::result;

/// Errors reported by the fallible operations of a `RedBlackSet`.
///
/// Every error is detected before the set or the destination is modified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operation has no meaningful result on an empty tree.
    EmptyTree { operation: &'static str },
    /// The destination offset lies past the end of the destination slice.
    IndexOutOfRange { index: usize, len: usize },
    /// The destination slice cannot hold every element starting at the given offset.
    InsufficientCapacity { required: usize, available: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyTree { operation } => {
                write!(f, "{} cannot be determined for an empty tree", operation)
            },
            Error::IndexOutOfRange { index, len } => write!(
                f,
                "index {} is out of range for a destination of length {}",
                index, len,
            ),
            Error::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "destination has room for {} elements but {} are required",
                available, required,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
