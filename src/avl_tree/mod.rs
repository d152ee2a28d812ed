//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, Config};

use std::error;
use std::fmt;
use std::result;

/// An inconsistency found in the bookkeeping of an `AvlSet<T>`.
///
/// Any of these indicates a defect in the balancing logic rather than a recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error<T> {
    /// The stored height of the node holding `value` does not match its children.
    ImproperHeight { value: T, expected: usize, actual: usize },
    /// The cached balance factor of the node holding `value` does not match its children.
    ImproperBalance { value: T, expected: i32, actual: i32 },
    /// The heights of the subtrees of the node holding `value` differ by more than one.
    Unbalanced { value: T, balance: i32 },
    /// The element count does not match the number of nodes in the tree.
    ImproperLength { expected: usize, actual: usize },
}

impl<T> error::Error for Error<T> where T: fmt::Debug {}

impl<T> fmt::Display for Error<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ImproperHeight { value, expected, actual } => write!(
                f,
                "Improper height: {:?} expected: {} actual: {}",
                value, expected, actual,
            ),
            Error::ImproperBalance { value, expected, actual } => write!(
                f,
                "Improper balance: {:?} expected: {} actual: {}",
                value, expected, actual,
            ),
            Error::Unbalanced { value, balance } => write!(
                f,
                "Difference in heights > 1: ({}) {:?}",
                balance, value,
            ),
            Error::ImproperLength { expected, actual } => write!(
                f,
                "Improper length: expected: {} actual: {}",
                expected, actual,
            ),
        }
    }
}

pub type Result<T, U> = result::Result<T, Error<U>>;
