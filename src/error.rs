//! Error types for ordered-set operations.
//!
//! The public surface distinguishes three failure classes: mutating calls on
//! a permanently immutable set, positional access on an empty view, and
//! inverted `sub_set` bounds. Navigation misses (`lower`, `floor`, `ceiling`,
//! `higher` finding nothing) are absent values, never errors.

use std::fmt;

/// Failures surfaced by [`SortedArraySet`](crate::SortedArraySet) operations.
///
/// # Examples
///
/// ```rust
/// use navset::{OrderedSetError, SortedArraySet};
///
/// let set: SortedArraySet<i32> = SortedArraySet::new();
/// assert_eq!(set.first(), Err(OrderedSetError::EmptyCollection));
/// assert_eq!(set.poll_first(), Err(OrderedSetError::Unsupported));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedSetError {
    /// A mutating operation was invoked. The set is immutable after
    /// construction; this restriction is permanent, not transient.
    Unsupported,
    /// `first` or `last` was invoked on a view with no elements.
    EmptyCollection,
    /// `sub_set` was invoked with bounds inverted under the active order.
    InvalidRange,
}

impl fmt::Display for OrderedSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => {
                write!(formatter, "operation not supported: the set is immutable")
            }
            Self::EmptyCollection => {
                write!(formatter, "the view contains no elements")
            }
            Self::InvalidRange => {
                write!(formatter, "range bounds are inverted under the active order")
            }
        }
    }
}

impl std::error::Error for OrderedSetError {}
