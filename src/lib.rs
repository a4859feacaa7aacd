//! # navset
//!
//! An immutable, ordered-set data structure backed by a sorted, deduplicated
//! contiguous sequence, with binary-search navigation and zero-copy range
//! views.
//!
//! ## Overview
//!
//! A [`SortedArraySet`] is built once from a collection and never mutated.
//! Every element lives in a single shared backing sequence; every derived
//! set — sub-range, prefix, suffix, or reversed traversal — is a lightweight
//! index window plus a direction flag into that same sequence:
//!
//! - **Membership and navigation**: `contains`, `lower`, `floor`, `ceiling`
//!   and `higher` are single binary searches over the current window,
//!   O(log n) in the window size.
//! - **Derived views**: `sub_set`, `head_set`, `tail_set` and
//!   `descending_set` allocate a new descriptor, never new element storage.
//!   Views of views compose; all of them share one backing sequence.
//! - **Ordering**: elements follow their natural [`Ord`] order or a
//!   caller-supplied total order, selected at construction through
//!   [`ElementOrder`].
//!
//! ## Immutability
//!
//! All operations follow the same principles as any persistent collection:
//!
//! - **Referential Transparency**: same inputs always produce same outputs
//! - **Immutability**: derivation returns new descriptors without modifying
//!   the original
//! - **No Side Effects**: the backing sequence is written exactly once
//!
//! Mutating operations (`poll_first`, `poll_last`) exist on the surface for
//! contract completeness and always fail with
//! [`OrderedSetError::Unsupported`].
//!
//! ## Example
//!
//! ```rust
//! use navset::SortedArraySet;
//!
//! let set = SortedArraySet::from_collection([5, 1, 3, 9, 7]);
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.floor(&6), Some(&5));
//! assert_eq!(set.ceiling(&6), Some(&7));
//!
//! let head = set.head_set(&5, false);
//! assert_eq!(head.to_vec(), vec![1, 3]);
//!
//! let descending: Vec<i32> = set.descending_set().iter().copied().collect();
//! assert_eq!(descending, vec![9, 7, 5, 3, 1]);
//! ```
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for the shared backing sequence and
//!   comparators, making every set and view `Send + Sync`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use navset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OrderedSetError;
    pub use crate::order::{Comparator, ElementOrder};
    pub use crate::ordered_set::OrderedSet;
    pub use crate::set::SortedArraySet;
}

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod order;
mod ordered_set;
mod set;
mod store;
mod view;

pub use error::OrderedSetError;
pub use order::Comparator;
pub use order::ElementOrder;
pub use ordered_set::OrderedSet;
pub use set::SortedArraySet;
pub use set::SortedArraySetIntoIterator;
pub use set::SortedArraySetIterator;

// =============================================================================
// Tests
// =============================================================================
